//! Request construction for the four repository operations.

use super::trace::TraceContext;
use crate::domain::{Result, UserId, UserPayload};
use std::collections::BTreeMap;

/// Default collection endpoint (a public REST simulator).
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

pub(crate) const OPERATION_KEY: &str = "op";
pub(crate) const TICKET_KEY: &str = "ticket";
pub(crate) const EPOCH_KEY: &str = "epoch";
pub(crate) const TARGET_KEY: &str = "target";

/// HTTP method of a repository call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Which repository operation a call performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "list" => Some(Self::List),
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Banner text for a failed call with the given status.
    #[must_use]
    pub fn failure_message(self, status: u16) -> String {
        match self {
            Self::List => format!("Failed to fetch users ({status})"),
            Self::Create => format!("Failed to create user ({status})"),
            Self::Update => format!("Failed to update user ({status})"),
            Self::Delete => format!("Failed to delete ({status})"),
        }
    }
}

/// Correlates a request with its reply: a per-screen ticket plus the screen
/// epoch it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub ticket: u64,
    pub epoch: u64,
}

/// A fully built HTTP request, ready for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCall {
    pub tag: RequestTag,
    pub operation: Operation,
    pub target: Option<UserId>,
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    pub trace: Option<TraceContext>,
}

impl RepositoryCall {
    /// Context map returned verbatim by the host alongside the reply.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(OPERATION_KEY.to_string(), self.operation.as_str().to_string());
        context.insert(TICKET_KEY.to_string(), self.tag.ticket.to_string());
        context.insert(EPOCH_KEY.to_string(), self.tag.epoch.to_string());
        if let Some(target) = self.target {
            context.insert(TARGET_KEY.to_string(), target.to_string());
        }
        if let Some(trace) = &self.trace {
            trace.write_to(&mut context);
        }
        context
    }
}

/// Builds calls against a collection-style REST resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRepository {
    endpoint: String,
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl UserRepository {
    /// Creates a repository for `endpoint`, dropping any trailing slashes.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `GET E`
    #[must_use]
    pub fn list(&self, tag: RequestTag) -> RepositoryCall {
        self.call(tag, Operation::List, None, Method::Get, self.endpoint.clone(), Vec::new())
    }

    /// `POST E` with a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Decode`](crate::RosterError::Decode) if the payload
    /// cannot be serialized.
    pub fn create(&self, tag: RequestTag, payload: &UserPayload) -> Result<RepositoryCall> {
        let body = serde_json::to_vec(payload)?;
        Ok(self.call(tag, Operation::Create, None, Method::Post, self.endpoint.clone(), body))
    }

    /// `PUT E/{id}` with a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Decode`](crate::RosterError::Decode) if the payload
    /// cannot be serialized.
    pub fn update(&self, tag: RequestTag, id: UserId, payload: &UserPayload) -> Result<RepositoryCall> {
        let body = serde_json::to_vec(payload)?;
        Ok(self.call(tag, Operation::Update, Some(id), Method::Put, self.item_url(id), body))
    }

    /// `DELETE E/{id}`
    #[must_use]
    pub fn delete(&self, tag: RequestTag, id: UserId) -> RepositoryCall {
        self.call(tag, Operation::Delete, Some(id), Method::Delete, self.item_url(id), Vec::new())
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.endpoint)
    }

    fn call(
        &self,
        tag: RequestTag,
        operation: Operation,
        target: Option<UserId>,
        method: Method,
        url: String,
        body: Vec<u8>,
    ) -> RepositoryCall {
        let mut headers = BTreeMap::new();
        if !body.is_empty() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        tracing::debug!(
            operation = operation.as_str(),
            method = method.as_str(),
            url = %url,
            ticket = tag.ticket,
            epoch = tag.epoch,
            "built repository call"
        );

        RepositoryCall {
            tag,
            operation,
            target,
            method,
            url,
            headers,
            body,
            trace: TraceContext::from_current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Company;

    const TAG: RequestTag = RequestTag { ticket: 7, epoch: 2 };

    fn payload() -> UserPayload {
        UserPayload {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: Company {
                name: Some("Analytics".to_string()),
            },
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let repo = UserRepository::new("http://localhost:3000/users/");
        assert_eq!(repo.endpoint(), "http://localhost:3000/users");
        assert_eq!(repo.delete(TAG, 4).url, "http://localhost:3000/users/4");
    }

    #[test]
    fn list_is_a_bare_get() {
        let call = UserRepository::default().list(TAG);
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.url, DEFAULT_ENDPOINT);
        assert!(call.body.is_empty());
        assert!(call.headers.is_empty());
        assert_eq!(call.target, None);
    }

    #[test]
    fn create_posts_json_to_collection() {
        let call = UserRepository::default().create(TAG, &payload()).unwrap();
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.url, DEFAULT_ENDPOINT);
        assert_eq!(
            call.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        let body: UserPayload = serde_json::from_slice(&call.body).unwrap();
        assert_eq!(body, payload());
    }

    #[test]
    fn update_puts_to_item_url() {
        let call = UserRepository::default().update(TAG, 3, &payload()).unwrap();
        assert_eq!(call.method, Method::Put);
        assert_eq!(call.url, format!("{DEFAULT_ENDPOINT}/3"));
        assert_eq!(call.target, Some(3));
    }

    #[test]
    fn context_carries_correlation_fields() {
        let call = UserRepository::default().delete(TAG, 5);
        let context = call.context();
        assert_eq!(context.get(OPERATION_KEY).map(String::as_str), Some("delete"));
        assert_eq!(context.get(TICKET_KEY).map(String::as_str), Some("7"));
        assert_eq!(context.get(EPOCH_KEY).map(String::as_str), Some("2"));
        assert_eq!(context.get(TARGET_KEY).map(String::as_str), Some("5"));
    }

    #[test]
    fn operations_parse_their_own_names() {
        for op in [Operation::List, Operation::Create, Operation::Update, Operation::Delete] {
            assert_eq!(Operation::parse(op.as_str()), Some(op));
        }
        assert_eq!(Operation::parse("patch"), None);
    }
}
