//! Decoding of web request results.

use super::request::{Operation, EPOCH_KEY, OPERATION_KEY, TARGET_KEY, TICKET_KEY};
use super::trace::TraceContext;
use crate::domain::{RawUser, Result, RosterError, UserId};
use std::collections::BTreeMap;

/// Correlation data recovered from a reply's context map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyContext {
    pub operation: Operation,
    pub ticket: u64,
    pub epoch: u64,
    pub target: Option<UserId>,
    pub trace: Option<TraceContext>,
}

impl ReplyContext {
    /// Parses the context map a [`RepositoryCall`](super::RepositoryCall) produced.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Decode`] if the operation, ticket or epoch entry is
    /// missing or malformed. Such replies did not originate from this plugin.
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self> {
        let operation = context
            .get(OPERATION_KEY)
            .and_then(|op| Operation::parse(op))
            .ok_or_else(|| RosterError::Decode("reply context has no operation".to_string()))?;
        let ticket = parse_number(context, TICKET_KEY)?;
        let epoch = parse_number(context, EPOCH_KEY)?;
        let target = context.get(TARGET_KEY).and_then(|id| id.parse().ok());

        Ok(Self {
            operation,
            ticket,
            epoch,
            target,
            trace: TraceContext::read_from(context),
        })
    }
}

fn parse_number(context: &BTreeMap<String, String>, key: &str) -> Result<u64> {
    context
        .get(key)
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| RosterError::Decode(format!("reply context has no valid {key}")))
}

/// A successfully decoded reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The full collection.
    Listed(Vec<RawUser>),
    /// The create was accepted; `id` is the server-assigned id when present.
    Created { id: Option<UserId> },
    /// The update was accepted. The body is ignored.
    Updated,
    /// The delete was accepted.
    Deleted,
}

/// Decodes a reply for `operation`.
///
/// # Errors
///
/// Returns [`RosterError::Transport`] for any status outside `200..=299` and for
/// a list body that is not a JSON array of users.
pub fn decode_reply(operation: Operation, status: u16, body: &[u8]) -> Result<Reply> {
    if !(200..300).contains(&status) {
        return Err(RosterError::Transport {
            status,
            message: operation.failure_message(status),
        });
    }

    match operation {
        Operation::List => serde_json::from_slice::<Vec<RawUser>>(body)
            .map(Reply::Listed)
            .map_err(|err| RosterError::Transport {
                status,
                message: format!("Failed to fetch users: {err}"),
            }),
        Operation::Create => Ok(Reply::Created {
            id: created_id(body),
        }),
        Operation::Update => Ok(Reply::Updated),
        Operation::Delete => Ok(Reply::Deleted),
    }
}

fn created_id(body: &[u8]) -> Option<UserId> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let id = match value.get("id")? {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => text.parse().ok(),
        _ => None,
    };
    id.filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{RequestTag, UserRepository};
    use rstest::rstest;

    #[rstest]
    #[case(Operation::List, 500, "Failed to fetch users (500)")]
    #[case(Operation::Create, 400, "Failed to create user (400)")]
    #[case(Operation::Update, 404, "Failed to update user (404)")]
    #[case(Operation::Delete, 0, "Failed to delete (0)")]
    fn non_success_status_is_transport_error(
        #[case] operation: Operation,
        #[case] status: u16,
        #[case] message: &str,
    ) {
        match decode_reply(operation, status, b"") {
            Err(RosterError::Transport { status: s, message: m }) => {
                assert_eq!(s, status);
                assert_eq!(m, message);
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn list_body_decodes_to_raw_users() {
        let body = br#"[{"id":1,"name":"Leanne Graham","email":"s@a.biz","company":{"name":"Romaguera-Crona"}},{"id":2},{"id":3,"company":{"name":null}}]"#;
        let Ok(Reply::Listed(users)) = decode_reply(Operation::List, 200, body) else {
            panic!("expected listed reply");
        };
        assert_eq!(users.len(), 3);
        assert_eq!(users[1].name, None);
    }

    #[test]
    fn malformed_list_body_is_transport_error() {
        let result = decode_reply(Operation::List, 200, b"<html>");
        assert!(matches!(result, Err(RosterError::Transport { status: 200, .. })));
    }

    #[rstest]
    #[case(br#"{"id": 11, "name": "x"}"#.as_slice(), Some(11))]
    #[case(br#"{"id": "12"}"#.as_slice(), Some(12))]
    #[case(br#"{"name": "x"}"#.as_slice(), None)]
    #[case(br#"{"id": 0}"#.as_slice(), None)]
    #[case(b"".as_slice(), None)]
    fn create_reply_id(#[case] body: &[u8], #[case] expected: Option<UserId>) {
        assert_eq!(
            decode_reply(Operation::Create, 201, body).unwrap(),
            Reply::Created { id: expected }
        );
    }

    #[test]
    fn update_and_delete_ignore_body() {
        assert_eq!(decode_reply(Operation::Update, 200, b"garbage").unwrap(), Reply::Updated);
        assert_eq!(decode_reply(Operation::Delete, 200, b"").unwrap(), Reply::Deleted);
    }

    #[test]
    fn reply_context_recovers_call_fields() {
        let call = UserRepository::default().delete(RequestTag { ticket: 3, epoch: 1 }, 9);
        let ctx = ReplyContext::from_context(&call.context()).unwrap();
        assert_eq!(ctx.operation, Operation::Delete);
        assert_eq!(ctx.ticket, 3);
        assert_eq!(ctx.epoch, 1);
        assert_eq!(ctx.target, Some(9));
        assert_eq!(ctx.trace, None);
    }

    #[test]
    fn foreign_context_is_rejected() {
        let mut context = BTreeMap::new();
        context.insert("op".to_string(), "list".to_string());
        assert!(matches!(
            ReplyContext::from_context(&context),
            Err(RosterError::Decode(_))
        ));
    }
}
