//! User domain model.
//!
//! [`RawUser`] is the wire shape returned by the remote collection and only lives
//! between fetch and normalization. [`UserRecord`] is the canonical record held in
//! the screen's record store. [`UserPayload`] is the body sent on create and update.

use crate::domain::draft::FormDraft;
use serde::{Deserialize, Serialize};

/// Stable identifier of a user record.
pub type UserId = i64;

/// Nested company object carried by remote records and payloads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: Option<String>,
}

/// A user as returned by the remote collection.
///
/// `name` and `email` tolerate `null` or missing values; they normalize to empty
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
}

/// The internal, canonical user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserRecord {
    /// Builds a record from a submitted draft and an assigned id.
    #[must_use]
    pub fn from_draft(id: UserId, draft: &FormDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            department: draft.department.clone(),
        }
    }

    /// Overwrites every editable field with the draft's values.
    pub fn apply_draft(&mut self, draft: &FormDraft) {
        self.first_name.clone_from(&draft.first_name);
        self.last_name.clone_from(&draft.last_name);
        self.email.clone_from(&draft.email);
        self.department.clone_from(&draft.department);
    }

    /// `"{first} {last}"`, the string the search box matches names against.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the value of a text column.
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::Department => &self.department,
        }
    }
}

/// The four free-text columns of a user.
///
/// Used as the key for per-field filters, form fields and their validation
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Department,
}

impl TextField {
    /// All text fields in display order.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Department];

    /// Human-readable column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Department => "Department",
        }
    }

    /// Position of the field within [`TextField::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Department => 3,
        }
    }

    /// The next field in display order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Email,
            Self::Email => Self::Department,
            Self::Department => Self::FirstName,
        }
    }

    /// The previous field in display order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::FirstName => Self::Department,
            Self::LastName => Self::FirstName,
            Self::Email => Self::LastName,
            Self::Department => Self::Email,
        }
    }
}

/// Request body for create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub company: Company,
}

impl UserPayload {
    /// Builds the wire payload from a validated draft.
    #[must_use]
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            name: format!("{} {}", draft.first_name, draft.last_name),
            email: draft.email.clone(),
            company: Company {
                name: Some(draft.department.clone()),
            },
        }
    }
}
