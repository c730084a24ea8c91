//! Create/edit form drafts and their client-side validation.

use crate::domain::user::{TextField, UserRecord};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"));

/// Editable values of the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl FormDraft {
    /// Seeds a draft with a record's current values (edit form).
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
        }
    }

    #[must_use]
    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::Department => &self.department,
        }
    }

    pub fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::Department => &mut self.department,
        }
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<TextField, String>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: TextField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: TextField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.label())?;
            first = false;
        }
        Ok(())
    }
}

/// Validates a draft, returning one message per failing field.
///
/// Rules:
/// - first name: at least 2 characters after trimming
/// - last name: at least 1 character after trimming
/// - email: `non-space@non-space.non-space`
/// - department: at least 2 characters after trimming
///
/// # Example
///
/// ```
/// use zroster::domain::{validate, FormDraft};
///
/// let draft = FormDraft {
///     first_name: "Al".into(),
///     last_name: "Smith".into(),
///     email: "a@b.co".into(),
///     department: "Eng".into(),
/// };
/// assert!(validate(&draft).is_empty());
/// ```
#[must_use]
pub fn validate(draft: &FormDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if trimmed_len(&draft.first_name) < 2 {
        errors.insert(TextField::FirstName, "First name must be at least 2 characters");
    }
    if trimmed_len(&draft.last_name) < 1 {
        errors.insert(TextField::LastName, "Last name required");
    }
    if !EMAIL_PATTERN.is_match(&draft.email) {
        errors.insert(TextField::Email, "Valid email required");
    }
    if trimmed_len(&draft.department) < 2 {
        errors.insert(TextField::Department, "Department required");
    }

    errors
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(first: &str, last: &str, email: &str, department: &str) -> FormDraft {
        FormDraft {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        }
    }

    #[test]
    fn short_first_name_and_bad_email_yield_two_errors() {
        let errors = validate(&draft("A", "Smith", "bad", "Eng"));
        assert_eq!(errors.len(), 2);
        assert!(errors.get(TextField::FirstName).is_some());
        assert!(errors.get(TextField::Email).is_some());
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&draft("Al", "Smith", "a@b.co", "Eng")).is_empty());
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let errors = validate(&FormDraft::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(TextField::LastName), Some("Last name required"));
        assert_eq!(errors.get(TextField::Department), Some("Department required"));
    }

    #[rstest]
    #[case("  A  ", false)]
    #[case(" Al ", true)]
    #[case("Zoë", true)]
    fn first_name_length_is_measured_after_trimming(#[case] first: &str, #[case] ok: bool) {
        let errors = validate(&draft(first, "Smith", "a@b.co", "Eng"));
        assert_eq!(errors.get(TextField::FirstName).is_none(), ok);
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("a@b", false)]
    #[case("@b.co", false)]
    #[case("a b@c.de", false)]
    #[case("a@b.", false)]
    #[case("", false)]
    fn email_pattern(#[case] email: &str, #[case] ok: bool) {
        let errors = validate(&draft("Al", "Smith", email, "Eng"));
        assert_eq!(errors.get(TextField::Email).is_none(), ok, "email {email:?}");
    }

    #[test]
    fn field_accessors_round_trip() {
        let mut form = FormDraft::default();
        for field in TextField::ALL {
            form.field_mut(field).push_str(field.label());
        }
        assert_eq!(form.field(TextField::Email), "Email");
        assert_eq!(form.department, "Department");
    }
}
