//! Mapping from the remote record shape into [`UserRecord`].

use crate::domain::user::{RawUser, UserRecord};

/// Department assigned when the remote record carries no company name.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Normalizes a remote record.
///
/// The first whitespace-separated token of `name` becomes the first name; the
/// remaining tokens, joined by single spaces, become the last name. The company
/// name becomes the department, falling back to [`DEFAULT_DEPARTMENT`]. Never
/// fails, whatever the input strings contain.
///
/// # Example
///
/// ```
/// use zroster::domain::{normalize, RawUser};
///
/// let raw = RawUser { id: 1, name: Some("Leanne  Graham".into()), email: None, company: None };
/// let user = normalize(raw);
/// assert_eq!(user.first_name, "Leanne");
/// assert_eq!(user.last_name, "Graham");
/// assert_eq!(user.department, "General");
/// ```
#[must_use]
pub fn normalize(raw: RawUser) -> UserRecord {
    let name = raw.name.unwrap_or_default();
    let mut tokens = name.split_whitespace();
    let first_name = tokens.next().unwrap_or_default().to_string();
    let last_name = tokens.collect::<Vec<_>>().join(" ");

    let department = raw
        .company
        .and_then(|company| company.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string());

    UserRecord {
        id: raw.id,
        first_name,
        last_name,
        email: raw.email.unwrap_or_default(),
        department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Company;
    use rstest::rstest;

    fn raw(name: Option<&str>, company: Option<&str>) -> RawUser {
        RawUser {
            id: 7,
            name: name.map(str::to_string),
            email: Some("x@y.z".to_string()),
            company: company.map(|name| Company {
                name: Some(name.to_string()),
            }),
        }
    }

    #[rstest]
    #[case(Some("Leanne Graham"), "Leanne", "Graham")]
    #[case(Some("Mrs. Dennis Schulist"), "Mrs.", "Dennis Schulist")]
    #[case(Some("Cher"), "Cher", "")]
    #[case(Some("  Ervin   Howell  Jr "), "Ervin", "Howell Jr")]
    #[case(Some(""), "", "")]
    #[case(None, "", "")]
    fn splits_display_name(#[case] name: Option<&str>, #[case] first: &str, #[case] last: &str) {
        let user = normalize(raw(name, None));
        assert_eq!(user.first_name, first);
        assert_eq!(user.last_name, last);
    }

    #[rstest]
    #[case(Some("Romaguera-Crona"), "Romaguera-Crona")]
    #[case(Some(""), "General")]
    #[case(None, "General")]
    fn department_from_company(#[case] company: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalize(raw(Some("A B"), company)).department, expected);
    }

    #[test]
    fn null_company_name_falls_back() {
        let mut input = raw(Some("A B"), None);
        input.company = Some(Company { name: None });
        assert_eq!(normalize(input).department, DEFAULT_DEPARTMENT);
    }

    #[test]
    fn passes_id_and_email_through() {
        let user = normalize(raw(Some("A B"), None));
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "x@y.z");
    }

    #[test]
    fn missing_email_becomes_empty() {
        let mut input = raw(Some("A B"), None);
        input.email = None;
        assert_eq!(normalize(input).email, "");
    }
}
