//! Free-text search across name, email and department.

use super::filter::contains_ignore_case;
use crate::domain::UserRecord;

/// Whether `record` matches the search box text.
///
/// An empty query matches everything. Otherwise the query must be contained,
/// ignoring case, in `"{first} {last}"`, the email, or the department.
#[must_use]
pub fn matches(record: &UserRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    contains_ignore_case(&record.full_name(), query)
        || contains_ignore_case(&record.email, query)
        || contains_ignore_case(&record.department, query)
}
