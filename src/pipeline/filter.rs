//! Per-field substring filters.

use crate::domain::{TextField, UserRecord};

/// One optional substring pattern per text column.
///
/// An empty pattern places no constraint on its column. Matching is
/// case-insensitive containment and all active patterns must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    patterns: [String; 4],
}

impl FilterState {
    /// Returns the pattern for `field` (empty when inactive).
    #[must_use]
    pub fn get(&self, field: TextField) -> &str {
        &self.patterns[field.index()]
    }

    pub fn set(&mut self, field: TextField, pattern: impl Into<String>) {
        self.patterns[field.index()] = pattern.into();
    }

    pub fn clear(&mut self) {
        self.patterns = Default::default();
    }

    /// Number of columns with a non-empty pattern.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.patterns.iter().filter(|p| !p.is_empty()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Whether `record` satisfies every active pattern.
    #[must_use]
    pub fn matches(&self, record: &UserRecord) -> bool {
        TextField::ALL.iter().all(|&field| {
            let pattern = self.get(field);
            pattern.is_empty() || contains_ignore_case(record.text(field), pattern)
        })
    }
}

/// Case-insensitive substring containment.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first: &str, department: &str) -> UserRecord {
        UserRecord {
            id: 1,
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: "jd@example.com".to_string(),
            department: department.to_string(),
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(FilterState::default().matches(&record("Jane", "Ops")));
    }

    #[test]
    fn patterns_are_anded_and_case_insensitive() {
        let mut filters = FilterState::default();
        filters.set(TextField::FirstName, "JA");
        filters.set(TextField::Department, "ops");
        assert!(filters.matches(&record("Jane", "DevOps")));
        assert!(!filters.matches(&record("Jane", "Sales")));
        assert!(!filters.matches(&record("Bob", "DevOps")));
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn clear_removes_all_patterns() {
        let mut filters = FilterState::default();
        filters.set(TextField::Email, "example");
        assert!(!filters.is_empty());
        filters.clear();
        assert!(filters.is_empty());
        assert_eq!(filters.get(TextField::Email), "");
    }
}
