//! Column sorting.

use crate::domain::{TextField, UserRecord};
use std::cmp::Ordering;

/// Column a list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    Department,
}

impl SortField {
    /// All sortable columns in table order.
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Department,
    ];

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::FirstName => "First",
            Self::LastName => "Last",
            Self::Email => "Email",
            Self::Department => "Department",
        }
    }

    /// Field reached by pressing the column's number key (`1..=5`).
    #[must_use]
    pub fn from_column(column: usize) -> Option<Self> {
        column.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Next column, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Id => Self::FirstName,
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Email,
            Self::Email => Self::Department,
            Self::Department => Self::Id,
        }
    }

    const fn text_field(self) -> Option<TextField> {
        match self {
            Self::Id => None,
            Self::FirstName => Some(TextField::FirstName),
            Self::LastName => Some(TextField::LastName),
            Self::Email => Some(TextField::Email),
            Self::Department => Some(TextField::Department),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown beside the sorted column header.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Current sort column and direction. Defaults to `id` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click semantics: the same field flips direction, another field
    /// becomes the sort column in ascending order.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Compares two records under this sort. `id` compares numerically, text
    /// columns compare case-insensitively.
    #[must_use]
    pub fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        let ordering = match self.field.text_field() {
            None => a.id.cmp(&b.id),
            Some(field) => a
                .text(field)
                .to_lowercase()
                .cmp(&b.text(field).to_lowercase()),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort.
    pub fn sort(&self, records: &mut [UserRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, last: &str) -> UserRecord {
        UserRecord {
            id,
            first_name: String::new(),
            last_name: last.to_string(),
            email: String::new(),
            department: String::new(),
        }
    }

    fn ids(records: &[UserRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn id_sort_is_numeric() {
        let mut records = vec![record(10, ""), record(9, ""), record(100, "")];
        SortState::default().sort(&mut records);
        assert_eq!(ids(&records), vec![9, 10, 100]);
    }

    #[test]
    fn text_sort_ignores_case_and_is_stable() {
        let mut records = vec![
            record(1, "beta"),
            record(2, "Alpha"),
            record(3, "BETA"),
            record(4, "alpha"),
        ];
        let sort = SortState {
            field: SortField::LastName,
            direction: SortDirection::Asc,
        };
        sort.sort(&mut records);
        assert_eq!(ids(&records), vec![2, 4, 1, 3]);
    }

    #[test]
    fn descending_keeps_ties_in_input_order() {
        let mut records = vec![record(1, "b"), record(2, "a"), record(3, "b")];
        let sort = SortState {
            field: SortField::LastName,
            direction: SortDirection::Desc,
        };
        sort.sort(&mut records);
        assert_eq!(ids(&records), vec![1, 3, 2]);
    }

    #[test]
    fn toggle_flips_same_field_and_resets_on_new_field() {
        let mut sort = SortState::default();
        sort.toggle(SortField::Id);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle(SortField::Email);
        assert_eq!(sort.field, SortField::Email);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn column_numbers_map_to_fields() {
        assert_eq!(SortField::from_column(1), Some(SortField::Id));
        assert_eq!(SortField::from_column(5), Some(SortField::Department));
        assert_eq!(SortField::from_column(0), None);
        assert_eq!(SortField::from_column(6), None);
    }
}
