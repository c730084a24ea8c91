//! Page sizing and slicing.

use crate::domain::UserRecord;

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [Self; 4] = [Self::Ten, Self::TwentyFive, Self::Fifty, Self::Hundred];

    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Parses one of the allowed sizes; anything else is `None`.
    #[must_use]
    pub fn from_value(value: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == value)
    }

    /// Next larger size, saturating at 100.
    #[must_use]
    pub const fn larger(self) -> Self {
        match self {
            Self::Ten => Self::TwentyFive,
            Self::TwentyFive => Self::Fifty,
            Self::Fifty | Self::Hundred => Self::Hundred,
        }
    }

    /// Next smaller size, saturating at 10.
    #[must_use]
    pub const fn smaller(self) -> Self {
        match self {
            Self::Ten | Self::TwentyFive => Self::Ten,
            Self::Fifty => Self::TwentyFive,
            Self::Hundred => Self::Fifty,
        }
    }
}

/// Page size, current page (1-based) and whether infinite scroll is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub size: PageSize,
    pub number: usize,
    pub infinite: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            number: 1,
            infinite: false,
        }
    }
}

impl PageState {
    /// Clamps `number` into `1..=total_pages`.
    pub fn clamp(&mut self, total: usize) {
        self.number = self.number.clamp(1, total_pages(total, self.size));
    }
}

/// `max(1, ceil(total / size))`.
#[must_use]
pub fn total_pages(total: usize, size: PageSize) -> usize {
    total.div_ceil(size.get()).max(1)
}

/// Returns the slice of `records` visible on the current page.
///
/// Paged mode shows `[(n-1)*p, n*p)`, infinite mode shows the prefix `[0, n*p)`.
/// Ranges past the end are truncated; a start past the end yields an empty slice.
#[must_use]
pub fn paginate<'a>(records: &'a [UserRecord], page: &PageState) -> &'a [UserRecord] {
    let size = page.size.get();
    let number = page.number.max(1);
    let end = number.saturating_mul(size).min(records.len());
    let start = if page.infinite {
        0
    } else {
        (number - 1).saturating_mul(size).min(end)
    };
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records(n: usize) -> Vec<UserRecord> {
        (1..=n as i64)
            .map(|id| UserRecord {
                id,
                first_name: format!("U{id}"),
                last_name: String::new(),
                email: String::new(),
                department: String::new(),
            })
            .collect()
    }

    fn page(size: PageSize, number: usize, infinite: bool) -> PageState {
        PageState {
            size,
            number,
            infinite,
        }
    }

    #[test]
    fn third_page_of_twenty_three() {
        let list = records(23);
        let visible = paginate(&list, &page(PageSize::Ten, 3, false));
        let ids: Vec<i64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
        assert_eq!(total_pages(23, PageSize::Ten), 3);
        assert_eq!(total_pages(23, PageSize::TwentyFive), 1);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let list = records(5);
        assert!(paginate(&list, &page(PageSize::Ten, 2, false)).is_empty());
        assert!(paginate(&[], &page(PageSize::Ten, 1, false)).is_empty());
    }

    #[test]
    fn zero_records_still_have_one_page() {
        assert_eq!(total_pages(0, PageSize::Fifty), 1);
    }

    #[test]
    fn clamp_keeps_page_in_bounds() {
        let mut state = page(PageSize::Ten, 7, false);
        state.clamp(23);
        assert_eq!(state.number, 3);
        state.number = 0;
        state.clamp(23);
        assert_eq!(state.number, 1);
    }

    #[test]
    fn sizes_step_and_saturate() {
        assert_eq!(PageSize::Ten.smaller(), PageSize::Ten);
        assert_eq!(PageSize::Ten.larger(), PageSize::TwentyFive);
        assert_eq!(PageSize::Hundred.larger(), PageSize::Hundred);
        assert_eq!(PageSize::from_value(50), Some(PageSize::Fifty));
        assert_eq!(PageSize::from_value(20), None);
    }

    fn any_size() -> impl Strategy<Value = PageSize> {
        prop::sample::select(PageSize::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn paged_length_matches_formula(total in 0usize..260, size in any_size(), number in 1usize..30) {
            let list = records(total);
            let p = size.get();
            let expected = p.min(total.saturating_sub((number - 1) * p));
            prop_assert_eq!(paginate(&list, &page(size, number, false)).len(), expected);
        }

        #[test]
        fn infinite_page_is_prefix_of_next(total in 0usize..260, size in any_size(), number in 1usize..30) {
            let list = records(total);
            let current = paginate(&list, &page(size, number, true));
            let next = paginate(&list, &page(size, number + 1, true));
            prop_assert!(next.starts_with(current));
            prop_assert_eq!(current.len(), (number * size.get()).min(total));
        }
    }
}
