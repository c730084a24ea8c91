//! The view pipeline: filter, then search, then sort, then paginate.
//!
//! Every function here is pure. The screen state reruns [`apply`] whenever
//! records, filters, search text or sort change, and slices the result with
//! [`paginate`] at render time.

pub mod filter;
pub mod page;
pub mod search;
pub mod sort;

pub use filter::FilterState;
pub use page::{paginate, total_pages, PageSize, PageState};
pub use sort::{SortDirection, SortField, SortState};

use crate::domain::UserRecord;

/// Runs filter, search and sort over `records`.
///
/// The output contains exactly the records satisfying every active filter and
/// the search text, ordered by `sort` with ties in input order.
#[must_use]
pub fn apply(
    records: &[UserRecord],
    filters: &FilterState,
    query: &str,
    sort: &SortState,
) -> Vec<UserRecord> {
    let _span = tracing::debug_span!(
        "pipeline_apply",
        total = records.len(),
        active_filters = filters.active_count(),
        query_len = query.len(),
        sort_field = ?sort.field,
        sort_direction = ?sort.direction
    )
    .entered();

    let mut processed: Vec<UserRecord> = records
        .iter()
        .filter(|record| filters.matches(record) && search::matches(record, query))
        .cloned()
        .collect();
    sort.sort(&mut processed);

    tracing::debug!(processed = processed.len(), "pipeline applied");
    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextField;
    use proptest::prelude::*;

    fn user(id: i64, first: &str, last: &str, email: &str, department: &str) -> UserRecord {
        UserRecord {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        }
    }

    #[test]
    fn filter_search_and_sort_compose() {
        let records = vec![
            user(10, "Ann", "Lee", "ann@a.io", "Sales"),
            user(9, "Bob", "Ray", "bob@b.io", "Sales"),
            user(2, "Cat", "Lee", "cat@c.io", "Ops"),
        ];
        let mut filters = FilterState::default();
        filters.set(TextField::Department, "sal");
        let sort = SortState::default();

        let ids: Vec<i64> = apply(&records, &filters, "", &sort).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 10]);

        let ids: Vec<i64> = apply(&records, &filters, "LEE", &sort).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10]);
    }

    #[test]
    fn no_matches_yields_empty_list_and_one_page() {
        let records = vec![user(1, "Ann", "Lee", "ann@a.io", "Sales")];
        let out = apply(&records, &FilterState::default(), "zzz", &SortState::default());
        assert!(out.is_empty());
        assert_eq!(total_pages(out.len(), PageSize::Ten), 1);
    }

    fn word() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["ann", "Bob", "cAt", "dee", "Sales", "ops", ""])
            .prop_map(str::to_string)
    }

    fn arb_user() -> impl Strategy<Value = UserRecord> {
        (0i64..50, word(), word(), word(), word())
            .prop_map(|(id, first, last, email, dept)| user(id, &first, &last, &email, &dept))
    }

    fn arb_sort() -> impl Strategy<Value = SortState> {
        (
            prop::sample::select(SortField::ALL.to_vec()),
            prop::bool::ANY,
        )
            .prop_map(|(field, desc)| SortState {
                field,
                direction: if desc { SortDirection::Desc } else { SortDirection::Asc },
            })
    }

    fn arb_filters() -> impl Strategy<Value = FilterState> {
        prop::array::uniform4(word()).prop_map(|patterns| {
            let mut filters = FilterState::default();
            for (field, pattern) in TextField::ALL.into_iter().zip(patterns) {
                filters.set(field, pattern);
            }
            filters
        })
    }

    proptest! {
        #[test]
        fn output_is_exactly_the_matching_records(
            records in prop::collection::vec(arb_user(), 0..40),
            filters in arb_filters(),
            query in word(),
            sort in arb_sort(),
        ) {
            let out = apply(&records, &filters, &query, &sort);

            for record in &out {
                for field in TextField::ALL {
                    let pattern = filters.get(field).to_lowercase();
                    prop_assert!(record.text(field).to_lowercase().contains(&pattern));
                }
                prop_assert!(search::matches(record, &query));
            }
            let expected = records
                .iter()
                .filter(|r| filters.matches(r) && search::matches(r, &query))
                .count();
            prop_assert_eq!(out.len(), expected);
        }

        #[test]
        fn identical_inputs_give_identical_output(
            records in prop::collection::vec(arb_user(), 0..40),
            filters in arb_filters(),
            query in word(),
            sort in arb_sort(),
        ) {
            let first = apply(&records, &filters, &query, &sort);
            let second = apply(&records, &filters, &query, &sort);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn reapplying_to_output_changes_nothing(
            records in prop::collection::vec(arb_user(), 0..40),
            filters in arb_filters(),
            query in word(),
            sort in arb_sort(),
        ) {
            let once = apply(&records, &filters, &query, &sort);
            let twice = apply(&once, &filters, &query, &sort);
            prop_assert_eq!(once, twice);
        }
    }
}
