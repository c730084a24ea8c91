//! Screen state and its intents.
//!
//! [`AppState`] is the single source of truth for the screen: the record store,
//! filters, search text, sort, paging, input mode, form and delete dialogs, the
//! page-level error and the loading flag. Every user intent is a method here;
//! methods that need I/O return [`Action`]s for the shim to execute.
//!
//! # Derived State
//!
//! `processed` (filter, search and sort applied) is recomputed by
//! [`AppState::recompute`] whenever one of its inputs changes. The visible page
//! is sliced from it on demand, and the page number is clamped after every
//! recompute so it never exceeds `total_pages`.
//!
//! # Staleness
//!
//! Every request is tagged with a ticket and the screen epoch. [`AppState::reload`]
//! bumps the epoch, so replies to requests issued before it are dropped, as are
//! replies whose ticket nothing is waiting on.

use super::actions::Action;
use super::modes::InputMode;
use super::mutation::{Completion, MutationCoordinator};
use super::store::RecordStore;
use crate::client::{decode_reply, Operation, Reply, ReplyContext, RequestTag, TraceContext, UserRepository};
use crate::domain::{normalize, Result, RosterError, TextField, UserId, UserRecord};
use crate::pipeline::{self, FilterState, PageSize, PageState, SortField, SortState};
use crate::ui::theme::Theme;
use std::collections::BTreeMap;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    repository: UserRepository,
    store: RecordStore,
    filters: FilterState,
    search_query: String,
    sort: SortState,
    page: PageState,

    /// Output of the view pipeline over `store`.
    processed: Vec<UserRecord>,

    /// Zero-based selection within the visible page.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Form and delete-confirmation state plus requests in flight.
    pub mutations: MutationCoordinator,

    /// Page-level error banner text.
    pub error: Option<String>,

    /// True while the list request is outstanding.
    pub loading: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    list_ticket: Option<u64>,
    mounted: bool,
    epoch: u64,
    next_ticket: u64,
}

impl AppState {
    /// Creates an unmounted screen with an empty store.
    #[must_use]
    pub fn new(repository: UserRepository, page: PageState, theme: Theme) -> Self {
        Self {
            repository,
            store: RecordStore::default(),
            filters: FilterState::default(),
            search_query: String::new(),
            sort: SortState::default(),
            page,
            processed: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            mutations: MutationCoordinator::default(),
            error: None,
            loading: false,
            theme,
            list_ticket: None,
            mounted: false,
            epoch: 0,
            next_ticket: 1,
        }
    }

    // ---------------------------------------------------------------------
    // Read-only accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    #[must_use]
    pub const fn page(&self) -> PageState {
        self.page
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Records after filter, search and sort.
    #[must_use]
    pub fn processed(&self) -> &[UserRecord] {
        &self.processed
    }

    /// Records visible on the current page (or loaded prefix in infinite mode).
    #[must_use]
    pub fn paged_records(&self) -> &[UserRecord] {
        pipeline::paginate(&self.processed, &self.page)
    }

    #[must_use]
    pub fn total_records(&self) -> usize {
        self.processed.len()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        pipeline::total_pages(self.processed.len(), self.page.size)
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&UserRecord> {
        self.paged_records().get(self.selected_index)
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Issues the initial list request.
    ///
    /// Ignored once the screen has mounted, including while the first list
    /// request is still outstanding.
    pub fn mount(&mut self) -> Vec<Action> {
        if self.mounted {
            tracing::debug!("mount ignored, screen already mounted");
            return vec![];
        }
        self.mounted = true;
        self.fetch_list()
    }

    /// Discards all records and in-flight work and fetches the list again.
    pub fn reload(&mut self) -> Vec<Action> {
        self.epoch += 1;
        self.list_ticket = None;
        self.store.clear();
        self.mutations.reset();
        self.mounted = true;
        self.recompute();
        self.sync_input_mode();
        tracing::debug!(epoch = self.epoch, "screen reset");
        self.fetch_list()
    }

    /// Records that the host refused web access.
    pub fn permission_denied(&mut self) {
        self.loading = false;
        self.error = Some("Web access permission denied".to_string());
    }

    fn fetch_list(&mut self) -> Vec<Action> {
        let tag = self.next_tag();
        self.list_ticket = Some(tag.ticket);
        self.loading = true;
        self.error = None;
        vec![Action::Fetch(self.repository.list(tag))]
    }

    fn next_tag(&mut self) -> RequestTag {
        let tag = RequestTag {
            ticket: self.next_ticket,
            epoch: self.epoch,
        };
        self.next_ticket += 1;
        tag
    }

    /// Applies a web request result.
    ///
    /// Returns whether the screen changed. Stale and unknown replies return
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Decode`] if `context` was not produced by this
    /// plugin.
    pub fn handle_reply(
        &mut self,
        context: &BTreeMap<String, String>,
        status: u16,
        body: &[u8],
    ) -> Result<bool> {
        let reply_context = ReplyContext::from_context(context)?;
        let _trace_guard = reply_context.trace.as_ref().and_then(TraceContext::attach);
        let _span = tracing::debug_span!(
            "handle_reply",
            operation = reply_context.operation.as_str(),
            ticket = reply_context.ticket,
            status
        )
        .entered();

        if reply_context.epoch != self.epoch {
            tracing::debug!(
                reply_epoch = reply_context.epoch,
                current_epoch = self.epoch,
                "stale reply ignored"
            );
            return Ok(false);
        }

        let decoded = decode_reply(reply_context.operation, status, body);
        if reply_context.operation == Operation::List {
            Ok(self.complete_list(reply_context.ticket, decoded))
        } else {
            Ok(self.complete_mutation(reply_context.ticket, decoded))
        }
    }

    fn complete_list(&mut self, ticket: u64, decoded: Result<Reply>) -> bool {
        if self.list_ticket != Some(ticket) {
            tracing::debug!(ticket, "list reply for superseded request ignored");
            return false;
        }
        self.list_ticket = None;
        self.loading = false;

        match decoded {
            Ok(Reply::Listed(raw)) => {
                self.store.seed(raw.into_iter().map(normalize).collect());
                tracing::debug!(count = self.store.len(), "store seeded");
                self.recompute();
            }
            Ok(other) => {
                tracing::debug!(reply = ?other, "unexpected reply to list request");
            }
            Err(err) => {
                tracing::warn!(error = %err, "list request failed");
                self.error = Some(err.to_string());
            }
        }
        true
    }

    fn complete_mutation(&mut self, ticket: u64, decoded: Result<Reply>) -> bool {
        let now_millis = chrono::Utc::now().timestamp_millis();
        let changed = match self
            .mutations
            .complete(ticket, decoded, &mut self.store, now_millis)
        {
            Completion::Applied => {
                self.recompute();
                true
            }
            Completion::Failed(err) => {
                tracing::warn!(error = %err, "mutation failed");
                self.error = Some(err.to_string());
                true
            }
            Completion::Ignored => false,
        };
        self.sync_input_mode();
        changed
    }

    // ---------------------------------------------------------------------
    // Derived state
    // ---------------------------------------------------------------------

    /// Reruns the view pipeline and clamps page and selection.
    pub fn recompute(&mut self) {
        self.processed = pipeline::apply(
            self.store.records(),
            &self.filters,
            &self.search_query,
            &self.sort,
        );
        self.page.clamp(self.processed.len());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let visible = self.paged_records().len();
        self.selected_index = if visible == 0 {
            0
        } else {
            self.selected_index.min(visible - 1)
        };
    }

    /// Leaves dialog modes whose dialog has closed.
    fn sync_input_mode(&mut self) {
        let stale = match self.input_mode {
            InputMode::Form(_) => self.mutations.form().is_none(),
            InputMode::ConfirmDelete => self.mutations.confirm().is_none(),
            _ => false,
        };
        if stale {
            self.input_mode = InputMode::Normal;
        }
    }

    // ---------------------------------------------------------------------
    // Filter, search, sort
    // ---------------------------------------------------------------------

    pub fn set_filter(&mut self, field: TextField, pattern: impl Into<String>) {
        self.filters.set(field, pattern);
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.recompute();
    }

    /// Same field flips direction, another field sorts ascending by it.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        tracing::debug!(field = ?self.sort.field, direction = ?self.sort.direction, "sort changed");
        self.recompute();
    }

    /// Moves the sort to the next column, ascending.
    pub fn cycle_sort_field(&mut self) {
        self.toggle_sort(self.sort.field.next());
    }

    pub fn flip_sort_direction(&mut self) {
        self.toggle_sort(self.sort.field);
    }

    // ---------------------------------------------------------------------
    // Paging
    // ---------------------------------------------------------------------

    /// Jumps to page `number`, clamped into `1..=total_pages`.
    pub fn set_page(&mut self, number: usize) {
        self.page.number = number;
        self.page.clamp(self.processed.len());
        self.selected_index = 0;
    }

    /// Next page, or one more page of the prefix in infinite mode.
    pub fn next_page(&mut self) {
        if self.page.infinite {
            self.load_more();
            return;
        }
        self.set_page(self.page.number.saturating_add(1));
    }

    /// Previous page. The infinite prefix never shrinks, so this is a no-op there.
    pub fn prev_page(&mut self) {
        if self.page.infinite {
            tracing::debug!("previous page ignored in infinite mode");
            return;
        }
        self.set_page(self.page.number.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        if self.page.infinite {
            tracing::debug!("first page ignored in infinite mode");
            return;
        }
        self.set_page(1);
    }

    /// Last page, or the whole list in infinite mode.
    pub fn last_page(&mut self) {
        if self.page.infinite {
            while self.has_more() {
                self.load_more();
            }
            return;
        }
        self.set_page(self.total_pages());
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page.size = size;
        self.set_page(1);
    }

    pub fn grow_page_size(&mut self) {
        self.set_page_size(self.page.size.larger());
    }

    pub fn shrink_page_size(&mut self) {
        self.set_page_size(self.page.size.smaller());
    }

    /// Switches between paged and infinite mode and returns to page 1.
    pub fn toggle_infinite(&mut self) {
        self.page.infinite = !self.page.infinite;
        self.set_page(1);
    }

    /// Extends the infinite-scroll prefix by one page, keeping the selection.
    pub fn load_more(&mut self) {
        let total_pages = self.total_pages();
        if self.page.number < total_pages {
            self.page.number += 1;
            tracing::debug!(page = self.page.number, total_pages, "loaded more rows");
        }
    }

    /// Whether the visible rows end before the processed list does.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page.number < self.total_pages()
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Moves selection down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let visible = self.paged_records().len();
        if visible == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % visible;
    }

    /// Moves selection up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let visible = self.paged_records().len();
        if visible == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            visible - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Whether the selection sits on the last visible row.
    #[must_use]
    pub fn selection_at_end(&self) -> bool {
        let visible = self.paged_records().len();
        visible > 0 && self.selected_index == visible - 1
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    pub fn open_create_form(&mut self) {
        self.mutations.open_create();
        self.input_mode = InputMode::Form(TextField::FirstName);
    }

    /// Opens the edit form seeded with record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFoundLocally`] if `id` is not in the store.
    pub fn open_edit_form(&mut self, id: UserId) -> Result<()> {
        let record = self.store.get(id).ok_or(RosterError::NotFoundLocally(id))?;
        self.mutations.open_edit(record);
        self.input_mode = InputMode::Form(TextField::FirstName);
        Ok(())
    }

    /// Validates and submits the open form.
    ///
    /// Validation failures stay inline in the form and focus the first invalid
    /// field.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFoundLocally`] if the edited record has left the
    /// store, and [`RosterError::Decode`] if the payload cannot be encoded.
    pub fn submit_form(&mut self) -> Result<Vec<Action>> {
        let tag = self.next_tag();
        match self.mutations.submit(&self.repository, tag, &self.store) {
            Ok(Some(call)) => {
                self.error = None;
                Ok(vec![Action::Fetch(call)])
            }
            Ok(None) => Ok(vec![]),
            Err(RosterError::Validation(errors)) => {
                if let Some((field, _)) = errors.iter().next() {
                    self.input_mode = InputMode::Form(field);
                }
                Ok(vec![])
            }
            Err(err) => Err(err),
        }
    }

    pub fn cancel_form(&mut self) {
        self.mutations.cancel_form();
        self.sync_input_mode();
    }

    /// Opens the delete confirmation for record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFoundLocally`] if `id` is not in the store.
    pub fn request_delete(&mut self, id: UserId) -> Result<()> {
        self.mutations.request_delete(id, &self.store)?;
        self.input_mode = InputMode::ConfirmDelete;
        Ok(())
    }

    pub fn confirm_delete(&mut self) -> Vec<Action> {
        let tag = self.next_tag();
        match self.mutations.confirm_delete(&self.repository, tag) {
            Some(call) => {
                self.error = None;
                vec![Action::Fetch(call)]
            }
            None => vec![],
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.mutations.cancel_delete() {
            self.sync_input_mode();
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mutation::FormPhase;
    use crate::client::RepositoryCall;

    fn list_body(n: i64) -> Vec<u8> {
        let users: Vec<serde_json::Value> = (1..=n)
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "name": format!("First{id} Last{id}"),
                    "email": format!("user{id}@example.com"),
                    "company": { "name": if id % 2 == 0 { "Even" } else { "Odd" } }
                })
            })
            .collect();
        serde_json::to_vec(&users).unwrap()
    }

    fn single_fetch(actions: Vec<Action>) -> RepositoryCall {
        match actions.as_slice() {
            [Action::Fetch(call)] => call.clone(),
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    fn mounted(n: i64) -> AppState {
        let mut state = AppState::new(UserRepository::default(), PageState::default(), Theme::default());
        let call = single_fetch(state.mount());
        assert!(state.loading);
        assert!(state.handle_reply(&call.context(), 200, &list_body(n)).unwrap());
        state
    }

    fn ids(records: &[UserRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn mount_seeds_store_and_clears_loading() {
        let state = mounted(23);
        assert!(!state.loading);
        assert_eq!(state.total_records(), 23);
        assert_eq!(state.store().get(4).unwrap().first_name, "First4");
        assert_eq!(ids(state.paged_records()), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn second_mount_is_ignored() {
        let mut state = AppState::new(UserRepository::default(), PageState::default(), Theme::default());
        assert_eq!(state.mount().len(), 1);
        assert!(state.mount().is_empty());
    }

    #[test]
    fn failed_list_sets_error_and_leaves_store_empty() {
        let mut state = AppState::new(UserRepository::default(), PageState::default(), Theme::default());
        let call = single_fetch(state.mount());
        state.handle_reply(&call.context(), 503, b"").unwrap();
        assert!(!state.loading);
        assert!(state.store().is_empty());
        assert_eq!(state.error.as_deref(), Some("Failed to fetch users (503)"));
    }

    #[test]
    fn page_three_then_larger_page_size() {
        let mut state = mounted(23);
        state.set_page(3);
        assert_eq!(ids(state.paged_records()), vec![21, 22, 23]);
        assert_eq!(state.total_pages(), 3);

        state.set_page_size(PageSize::TwentyFive);
        assert_eq!(state.page().number, 1);
        assert_eq!(state.paged_records().len(), 23);
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut state = mounted(23);
        state.prev_page();
        assert_eq!(state.page().number, 1);
        state.last_page();
        assert_eq!(state.page().number, 3);
        state.next_page();
        assert_eq!(state.page().number, 3);
        state.set_page(99);
        assert_eq!(state.page().number, 3);
        state.first_page();
        assert_eq!(state.page().number, 1);
    }

    #[test]
    fn narrowing_filter_clamps_page() {
        let mut state = mounted(23);
        state.last_page();
        state.set_filter(TextField::Department, "even");
        assert_eq!(state.total_records(), 11);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page().number, 2);

        state.set_search("no such user");
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page().number, 1);
        assert!(state.paged_records().is_empty());

        state.set_search("");
        state.reset_filters();
        assert_eq!(state.total_records(), 23);
    }

    #[test]
    fn sorting_by_id_descending() {
        let mut state = mounted(12);
        state.toggle_sort(SortField::Id);
        assert_eq!(state.paged_records()[0].id, 12);
        state.cycle_sort_field();
        assert_eq!(state.sort().field, SortField::FirstName);
    }

    #[test]
    fn infinite_scroll_grows_prefix() {
        let mut state = mounted(23);
        state.set_page(2);
        state.toggle_infinite();
        assert_eq!(state.page().number, 1);
        assert_eq!(state.paged_records().len(), 10);

        state.load_more();
        assert_eq!(state.paged_records().len(), 20);
        state.load_more();
        state.load_more();
        assert_eq!(state.page().number, 3);
        assert_eq!(state.paged_records().len(), 23);
        assert!(!state.has_more());
    }

    #[test]
    fn infinite_navigation_only_appends() {
        let mut state = mounted(40);
        state.toggle_infinite();
        state.move_selection_down();
        state.move_selection_down();

        state.next_page();
        assert_eq!(state.paged_records().len(), 20);
        assert_eq!(state.selected_index, 2);

        state.prev_page();
        state.first_page();
        assert_eq!(state.page().number, 2);
        assert_eq!(state.paged_records().len(), 20);
        assert_eq!(state.selected_index, 2);

        state.last_page();
        assert_eq!(state.paged_records().len(), 40);
        assert_eq!(state.selected_index, 2);
        assert!(!state.has_more());
    }

    #[test]
    fn create_round_trip_prepends_record() {
        let mut state = mounted(3);
        state.open_create_form();
        assert_eq!(state.input_mode, InputMode::Form(TextField::FirstName));
        {
            let form = state.mutations.form_mut().unwrap();
            form.draft.first_name = "Al".to_string();
            form.draft.last_name = "Smith".to_string();
            form.draft.email = "a@b.co".to_string();
            form.draft.department = "Eng".to_string();
        }
        let call = single_fetch(state.submit_form().unwrap());
        assert_eq!(call.operation, Operation::Create);
        assert!(state.submit_form().unwrap().is_empty());

        state.handle_reply(&call.context(), 201, br#"{"id": 11}"#).unwrap();
        assert_eq!(state.store().records()[0].id, 11);
        assert_eq!(state.total_records(), 4);
        assert!(state.mutations.form().is_none());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn invalid_submit_focuses_first_error() {
        let mut state = mounted(3);
        state.open_create_form();
        state.mutations.form_mut().unwrap().draft.first_name = "Alice".to_string();
        assert!(state.submit_form().unwrap().is_empty());
        assert_eq!(state.input_mode, InputMode::Form(TextField::LastName));
        assert_eq!(state.mutations.form().unwrap().phase, FormPhase::Invalid);
    }

    #[test]
    fn failed_create_keeps_store_and_sets_error() {
        let mut state = mounted(3);
        state.open_create_form();
        state.mutations.form_mut().unwrap().draft = crate::domain::FormDraft {
            first_name: "Al".to_string(),
            last_name: "Smith".to_string(),
            email: "a@b.co".to_string(),
            department: "Eng".to_string(),
        };
        let call = single_fetch(state.submit_form().unwrap());
        state.handle_reply(&call.context(), 500, b"").unwrap();

        assert_eq!(state.total_records(), 3);
        assert_eq!(state.error.as_deref(), Some("Failed to create user (500)"));
        assert_eq!(state.mutations.form().unwrap().phase, FormPhase::Failed);
        state.dismiss_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn edit_updates_record_in_place() {
        let mut state = mounted(3);
        state.open_edit_form(2).unwrap();
        state.mutations.form_mut().unwrap().draft.last_name = "Renamed".to_string();
        let call = single_fetch(state.submit_form().unwrap());
        assert_eq!(call.url, format!("{}/2", crate::client::DEFAULT_ENDPOINT));
        state.handle_reply(&call.context(), 200, b"{}").unwrap();
        assert_eq!(state.store().get(2).unwrap().last_name, "Renamed");
    }

    #[test]
    fn delete_flow_removes_record() {
        let mut state = mounted(3);
        state.request_delete(2).unwrap();
        assert_eq!(state.input_mode, InputMode::ConfirmDelete);
        let call = single_fetch(state.confirm_delete());
        state.handle_reply(&call.context(), 200, b"{}").unwrap();
        assert!(!state.store().contains(2));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn delete_of_absent_id_is_a_no_op() {
        let mut state = mounted(3);
        assert!(matches!(state.request_delete(42), Err(RosterError::NotFoundLocally(42))));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.total_records(), 3);
        assert!(state.open_edit_form(42).is_err());
    }

    #[test]
    fn replies_from_before_reload_are_ignored() {
        let mut state = mounted(3);
        state.request_delete(1).unwrap();
        let stale = single_fetch(state.confirm_delete());

        let fresh = single_fetch(state.reload());
        assert!(state.store().is_empty());
        assert!(!state.handle_reply(&stale.context(), 200, b"").unwrap());

        state.handle_reply(&fresh.context(), 200, &list_body(3)).unwrap();
        assert!(state.store().contains(1));
    }

    #[test]
    fn unknown_ticket_is_ignored() {
        let mut state = mounted(3);
        let call = state.repository.delete(RequestTag { ticket: 999, epoch: 0 }, 1);
        assert!(!state.handle_reply(&call.context(), 200, b"").unwrap());
        assert!(state.store().contains(1));
    }

    #[test]
    fn foreign_context_is_an_error() {
        let mut state = mounted(1);
        assert!(state.handle_reply(&BTreeMap::new(), 200, b"").is_err());
    }

    #[test]
    fn selection_wraps_within_page() {
        let mut state = mounted(3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        assert!(state.selection_at_end());
        state.move_selection_down();
        assert_eq!(state.selected_record().unwrap().id, 1);
    }
}
