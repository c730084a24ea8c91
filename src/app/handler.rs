//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, web replies, permissions)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` intent methods
//! 4. Actions are collected and returned for execution
//!
//! Keys that mean different things per mode (`Char`, `Enter`, `Esc`, `Tab`)
//! arrive as mode-neutral events and are interpreted here against the current
//! [`InputMode`].

use crate::app::{Action, AppState, InputMode};
use crate::domain::Result;
use crate::pipeline::SortField;
use std::collections::BTreeMap;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Host granted or refused the web access permission.
    PermissionsResult { granted: bool },
    /// Discards local state and fetches the list again.
    Reload,

    SelectNext,
    SelectPrev,
    /// Next page, or one more page of the prefix in infinite mode.
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Extends the infinite-scroll prefix by one page.
    LoadMore,

    /// Header click on a column.
    SortBy(SortField),
    CycleSortField,
    FlipSortDirection,

    GrowPageSize,
    ShrinkPageSize,
    ToggleInfinite,

    /// Opens the search box.
    SearchMode,
    /// Opens the filter panel.
    FilterMode,
    ResetFilters,

    /// Inserts a character into the focused text field.
    Char(char),
    /// Deletes the last character of the focused text field.
    Backspace,
    /// Moves focus to the next field of the filter panel or form.
    NextField,
    /// Moves focus to the previous field of the filter panel or form.
    PrevField,
    /// Enter: apply, submit or edit depending on mode.
    Confirm,
    /// Esc: close whatever is open.
    Escape,

    OpenCreateForm,
    EditSelected,
    DeleteSelected,
    ConfirmDelete,
    CancelDelete,
    DismissError,
    /// Hides the plugin UI.
    CloseFocus,

    /// A web request completed.
    RepositoryReply {
        status: u16,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI should re-render.
///
/// # Errors
///
/// Returns errors for edits or deletes of records that have left the store and
/// for replies that did not originate from this plugin. Neither leaves the
/// state inconsistent; the shim logs them and carries on.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event), mode = ?state.input_mode).entered();

    match event {
        Event::PermissionsResult { granted: true } => Ok((true, state.mount())),
        Event::PermissionsResult { granted: false } => {
            tracing::warn!("web access denied");
            state.permission_denied();
            Ok((true, vec![]))
        }
        Event::Reload => Ok((true, state.reload())),

        Event::SelectNext => {
            state.move_selection_down();
            if state.page().infinite && state.selection_at_end() && state.has_more() {
                tracing::debug!("selection reached last row, loading more");
                return handle_event(state, &Event::LoadMore);
            }
            Ok((true, vec![]))
        }
        Event::SelectPrev => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.next_page();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            state.prev_page();
            Ok((true, vec![]))
        }
        Event::FirstPage => {
            state.first_page();
            Ok((true, vec![]))
        }
        Event::LastPage => {
            state.last_page();
            Ok((true, vec![]))
        }
        Event::LoadMore => {
            state.load_more();
            Ok((true, vec![]))
        }

        Event::SortBy(field) => {
            state.toggle_sort(*field);
            Ok((true, vec![]))
        }
        Event::CycleSortField => {
            state.cycle_sort_field();
            Ok((true, vec![]))
        }
        Event::FlipSortDirection => {
            state.flip_sort_direction();
            Ok((true, vec![]))
        }

        Event::GrowPageSize => {
            state.grow_page_size();
            Ok((true, vec![]))
        }
        Event::ShrinkPageSize => {
            state.shrink_page_size();
            Ok((true, vec![]))
        }
        Event::ToggleInfinite => {
            state.toggle_infinite();
            Ok((true, vec![]))
        }

        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::FilterMode => {
            state.input_mode = InputMode::Filter(crate::domain::TextField::FirstName);
            Ok((true, vec![]))
        }
        Event::ResetFilters => {
            state.reset_filters();
            Ok((true, vec![]))
        }

        Event::Char(c) => {
            edit_focused_text(state, |text| text.push(*c));
            Ok((true, vec![]))
        }
        Event::Backspace => {
            edit_focused_text(state, |text| {
                text.pop();
            });
            Ok((true, vec![]))
        }
        Event::NextField | Event::PrevField => {
            let forward = matches!(event, Event::NextField);
            let step = |field: crate::domain::TextField| if forward { field.next() } else { field.prev() };
            state.input_mode = match state.input_mode {
                InputMode::Filter(field) => InputMode::Filter(step(field)),
                InputMode::Form(field) => InputMode::Form(step(field)),
                other => other,
            };
            Ok((true, vec![]))
        }
        Event::Confirm => handle_confirm(state),
        Event::Escape => {
            handle_escape(state);
            Ok((true, vec![]))
        }

        Event::OpenCreateForm => {
            state.open_create_form();
            Ok((true, vec![]))
        }
        Event::EditSelected => {
            let Some(id) = state.selected_record().map(|record| record.id) else {
                tracing::debug!("no record selected");
                return Ok((false, vec![]));
            };
            state.open_edit_form(id)?;
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            let Some(id) = state.selected_record().map(|record| record.id) else {
                tracing::debug!("no record selected");
                return Ok((false, vec![]));
            };
            state.request_delete(id)?;
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => Ok((true, state.confirm_delete())),
        Event::CancelDelete => {
            state.cancel_delete();
            Ok((true, vec![]))
        }
        Event::DismissError => {
            state.dismiss_error();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::RepositoryReply {
            status,
            body,
            context,
        } => {
            let changed = state.handle_reply(context, *status, body)?;
            Ok((changed, vec![]))
        }
    }
}

/// Enter: edit in normal mode, leave search/filter, submit the form, confirm a delete.
fn handle_confirm(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.input_mode {
        InputMode::Normal => handle_event(state, &Event::EditSelected),
        InputMode::Search | InputMode::Filter(_) => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        InputMode::Form(_) => Ok((true, state.submit_form()?)),
        InputMode::ConfirmDelete => Ok((true, state.confirm_delete())),
    }
}

/// Esc: clear search, close the filter panel (keeping filters), cancel the
/// form or the delete.
fn handle_escape(state: &mut AppState) {
    match state.input_mode {
        InputMode::Normal => state.dismiss_error(),
        InputMode::Search => {
            state.set_search("");
            state.input_mode = InputMode::Normal;
        }
        InputMode::Filter(_) => state.input_mode = InputMode::Normal,
        InputMode::Form(_) => state.cancel_form(),
        InputMode::ConfirmDelete => state.cancel_delete(),
    }
}

/// Applies `edit` to the text the current mode is editing.
fn edit_focused_text(state: &mut AppState, edit: impl FnOnce(&mut String)) {
    match state.input_mode {
        InputMode::Search => {
            let mut query = state.search_query().to_string();
            edit(&mut query);
            state.set_search(query);
        }
        InputMode::Filter(field) => {
            let mut pattern = state.filters().get(field).to_string();
            edit(&mut pattern);
            state.set_filter(field, pattern);
        }
        InputMode::Form(field) => {
            if let Some(form) = state.mutations.form_mut() {
                edit(form.draft.field_mut(field));
            }
        }
        InputMode::Normal | InputMode::ConfirmDelete => {}
    }
}

/// Event name without payloads, for span fields.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::RepositoryReply { status, body, .. } => {
                write!(f, "RepositoryReply(status={status}, body_len={})", body.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}
