//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! strings are already truncated, columns already chosen for the terminal
//! width, and rows already windowed around the selection.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Shown while searching or when a search is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Shown while the filter panel is open.
    pub filter_panel: Option<FilterPanelInfo>,

    /// Visible table columns, in order.
    pub columns: Vec<ColumnInfo>,

    /// Windowed table rows.
    pub rows: Vec<RowItem>,

    /// Number of rows the table body may use.
    pub body_rows: usize,

    pub pager: PagerInfo,

    /// Page-level error banner.
    pub banner: Option<String>,

    /// Create/edit modal.
    pub form: Option<FormModalInfo>,

    /// Delete confirmation modal.
    pub confirm: Option<ConfirmInfo>,

    /// Replaces the table body when there are no rows to show.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Title bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// "Showing X of Y users".
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the search box.
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelInfo {
    pub fields: Vec<InputFieldInfo>,
}

/// One labelled text input in the filter panel or the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFieldInfo {
    pub label: &'static str,
    pub value: String,
    pub is_focused: bool,
    /// Inline validation message.
    pub error: Option<String>,
}

/// A table column with its computed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub label: &'static str,
    pub width: usize,
    /// `▲` or `▼` when the table is sorted by this column.
    pub sort_indicator: Option<&'static str>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowItem {
    /// One cell per visible column, already fitted to the column width.
    pub cells: Vec<CellInfo>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellInfo {
    pub text: String,
    /// Character ranges matching the search text.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// "Page n / N" or the infinite-scroll status.
    pub position: String,
    /// "Per page: 10" plus the infinite flag.
    pub settings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModalInfo {
    /// "Add User" or "Edit {first name}".
    pub title: String,
    pub fields: Vec<InputFieldInfo>,
    /// "Saving..." while a submit is in flight.
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmInfo {
    pub message: String,
    /// True once confirmed and waiting on the reply.
    pub is_pending: bool,
}

/// Message shown in place of table rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Keybinding hints for the bottom of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
