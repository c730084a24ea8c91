//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with the record summary
//! - [`search`]: Search input box
//! - [`filters`]: Per-column filter inputs
//! - [`table`]: User table with sort markers and match highlighting
//! - [`empty`]: Loading and no-results messages
//! - [`pager`]: Page position and page settings
//! - [`banner`]: Page-level error
//! - [`modal`]: Form and delete confirmation dialogs
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, optional]
//! [Filter Panel - 5 lines, optional]
//! [Table Headers]
//! [Table Rows or Empty State]
//! [Pager]
//! [Error Banner, optional]
//! [Border]
//! [Footer]
//! ```
//!
//! Dialogs are drawn last, over the table.

mod banner;
mod empty;
mod filters;
mod footer;
mod header;
mod modal;
mod pager;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use banner::render_banner;
use empty::render_empty_state;
use filters::render_filter_panel;
use footer::render_footer;
use header::render_header;
use modal::{render_confirm, render_form_modal};
use pager::render_pager;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row (`row + 1`).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen for `vm`.
///
/// The body always spans `vm.body_rows` lines so the pager, banner and footer
/// stay pinned to the bottom of the pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    if let Some(panel) = &vm.filter_panel {
        current_row = render_filter_panel(current_row, panel, theme, cols);
    }
    current_row = render_table_headers(current_row, &vm.columns, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.rows, theme, cols);
    }
    current_row += vm.body_rows;

    current_row = render_pager(current_row, &vm.pager, theme, cols);
    if let Some(message) = &vm.banner {
        current_row = render_banner(current_row, message, theme, cols);
    }
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_footer(current_row, &vm.footer, theme, cols);

    if let Some(form) = &vm.form {
        render_form_modal(form, theme, rows, cols);
    }
    if let Some(confirm) = &vm.confirm {
        render_confirm(confirm, theme, rows, cols);
    }
}
