//! Empty state component renderer.

use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message and dimmed subtitle in place of table rows.
///
/// The message goes on `row + 1` and the subtitle on the line below it.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", centered(&empty.message, cols));
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", centered(&empty.subtitle, cols));
    print!("{}", Theme::reset());
}

fn centered(text: &str, cols: usize) -> String {
    let len = text.chars().count().min(cols);
    let padding = (cols - len) / 2;
    format!("{}{}", " ".repeat(padding), fit_cell(text, cols - padding))
}
