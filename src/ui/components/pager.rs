//! Pagination bar renderer.

use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders the page position on the left and page settings on the right.
///
/// Returns the next available row (`row + 1`).
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    let position_len = pager.position.chars().count().min(cols);
    let settings_len = pager
        .settings
        .chars()
        .count()
        .min(cols.saturating_sub(position_len + 1));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", fit_cell(&pager.position, position_len));
    print!("{}", " ".repeat(cols - position_len - settings_len));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit_cell(&pager.settings, settings_len));
    print!("{}", Theme::reset());
    row + 1
}
