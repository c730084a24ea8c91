//! Header component renderer.

use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at the specified row.
///
/// The title is bold on the left and the record summary is dimmed on the
/// right. The line is padded to the full terminal width so an optional
/// `header_bg` fills it.
///
/// ```text
///  Users                                          Showing 10 of 23 users
/// ```
///
/// Returns the next available row (`row + 1`).
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count().min(cols);
    let summary_width = cols.saturating_sub(title_len + 1);
    let summary_len = header.summary.chars().count().min(summary_width);

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit_cell(&header.title, title_len));
    print!("{}", " ".repeat(cols.saturating_sub(title_len + summary_len)));
    print!("{}", Theme::reset());

    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit_cell(&header.summary, summary_len));
    print!("{}", Theme::reset());
    row + 1
}
