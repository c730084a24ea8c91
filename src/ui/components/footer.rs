//! Footer component renderer.

use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered at the specified row.
///
/// Hints wider than the terminal are truncated with `…`. Returns the next
/// available row (`row + 1`).
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = &footer.keybindings;

    let text_len = help_text.chars().count().min(cols);
    let padding = (cols - text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", fit_cell(help_text, text_len));
    print!("{}", " ".repeat(cols - padding - text_len));
    print!("{}", Theme::reset());
    row + 1
}
