//! Page-level error banner renderer.

use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;

/// Renders `message` across the full width in the error colors.
///
/// Returns the next available row (`row + 1`).
pub fn render_banner(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{}", Theme::bg(&theme.colors.error_bg));
    print!("{}", fit_cell(&format!(" ✗ {message}  (x to dismiss)"), cols));
    print!("{}", Theme::reset());
    row + 1
}
