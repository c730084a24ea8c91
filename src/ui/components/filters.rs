//! Per-column filter panel renderer.

use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterPanelInfo, InputFieldInfo};

const LABEL_WIDTH: usize = 14;

/// Renders one filter input per line followed by a separator.
///
/// ```text
///   First name    ann█
///   Last name
///   Email         .org
///   Department
/// ─────────────────────
/// ```
///
/// Returns the row after the separator.
pub fn render_filter_panel(row: usize, panel: &FilterPanelInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for field in &panel.fields {
        current_row = render_input_line(current_row, 1, field, theme, cols);
    }
    super::render_border(current_row, &theme.colors.border, cols)
}

/// Renders a labelled input of exactly `width` characters at (`row`, `col`).
///
/// Shared with the form dialog. The focused field gets the focus color and a
/// block cursor. Returns `row + 1`.
pub(super) fn render_input_line(
    row: usize,
    col: usize,
    field: &InputFieldInfo,
    theme: &Theme,
    width: usize,
) -> usize {
    position_cursor(row, col);
    let marker = if field.is_focused { "› " } else { "  " };
    let label = format!("{marker}{}", field.label);
    if field.is_focused {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.focus_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    let label_width = LABEL_WIDTH.min(width);
    print!("{}", fit_cell(&label, label_width));
    print!("{}", Theme::reset());

    let cursor = if field.is_focused { "█" } else { "" };
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", fit_cell(&format!("{}{cursor}", field.value), width - label_width));
    print!("{}", Theme::reset());
    row + 1
}
