//! User table renderer.
//!
//! Columns arrive already chosen and sized for the terminal, and cell text is
//! already fitted, so this module only deals with color and separators.

use crate::ui::helpers::{self, fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnInfo, RowItem};

/// Renders the bold column headers, with a colored sort marker on the sorted
/// column.
///
/// Returns the next available row (`row + 1`).
pub fn render_table_headers(row: usize, columns: &[ColumnInfo], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    let mut used = 0;
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            print!(" ");
            used += 1;
        }
        print!("{}", Theme::fg(&theme.colors.header_fg));
        match column.sort_indicator {
            Some(indicator) if column.width > 2 => {
                let label_width = column.width - 2;
                print!("{} ", fit_cell(column.label, label_width));
                print!("{}", Theme::fg(&theme.colors.sort_indicator_fg));
                print!("{indicator}");
            }
            _ => print!("{}", fit_cell(column.label, column.width)),
        }
        used += column.width;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders windowed rows starting at `row`.
///
/// Returns the row after the last rendered one.
pub fn render_table_rows(row: usize, rows: &[RowItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Selected rows get the selection background across the full width; search
/// matches are highlighted inside each cell.
fn render_table_row(row: usize, item: &RowItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mut used = 0;
    for (index, cell) in item.cells.iter().enumerate() {
        if index > 0 {
            print!(" ");
            used += 1;
        }
        helpers::render_highlighted_text(&cell.text, &cell.highlight_ranges, theme, item.is_selected);
        used += cell.text.chars().count();
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}
