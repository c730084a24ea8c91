//! Dialogs drawn over the table: the create/edit form and the delete
//! confirmation.

use super::filters::render_input_line;
use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmInfo, FormModalInfo};

const MAX_MODAL_WIDTH: usize = 64;

/// Screen rectangle of a dialog, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    top: usize,
    left: usize,
    width: usize,
    height: usize,
}

impl Frame {
    fn centered(height: usize, rows: usize, cols: usize) -> Self {
        let width = cols.saturating_sub(4).min(MAX_MODAL_WIDTH).max(4);
        let height = height.min(rows).max(2);
        Self {
            top: rows.saturating_sub(height) / 2 + 1,
            left: cols.saturating_sub(width) / 2 + 1,
            width,
            height,
        }
    }

    const fn inner_width(self) -> usize {
        self.width - 2
    }

    /// Draws the border with `title` set into the top edge and blanks the
    /// interior.
    fn draw(self, title: &str, theme: &Theme) {
        let inner = self.inner_width();
        let title = fit_cell(&format!(" {title} "), (title.chars().count() + 2).min(inner));
        let title_len = title.chars().count();

        position_cursor(self.top, self.left);
        print!("{}", Theme::fg(&theme.colors.modal_border));
        print!("┌{title}{}┐", "─".repeat(inner - title_len));

        for line in 1..self.height - 1 {
            position_cursor(self.top + line, self.left);
            print!("│{}│", " ".repeat(inner));
        }

        position_cursor(self.top + self.height - 1, self.left);
        print!("└{}┘", "─".repeat(inner));
        print!("{}", Theme::reset());
    }

    /// Prints `text` on interior line `line`, one column in from the border.
    fn text(self, line: usize, text: &str, color: &str) {
        position_cursor(self.top + line, self.left + 2);
        print!("{}", Theme::fg(color));
        print!("{}", fit_cell(text, self.inner_width().saturating_sub(2)));
        print!("{}", Theme::reset());
    }
}

/// Renders the form dialog: each field followed by its inline error line, then
/// the submit status.
pub fn render_form_modal(form: &FormModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let frame = Frame::centered(form.fields.len() * 2 + 5, rows, cols);
    frame.draw(&form.title, theme);

    let mut line = 2;
    for field in &form.fields {
        if line + 1 >= frame.height - 1 {
            break;
        }
        render_input_line(
            frame.top + line,
            frame.left + 1,
            field,
            theme,
            frame.inner_width().saturating_sub(1),
        );
        if let Some(error) = &field.error {
            frame.text(line + 1, &format!("  {error}"), &theme.colors.field_error_fg);
        }
        line += 2;
    }

    if let Some(status) = &form.status {
        frame.text(frame.height - 2, status, &theme.colors.text_dim);
    } else {
        frame.text(frame.height - 2, "Enter: save  Esc: cancel", &theme.colors.text_dim);
    }
}

/// Renders the delete confirmation dialog.
pub fn render_confirm(confirm: &ConfirmInfo, theme: &Theme, rows: usize, cols: usize) {
    let frame = Frame::centered(6, rows, cols);
    frame.draw("Confirm", theme);
    frame.text(2, &confirm.message, &theme.colors.text_normal);
    let hint = if confirm.is_pending {
        "Waiting for the server..."
    } else {
        "y: delete  n: cancel"
    };
    frame.text(3, hint, &theme.colors.text_dim);
}
