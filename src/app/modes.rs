//! Input mode state for the application.
//!
//! The input mode decides how keys are interpreted and which overlay the UI
//! shows. Text-editing modes carry the focused field.
//!
//! # State Machine
//!
//! ```text
//! Normal ──/──▶ Search ──Enter/Esc──▶ Normal
//! Normal ──f──▶ Filter(field) ──Tab──▶ Filter(next field)
//! Normal ──a/e──▶ Form(field) ──reply ok / Esc──▶ Normal
//! Normal ──d──▶ ConfirmDelete ──y reply / n / Esc──▶ Normal
//! ```

use crate::domain::TextField;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Table navigation and commands.
    #[default]
    Normal,

    /// Typing into the search box.
    Search,

    /// Editing one column's filter pattern in the filter panel.
    Filter(TextField),

    /// Editing one field of the create/edit form.
    Form(TextField),

    /// Waiting for the user to confirm or cancel a delete.
    ConfirmDelete,
}

impl InputMode {
    /// Whether printable keys should be inserted as text.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::Search | Self::Filter(_) | Self::Form(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_entry_modes() {
        assert!(InputMode::Search.is_text_entry());
        assert!(InputMode::Filter(TextField::Email).is_text_entry());
        assert!(InputMode::Form(TextField::Department).is_text_entry());
        assert!(!InputMode::Normal.is_text_entry());
        assert!(!InputMode::ConfirmDelete.is_text_entry());
    }
}
