//! Keyboard mapping from Zellij keys to application events.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`/`Ctrl+p`: Move selection down/up
//!
//! In normal mode:
//! - `j`/`k`/`Down`/`Up`: Move selection
//! - `n`/`p`/`Right`/`Left`: Next/previous page
//! - `g`/`G`: First/last page
//!
//! In infinite mode `n` and `G` append one page or the rest of the list;
//! `p` and `g` do nothing.
//! - `/`: Search, `f`: Filter panel, `c`: Reset filters
//! - `s`/`S`: Cycle sort column / flip direction, `1`-`5`: Sort by column
//! - `+`/`-`: Page size, `i`: Toggle infinite scroll
//! - `a`: Add, `e`/`Enter`: Edit, `d`: Delete
//! - `r`: Reload, `x`/`Esc`: Dismiss error, `q`: Close
//!
//! In search, filter and form modes:
//! - Characters edit the focused field, `Backspace` deletes
//! - `Tab`/`Shift+Tab`: Next/previous field
//! - `Enter`: Apply or submit, `Esc`: Cancel
//! - `Ctrl+r` (filter panel): Reset filters
//!
//! In delete confirmation:
//! - `y`/`Enter`: Confirm, `n`/`Esc`: Cancel

use crate::app::{Event, InputMode};
use crate::pipeline::SortField;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event for the given input mode.
///
/// Returns `None` for keys with no binding in that mode.
#[must_use]
pub fn map_key(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::SelectNext),
            BareKey::Char('p') => Some(Event::SelectPrev),
            BareKey::Char('r') if matches!(mode, InputMode::Filter(_)) => Some(Event::ResetFilters),
            _ => None,
        };
    }

    match key.bare_key {
        BareKey::Enter => return Some(Event::Confirm),
        BareKey::Esc => return Some(Event::Escape),
        _ => {}
    }

    if mode.is_text_entry() {
        return map_text_key(key);
    }

    match mode {
        InputMode::ConfirmDelete => match key.bare_key {
            BareKey::Char('y' | 'Y') => Some(Event::ConfirmDelete),
            BareKey::Char('n' | 'N') => Some(Event::CancelDelete),
            _ => None,
        },
        _ => map_normal_key(key.bare_key),
    }
}

/// Search box, filter panel and form fields.
fn map_text_key(key: &KeyWithModifier) -> Option<Event> {
    match key.bare_key {
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Some(Event::PrevField),
        BareKey::Tab => Some(Event::NextField),
        BareKey::Backspace => Some(Event::Backspace),
        BareKey::Down => Some(Event::SelectNext),
        BareKey::Up => Some(Event::SelectPrev),
        BareKey::Char(c) => Some(Event::Char(c)),
        _ => None,
    }
}

fn map_normal_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Down | BareKey::Char('j') => Event::SelectNext,
        BareKey::Up | BareKey::Char('k') => Event::SelectPrev,
        BareKey::Right | BareKey::Char('n') => Event::NextPage,
        BareKey::Left | BareKey::Char('p') => Event::PrevPage,
        BareKey::Home | BareKey::Char('g') => Event::FirstPage,
        BareKey::End | BareKey::Char('G') => Event::LastPage,
        BareKey::Char('/') => Event::SearchMode,
        BareKey::Char('f') => Event::FilterMode,
        BareKey::Char('c') => Event::ResetFilters,
        BareKey::Char('s') => Event::CycleSortField,
        BareKey::Char('S') => Event::FlipSortDirection,
        BareKey::Char(digit @ '1'..='5') => {
            let column = digit.to_digit(10).map_or(0, |d| d as usize);
            Event::SortBy(SortField::from_column(column)?)
        }
        BareKey::Char('+' | '=') => Event::GrowPageSize,
        BareKey::Char('-') => Event::ShrinkPageSize,
        BareKey::Char('i') => Event::ToggleInfinite,
        BareKey::Char('a') => Event::OpenCreateForm,
        BareKey::Char('e') => Event::EditSelected,
        BareKey::Char('d') => Event::DeleteSelected,
        BareKey::Char('r') => Event::Reload,
        BareKey::Char('x') => Event::DismissError,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextField;
    use rstest::rstest;

    fn key(bare: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare)
    }

    #[rstest]
    #[case(InputMode::Normal, BareKey::Char('j'), Some(Event::SelectNext))]
    #[case(InputMode::Normal, BareKey::Char('G'), Some(Event::LastPage))]
    #[case(InputMode::Normal, BareKey::Char('3'), Some(Event::SortBy(SortField::LastName)))]
    #[case(InputMode::Normal, BareKey::Char('9'), None)]
    #[case(InputMode::Normal, BareKey::Enter, Some(Event::Confirm))]
    #[case(InputMode::Normal, BareKey::Char('q'), Some(Event::CloseFocus))]
    #[case(InputMode::Search, BareKey::Char('q'), Some(Event::Char('q')))]
    #[case(InputMode::Search, BareKey::Char('j'), Some(Event::Char('j')))]
    #[case(InputMode::Filter(TextField::Email), BareKey::Tab, Some(Event::NextField))]
    #[case(InputMode::Form(TextField::FirstName), BareKey::Backspace, Some(Event::Backspace))]
    #[case(InputMode::Form(TextField::FirstName), BareKey::Esc, Some(Event::Escape))]
    #[case(InputMode::ConfirmDelete, BareKey::Char('y'), Some(Event::ConfirmDelete))]
    #[case(InputMode::ConfirmDelete, BareKey::Char('n'), Some(Event::CancelDelete))]
    #[case(InputMode::ConfirmDelete, BareKey::Char('j'), None)]
    fn key_scenarios(#[case] mode: InputMode, #[case] bare: BareKey, #[case] expected: Option<Event>) {
        assert_eq!(map_key(mode, &key(bare)), expected);
    }

    #[test]
    fn ctrl_bindings_work_in_every_mode() {
        let ctrl_n = key(BareKey::Char('n')).with_ctrl_modifier();
        assert_eq!(map_key(InputMode::Search, &ctrl_n), Some(Event::SelectNext));
        assert_eq!(map_key(InputMode::Normal, &ctrl_n), Some(Event::SelectNext));

        let ctrl_r = key(BareKey::Char('r')).with_ctrl_modifier();
        assert_eq!(
            map_key(InputMode::Filter(TextField::FirstName), &ctrl_r),
            Some(Event::ResetFilters)
        );
        assert_eq!(map_key(InputMode::Normal, &ctrl_r), None);
    }

    #[test]
    fn shift_tab_moves_back() {
        let shift_tab = key(BareKey::Tab).with_shift_modifier();
        assert_eq!(
            map_key(InputMode::Form(TextField::Email), &shift_tab),
            Some(Event::PrevField)
        );
    }
}
