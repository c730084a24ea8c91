//! View model computation for [`AppState`].

use super::modes::InputMode;
use super::mutation::{DeletePhase, FormMode, FormPhase};
use super::state::AppState;
use crate::domain::{TextField, UserRecord};
use crate::pipeline::SortField;
use crate::ui::helpers::{fit_cell, match_ranges};
use crate::ui::viewmodel::{
    CellInfo, ColumnInfo, ConfirmInfo, EmptyState, FilterPanelInfo, FooterInfo, FormModalInfo,
    HeaderInfo, InputFieldInfo, PagerInfo, RowItem, SearchBarInfo, UIViewModel,
};

const ID_WIDTH: usize = 6;
const FIRST_WIDTH: usize = 14;
const LAST_WIDTH: usize = 16;
const DEPARTMENT_WIDTH: usize = 22;

/// Narrowest terminal that still shows the email column.
pub const EMAIL_MIN_COLS: usize = 70;
/// Narrowest terminal that still shows the department column.
pub const DEPARTMENT_MIN_COLS: usize = 100;

/// Blank line, header, border, column headers, pager, border, footer.
const BASE_CHROME_ROWS: usize = 7;
const SEARCH_BAR_ROWS: usize = 3;
const FILTER_PANEL_ROWS: usize = 5;
const BANNER_ROWS: usize = 1;

impl AppState {
    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract UI chrome (header, search bar, filter panel, pager, banner, footer)
    /// 2. Center the window on the selected row
    /// 3. Shift the window back if it runs past the end of the visible records
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let search_bar = self.compute_search_bar();
        let filter_panel = self.compute_filter_panel();
        let body_rows = self.calculate_body_rows(
            rows,
            search_bar.is_some(),
            filter_panel.is_some(),
        );

        let layout = column_layout(cols);
        let columns = layout
            .iter()
            .map(|&(field, width)| ColumnInfo {
                label: field.label(),
                width,
                sort_indicator: (self.sort().field == field).then(|| self.sort().direction.indicator()),
            })
            .collect();

        let paged = self.paged_records();
        let mut visible_start = self.selected_index.saturating_sub(body_rows / 2);
        let visible_end = (visible_start + body_rows).min(paged.len());
        if visible_end - visible_start < body_rows && paged.len() >= body_rows {
            visible_start = visible_end.saturating_sub(body_rows);
        }

        let rows_vm = paged[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| {
                self.compute_row(record, visible_start + offset == self.selected_index, &layout)
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar,
            filter_panel,
            columns,
            rows: rows_vm,
            body_rows,
            pager: self.compute_pager(),
            banner: self.error.clone(),
            form: self.compute_form(),
            confirm: self.compute_confirm(),
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    fn compute_row(&self, record: &UserRecord, is_selected: bool, layout: &[(SortField, usize)]) -> RowItem {
        let cells = layout
            .iter()
            .map(|&(field, width)| {
                let text = match field {
                    SortField::Id => record.id.to_string(),
                    SortField::FirstName => record.first_name.clone(),
                    SortField::LastName => record.last_name.clone(),
                    SortField::Email => record.email.clone(),
                    SortField::Department => record.department.clone(),
                };
                let limit = if text.chars().count() > width {
                    width.saturating_sub(1)
                } else {
                    width
                };
                let highlight_ranges = if field == SortField::Id {
                    vec![]
                } else {
                    match_ranges(&text, self.search_query(), limit)
                };
                CellInfo {
                    text: fit_cell(&text, width),
                    highlight_ranges,
                }
            })
            .collect();
        RowItem { cells, is_selected }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: " Users ".to_string(),
            summary: format!(
                "Showing {} of {} users",
                self.paged_records().len(),
                self.total_records()
            ),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let is_focused = self.input_mode == InputMode::Search;
        (is_focused || !self.search_query().is_empty()).then(|| SearchBarInfo {
            query: self.search_query().to_string(),
            is_focused,
        })
    }

    fn compute_filter_panel(&self) -> Option<FilterPanelInfo> {
        let InputMode::Filter(focused) = self.input_mode else {
            return None;
        };
        Some(FilterPanelInfo {
            fields: TextField::ALL
                .iter()
                .map(|&field| InputFieldInfo {
                    label: field.label(),
                    value: self.filters().get(field).to_string(),
                    is_focused: field == focused,
                    error: None,
                })
                .collect(),
        })
    }

    fn compute_pager(&self) -> PagerInfo {
        let page = self.page();
        let position = if page.infinite {
            let more = if self.has_more() { "scroll for more" } else { "all loaded" };
            format!("Infinite: {} loaded, {more}", self.paged_records().len())
        } else {
            format!("Page {} / {}", page.number, self.total_pages())
        };
        PagerInfo {
            position,
            settings: format!(
                "Per page: {}  Infinite: {}",
                page.size.get(),
                if page.infinite { "on" } else { "off" }
            ),
        }
    }

    fn compute_form(&self) -> Option<FormModalInfo> {
        let form = self.mutations.form()?;
        let focused = match self.input_mode {
            InputMode::Form(field) => Some(field),
            _ => None,
        };
        let title = match form.mode {
            FormMode::Create => "Add User".to_string(),
            FormMode::Edit { id } => {
                let name = self
                    .store()
                    .get(id)
                    .map_or(form.draft.first_name.as_str(), |record| record.first_name.as_str());
                format!("Edit {name}")
            }
        };
        let status = match form.phase {
            FormPhase::Submitting { .. } => Some("Saving...".to_string()),
            FormPhase::Failed => Some("Save failed. Enter to retry".to_string()),
            FormPhase::Idle | FormPhase::Invalid => None,
        };
        Some(FormModalInfo {
            title,
            fields: TextField::ALL
                .iter()
                .map(|&field| InputFieldInfo {
                    label: field.label(),
                    value: form.draft.field(field).to_string(),
                    is_focused: focused == Some(field),
                    error: form.errors.get(field).map(str::to_string),
                })
                .collect(),
            status,
        })
    }

    fn compute_confirm(&self) -> Option<ConfirmInfo> {
        let confirm = self.mutations.confirm()?;
        let is_pending = matches!(confirm.phase, DeletePhase::Confirmed { .. });
        let message = if is_pending {
            format!("Deleting {}...", confirm.name)
        } else {
            format!("Delete user {}?", confirm.name)
        };
        Some(ConfirmInfo { message, is_pending })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.paged_records().is_empty() {
            return None;
        }
        if self.loading {
            return Some(EmptyState {
                message: "Loading...".to_string(),
                subtitle: "Fetching the user directory".to_string(),
            });
        }
        let subtitle = if self.store().is_empty() {
            "Press r to reload or a to add a user"
        } else {
            "Adjust the search or filters"
        };
        Some(EmptyState {
            message: "No users found.".to_string(),
            subtitle: subtitle.to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal if self.page().infinite => {
                "j/k: move  n: more  G: load all  /: search  f: filters  s/S/1-5: sort  +/-: size  i: paged  a: add  e: edit  d: delete  r: reload  q: quit"
            }
            InputMode::Normal => {
                "j/k: move  n/p: page  /: search  f: filters  s/S/1-5: sort  +/-: size  i: infinite  a: add  e: edit  d: delete  r: reload  q: quit"
            }
            InputMode::Search => "Type to search  Enter: apply  Esc: clear  ↑/↓: move",
            InputMode::Filter(_) => "Type to filter  Tab: next field  Ctrl+r: reset  Enter/Esc: close",
            InputMode::Form(_) => "Type to edit  Tab/Shift+Tab: field  Enter: save  Esc: cancel",
            InputMode::ConfirmDelete => "y: delete  n/Esc: cancel",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn calculate_body_rows(&self, total_rows: usize, search_bar: bool, filter_panel: bool) -> usize {
        let mut chrome = BASE_CHROME_ROWS;
        if search_bar {
            chrome += SEARCH_BAR_ROWS;
        }
        if filter_panel {
            chrome += FILTER_PANEL_ROWS;
        }
        if self.error.is_some() {
            chrome += BANNER_ROWS;
        }
        total_rows.saturating_sub(chrome)
    }
}

/// Chooses visible columns and widths for a terminal `cols` wide.
///
/// Email hides below [`EMAIL_MIN_COLS`] and department below
/// [`DEPARTMENT_MIN_COLS`]. The last visible column absorbs leftover width.
fn column_layout(cols: usize) -> Vec<(SortField, usize)> {
    let mut layout = vec![
        (SortField::Id, ID_WIDTH),
        (SortField::FirstName, FIRST_WIDTH),
        (SortField::LastName, LAST_WIDTH),
    ];
    if cols >= EMAIL_MIN_COLS {
        layout.push((SortField::Email, 0));
    }
    if cols >= DEPARTMENT_MIN_COLS {
        layout.push((SortField::Department, DEPARTMENT_WIDTH));
    }

    let gaps = layout.len() - 1;
    let flexible = layout
        .iter()
        .position(|&(field, _)| field == SortField::Email)
        .unwrap_or(layout.len() - 1);
    let fixed: usize = layout
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != flexible)
        .map(|(_, &(_, width))| width)
        .sum();
    layout[flexible].1 = cols.saturating_sub(fixed + gaps);
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::client::UserRepository;
    use crate::pipeline::PageState;
    use crate::ui::Theme;
    use rstest::rstest;

    fn loaded(n: i64) -> AppState {
        let mut state = AppState::new(UserRepository::default(), PageState::default(), Theme::default());
        let actions = state.mount();
        let Some(Action::Fetch(call)) = actions.first() else {
            panic!("expected list fetch");
        };
        let users: Vec<serde_json::Value> = (1..=n)
            .map(|id| serde_json::json!({ "id": id, "name": format!("Chelsey Dietrich{id}"), "email": format!("c{id}@annie.ca") }))
            .collect();
        let body = serde_json::to_vec(&users).unwrap();
        state.handle_reply(&call.context(), 200, &body).unwrap();
        state
    }

    #[rstest]
    #[case(60, vec!["ID", "First", "Last"])]
    #[case(80, vec!["ID", "First", "Last", "Email"])]
    #[case(120, vec!["ID", "First", "Last", "Email", "Department"])]
    fn columns_hide_on_narrow_terminals(#[case] cols: usize, #[case] labels: Vec<&str>) {
        let vm = loaded(3).compute_viewmodel(30, cols);
        let actual: Vec<&str> = vm.columns.iter().map(|c| c.label).collect();
        assert_eq!(actual, labels);
        let used: usize = vm.columns.iter().map(|c| c.width).sum::<usize>() + vm.columns.len() - 1;
        assert_eq!(used, cols);
    }

    #[test]
    fn sorted_column_carries_indicator() {
        let mut state = loaded(3);
        state.toggle_sort(SortField::LastName);
        state.toggle_sort(SortField::LastName);
        let vm = state.compute_viewmodel(30, 120);
        let indicators: Vec<Option<&str>> = vm.columns.iter().map(|c| c.sort_indicator).collect();
        assert_eq!(indicators, vec![None, None, Some("▼"), None, None]);
    }

    #[test]
    fn header_reports_visible_and_total_counts() {
        let vm = loaded(23).compute_viewmodel(40, 120);
        assert_eq!(vm.header.summary, "Showing 10 of 23 users");
        assert_eq!(vm.pager.position, "Page 1 / 3");
        assert_eq!(vm.pager.settings, "Per page: 10  Infinite: off");
    }

    #[test]
    fn footer_hints_follow_paging_mode() {
        let mut state = loaded(23);
        let paged = state.compute_viewmodel(40, 120).footer.keybindings;
        assert!(paged.contains("n/p: page"));

        state.toggle_infinite();
        let infinite = state.compute_viewmodel(40, 120).footer.keybindings;
        assert!(infinite.contains("n: more"));
        assert!(!infinite.contains("n/p"));
    }

    #[test]
    fn rows_are_windowed_around_selection() {
        let mut state = loaded(23);
        for _ in 0..8 {
            state.move_selection_down();
        }
        let vm = state.compute_viewmodel(12, 120);
        assert_eq!(vm.body_rows, 5);
        assert_eq!(vm.rows.len(), 5);
        assert_eq!(vm.rows.iter().filter(|r| r.is_selected).count(), 1);
        assert!(vm.rows[4].cells[0].text.starts_with("10"));
    }

    #[test]
    fn loading_and_no_results_empty_states() {
        let mut state = AppState::new(UserRepository::default(), PageState::default(), Theme::default());
        state.mount();
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.empty_state.unwrap().message, "Loading...");

        let mut state = loaded(3);
        state.set_search("nobody");
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No users found.");
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn search_matches_are_highlighted() {
        let mut state = loaded(3);
        state.set_search("diet");
        let vm = state.compute_viewmodel(30, 120);
        assert_eq!(vm.rows[0].cells[2].highlight_ranges, vec![(0, 4)]);
        assert!(vm.rows[0].cells[0].highlight_ranges.is_empty());
    }

    #[test]
    fn form_modal_shows_inline_errors_and_saving() {
        let mut state = loaded(3);
        state.open_edit_form(2).unwrap();
        state.mutations.form_mut().unwrap().draft.email = "bad".to_string();
        state.submit_form().unwrap();
        let form = state.compute_viewmodel(30, 80).form.unwrap();
        assert_eq!(form.title, "Edit Chelsey");
        assert_eq!(form.fields[2].error.as_deref(), Some("Valid email required"));
        assert!(form.fields[2].is_focused);
        assert!(form.status.is_none());

        state.mutations.form_mut().unwrap().draft.email = "ok@annie.ca".to_string();
        state.submit_form().unwrap();
        let form = state.compute_viewmodel(30, 80).form.unwrap();
        assert_eq!(form.status.as_deref(), Some("Saving..."));
    }

    #[test]
    fn confirm_dialog_names_the_user() {
        let mut state = loaded(3);
        state.request_delete(1).unwrap();
        let confirm = state.compute_viewmodel(30, 80).confirm.unwrap();
        assert_eq!(confirm.message, "Delete user Chelsey Dietrich1?");
        assert!(!confirm.is_pending);
    }

    #[test]
    fn banner_takes_a_row() {
        let mut state = loaded(3);
        let without = state.compute_viewmodel(30, 80).body_rows;
        state.error = Some("Failed to delete (500)".to_string());
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.body_rows, without - 1);
        assert_eq!(vm.banner.as_deref(), Some("Failed to delete (500)"));
    }
}
