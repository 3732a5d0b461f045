// SPDX-License-Identifier: MPL-2.0
//! Reports screen state model.
//!
//! The screen owns the whole report shelf and resolves the externally
//! supplied group name against it; an unknown or absent group degrades to
//! the fallback listing. Selection is a per-row boolean map independent of
//! the current date filter, so hiding a row never drops its selection.

use crate::catalog::ReportShelf;
use crate::domain::report::{DateWindow, Report, ReportId};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Tri-state indication for the header select-all control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// No filtered row is selected (or there are no filtered rows).
    Unchecked,
    /// Some, but not all, filtered rows are selected.
    Indeterminate,
    /// Every filtered row is selected and the filtered set is non-empty.
    Checked,
}

/// Result of applying the date inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// At least one non-empty input failed to parse; the applied window is
    /// left unchanged.
    InvalidInput,
}

pub struct State {
    shelf: ReportShelf,
    /// The group name as requested by the caller (shown in the title even
    /// when it does not resolve).
    active_group: Option<String>,
    /// The shelf key the request resolved to; `None` means the fallback
    /// listing is showing.
    resolved: Option<String>,
    selections: BTreeMap<ReportId, bool>,
    from_input: String,
    to_input: String,
    window: DateWindow,
}

impl State {
    #[must_use]
    pub fn new(shelf: ReportShelf) -> Self {
        let mut state = Self {
            shelf,
            active_group: None,
            resolved: None,
            selections: BTreeMap::new(),
            from_input: String::new(),
            to_input: String::new(),
            window: DateWindow::default(),
        };
        state.reset_for_collection();
        state
    }

    /// Points the screen at a group. When the resolved collection changes,
    /// every selection resets to false and all four date-filter fields (two
    /// inputs, two applied bounds) are cleared; re-opening the same resolved
    /// collection leaves them untouched.
    pub fn open_group(&mut self, group: Option<String>) {
        let resolved = group
            .as_deref()
            .and_then(|name| self.shelf.lookup(name).map(|_| name.to_string()));
        let changed = resolved != self.resolved;
        self.active_group = group;
        if changed {
            self.resolved = resolved;
            self.reset_for_collection();
        }
    }

    /// The group name the caller asked for, if any.
    #[must_use]
    pub fn active_group(&self) -> Option<&str> {
        self.active_group.as_deref()
    }

    /// Whether the fallback listing is showing.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.resolved.is_none()
    }

    /// The resolved report collection. Never fails; it degrades to the
    /// fallback listing.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        match &self.resolved {
            Some(name) => self.shelf.lookup(name).unwrap_or_else(|| self.shelf.fallback()),
            None => self.shelf.fallback(),
        }
    }

    /// The rows admitted by the applied date window, in collection order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Report> {
        self.reports()
            .iter()
            .filter(|r| self.window.admits(r))
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, id: ReportId) -> bool {
        self.selections.get(&id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: ReportId) {
        let entry = self.selections.entry(id).or_insert(false);
        *entry = !*entry;
    }

    /// Sets the selection of exactly the currently filtered rows, leaving
    /// every other row's selection untouched.
    pub fn select_all_filtered(&mut self, checked: bool) {
        let ids: Vec<ReportId> = self.filtered().iter().map(|r| r.id).collect();
        for id in ids {
            self.selections.insert(id, checked);
        }
    }

    /// Selected rows across the whole collection, visible or not. This is
    /// the count the download action reports.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.reports()
            .iter()
            .filter(|r| self.is_selected(r.id))
            .count()
    }

    /// Tri-state indication over the filtered rows only.
    #[must_use]
    pub fn header_state(&self) -> HeaderState {
        let filtered = self.filtered();
        if filtered.is_empty() {
            return HeaderState::Unchecked;
        }
        let selected = filtered.iter().filter(|r| self.is_selected(r.id)).count();
        if selected == 0 {
            HeaderState::Unchecked
        } else if selected == filtered.len() {
            HeaderState::Checked
        } else {
            HeaderState::Indeterminate
        }
    }

    /// Looks up a row's display name (for the per-row download toast).
    #[must_use]
    pub fn report_name(&self, id: ReportId) -> Option<String> {
        self.reports()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.name.clone())
    }

    #[must_use]
    pub fn from_input(&self) -> &str {
        &self.from_input
    }

    #[must_use]
    pub fn to_input(&self) -> &str {
        &self.to_input
    }

    pub fn set_from_input(&mut self, value: String) {
        self.from_input = value;
    }

    pub fn set_to_input(&mut self, value: String) {
        self.to_input = value;
    }

    #[must_use]
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// True when any of the four date-filter fields holds something, which
    /// is when the clear button does anything.
    #[must_use]
    pub fn has_filter_input(&self) -> bool {
        !self.from_input.is_empty() || !self.to_input.is_empty() || !self.window.is_empty()
    }

    /// Applies the date inputs as the active window. Empty inputs clear
    /// their bound; a malformed non-empty input rejects the whole apply.
    pub fn apply_window(&mut self) -> ApplyOutcome {
        let (Ok(from), Ok(to)) = (
            parse_bound(&self.from_input),
            parse_bound(&self.to_input),
        ) else {
            return ApplyOutcome::InvalidInput;
        };
        self.window = DateWindow { from, to };
        ApplyOutcome::Applied
    }

    /// Clears both inputs and both applied bounds.
    pub fn clear_filters(&mut self) {
        self.from_input.clear();
        self.to_input.clear();
        self.window = DateWindow::default();
    }

    fn reset_for_collection(&mut self) {
        let ids: Vec<ReportId> = self.reports().iter().map(|r| r.id).collect();
        self.selections = ids.into_iter().map(|id| (id, false)).collect();
        self.clear_filters();
    }
}

fn parse_bound(input: &str) -> Result<Option<NaiveDate>, ()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(ReportShelf::generate())
    }

    fn apply(state: &mut State, from: &str, to: &str) {
        state.set_from_input(from.to_string());
        state.set_to_input(to.to_string());
        assert_eq!(state.apply_window(), ApplyOutcome::Applied);
    }

    #[test]
    fn starts_on_the_fallback_listing() {
        let state = state();
        assert!(state.is_fallback());
        assert_eq!(state.reports().len(), 20);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn open_group_resolves_known_groups_and_degrades_otherwise() {
        let mut state = state();
        state.open_group(Some("Ops_Reports".to_string()));
        assert!(!state.is_fallback());
        assert_eq!(state.reports().len(), 100);

        state.open_group(Some("No_Such_Group".to_string()));
        assert!(state.is_fallback());
        assert_eq!(state.active_group(), Some("No_Such_Group"));
        assert_eq!(state.reports().len(), 20);
    }

    #[test]
    fn switching_groups_resets_selections_and_all_four_filter_fields() {
        let mut state = state();
        state.open_group(Some("Ops_Reports".to_string()));

        let first = state.reports()[0].id;
        state.toggle(first);
        apply(&mut state, "2024-03-01", "2024-03-10");
        state.set_from_input("2024-03-02".to_string());
        assert!(state.has_filter_input());

        state.open_group(Some("Finance_Reports".to_string()));

        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.from_input(), "");
        assert_eq!(state.to_input(), "");
        assert!(state.window().is_empty());
    }

    #[test]
    fn reopening_the_same_group_keeps_selections() {
        let mut state = state();
        state.open_group(Some("Ops_Reports".to_string()));
        let first = state.reports()[0].id;
        state.toggle(first);

        state.open_group(Some("Ops_Reports".to_string()));
        assert!(state.is_selected(first));

        // An unknown group resolves to the fallback, which is also what an
        // absent group resolves to; moving between those two does not reset
        // either.
        state.open_group(Some("No_Such_Group".to_string()));
        let fallback_first = state.reports()[0].id;
        state.toggle(fallback_first);
        state.open_group(None);
        assert!(state.is_selected(fallback_first));
    }

    #[test]
    fn select_all_touches_exactly_the_filtered_rows() {
        let mut state = state();
        // Fallback dates run 2024-01-01 through 2024-01-20.
        apply(&mut state, "2024-01-01", "2024-01-05");
        assert_eq!(state.filtered().len(), 5);

        state.select_all_filtered(true);
        assert_eq!(state.selected_count(), 5);
        assert_eq!(state.header_state(), HeaderState::Checked);

        // Widening the filter reveals unselected rows: indeterminate.
        state.clear_filters();
        assert_eq!(state.filtered().len(), 20);
        assert_eq!(state.header_state(), HeaderState::Indeterminate);

        state.select_all_filtered(true);
        assert_eq!(state.selected_count(), 20);
        assert_eq!(state.header_state(), HeaderState::Checked);
    }

    #[test]
    fn select_all_off_leaves_unfiltered_selections_alone() {
        let mut state = state();
        state.select_all_filtered(true);
        assert_eq!(state.selected_count(), 20);

        apply(&mut state, "2024-01-01", "2024-01-05");
        state.select_all_filtered(false);

        // The five filtered rows cleared; the other fifteen stayed selected.
        assert_eq!(state.selected_count(), 15);
        assert_eq!(state.header_state(), HeaderState::Unchecked);
    }

    #[test]
    fn selection_survives_filtering_out_of_view() {
        let mut state = state();
        let first = state.reports()[0].id; // dated 2024-01-01
        state.toggle(first);

        apply(&mut state, "2024-01-10", "");
        assert!(state.filtered().iter().all(|r| r.id != first));
        assert!(state.is_selected(first));
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn header_state_is_unchecked_for_an_empty_filtered_set() {
        let mut state = state();
        state.select_all_filtered(true);
        apply(&mut state, "1999-01-01", "1999-12-31");
        assert!(state.filtered().is_empty());
        assert_eq!(state.header_state(), HeaderState::Unchecked);
    }

    #[test]
    fn invalid_input_leaves_the_window_unchanged() {
        let mut state = state();
        apply(&mut state, "2024-01-01", "2024-01-05");
        let before = state.window();

        state.set_to_input("01/20/2024".to_string());
        assert_eq!(state.apply_window(), ApplyOutcome::InvalidInput);
        assert_eq!(state.window(), before);
    }

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut state = state();
        let id = state.reports()[3].id;
        state.toggle(id);
        assert!(state.is_selected(id));
        state.toggle(id);
        assert!(!state.is_selected(id));
    }
}
