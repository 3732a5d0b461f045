// SPDX-License-Identifier: MPL-2.0
//! Reports screen: per-group report listings with date filtering and a
//! selection map feeding the simulated batch download.

pub mod state;
pub mod view;

pub use state::{ApplyOutcome, HeaderState, State};
pub use view::ViewContext;

use crate::domain::report::ReportId;

/// Messages emitted by the reports screen.
#[derive(Debug, Clone)]
pub enum Message {
    FromInputChanged(String),
    ToInputChanged(String),
    ApplyFilters,
    ClearFilters,
    ToggleSelection(ReportId),
    /// Header checkbox: select or clear exactly the filtered rows.
    SelectAllFiltered(bool),
    DownloadSelected,
    DownloadRow(ReportId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Batch download started for this many selected reports.
    DownloadStarted(usize),
    /// Download requested with nothing selected.
    NothingSelected,
    /// A single row's simulated PDF download.
    RowDownloaded(String),
    /// The applied date inputs could not be parsed.
    InvalidDateInput,
}

/// Process a reports message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FromInputChanged(value) => {
            state.set_from_input(value);
            Event::None
        }
        Message::ToInputChanged(value) => {
            state.set_to_input(value);
            Event::None
        }
        Message::ApplyFilters => match state.apply_window() {
            ApplyOutcome::Applied => Event::None,
            ApplyOutcome::InvalidInput => Event::InvalidDateInput,
        },
        Message::ClearFilters => {
            state.clear_filters();
            Event::None
        }
        Message::ToggleSelection(id) => {
            state.toggle(id);
            Event::None
        }
        Message::SelectAllFiltered(checked) => {
            state.select_all_filtered(checked);
            Event::None
        }
        Message::DownloadSelected => {
            let count = state.selected_count();
            if count == 0 {
                Event::NothingSelected
            } else {
                // Selections deliberately survive the download.
                Event::DownloadStarted(count)
            }
        }
        Message::DownloadRow(id) => state
            .report_name(id)
            .map_or(Event::None, Event::RowDownloaded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReportShelf;

    fn state() -> State {
        State::new(ReportShelf::generate())
    }

    #[test]
    fn download_with_no_selection_is_blocked() {
        let mut state = state();
        let event = update(&mut state, Message::DownloadSelected);
        assert!(matches!(event, Event::NothingSelected));
    }

    #[test]
    fn download_reports_the_selected_count_and_keeps_selections() {
        let mut state = state();
        let ids: Vec<_> = state.filtered().iter().take(3).map(|r| r.id).collect();
        for id in &ids {
            state.toggle(*id);
        }

        let event = update(&mut state, Message::DownloadSelected);
        assert!(matches!(event, Event::DownloadStarted(3)));
        assert_eq!(state.selected_count(), 3);
    }

    #[test]
    fn invalid_date_input_surfaces_an_event() {
        let mut state = state();
        state.set_from_input("garbage".to_string());
        let event = update(&mut state, Message::ApplyFilters);
        assert!(matches!(event, Event::InvalidDateInput));
    }
}
