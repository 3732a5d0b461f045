// SPDX-License-Identifier: MPL-2.0
//! Ops screen state model: the transfer queue and the inbound arrival
//! queue.

use crate::domain::transfer::{FileArrival, FileId, TransferFile};

pub struct State {
    files: Vec<TransferFile>,
    arrivals: Vec<FileArrival>,
    search: String,
}

impl State {
    #[must_use]
    pub fn new(files: Vec<TransferFile>, arrivals: Vec<FileArrival>) -> Self {
        Self {
            files,
            arrivals,
            search: String::new(),
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
    }

    /// Files admitted by the search term, in queue order. Arrivals are not
    /// searchable.
    #[must_use]
    pub fn filtered_files(&self) -> Vec<&TransferFile> {
        self.files
            .iter()
            .filter(|f| f.matches(&self.search))
            .collect()
    }

    /// The inbound arrival queue, unfiltered.
    #[must_use]
    pub fn arrivals(&self) -> &[FileArrival] {
        &self.arrivals
    }

    /// Unread count for the navbar badge.
    #[must_use]
    pub fn arrival_count(&self) -> usize {
        self.arrivals.len()
    }

    /// Starts a transfer. Returns `false` for an unknown id or a row that
    /// is not Ready, leaving everything untouched.
    pub fn begin_transfer(&mut self, id: &FileId) -> bool {
        self.files
            .iter_mut()
            .find(|f| &f.id == id)
            .is_some_and(TransferFile::begin)
    }

    /// Completes a transfer. Only a Processing row moves; anything else is
    /// a safe no-op. Returns the file name for user feedback.
    pub fn complete_transfer(&mut self, id: &FileId) -> Option<String> {
        let file = self.files.iter_mut().find(|f| &f.id == id)?;
        file.complete().then(|| file.file_name.clone())
    }

    /// Consumes an arrival and prepends it to the queue as a Ready file.
    /// Irreversible; there is no corresponding undo.
    pub fn intake(&mut self, id: &FileId) -> Option<String> {
        let index = self.arrivals.iter().position(|a| &a.id == id)?;
        let file = self.arrivals.remove(index).into_file();
        let name = file.file_name.clone();
        self.files.insert(0, file);
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::transfer::TransferStatus;

    fn state() -> State {
        let catalog = Catalog::generate();
        State::new(catalog.transfer_files, catalog.file_arrivals)
    }

    #[test]
    fn transfer_walks_the_full_lifecycle() {
        let mut state = state();
        let id = state.filtered_files()[0].id.clone();

        assert!(state.begin_transfer(&id));
        assert_eq!(
            state.filtered_files()[0].status,
            TransferStatus::Processing
        );

        // Pressing transfer again while processing does nothing.
        assert!(!state.begin_transfer(&id));

        assert!(state.complete_transfer(&id).is_some());
        assert_eq!(
            state.filtered_files()[0].status,
            TransferStatus::Transferred
        );

        // Transferred is terminal for both operations.
        assert!(!state.begin_transfer(&id));
        assert!(state.complete_transfer(&id).is_none());
    }

    #[test]
    fn completion_without_a_start_is_a_safe_no_op() {
        let mut state = state();
        let id = state.filtered_files()[0].id.clone();
        assert!(state.complete_transfer(&id).is_none());
        assert_eq!(state.filtered_files()[0].status, TransferStatus::Ready);
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut state = state();
        let bogus = FileId("FILE-0000".to_string());
        assert!(!state.begin_transfer(&bogus));
        assert!(state.complete_transfer(&bogus).is_none());
        assert!(state.intake(&bogus).is_none());
    }

    #[test]
    fn intake_prepends_a_ready_file_and_consumes_the_arrival() {
        let mut state = state();
        let before_files = state.filtered_files().len();
        let arrival = state.arrivals()[0].clone();

        let name = state.intake(&arrival.id).expect("arrival should move");
        assert_eq!(name, arrival.file_name);
        assert_eq!(state.arrival_count(), 2);

        let files = state.filtered_files();
        assert_eq!(files.len(), before_files + 1);
        assert_eq!(files[0].id, arrival.id);
        assert_eq!(files[0].status, TransferStatus::Ready);
    }

    #[test]
    fn an_intaken_file_can_be_transferred() {
        let mut state = state();
        let id = state.arrivals()[0].id.clone();
        state.intake(&id).unwrap();

        assert!(state.begin_transfer(&id));
        assert!(state.complete_transfer(&id).is_some());
        assert!(state.filtered_files()[0].is_transferred());
    }

    #[test]
    fn search_matches_id_or_name_and_ignores_arrivals() {
        let mut state = state();
        state.set_search("file-1001".to_string());
        assert_eq!(state.filtered_files().len(), 1);

        state.set_search("quarterly".to_string());
        assert!(!state.filtered_files().is_empty());
        assert!(state
            .filtered_files()
            .iter()
            .all(|f| f.matches("quarterly")));

        // Arrivals stay visible regardless of the search term.
        assert_eq!(state.arrival_count(), 3);
    }
}
