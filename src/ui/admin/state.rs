// SPDX-License-Identifier: MPL-2.0
//! Admin screen state model: one request collection, partitioned for
//! display into pending and approved subsets.

use crate::domain::request::{Decision, RequestId, RequestStatus, SubscriptionRequest};

pub struct State {
    requests: Vec<SubscriptionRequest>,
    search: String,
}

impl State {
    #[must_use]
    pub fn new(requests: Vec<SubscriptionRequest>) -> Self {
        Self {
            requests,
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

    /// Applies a decision to a request. Returns the report name and the new
    /// status for user feedback, or `None` when the id matches nothing.
    pub fn act(&mut self, id: RequestId, decision: Decision) -> Option<(String, RequestStatus)> {
        let request = self.requests.iter_mut().find(|r| r.id == id)?;
        request.status = decision.applied();
        Some((request.report_name.clone(), request.status))
    }

    /// Search-filtered rows with Pending status.
    #[must_use]
    pub fn pending_view(&self) -> Vec<&SubscriptionRequest> {
        self.partition(RequestStatus::Pending)
    }

    /// Search-filtered rows with Approved status. Denied rows appear in
    /// neither partition.
    #[must_use]
    pub fn approved_view(&self) -> Vec<&SubscriptionRequest> {
        self.partition(RequestStatus::Approved)
    }

    fn partition(&self, status: RequestStatus) -> Vec<&SubscriptionRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == status && r.matches(&self.search))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn state() -> State {
        State::new(Catalog::generate().subscription_requests)
    }

    #[test]
    fn seed_partitions_match_the_generator_split() {
        let state = state();
        assert_eq!(state.pending_view().len(), 4);
        assert_eq!(state.approved_view().len(), 5);
    }

    #[test]
    fn approve_then_deny_hides_the_row_from_both_partitions() {
        let mut state = state();
        let id = state.pending_view()[0].id;

        let (_, status) = state.act(id, Decision::Approve).unwrap();
        assert_eq!(status, RequestStatus::Approved);
        assert!(state.approved_view().iter().any(|r| r.id == id));

        let (_, status) = state.act(id, Decision::Deny).unwrap();
        assert_eq!(status, RequestStatus::Denied);
        assert!(state.pending_view().iter().all(|r| r.id != id));
        assert!(state.approved_view().iter().all(|r| r.id != id));
    }

    #[test]
    fn revoke_reuses_the_deny_transition() {
        let mut state = state();
        let id = state.approved_view()[0].id;
        let (_, status) = state.act(id, Decision::Deny).unwrap();
        assert_eq!(status, RequestStatus::Denied);
        assert!(state.approved_view().iter().all(|r| r.id != id));
    }

    #[test]
    fn reset_returns_a_denied_row_to_pending() {
        let mut state = state();
        let id = state.pending_view()[0].id;
        state.act(id, Decision::Deny).unwrap();
        let (_, status) = state.act(id, Decision::Reset).unwrap();
        assert_eq!(status, RequestStatus::Pending);
        assert!(state.pending_view().iter().any(|r| r.id == id));
    }

    #[test]
    fn act_on_unknown_id_is_a_silent_no_op() {
        let mut state = state();
        assert!(state.act(RequestId(999), Decision::Approve).is_none());
    }

    #[test]
    fn search_filters_both_partitions() {
        let mut state = state();
        state.set_search("alice".to_string());
        for request in state.pending_view().iter().chain(state.approved_view().iter()) {
            assert!(request.matches("alice"));
        }
    }
}
