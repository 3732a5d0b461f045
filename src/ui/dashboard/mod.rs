// SPDX-License-Identifier: MPL-2.0
//! Subscriber dashboard: browse groups, request subscriptions, follow
//! notices.
//!
//! The dashboard owns three group collections (subscribed, unsubscribed,
//! pending) plus the notice list. Exactly one collection is visible at a
//! time, selected by the tab switcher; the search term applies to all of
//! them independently.

pub mod state;
pub mod view;

pub use state::{State, Tab};
pub use view::ViewContext;

use crate::domain::group::GroupId;

/// Messages emitted by the dashboard screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    TabSelected(Tab),
    RequestSubscription(GroupId),
    /// Test-only affordance: approve a pending request from this screen,
    /// standing in for the admin.
    ApprovePending(GroupId),
    /// Open the reports screen for a subscribed group.
    ViewReports(String),
    /// Open the reports screen from a notice (no group, fallback listing).
    NoticeOpened,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    RequestSent(String),
    Approved(String),
    OpenReports(Option<String>),
}

/// Process a dashboard message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(term) => {
            state.set_search(term);
            Event::None
        }
        Message::TabSelected(tab) => {
            state.select_tab(tab);
            Event::None
        }
        Message::RequestSubscription(id) => state
            .request_subscription(id)
            .map_or(Event::None, Event::RequestSent),
        Message::ApprovePending(id) => {
            let today = chrono::Local::now().date_naive();
            state.approve(id, today).map_or(Event::None, Event::Approved)
        }
        Message::ViewReports(group) => Event::OpenReports(Some(group)),
        Message::NoticeOpened => Event::OpenReports(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn state() -> State {
        let catalog = Catalog::generate();
        State::new(
            catalog.subscribed_groups,
            catalog.unsubscribed_groups,
            catalog.group_notices,
        )
    }

    #[test]
    fn request_emits_the_group_name() {
        let mut state = state();
        let id = state.filtered_unsubscribed()[0].id;
        let event = update(&mut state, Message::RequestSubscription(id));
        assert!(matches!(event, Event::RequestSent(_)));
    }

    #[test]
    fn request_for_unknown_id_is_silent() {
        let mut state = state();
        let event = update(&mut state, Message::RequestSubscription(GroupId(9999)));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navigation_messages_map_to_open_reports() {
        let mut state = state();
        let event = update(
            &mut state,
            Message::ViewReports("Ops_Reports".to_string()),
        );
        assert!(matches!(event, Event::OpenReports(Some(group)) if group == "Ops_Reports"));

        let event = update(&mut state, Message::NoticeOpened);
        assert!(matches!(event, Event::OpenReports(None)));
    }
}
