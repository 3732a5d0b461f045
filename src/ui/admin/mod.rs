// SPDX-License-Identifier: MPL-2.0
//! Admin screen: review subscription requests and manage approvals.

pub mod state;
pub mod view;

pub use state::State;
pub use view::ViewContext;

use crate::domain::request::{Decision, RequestId, RequestStatus};

/// Messages emitted by the admin screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    Decide(RequestId, Decision),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Decided {
        report_name: String,
        status: RequestStatus,
    },
}

/// Process an admin message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(term) => {
            state.set_search(term);
            Event::None
        }
        Message::Decide(id, decision) => match state.act(id, decision) {
            Some((report_name, status)) => Event::Decided {
                report_name,
                status,
            },
            None => Event::None,
        },
    }
}
