// SPDX-License-Identifier: MPL-2.0
//! Ops screen: move incoming files into their destination folders.
//!
//! Starting a transfer flips the row to Processing immediately; the parent
//! application schedules the delayed completion and routes it back here as
//! [`Message::TransferElapsed`]. Because the completion is just a message
//! into state the app still owns, a late or duplicate completion lands in a
//! guard and becomes a no-op instead of a dangling update.

pub mod state;
pub mod view;

pub use state::State;
pub use view::ViewContext;

use crate::domain::transfer::FileId;

/// Messages emitted by the ops screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    /// Operator pressed the transfer button on a row.
    Transfer(FileId),
    /// The scheduled completion delay elapsed for a row.
    TransferElapsed(FileId),
    /// Operator pulled an inbound arrival into the queue.
    GetFile(FileId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A transfer started; the app schedules its completion.
    TransferStarted(FileId),
    /// A transfer reached its destination folder.
    TransferCompleted(String),
    /// An arrival was added to the queue as ready to transfer.
    FileReceived(String),
}

/// Process an ops message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(term) => {
            state.set_search(term);
            Event::None
        }
        Message::Transfer(id) => {
            if state.begin_transfer(&id) {
                Event::TransferStarted(id)
            } else {
                Event::None
            }
        }
        Message::TransferElapsed(id) => match state.complete_transfer(&id) {
            Some(file_name) => Event::TransferCompleted(file_name),
            None => Event::None,
        },
        Message::GetFile(id) => match state.intake(&id) {
            Some(file_name) => Event::FileReceived(file_name),
            None => Event::None,
        },
    }
}
