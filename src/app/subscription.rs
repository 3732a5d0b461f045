// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only recurring work is toast auto-dismiss: while any notification is
//! visible or queued, a periodic tick drives the manager's expiry checks.
//! With no notifications there is no subscription at all.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
