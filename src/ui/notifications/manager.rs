// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` caps how many toasts are on screen at once; anything past
//! the cap waits in an overflow queue and surfaces as slots free up, either
//! through a manual dismiss or an expiry tick.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking expiry.
    Tick,
}

/// Holds the visible toasts (newest first) and the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    overflow: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification immediately when a slot is free, otherwise
    /// parks it until one opens up.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.overflow.push_back(notification);
        }
    }

    /// Removes a notification wherever it currently lives. Returns whether
    /// anything was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(at) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(at);
            self.backfill();
            true
        } else if let Some(at) = self.overflow.iter().position(|n| n.id() == id) {
            self.overflow.remove(at);
            true
        } else {
            false
        }
    }

    /// Drops every expired toast and backfills from the overflow queue.
    /// Called periodically while any toast is visible.
    pub fn tick(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired());
        if self.visible.len() < before {
            self.backfill();
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Whether any toast is visible or queued; drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.overflow.is_empty()
    }

    /// The currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    fn backfill(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.overflow.pop_front() {
                Some(next) => self.visible.push_back(next),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_shows_up_to_the_visible_limit() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE + 2 {
            manager.push(Notification::success("toast-request-sent"));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_promotes_from_the_overflow_queue() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::success("toast-request-sent"));
        }
        let parked = Notification::info("toast-download-started");
        let parked_id = parked.id();
        manager.push(parked);

        let first = manager.visible().next().unwrap().id();
        assert!(manager.dismiss(first));
        assert!(manager.visible().any(|n| n.id() == parked_id));
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        manager.push(Notification::success("toast-request-sent"));
        let bogus = Notification::success("toast-request-sent").id();
        assert!(!manager.dismiss(bogus));
        assert_eq!(manager.visible().count(), 1);
    }

    #[test]
    fn tick_removes_expired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("toast-request-sent").auto_dismiss(Duration::ZERO));
        manager.push(Notification::error("config-save-warning"));

        manager.update(Message::Tick);

        // The error stays until manually dismissed.
        assert_eq!(manager.visible().count(), 1);
        assert_eq!(
            manager.visible().next().unwrap().severity(),
            super::super::Severity::Error
        );
    }

    #[test]
    fn tick_backfills_from_the_overflow_queue() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::success("toast-request-sent").auto_dismiss(Duration::ZERO));
        }
        manager.push(Notification::success("toast-approved"));

        manager.tick();
        assert_eq!(manager.visible().count(), 1);
        assert!(!manager.visible().next().unwrap().is_expired());
    }
}
