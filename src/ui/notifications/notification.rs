// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity of a toast. Selects the accent color and how long the toast
/// lingers on screen before dismissing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed by hand.
    Error,
}

impl Severity {
    /// The accent color for this severity.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Linger time before auto-dismiss, `None` for manual dismissal only.
    fn linger(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// One piece of user feedback. The message is an i18n key resolved at
/// render time, plus any interpolation arguments.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    /// When the toast dismisses itself; `None` keeps it until the user
    /// closes it.
    expires_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            expires_at: severity.linger().map(|after| Instant::now() + after),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the severity's linger time.
    #[must_use]
    pub fn auto_dismiss(mut self, after: Duration) -> Self {
        self.expires_at = Some(Instant::now() + after);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the toast has outlived its linger time.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Notification::success("toast-request-sent");
        let b = Notification::success("toast-request-sent");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn errors_never_expire() {
        let n = Notification::error("config-save-warning");
        assert!(!n.is_expired());
    }

    #[test]
    fn fresh_toasts_are_not_expired() {
        assert!(!Notification::success("toast-request-sent").is_expired());
        assert!(!Notification::warning("toast-download-empty").is_expired());
    }

    #[test]
    fn auto_dismiss_overrides_the_linger_time() {
        let n = Notification::error("config-save-warning").auto_dismiss(Duration::ZERO);
        assert!(n.is_expired());
    }

    #[test]
    fn args_accumulate_in_order() {
        let n = Notification::info("toast-download-started")
            .with_arg("count", "5")
            .with_arg("group", "Ops_Reports");
        assert_eq!(n.message_args().len(), 2);
        assert_eq!(n.message_args()[0].0, "count");
    }
}
