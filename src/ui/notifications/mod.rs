// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Every simulated portal action (request sent, download started, transfer
//! completed, logout) reports back through a toast rather than a blocking
//! dialog. Notifications appear temporarily in the bottom-right corner.
//!
//! # Components
//!
//! - `notification` - [`Notification`] records with [`Severity`] levels
//! - `manager` - the [`Manager`] queue and lifecycle handling
//! - `toast` - the [`overlay`] rendering visible toasts
//!
//! Toasts linger ~3s for success/info and ~5s for warnings; errors stay
//! until dismissed. At most three toasts are visible at once, the rest queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::overlay;
