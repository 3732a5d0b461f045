// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::admin;
use crate::ui::dashboard;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::ops;
use crate::ui::reports;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Dashboard(dashboard::Message),
    Reports(reports::Message),
    Admin(admin::Message),
    Ops(ops::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional start screen (`dashboard`, `reports`, `admin`, `ops`,
    /// `settings`); the portal's entry pages are all one binary.
    pub screen: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_PORTAL_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
}
