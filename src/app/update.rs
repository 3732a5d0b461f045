// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function: it routes each top-level
//! message into the owning component and translates the returned events into
//! app-level side effects (navigation, toasts, config persistence, and the
//! delayed transfer completion).

use super::{config, App, Message, Screen};
use crate::ui::admin::{self, Event as AdminEvent};
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::ops::{self, Event as OpsEvent};
use crate::ui::reports::{self, Event as ReportsEvent};
use crate::ui::settings;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => {
            let event = navbar::update(message, &mut app.menu_open);
            handle_navbar_event(app, event)
        }
        Message::Dashboard(message) => {
            let event = dashboard::update(&mut app.dashboard, message);
            handle_dashboard_event(app, event)
        }
        Message::Reports(message) => {
            let event = reports::update(&mut app.reports, message);
            handle_reports_event(app, event)
        }
        Message::Admin(message) => {
            let event = admin::update(&mut app.admin, message);
            handle_admin_event(app, event)
        }
        Message::Ops(message) => {
            let event = ops::update(&mut app.ops, message);
            handle_ops_event(app, event)
        }
        Message::Settings(message) => handle_settings_message(app, message),
        Message::Notification(message) => {
            app.notifications.update(message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn handle_navbar_event(app: &mut App, event: NavbarEvent) -> Task<Message> {
    match event {
        NavbarEvent::None => {}
        NavbarEvent::Navigate(screen) => {
            app.screen = screen;
        }
        NavbarEvent::ToggleNotifications => {
            app.show_notifications = !app.show_notifications;
        }
        NavbarEvent::Logout => {
            // Simulated: confirm and return to the entry screen.
            app.notifications.push(Notification::info("toast-logged-out"));
            app.screen = Screen::Dashboard;
        }
    }
    Task::none()
}

fn handle_dashboard_event(app: &mut App, event: DashboardEvent) -> Task<Message> {
    match event {
        DashboardEvent::None => {}
        DashboardEvent::RequestSent(group) => {
            app.notifications
                .push(Notification::success("toast-request-sent").with_arg("group", group));
        }
        DashboardEvent::Approved(group) => {
            app.notifications
                .push(Notification::success("toast-approved").with_arg("group", group));
        }
        DashboardEvent::OpenReports(group) => {
            app.reports.open_group(group);
            app.screen = Screen::Reports;
        }
    }
    Task::none()
}

fn handle_reports_event(app: &mut App, event: ReportsEvent) -> Task<Message> {
    match event {
        ReportsEvent::None => {}
        ReportsEvent::DownloadStarted(count) => {
            app.notifications.push(
                Notification::success("toast-download-started")
                    .with_arg("count", count.to_string()),
            );
        }
        ReportsEvent::NothingSelected => {
            app.notifications
                .push(Notification::warning("toast-download-empty"));
        }
        ReportsEvent::RowDownloaded(name) => {
            app.notifications
                .push(Notification::info("toast-row-downloaded").with_arg("name", name));
        }
        ReportsEvent::InvalidDateInput => {
            app.notifications
                .push(Notification::warning("toast-invalid-date"));
        }
    }
    Task::none()
}

fn handle_admin_event(app: &mut App, event: AdminEvent) -> Task<Message> {
    match event {
        AdminEvent::None => {}
        AdminEvent::Decided {
            report_name,
            status,
        } => {
            app.notifications.push(
                Notification::info("toast-request-decided")
                    .with_arg("report", report_name)
                    .with_arg("status", app.i18n.tr(status.i18n_key())),
            );
        }
    }
    Task::none()
}

fn handle_ops_event(app: &mut App, event: OpsEvent) -> Task<Message> {
    match event {
        OpsEvent::None => Task::none(),
        OpsEvent::TransferStarted(id) => {
            // The completion is a plain message routed back into state the
            // app still owns, so a late delivery is a guarded no-op rather
            // than a dangling update.
            let delay = app.config.transfer_delay();
            Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    id
                },
                |id| Message::Ops(ops::Message::TransferElapsed(id)),
            )
        }
        OpsEvent::TransferCompleted(file_name) => {
            app.notifications.push(
                Notification::success("toast-transfer-complete").with_arg("file", file_name),
            );
            Task::none()
        }
        OpsEvent::FileReceived(file_name) => {
            app.notifications
                .push(Notification::info("toast-file-received").with_arg("file", file_name));
            Task::none()
        }
    }
}

fn handle_settings_message(app: &mut App, message: settings::Message) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
        }
        settings::Message::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
        }
        settings::Message::TransferDelaySelected(delay_ms) => {
            app.config.ops.transfer_delay_ms = Some(delay_ms);
        }
    }
    persist_config(app);
    Task::none()
}

/// Saves the config, surfacing a failure as a warning toast instead of
/// interrupting the session.
fn persist_config(app: &mut App) {
    if let Err(err) = config::save_with_override(&app.config, app.config_dir.clone()) {
        eprintln!("Failed to save settings: {err}");
        app.notifications
            .push(Notification::warning("config-save-warning"));
    }
}
