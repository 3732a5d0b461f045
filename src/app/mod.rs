// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portal screens.
//!
//! The `App` struct wires together the screens (dashboard, reports, admin,
//! ops, settings), localization, and user feedback, and translates component
//! events into side effects like config persistence or the delayed transfer
//! completion. The seed catalog is generated exactly once here, and each
//! collection is moved into the screen that owns it; screens never share
//! entities by reference.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::ui::admin;
use crate::ui::dashboard;
use crate::ui::notifications;
use crate::ui::ops;
use crate::ui::reports;
use crate::ui::theming::ThemeMode;
use i18n::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the screens, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    dashboard: dashboard::State,
    reports: reports::State,
    admin: admin::State,
    ops: ops::State,
    /// The shell's notification-panel toggle, handed down to whichever
    /// active screen renders a panel.
    show_notifications: bool,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    theme_mode: ThemeMode,
    /// Loaded configuration; mutated and re-saved by the settings screen.
    config: config::Config,
    /// Header identity resolved from the config.
    profile: config::Profile,
    /// Config directory override from the CLI, threaded into every save.
    config_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("show_notifications", &self.show_notifications)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure, but flags are consumed exactly
    // once; the RefCell<Option<_>> bridges the two.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let catalog = Catalog::generate();
        let config = config::Config::default();
        let profile = config.profile();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            dashboard: dashboard::State::new(
                catalog.subscribed_groups,
                catalog.unsubscribed_groups,
                catalog.group_notices,
            ),
            reports: reports::State::new(catalog.report_shelf),
            admin: admin::State::new(catalog.subscription_requests),
            ops: ops::State::new(catalog.transfer_files, catalog.file_arrivals),
            show_notifications: false,
            menu_open: false,
            theme_mode: ThemeMode::System,
            config,
            profile,
            config_dir: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher: loads the config, resolves the locale, and picks the start
    /// screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.profile = config.profile();
        app.config = config;
        app.config_dir = config_dir;

        if let Some(screen) = flags.screen.as_deref().and_then(|s| s.parse().ok()) {
            app.screen = screen;
        }

        // Surface config loading issues without blocking startup.
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.i18n_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::Decision;
    use crate::domain::transfer::FileId;
    use crate::ui::navbar;
    use tempfile::tempdir;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn new_starts_on_the_dashboard() {
        let app = app();
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(!app.show_notifications);
    }

    #[test]
    fn start_screen_flag_is_honored() {
        let flags = Flags {
            screen: Some("ops".to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        assert_eq!(app.screen, Screen::Ops);
    }

    #[test]
    fn unknown_start_screen_falls_back_to_the_dashboard() {
        let flags = Flags {
            screen: Some("lobby".to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn title_names_the_active_screen() {
        let mut app = app();
        app.i18n.set_locale("en-US".parse().unwrap());
        app.screen = Screen::Admin;
        let title = app.title();
        assert!(title.contains(&app.i18n.tr("screen-admin")));
        assert!(title.contains(&app.i18n.tr("window-title")));
    }

    #[test]
    fn navbar_navigation_switches_screens() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Reports)));
        assert_eq!(app.screen, Screen::Reports);
        assert!(!app.menu_open);
    }

    #[test]
    fn logout_returns_home_and_confirms() {
        let mut app = app();
        app.screen = Screen::Ops;
        let _ = app.update(Message::Navbar(navbar::Message::Logout));
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn notification_toggle_flips_the_shared_boolean() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleNotifications));
        assert!(app.show_notifications);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleNotifications));
        assert!(!app.show_notifications);
    }

    #[test]
    fn view_reports_navigates_with_the_group_applied() {
        let mut app = app();
        let _ = app.update(Message::Dashboard(dashboard::Message::ViewReports(
            "Ops_Reports".to_string(),
        )));
        assert_eq!(app.screen, Screen::Reports);
        assert_eq!(app.reports.active_group(), Some("Ops_Reports"));
        assert!(!app.reports.is_fallback());
    }

    #[test]
    fn notice_click_navigates_to_the_fallback_listing() {
        let mut app = app();
        let _ = app.update(Message::Dashboard(dashboard::Message::NoticeOpened));
        assert_eq!(app.screen, Screen::Reports);
        assert!(app.reports.is_fallback());
    }

    #[test]
    fn subscription_request_raises_a_toast() {
        let mut app = app();
        let id = app.dashboard.filtered_unsubscribed()[0].id;
        let _ = app.update(Message::Dashboard(dashboard::Message::RequestSubscription(
            id,
        )));
        assert!(app.notifications.has_notifications());
        assert_eq!(app.dashboard.filtered_pending().len(), 1);
    }

    #[test]
    fn admin_decisions_flow_through_the_app() {
        let mut app = app();
        let id = app.admin.pending_view()[0].id;
        let _ = app.update(Message::Admin(crate::ui::admin::Message::Decide(
            id,
            Decision::Approve,
        )));
        assert!(app.admin.approved_view().iter().any(|r| r.id == id));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn transfer_completion_round_trips_through_messages() {
        let mut app = app();
        let id = app.ops.filtered_files()[0].id.clone();

        let _ = app.update(Message::Ops(ops::Message::Transfer(id.clone())));
        let _ = app.update(Message::Ops(ops::Message::TransferElapsed(id.clone())));
        assert!(app.ops.filtered_files()[0].is_transferred());

        // A stale completion for a row that never started is a safe no-op.
        let other = FileId("FILE-1002".to_string());
        let _ = app.update(Message::Ops(ops::Message::TransferElapsed(other.clone())));
        assert!(!app
            .ops
            .filtered_files()
            .iter()
            .find(|f| f.id == other)
            .unwrap()
            .is_transferred());
    }

    #[test]
    fn empty_download_raises_a_warning_toast() {
        let mut app = app();
        let _ = app.update(Message::Reports(reports::Message::DownloadSelected));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn settings_changes_persist_to_the_config_dir() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);

        let _ = app.update(Message::Settings(
            crate::ui::settings::Message::TransferDelaySelected(5000),
        ));
        assert_eq!(app.config.ops.transfer_delay_ms, Some(5000));

        let (reloaded, warning) =
            config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(reloaded.ops.transfer_delay_ms, Some(5000));
    }

    #[test]
    fn language_selection_switches_the_locale() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);
        let _ = app.update(Message::Settings(
            crate::ui::settings::Message::LanguageSelected("fr".parse().unwrap()),
        ));
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
        assert_eq!(app.config.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn theme_selection_updates_the_resolved_theme() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);
        let _ = app.update(Message::Settings(
            crate::ui::settings::Message::ThemeModeSelected(ThemeMode::Light),
        ));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);
    }
}
