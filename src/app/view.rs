// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the shell header, dispatches to the active screen's view, and
//! layers the toast overlay on top.

use super::{App, Message, Screen};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::{admin, dashboard, ops, reports, settings};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    // The badge reflects whichever queue the active screen's panel shows.
    let notice_count = match app.screen {
        Screen::Dashboard => app.dashboard.notice_count(),
        Screen::Ops => app.ops.arrival_count(),
        Screen::Reports | Screen::Admin | Screen::Settings => 0,
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        profile: &app.profile,
        menu_open: app.menu_open,
        active_screen: app.screen,
        notice_count,
        notifications_open: app.show_notifications,
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Dashboard => dashboard::view::view(dashboard::ViewContext {
            i18n: &app.i18n,
            state: &app.dashboard,
            show_notifications: app.show_notifications,
        })
        .map(Message::Dashboard),
        Screen::Reports => reports::view::view(reports::ViewContext {
            i18n: &app.i18n,
            state: &app.reports,
        })
        .map(Message::Reports),
        Screen::Admin => admin::view::view(admin::ViewContext {
            i18n: &app.i18n,
            state: &app.admin,
        })
        .map(Message::Admin),
        Screen::Ops => ops::view::view(ops::ViewContext {
            i18n: &app.i18n,
            state: &app.ops,
            show_notifications: app.show_notifications,
        })
        .map(Message::Ops),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            theme_mode: app.theme_mode,
            transfer_delay_ms: app.config.transfer_delay().as_millis() as u64,
        })
        .map(Message::Settings),
    };

    let base = Column::new().push(navbar_view).push(
        Container::new(screen_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toast_overlay =
        notifications::overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(base)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toast_overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
