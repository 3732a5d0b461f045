// SPDX-License-Identifier: MPL-2.0
//! Shell header for app-level navigation.
//!
//! This module provides the branding block, the user identity, the hamburger
//! menu that navigates between the portal screens, the notification-panel
//! toggle with its unread badge, and the logout action. It is rendered above
//! every screen.

use crate::app::config::Profile;
use crate::app::i18n::I18n;
use crate::app::Screen;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub menu_open: bool,
    pub active_screen: Screen,
    /// Unread count for the active screen's notification panel.
    pub notice_count: usize,
    pub notifications_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Screen),
    ToggleNotifications,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
    ToggleNotifications,
    Logout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
        Message::ToggleNotifications => {
            *menu_open = false;
            Event::ToggleNotifications
        }
        Message::Logout => {
            *menu_open = false;
            Event::Logout
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the header strip: menu button, brand, identity, actions.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(icons::sized(icons::themed(icons::menu()), sizing::ICON_LG))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::subtle);

    let brand = button(
        Text::new(ctx.i18n.tr("app-brand"))
            .size(typography::TITLE),
    )
    .on_press(Message::Navigate(Screen::Dashboard))
    .padding(spacing::XXS)
    .style(styles::button::link);

    let identity = Column::new()
        .push(Text::new(ctx.profile.name.clone()).size(typography::SUBTITLE))
        .push(Text::new(ctx.profile.email.clone()).size(typography::CAPTION));

    let notification_button = build_notification_toggle(ctx);

    let logout_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(
                icons::tinted(icons::exit(), crate::ui::design_tokens::palette::WHITE),
                sizing::ICON_SM,
            ))
            .push(Text::new(ctx.i18n.tr("navbar-logout")).size(typography::BODY)),
    )
    .on_press(Message::Logout)
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(brand)
        .push(identity)
        .push(Space::new().width(Length::Fill))
        .push(notification_button)
        .push(logout_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar)
        .into()
}

/// Notification toggle with an unread badge; shows a close glyph while the
/// panel is open.
fn build_notification_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let glyph: Svg<'static> = if ctx.notifications_open {
        icons::themed(icons::cross())
    } else {
        icons::themed(icons::bell())
    };

    let mut stack = Row::new()
        .align_y(Vertical::Center)
        .push(icons::sized(glyph, sizing::ICON_LG));

    if ctx.notice_count > 0 {
        let badge = Container::new(
            Text::new(ctx.notice_count.to_string()).size(typography::CAPTION),
        )
        .padding([0.0, spacing::XXS])
        .style(styles::container::badge);
        stack = stack.push(badge);
    }

    let toggle = button(stack)
        .on_press(Message::ToggleNotifications)
        .padding(spacing::XS);

    if ctx.notifications_open {
        toggle.style(styles::button::selected).into()
    } else {
        toggle.style(styles::button::subtle).into()
    }
}

/// Build the dropdown menu listing every screen plus settings.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for (screen, icon) in [
        (Screen::Dashboard, icons::bell()),
        (Screen::Reports, icons::download()),
        (Screen::Admin, icons::check()),
        (Screen::Ops, icons::arrows_swap()),
        (Screen::Settings, icons::cog()),
    ] {
        menu_column = menu_column.push(build_menu_item(ctx, screen, icon));
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(styles::container::panel)
        .into()
}

/// Build a single menu item with icon and label.
fn build_menu_item<'a>(
    ctx: &ViewContext<'a>,
    screen: Screen,
    icon: Svg<'static>,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::themed(icon), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr(screen.i18n_key())).size(typography::BODY));

    let item = button(row)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill);

    if screen == ctx.active_screen {
        item.style(styles::button::selected).into()
    } else {
        item.on_press(Message::Navigate(screen))
            .style(styles::button::subtle)
            .into()
    }
}
