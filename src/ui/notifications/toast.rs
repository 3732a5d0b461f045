// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Toasts appear as small cards in the bottom-right corner, carrying a
//! severity-colored border, an icon, the resolved message, and a dismiss
//! button.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::app::i18n::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the overlay holding every visible toast, stacked above the
/// bottom-right corner of the active screen. With nothing visible the
/// overlay collapses to an empty, zero-sized element.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = manager.visible().map(|n| card(n, i18n)).collect();

    if cards.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    Container::new(
        Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

/// Renders one toast card: [icon] [message] [dismiss].
fn card<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let message = Text::new(resolve_message(notification, i18n))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss = button(icons::sized(icons::themed(icons::cross()), sizing::ICON_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::subtle);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(icons::sized(
                severity_icon(notification.severity(), accent),
                sizing::ICON_MD,
            ))
            .padding(spacing::XXS),
        )
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

/// Resolves the notification's i18n key, interpolating any arguments.
fn resolve_message(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    if args.is_empty() {
        i18n.tr(notification.message_key())
    } else {
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

fn severity_icon(severity: Severity, accent: Color) -> Svg<'static> {
    let glyph = match severity {
        Severity::Success => icons::check_circle(),
        Severity::Info => icons::info_circle(),
        Severity::Warning => icons::alert_triangle(),
        Severity::Error => icons::cross_circle(),
    };
    icons::tinted(glyph, accent)
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let tint = theme.extended_palette();
    container::Style {
        background: Some(
            Color {
                a: opacity::SURFACE,
                ..tint.background.base.color
            }
            .into(),
        ),
        border: iced::Border {
            color: accent,
            width: border::MEDIUM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_card_renders_for_every_severity() {
        let i18n = I18n::default();
        for severity in [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            let notification = Notification::new(severity, "toast-request-sent");
            let _element = card(&notification, &i18n);
        }
    }

    #[test]
    fn overlay_renders_empty_and_populated() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = overlay(&manager, &i18n);
        drop(_empty);

        manager.push(Notification::success("toast-request-sent"));
        let _populated = overlay(&manager, &i18n);
    }

    #[test]
    fn arguments_are_interpolated_into_the_message() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let notification =
            Notification::success("toast-request-sent").with_arg("group", "Finance_Reports_G2");
        assert!(resolve_message(&notification, &i18n).contains("Finance_Reports_G2"));
    }
}
