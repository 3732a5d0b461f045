// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(base: Color, hover: Color, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: palette::WHITE,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: palette::WHITE,
            border: Border {
                color: hover,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        },
    }
}

/// Primary action (brand blue): send request, search files, transfer.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_500, palette::PRIMARY_400, status)
}

/// Positive action (green): approve.
pub fn success(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::SUCCESS_500, palette::SUCCESS_500, status)
}

/// Destructive action (red): deny.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::ERROR_500, palette::ERROR_500, status)
}

/// Style for a selected/active toggle, e.g. the current language or an open
/// notification panel.
pub fn selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Tab-switcher button; the active tab carries the brand underline color.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let tint = theme.extended_palette();
        let background = if active {
            Some(Background::Color(palette::PRIMARY_500))
        } else if status == button::Status::Hovered {
            Some(Background::Color(tint.background.strong.color))
        } else {
            Some(Background::Color(tint.background.weak.color))
        };
        button::Style {
            background,
            text_color: if active {
                palette::WHITE
            } else {
                tint.background.base.text
            },
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

/// Borderless button rendered like a hyperlink (group names, row downloads).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            button::Status::Disabled => palette::GRAY_400,
            button::Status::Active => palette::PRIMARY_500,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Transparent icon button with a subtle hover tint (header actions,
/// dismiss crosses, menu rows).
pub fn subtle(theme: &Theme, status: button::Status) -> button::Style {
    let tint = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::TINT_MEDIUM,
            ..tint.background.strong.color
        })),
        button::Status::Pressed => Some(Background::Color(tint.background.strong.color)),
        _ => None,
    };
    button::Style {
        background,
        text_color: tint.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Grayed-out, non-interactive style for buttons without an `on_press`.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
