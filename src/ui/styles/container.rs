// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles: cards, panels, tags, and table chrome.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card hosting a table or a form.
pub fn card(theme: &Theme) -> container::Style {
    let tint = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(tint.background.base.color)),
        border: Border {
            color: tint.background.strong.color,
            width: border::THIN,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Side panel for notifications/arrivals.
pub fn panel(theme: &Theme) -> container::Style {
    let tint = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..tint.background.weak.color
        })),
        border: Border {
            color: tint.background.strong.color,
            width: border::THIN,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Shell header strip.
pub fn navbar(theme: &Theme) -> container::Style {
    let tint = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(tint.background.weak.color)),
        border: Border {
            color: tint.background.strong.color,
            width: border::THIN,
            radius: 0.0.into(),
        },
        shadow: shadow::NONE,
        ..container::Style::default()
    }
}

/// Unread-count badge on the notification toggle.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..container::Style::default()
    }
}

/// Colored pill behind a status label.
pub fn status_tag(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT_SUBTLE,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            color,
            width: border::THIN,
            radius: radius::PILL.into(),
        },
        shadow: shadow::NONE,
        ..container::Style::default()
    }
}

/// Neutral pill used for destination folders.
pub fn destination_tag(theme: &Theme) -> container::Style {
    let tint = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(tint.background.strong.color)),
        text_color: Some(tint.background.base.text),
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..container::Style::default()
    }
}

/// Table header strip.
pub fn table_header(theme: &Theme) -> container::Style {
    let tint = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(tint.background.strong.color)),
        border: Border {
            radius: radius::XS.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..container::Style::default()
    }
}

/// Table body row; odd rows carry a faint tint so long tables stay readable.
pub fn table_row(striped: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let tint = theme.extended_palette();
        container::Style {
            background: striped.then(|| {
                Background::Color(Color {
                    a: opacity::TINT_SUBTLE,
                    ..tint.background.strong.color
                })
            }),
            ..container::Style::default()
        }
    }
}
