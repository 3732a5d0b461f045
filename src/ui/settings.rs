// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language, theme mode, and the transfer delay.
//!
//! Every change is applied immediately and persisted by the application to
//! `settings.toml`; there is no separate save step.

use crate::app::config::defaults::TRANSFER_DELAY_PRESETS_MS;
use crate::app::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

/// Context required to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub transfer_delay_ms: u64,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    TransferDelaySelected(u64),
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::DISPLAY);

    let languages = language_section(&ctx);
    let themes = theme_section(&ctx);
    let delays = delay_section(&ctx);

    Column::new()
        .push(title)
        .push(languages)
        .push(themes)
        .push(delays)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .push(Text::new(ctx.i18n.tr("settings-language-label")).size(typography::SUBTITLE))
        .spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-fr".
        let translated_name = ctx.i18n.tr(&format!("language-name-{locale}"));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{translated_name} ({display_name})")
        };

        let mut entry = button(Text::new(button_text).size(typography::BODY))
            .on_press(Message::LanguageSelected(locale.clone()))
            .padding([spacing::XS, spacing::MD]);

        entry = if ctx.i18n.current_locale() == locale {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::subtle)
        };

        column = column.push(entry);
    }

    column.into()
}

fn theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let mut entry = button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
            .on_press(Message::ThemeModeSelected(mode))
            .padding([spacing::XS, spacing::MD]);
        entry = if mode == ctx.theme_mode {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::subtle)
        };
        row = row.push(entry);
    }

    Column::new()
        .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::SUBTITLE))
        .push(row)
        .spacing(spacing::XS)
        .into()
}

fn delay_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for &delay_ms in TRANSFER_DELAY_PRESETS_MS {
        let label = ctx.i18n.tr_with_args(
            "settings-delay-preset",
            &[("millis", &delay_ms.to_string())],
        );
        let mut entry = button(Text::new(label).size(typography::BODY))
            .on_press(Message::TransferDelaySelected(delay_ms))
            .padding([spacing::XS, spacing::MD]);
        entry = if delay_ms == ctx.transfer_delay_ms {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::subtle)
        };
        row = row.push(entry);
    }

    Column::new()
        .push(Text::new(ctx.i18n.tr("settings-delay-label")).size(typography::SUBTITLE))
        .push(row)
        .spacing(spacing::XS)
        .into()
}
