// SPDX-License-Identifier: MPL-2.0
//! Placeholder row shown when a table or panel has nothing to display.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Container, Text};
use iced::{alignment, Element, Length};

/// Renders a centered muted message filling the row.
pub fn view<'a, Message: 'a>(message: String) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::BODY)
            .style(|_theme: &iced::Theme| text::Style {
                color: Some(palette::GRAY_400),
            }),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .into()
}
