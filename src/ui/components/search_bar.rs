// SPDX-License-Identifier: MPL-2.0
//! Search input with a leading magnifier icon.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use iced::widget::{text_input, Container, Row};
use iced::{alignment, Element, Length};

/// Renders the shared search bar. The caller provides the resolved
/// placeholder text and the message constructor for input changes.
pub fn view<'a, Message>(
    placeholder: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let input = text_input(&placeholder, value)
        .on_input(on_input)
        .padding(spacing::XS)
        .width(Length::Fill);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::themed(icons::search()), sizing::ICON_MD))
        .push(input);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .into()
}
