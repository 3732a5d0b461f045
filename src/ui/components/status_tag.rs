// SPDX-License-Identifier: MPL-2.0
//! Colored status pill rendered inside table rows.

use crate::ui::design_tokens::{spacing, status_color, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::Element;

/// Renders a status tag. `key` is the status i18n key; it selects both the
/// label and the tag color so every screen renders statuses the same way.
pub fn view<'a, Message: 'a>(label: String, key: &str) -> Element<'a, Message> {
    let color = status_color(key);
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::status_tag(color))
        .into()
}
