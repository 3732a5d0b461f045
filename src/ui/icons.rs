// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single-color SVG glyphs embedded at compile time via
//! `include_bytes!`; handles are cached with `OnceLock` so repeated views
//! reuse the same handle. Rendering goes through Iced's `svg` support, which
//! lets a style tint the glyph to the theme's text color.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `arrows_swap`, not `transfer_file`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(bell, "bell.svg", "Notification bell.");
define_icon!(cross, "cross.svg", "Diagonal cross (close/dismiss).");
define_icon!(exit, "exit.svg", "Door with outgoing arrow (logout).");
define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(send, "send.svg", "Paper plane.");
define_icon!(check, "check.svg", "Single check mark.");
define_icon!(rotate_ccw, "rotate_ccw.svg", "Counter-clockwise arrow (revoke).");
define_icon!(download, "download.svg", "Tray with down arrow.");
define_icon!(cross_circle, "cross_circle.svg", "Cross inside a circle (clear).");
define_icon!(arrows_swap, "arrows_swap.svg", "Opposing horizontal arrows.");
define_icon!(square_check, "square_check.svg", "Check mark breaking out of a square.");
define_icon!(plus, "plus.svg", "Plus sign.");
define_icon!(menu, "menu.svg", "Hamburger menu.");
define_icon!(cog, "cog.svg", "Settings cog.");
define_icon!(square, "square.svg", "Empty square (unchecked).");
define_icon!(square_minus, "square_minus.svg", "Square with minus (indeterminate).");
define_icon!(info_circle, "info_circle.svg", "Information mark in a circle.");
define_icon!(alert_triangle, "alert_triangle.svg", "Warning triangle.");
define_icon!(check_circle, "check_circle.svg", "Check mark in a circle.");

/// Constrains an icon to a square of the given size.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color regardless of theme.
#[must_use]
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Tints an icon with the theme's base text color.
#[must_use]
pub fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_construct_without_panicking() {
        let _ = sized(bell(), 20.0);
        let _ = tinted(cross(), Color::WHITE);
        let _ = themed(arrows_swap());
    }
}
