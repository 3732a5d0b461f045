// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border**: Border width scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions
//!
//! Tokens are designed to be consistent; maintain the ratios (e.g. `MD` =
//! `XS * 2`) when modifying them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.88);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.25, 0.6, 0.9);
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.447, 0.808);
    pub const PRIMARY_600: Color = Color::from_rgb(0.0, 0.37, 0.67);
    pub const PRIMARY_700: Color = Color::from_rgb(0.0, 0.29, 0.53);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT_SUBTLE: f32 = 0.12;
    pub const TINT_MEDIUM: f32 = 0.25;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    /// Height of the shell header.
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Diameter of the unread badge on the notification toggle.
    pub const BADGE_SIZE: f32 = 18.0;

    /// Width of the notification/arrival side panel.
    pub const PANEL_WIDTH: f32 = 320.0;

    /// Width of a toast card.
    pub const TOAST_WIDTH: f32 = 360.0;

    /// Width of a date input field.
    pub const DATE_INPUT_WIDTH: f32 = 140.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const DISPLAY: f32 = 26.0;
}

// ============================================================================
// Border Width Scale
// ============================================================================

pub mod border {
    pub const THIN: f32 = 1.0;
    pub const MEDIUM: f32 = 2.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const XS: f32 = 2.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Fully rounded; used for pills and badges.
    pub const PILL: f32 = 999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.15,
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.25,
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 6.0,
    };
}

/// Color of the tag rendered for a status, shared by every screen's table.
#[must_use]
pub fn status_color(key: &str) -> Color {
    match key {
        "status-active" | "status-approved" | "status-processed" | "status-transferred" => {
            palette::SUCCESS_500
        }
        "status-pending" | "status-processing" => palette::WARNING_500,
        "status-failed" | "status-denied" => palette::ERROR_500,
        "status-available" | "status-ready" => palette::INFO_500,
        _ => palette::GRAY_400,
    }
}
