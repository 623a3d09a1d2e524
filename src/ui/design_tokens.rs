// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the styles and the demo shell.
//!
//! A deliberately small token set: base colors, opacity levels, an 8px
//! spacing grid, border radii, shadows, and the font-size scale. Keep the
//! ratios (e.g. `spacing::MD` = `spacing::XS` * 2) when extending the
//! scales.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Accent used by the demo's action buttons.
    pub const PRIMARY_400: Color = Color::from_rgb(0.35, 0.55, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.25, 0.45, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.18, 0.35, 0.75);
}

pub mod opacity {
    /// Surface background - semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod typography {
    /// Medium title - app name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Primary content text
    pub const BODY_MD: f32 = 14.0;

    /// Secondary, supporting text (tooltips, captions)
    pub const BODY_SM: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 8.0,
    };
}
