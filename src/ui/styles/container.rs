// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface behind the rating control and its demo controls.
///
/// Derived from the active theme's background so the card reads correctly
/// in light and dark mode alike; the slight transparency keeps it from
/// looking pasted on.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let surface = Color {
        a: opacity::SURFACE,
        ..base
    };

    container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: Color {
                a: 0.15,
                ..theme.extended_palette().background.strong.color
            },
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
