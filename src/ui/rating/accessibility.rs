// SPDX-License-Identifier: MPL-2.0
//! Assistive-technology strings exposed by each star button.
//!
//! Iced has no accessibility API of its own, so the control models the
//! label/hint/value triple explicitly. The host reads it through
//! [`StarButton::accessibility`](super::StarButton::accessibility); the view
//! additionally surfaces the label as a tooltip.

/// Hint announced on the star whose position equals the current rating.
pub const RESET_HINT: &str = "Tap to reset rating to zero.";

/// Label, hint, and value strings for one star button.
///
/// The label is fixed per position; hint and value are derived from the
/// current rating on every selection refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessibility {
    /// What the star does, e.g. `"Set 3 star rating."`.
    pub label: String,
    /// Present only on the star that would reset the rating.
    pub hint: Option<String>,
    /// The current rating, e.g. `"2 stars set."`.
    pub value: String,
}

impl Accessibility {
    /// Initial record for a freshly built star; hint and value are filled in
    /// by the first selection refresh.
    pub(super) fn for_position(position: u32) -> Self {
        Self {
            label: label_text(position),
            hint: None,
            value: value_text(0),
        }
    }
}

/// Accessibility label for the star at the given 1-based position.
pub fn label_text(position: u32) -> String {
    format!("Set {position} star rating.")
}

/// Accessibility hint for a star: only the star whose position equals the
/// rating gets one, since tapping it again resets the rating. With a rating
/// of zero no star qualifies.
pub fn hint_text(position: u32, rating: u32) -> Option<String> {
    (position == rating).then(|| RESET_HINT.to_string())
}

/// Accessibility value shared by every star in the row.
pub fn value_text(rating: u32) -> String {
    match rating {
        0 => "No rating set.".to_string(),
        1 => "1 star set.".to_string(),
        n => format!("{n} stars set."),
    }
}
