// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::StarSizeChoice;
use crate::ui::rating;

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Initial rating, standing in for a host restoring a stored value.
    pub rating: Option<u32>,
    /// Number of stars in the row, overriding the saved preference.
    pub stars: Option<u32>,
}

/// Top-level messages consumed by `App::update`. The control's pointer
/// messages are forwarded through a single variant to keep one update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Rating(rating::Message),
    AddStar,
    RemoveStar,
    StarSizeSelected(StarSizeChoice),
    ResetRating,
}
