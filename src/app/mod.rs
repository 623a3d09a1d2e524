// SPDX-License-Identifier: MPL-2.0
//! Application root state for the demo shell.
//!
//! The `App` hosts a single rating control and wires the outside world into
//! it: CLI flags provide the startup rating (standing in for a host
//! restoring a stored value), and the persisted configuration provides the
//! star count and size. Star count/size changes made in the demo are written
//! back to the config; the rating itself is never persisted.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_STAR_COUNT, DEFAULT_STAR_SIZE};
use crate::ui::rating::{self, accessibility, StarSize};
use iced::{Element, Task};
use std::fmt;

/// Preset star sizes offered by the demo's picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarSizeChoice {
    Compact,
    Classic,
    Large,
}

impl StarSizeChoice {
    pub const ALL: [Self; 3] = [Self::Compact, Self::Classic, Self::Large];

    /// Side length of the square star this preset stands for.
    #[must_use]
    pub fn side(self) -> f32 {
        match self {
            Self::Compact => 32.0,
            Self::Classic => DEFAULT_STAR_SIZE,
            Self::Large => 56.0,
        }
    }

    /// The preset matching a configured side length, if any.
    #[must_use]
    pub fn from_side(side: f32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.side() == side)
    }
}

impl fmt::Display for StarSizeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "Compact (32 px)"),
            Self::Classic => write!(f, "Classic (44 px)"),
            Self::Large => write!(f, "Large (56 px)"),
        }
    }
}

/// Root application state bridging the rating control, CLI flags, and
/// persisted preferences.
pub struct App {
    rating: rating::State,
    config: Config,
    /// What assistive technology would announce for the current rating.
    announcement: String,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let star_count = flags
            .stars
            .or(config.star_count)
            .unwrap_or(DEFAULT_STAR_COUNT);
        let star_size = config.star_size.unwrap_or(DEFAULT_STAR_SIZE);

        let rating = rating::State::new(star_count, flags.rating.unwrap_or(0))
            .with_star_size(StarSize::square(star_size));
        let announcement = accessibility::value_text(rating.rating());

        (
            Self {
                rating,
                config,
                announcement,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        String::from("Rating Stars")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
