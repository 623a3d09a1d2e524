// SPDX-License-Identifier: MPL-2.0
//! The star-rating control.
//!
//! A horizontal row of tappable star buttons bound to a single integer
//! rating, following the "state down, messages up" pattern:
//!
//! - [`State`] owns the rating, the star configuration, and the button row.
//!   Setters synchronously rebuild or refresh the buttons before returning,
//!   so derived state is never observable out of date.
//! - [`view`] renders the row and emits a [`Message`] per pointer event.
//! - [`State::update`] consumes messages and reports a rating change to the
//!   host as an [`Event`].
//!
//! Tapping a star sets the rating to that star's position; tapping the star
//! that *is* the current rating resets the rating to zero. Each star carries
//! an [`Accessibility`] record (label, hint, value) for assistive
//! technology.

pub mod accessibility;
mod messages;
mod state;
mod view;

pub use accessibility::Accessibility;
pub use messages::{Event, Message};
pub use state::{StarButton, StarSize, State};
pub use view::view;
