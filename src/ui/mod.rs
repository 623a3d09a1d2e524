// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`rating`] - The star-rating control (state model, messages, view,
//!   accessibility metadata)
//! - [`stars`] - Embedded star artwork shared by the control
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod rating;
pub mod stars;
pub mod styles;
