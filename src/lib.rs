// SPDX-License-Identifier: MPL-2.0
//! `rating_stars` is a tappable star-rating control built with the Iced GUI
//! framework.
//!
//! The crate exposes the control itself ([`ui::rating`]), a horizontal row
//! of star buttons tracking an integer rating with per-star accessibility
//! metadata, plus a small demo application that hosts it.

#![doc(html_root_url = "https://docs.rs/rating_stars/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod icon;
pub mod ui;
