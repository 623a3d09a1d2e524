// SPDX-License-Identifier: MPL-2.0
//! Embedded star artwork for the rating control.
//!
//! Every star button can show three visual states (empty, filled, and
//! pressed-highlight). Each state is an SVG file embedded at compile time
//! via `include_bytes!`, so a star can never be missing at runtime. Handles
//! are created once on first access and cached in a `OnceLock`; cloning a
//! handle is cheap.

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Star shown for positions above the current rating.
pub fn empty() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/stars/empty_star.svg");
    HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
}

/// Star shown for positions at or below the current rating.
pub fn filled() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/stars/filled_star.svg");
    HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
}

/// Star shown while the pointer is held down, selected or not.
pub fn highlighted() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/stars/highlighted_star.svg");
    HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
}

/// The full set of star images a button row needs, loaded together so the
/// images live and die with the buttons they decorate.
#[derive(Debug, Clone)]
pub struct StarImages {
    pub empty: Handle,
    pub filled: Handle,
    pub highlighted: Handle,
}

impl StarImages {
    pub fn load() -> Self {
        Self {
            empty: empty(),
            filled: filled(),
            highlighted: highlighted(),
        }
    }
}
