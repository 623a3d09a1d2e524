// SPDX-License-Identifier: MPL-2.0
//! Window icon loading.
//!
//! The branding SVG is embedded at compile time and rasterized on startup,
//! so packaging never needs to locate assets on disk. Any parse or render
//! failure degrades to a window without an icon.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &[u8] = include_bytes!("../assets/branding/rating_stars.svg");
const TARGET_SIZE: u32 = 128;

/// Rasterize the embedded branding SVG into an RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(SVG_SOURCE, &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        TARGET_SIZE as f32 / size.width(),
        TARGET_SIZE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(TARGET_SIZE, TARGET_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), TARGET_SIZE, TARGET_SIZE).ok()
}
