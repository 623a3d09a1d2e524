// SPDX-License-Identifier: MPL-2.0
//! Messages emitted by the star row and events reported to the host.

/// Pointer messages produced by the rendered star row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The pointer went down on the star at this 1-based position.
    StarPressed(u32),
    /// The pointer was released on the star at this 1-based position,
    /// completing a tap.
    StarReleased(u32),
    /// The pointer left a star; any press in flight is canceled.
    PressCanceled,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// A tap changed the rating to the given value.
    RatingChanged(u32),
}
