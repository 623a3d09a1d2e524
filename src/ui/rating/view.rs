// SPDX-License-Identifier: MPL-2.0
//! View rendering for the star row.

use super::{Message, StarButton, State};
use crate::ui::design_tokens::spacing;
use crate::ui::styles::tooltip as styled_tooltip;
use iced::widget::svg::{Handle, Svg};
use iced::widget::{mouse_area, tooltip, Row};
use iced::{mouse, Element, Length};

/// Renders the control's button row.
///
/// Each star is an SVG fixed to the control's star size, wrapped in a
/// pointer area that reports presses, releases, and cancellations, and in a
/// tooltip carrying the star's accessibility label.
pub fn view(state: &State) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XXS);

    for button in state.buttons() {
        row = row.push(star_button(state, button));
    }

    row.into()
}

fn star_button<'a>(state: &'a State, button: &'a StarButton) -> Element<'a, Message> {
    let size = state.star_size();
    let star = Svg::new(star_image(state, button))
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    let area = mouse_area(star)
        .on_press(Message::StarPressed(button.position()))
        .on_release(Message::StarReleased(button.position()))
        .on_exit(Message::PressCanceled)
        .interaction(mouse::Interaction::Pointer);

    styled_tooltip::styled(
        area,
        button.accessibility().label.clone(),
        tooltip::Position::Bottom,
    )
    .into()
}

/// Picks the image for a star: highlighted while pressed (whether or not it
/// is selected), filled when selected, empty otherwise.
fn star_image(state: &State, button: &StarButton) -> Handle {
    let images = state.images();

    if state.pressed() == Some(button.position()) {
        images.highlighted.clone()
    } else if button.is_selected() {
        images.filled.clone()
    } else {
        images.empty.clone()
    }
}
