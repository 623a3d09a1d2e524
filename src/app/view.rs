// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, StarSizeChoice};
use crate::config::{MAX_STAR_COUNT, MIN_STAR_COUNT};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::rating;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, pick_list, Column, Row, Space, Text};
use iced::{Element, Length};

/// Renders the demo shell: the rating control, the announcement read-out,
/// and the configuration controls below it.
pub fn view(app: &App) -> Element<'_, Message> {
    let heading = Text::new("Tap a star to rate").size(typography::TITLE_MD);

    let stars = rating::view(&app.rating).map(Message::Rating);

    // Mirror of what the host's assistive layer would announce.
    let announcement = Text::new(app.announcement.as_str()).size(typography::BODY_MD);

    let panel = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(stars)
        .push(announcement)
        .push(controls(app));

    container(
        container(panel)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn controls(app: &App) -> Element<'_, Message> {
    let star_count = app.rating.star_count();

    let remove = button(Text::new("−").size(typography::BODY_MD))
        .on_press_maybe((star_count > MIN_STAR_COUNT).then_some(Message::RemoveStar))
        .style(styles::button::primary)
        .padding([spacing::XXS, spacing::XS]);

    let add = button(Text::new("+").size(typography::BODY_MD))
        .on_press_maybe((star_count < MAX_STAR_COUNT).then_some(Message::AddStar))
        .style(styles::button::primary)
        .padding([spacing::XXS, spacing::XS]);

    let count_label = Text::new(format!("{star_count} stars")).size(typography::BODY_MD);

    let size_picker = pick_list(
        &StarSizeChoice::ALL[..],
        StarSizeChoice::from_side(app.rating.star_size().width),
        Message::StarSizeSelected,
    )
    .text_size(typography::BODY_MD);

    let reset = button(Text::new("Reset").size(typography::BODY_MD))
        .on_press(Message::ResetRating)
        .style(styles::button::primary)
        .padding([spacing::XXS, spacing::XS]);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(remove)
        .push(count_label)
        .push(add)
        .push(Space::new().width(Length::Fixed(spacing::LG)))
        .push(size_picker)
        .push(reset)
        .into()
}
