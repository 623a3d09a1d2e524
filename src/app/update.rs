// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::config::{self, MAX_STAR_COUNT, MIN_STAR_COUNT};
use crate::ui::rating::{accessibility, Event, StarSize};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Rating(message) => {
            if let Event::RatingChanged(rating) = app.rating.update(message) {
                app.announcement = accessibility::value_text(rating);
            }
        }
        Message::AddStar => {
            apply_star_count(app, (app.rating.star_count() + 1).min(MAX_STAR_COUNT));
        }
        Message::RemoveStar => {
            apply_star_count(app, app.rating.star_count().saturating_sub(1).max(MIN_STAR_COUNT));
        }
        Message::StarSizeSelected(choice) => {
            app.rating.set_star_size(StarSize::square(choice.side()));
            app.config.star_size = Some(choice.side());
            persist(&app.config);
        }
        Message::ResetRating => {
            app.rating.set_rating(0);
            app.announcement = accessibility::value_text(0);
        }
    }

    Task::none()
}

fn apply_star_count(app: &mut App, star_count: u32) {
    if star_count == app.rating.star_count() {
        return;
    }

    app.rating.set_star_count(star_count);
    app.config.star_count = Some(star_count);
    persist(&app.config);
}

fn persist(config: &config::Config) {
    if let Err(err) = config::save(config) {
        eprintln!("Failed to save settings: {err}");
    }
}
