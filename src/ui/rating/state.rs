// SPDX-License-Identifier: MPL-2.0
//! State management for the star-rating control.

use super::accessibility::{self, Accessibility};
use super::{Event, Message};
use crate::config::{DEFAULT_STAR_COUNT, DEFAULT_STAR_SIZE};
use crate::ui::stars::StarImages;

/// Fixed per-star dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSize {
    pub width: f32,
    pub height: f32,
}

impl StarSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A square star, the common case.
    #[must_use]
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Default for StarSize {
    fn default() -> Self {
        Self::square(DEFAULT_STAR_SIZE)
    }
}

/// One tappable star, identified by its 1-based position in the row.
///
/// Buttons are owned exclusively by [`State`] and rebuilt whenever the star
/// count or size changes; a rating change only refreshes their derived
/// fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StarButton {
    position: u32,
    selected: bool,
    accessibility: Accessibility,
}

impl StarButton {
    fn new(position: u32) -> Self {
        Self {
            position,
            selected: false,
            accessibility: Accessibility::for_position(position),
        }
    }

    /// 1-based position in the row.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Whether this star renders filled.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Assistive-technology strings for this star.
    #[must_use]
    pub fn accessibility(&self) -> &Accessibility {
        &self.accessibility
    }
}

/// State for the star-rating control.
///
/// `rating` is intended to stay within `0..=star_count` (`0` meaning unset),
/// but an out-of-range value set by the host is kept as-is: every visible
/// star simply renders selected. Shrinking the star count never clamps the
/// rating.
#[derive(Debug, Clone)]
pub struct State {
    rating: u32,
    star_count: u32,
    star_size: StarSize,
    buttons: Vec<StarButton>,
    images: StarImages,
    /// Star currently held down by the pointer, if any.
    pressed: Option<u32>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_STAR_COUNT, 0)
    }
}

impl State {
    /// Creates a control with the given number of stars and initial rating.
    #[must_use]
    pub fn new(star_count: u32, rating: u32) -> Self {
        let mut state = Self {
            rating,
            star_count,
            star_size: StarSize::default(),
            buttons: Vec::new(),
            images: StarImages::load(),
            pressed: None,
        };
        state.rebuild_buttons();
        state
    }

    /// Builder-style star size override, for construction sites.
    #[must_use]
    pub fn with_star_size(mut self, star_size: StarSize) -> Self {
        self.set_star_size(star_size);
        self
    }

    #[must_use]
    pub fn rating(&self) -> u32 {
        self.rating
    }

    #[must_use]
    pub fn star_count(&self) -> u32 {
        self.star_count
    }

    #[must_use]
    pub fn star_size(&self) -> StarSize {
        self.star_size
    }

    /// The owned button row, ordered by position.
    #[must_use]
    pub fn buttons(&self) -> &[StarButton] {
        &self.buttons
    }

    /// Images the row is currently rendered with.
    #[must_use]
    pub fn images(&self) -> &StarImages {
        &self.images
    }

    /// Position of the star currently held down, if any.
    #[must_use]
    pub fn pressed(&self) -> Option<u32> {
        self.pressed
    }

    /// Sets the rating and synchronously refreshes every star's selection
    /// and accessibility state.
    ///
    /// The host may call this directly, e.g. to restore a previously stored
    /// rating.
    pub fn set_rating(&mut self, rating: u32) {
        self.rating = rating;
        self.refresh_selection_states();
    }

    /// Sets the number of stars, tearing down and rebuilding the button row.
    pub fn set_star_count(&mut self, star_count: u32) {
        self.star_count = star_count;
        self.rebuild_buttons();
    }

    /// Sets the per-star dimensions, tearing down and rebuilding the button
    /// row.
    pub fn set_star_size(&mut self, star_size: StarSize) {
        self.star_size = star_size;
        self.rebuild_buttons();
    }

    /// Processes a pointer message from the rendered row.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::StarPressed(position) => {
                self.pressed = Some(position);
                Event::None
            }
            Message::StarReleased(position) => {
                self.pressed = None;
                self.tap(position)
            }
            Message::PressCanceled => {
                self.pressed = None;
                Event::None
            }
        }
    }

    /// Resolves a completed tap on the star at `position`.
    ///
    /// # Panics
    ///
    /// Panics if the position does not belong to any owned star button. Taps
    /// are only ever dispatched from buttons this control built, so a miss
    /// means the control's state is corrupted.
    fn tap(&mut self, position: u32) -> Event {
        let Some(index) = self.buttons.iter().position(|b| b.position == position) else {
            panic!("star {position} is not in the rating button row");
        };

        let selected_rating = index as u32 + 1;
        if selected_rating == self.rating {
            // Tapping the topmost selected star resets the rating.
            self.set_rating(0);
        } else {
            self.set_rating(selected_rating);
        }

        Event::RatingChanged(self.rating)
    }

    /// Discards the button row and builds a fresh one from the current
    /// configuration, reloading the star images alongside.
    fn rebuild_buttons(&mut self) {
        self.buttons.clear();
        self.pressed = None;
        self.images = StarImages::load();

        for position in 1..=self.star_count {
            self.buttons.push(StarButton::new(position));
        }

        self.refresh_selection_states();
    }

    /// Recomputes each button's selection flag and accessibility strings
    /// from the current rating. Pure derivation, no other side effects.
    fn refresh_selection_states(&mut self) {
        let value = accessibility::value_text(self.rating);

        for button in &mut self.buttons {
            button.selected = button.position <= self.rating;
            button.accessibility.hint = accessibility::hint_text(button.position, self.rating);
            button.accessibility.value = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rating::accessibility::RESET_HINT;

    fn tap(state: &mut State, position: u32) -> Event {
        state.update(Message::StarPressed(position));
        state.update(Message::StarReleased(position))
    }

    #[test]
    fn new_state_has_one_button_per_position() {
        let state = State::new(5, 0);
        let positions: Vec<u32> = state.buttons().iter().map(StarButton::position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn selection_follows_rating_for_every_value() {
        let mut state = State::new(5, 0);
        for rating in 0..=5 {
            state.set_rating(rating);
            for button in state.buttons() {
                assert_eq!(
                    button.is_selected(),
                    button.position() <= rating,
                    "star {} with rating {rating}",
                    button.position()
                );
            }
        }
    }

    #[test]
    fn tapping_a_star_sets_the_rating_to_its_position() {
        let mut state = State::new(5, 0);
        let event = tap(&mut state, 3);
        assert_eq!(event, Event::RatingChanged(3));
        assert_eq!(state.rating(), 3);
    }

    #[test]
    fn tapping_the_current_rating_resets_to_zero() {
        let mut state = State::new(5, 3);
        let event = tap(&mut state, 3);
        assert_eq!(event, Event::RatingChanged(0));
        assert_eq!(state.rating(), 0);
        assert!(state.buttons().iter().all(|b| !b.is_selected()));
    }

    #[test]
    fn tapping_another_star_retargets_regardless_of_previous_value() {
        let mut state = State::new(5, 5);
        tap(&mut state, 2);
        assert_eq!(state.rating(), 2);
        tap(&mut state, 4);
        assert_eq!(state.rating(), 4);
    }

    #[test]
    #[should_panic(expected = "not in the rating button row")]
    fn tap_outside_the_row_is_an_invariant_violation() {
        let mut state = State::new(3, 0);
        tap(&mut state, 7);
    }

    #[test]
    fn press_is_tracked_until_release() {
        let mut state = State::new(5, 0);
        state.update(Message::StarPressed(2));
        assert_eq!(state.pressed(), Some(2));
        state.update(Message::StarReleased(2));
        assert_eq!(state.pressed(), None);
    }

    #[test]
    fn pointer_exit_cancels_a_press_without_tapping() {
        let mut state = State::new(5, 0);
        state.update(Message::StarPressed(4));
        let event = state.update(Message::PressCanceled);
        assert_eq!(event, Event::None);
        assert_eq!(state.pressed(), None);
        assert_eq!(state.rating(), 0);
    }

    #[test]
    fn changing_star_count_rebuilds_and_preserves_the_rating() {
        let mut state = State::new(5, 5);
        state.update(Message::StarPressed(1));
        state.set_star_count(3);

        assert_eq!(state.buttons().len(), 3);
        assert_eq!(state.pressed(), None);
        // The rating is deliberately not clamped; all visible stars render
        // selected.
        assert_eq!(state.rating(), 5);
        assert!(state.buttons().iter().all(StarButton::is_selected));
    }

    #[test]
    fn changing_star_size_rebuilds_the_row() {
        let mut state = State::new(5, 2);
        state.set_star_size(StarSize::square(56.0));

        assert_eq!(state.star_size(), StarSize::square(56.0));
        assert_eq!(state.buttons().len(), 5);
        assert_eq!(state.rating(), 2);
        assert!(state.buttons()[1].is_selected());
        assert!(!state.buttons()[2].is_selected());
    }

    #[test]
    fn hint_sits_only_on_the_star_matching_the_rating() {
        let mut state = State::new(5, 0);
        state.set_rating(3);

        for button in state.buttons() {
            let hint = button.accessibility().hint.as_deref();
            if button.position() == 3 {
                assert_eq!(hint, Some(RESET_HINT));
            } else {
                assert_eq!(hint, None);
            }
        }
    }

    #[test]
    fn every_button_carries_the_shared_value_string() {
        let mut state = State::new(5, 0);
        assert!(state
            .buttons()
            .iter()
            .all(|b| b.accessibility().value == "No rating set."));

        state.set_rating(1);
        assert!(state
            .buttons()
            .iter()
            .all(|b| b.accessibility().value == "1 star set."));

        state.set_rating(4);
        assert!(state
            .buttons()
            .iter()
            .all(|b| b.accessibility().value == "4 stars set."));
    }

    #[test]
    fn labels_are_fixed_per_position() {
        let state = State::new(3, 2);
        let labels: Vec<&str> = state
            .buttons()
            .iter()
            .map(|b| b.accessibility().label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Set 1 star rating.",
                "Set 2 star rating.",
                "Set 3 star rating.",
            ]
        );
    }

    #[test]
    fn rating_above_the_star_count_is_kept_as_is() {
        let mut state = State::new(3, 0);
        state.set_rating(5);

        assert_eq!(state.rating(), 5);
        assert!(state.buttons().iter().all(StarButton::is_selected));
        // No star matches position 5, so no star carries the reset hint.
        assert!(state.buttons().iter().all(|b| b.accessibility().hint.is_none()));
    }
}
