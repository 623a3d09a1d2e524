// SPDX-License-Identifier: MPL-2.0
use iced::{window, Size};
use rating_stars::app::{App, Flags};
use rating_stars::icon;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        rating: args.opt_value_from_str("--rating").unwrap(),
        stars: args.opt_value_from_str("--stars").unwrap(),
    };

    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            icon: icon::load_window_icon(),
            ..window::Settings::default()
        })
        .window_size(Size::new(480.0, 300.0))
        .run()
}
