mod app;
mod config;
mod error;
mod geometry;
mod message;
mod motion;
mod placement;
mod registry;
mod state;
mod ticker;
mod ui;
mod video_layer;
mod viewport;
mod visual;

use config::{Config, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH};
use state::App;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!(
        "Starting: videos={}, size={}, tick={}ms, media={:?}",
        config.count,
        config.video_size,
        config.tick_ms,
        config.media
    );

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Bouncing Videos")
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((INITIAL_WINDOW_WIDTH as f32, INITIAL_WINDOW_HEIGHT as f32))
        .run()
}
