use crate::config::{Config, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH};
use crate::placement::PlacementGenerator;
use crate::registry::SpriteRegistry;
use crate::ticker::Ticker;
use crate::video_layer::VideoLayer;
use crate::viewport::Viewport;

/// Application state: the sprite engine plus the controls driving it.
pub struct App {
    pub videos: VideoLayer,
    pub registry: SpriteRegistry,
    pub viewport: Viewport,
    pub placement: PlacementGenerator,
    pub ticker: Ticker,
    // Control values, kept as the sliders show them
    pub video_count: usize,
    pub video_size: u32,
    pub dark_mode: bool,
    pub error: Option<String>,
    pub status: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_placement(config, PlacementGenerator::new())
    }

    pub fn with_placement(config: Config, placement: PlacementGenerator) -> Self {
        let mut app = App {
            videos: VideoLayer::new(),
            registry: SpriteRegistry::new(config.video_size),
            viewport: Viewport::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
            placement,
            ticker: Ticker::new(config.tick_ms),
            video_count: config.count,
            video_size: config.video_size,
            dark_mode: false,
            error: None,
            status: "Browse or drop a video file to play it".to_string(),
        };

        if let Some(path) = &config.media {
            if let Err(e) = app.videos.set_source(path) {
                log::warn!("Startup media rejected: {}", e);
                app.error = Some(e.to_string());
            }
        }
        app.set_dark_mode(config.dark_mode);
        app.repopulate();
        app
    }
}
