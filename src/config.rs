//! Startup settings and the ranges every control is bound to.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

pub const MIN_VIDEO_SIZE: u32 = 50;
pub const MAX_VIDEO_SIZE: u32 = 200;

pub const MIN_NUM_VIDEOS: usize = 1;
pub const MAX_NUM_VIDEOS: usize = 100;
pub const INITIAL_NUM_VIDEOS: usize = 10;

pub const MIN_TICK_MS: u32 = 1;
pub const MAX_TICK_MS: u32 = 100;
pub const INITIAL_TICK_MS: u32 = 20;

pub const CONTROL_PANEL_WIDTH: f32 = 250.0;
pub const CONTROL_PANEL_HEIGHT: f32 = 250.0;
pub const CONTROL_PANEL_MARGIN: f32 = 10.0;

pub const VIDEO_SIZE_RANGE: RangeInclusive<u32> = MIN_VIDEO_SIZE..=MAX_VIDEO_SIZE;
pub const TICK_MS_RANGE: RangeInclusive<u32> = MIN_TICK_MS..=MAX_TICK_MS;

/// Settings the app starts with. Every control can change them later.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "vidbounce", version, about = "Video players bouncing around a window")]
pub struct Config {
    /// Video file every player loops
    #[arg(env = "VIDBOUNCE_MEDIA")]
    pub media: Option<PathBuf>,
    /// Number of players
    #[arg(long, env = "VIDBOUNCE_COUNT", default_value_t = INITIAL_NUM_VIDEOS)]
    pub count: usize,
    /// Player width and height in pixels
    #[arg(long = "size", env = "VIDBOUNCE_SIZE", default_value_t = MAX_VIDEO_SIZE)]
    pub video_size: u32,
    /// Milliseconds between animation ticks
    #[arg(long = "tick-ms", env = "VIDBOUNCE_TICK_MS", default_value_t = INITIAL_TICK_MS)]
    pub tick_ms: u32,
    #[arg(
        long = "dark",
        env = "VIDBOUNCE_DARK",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            media: None,
            count: INITIAL_NUM_VIDEOS,
            video_size: MAX_VIDEO_SIZE,
            tick_ms: INITIAL_TICK_MS,
            dark_mode: false,
        }
    }
}

impl Config {
    /// Parse the process arguments and environment, then clamp into range.
    pub fn from_env() -> Self {
        Config::parse().clamped()
    }

    /// Pull every numeric setting into the range its control allows.
    pub fn clamped(self) -> Self {
        let clamped = Config {
            count: self.count.clamp(MIN_NUM_VIDEOS, MAX_NUM_VIDEOS),
            video_size: self.video_size.clamp(MIN_VIDEO_SIZE, MAX_VIDEO_SIZE),
            tick_ms: self.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS),
            ..self.clone()
        };
        if clamped != self {
            log::warn!(
                "Settings clamped: count {} -> {}, size {} -> {}, tick {}ms -> {}ms",
                self.count,
                clamped.count,
                self.video_size,
                clamped.video_size,
                self.tick_ms,
                clamped.tick_ms
            );
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("vidbounce").chain(args.iter().copied()))
            .unwrap()
            .clamped()
    }

    #[test]
    fn defaults_match_initial_controls() {
        let config = parse(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.count, 10);
        assert_eq!(config.video_size, 200);
        assert_eq!(config.tick_ms, 20);
        assert!(!config.dark_mode);
    }

    #[test]
    fn media_is_the_positional_argument() {
        let config = parse(&["/tmp/a.mp4", "--count", "4", "--dark"]);
        assert_eq!(config.media, Some(PathBuf::from("/tmp/a.mp4")));
        assert_eq!(config.count, 4);
        assert!(config.dark_mode);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse(&["--count", "500", "--size", "10", "--tick-ms", "0"]);
        assert_eq!(config.count, MAX_NUM_VIDEOS);
        assert_eq!(config.video_size, MIN_VIDEO_SIZE);
        assert_eq!(config.tick_ms, MIN_TICK_MS);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Config::try_parse_from(["vidbounce", "--count", "lots"]).is_err());
        assert!(Config::try_parse_from(["vidbounce", "--size", "-5"]).is_err());
    }
}
