//! Animation clock.
//!
//! The clock is always running; only its interval changes. Tick spacing is
//! watched so a stalled update loop shows up in the log instead of as a
//! silently stuttering animation.

use iced::Subscription;
use std::time::{Duration, Instant};

use crate::config::{INITIAL_TICK_MS, MAX_TICK_MS, MIN_TICK_MS};
use crate::message::Message;

/// Ticks arriving later than this many intervals are reported.
const LATE_FACTOR: u32 = 5;
/// Floor for the lateness threshold so 1 ms intervals don't spam the log.
const LATE_FLOOR: Duration = Duration::from_millis(250);

pub struct Ticker {
    interval_ms: u32,
    last_tick: Option<Instant>,
    ticks: u64,
    late_ticks: u64,
}

impl Default for Ticker {
    fn default() -> Self {
        Ticker::new(INITIAL_TICK_MS)
    }
}

impl Ticker {
    pub fn new(interval_ms: u32) -> Self {
        Ticker {
            interval_ms: interval_ms.clamp(MIN_TICK_MS, MAX_TICK_MS),
            last_tick: None,
            ticks: 0,
            late_ticks: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }

    /// Change the tick interval, clamped to the slider range.
    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        // spacing across an interval change says nothing about lag
        self.last_tick = None;
        log::debug!("Tick interval set to {}ms", self.interval_ms);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn late_ticks(&self) -> u64 {
        self.late_ticks
    }

    /// Record a tick delivered at `now`. Returns the gap since the last one.
    pub fn observe(&mut self, now: Instant) -> Option<Duration> {
        self.ticks += 1;
        let gap = self
            .last_tick
            .replace(now)
            .map(|last| now.saturating_duration_since(last));

        if let Some(gap) = gap {
            let threshold = (self.interval() * LATE_FACTOR).max(LATE_FLOOR);
            if gap > threshold {
                self.late_ticks += 1;
                log::warn!(
                    "Animation tick late: {}ms since last tick (interval {}ms)",
                    gap.as_millis(),
                    self.interval_ms
                );
            } else {
                log::trace!("Tick {} after {}ms", self.ticks, gap.as_millis());
            }
        }
        gap
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(self.interval()).map(Message::Tick)
    }
}
