use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{Extent, Point, Velocity};
use crate::viewport::Viewport;

/// Slowest per-axis speed, in pixels per tick.
pub const MIN_SPEED: i32 = 3;
/// Fastest per-axis speed, in pixels per tick.
pub const MAX_SPEED: i32 = 9;

/// Random source for initial positions and headings.
pub struct PlacementGenerator {
    rng: StdRng,
}

impl PlacementGenerator {
    pub fn new() -> Self {
        PlacementGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator, used by tests.
    pub fn seeded(seed: u64) -> Self {
        PlacementGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a top-left corner that keeps `extent` fully inside `viewport`.
    /// An axis on which the sprite does not fit gets 0.
    pub fn place(&mut self, viewport: &Viewport, extent: Extent) -> Point {
        let (max_x, max_y) = viewport.max_origin(extent);
        Point::new(self.coordinate(max_x), self.coordinate(max_y))
    }

    /// Magnitude in `[MIN_SPEED, MAX_SPEED]` and a random sign, per axis.
    pub fn velocity(&mut self) -> Velocity {
        Velocity::new(self.speed(), self.speed())
    }

    fn coordinate(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        self.rng.random_range(0..=max)
    }

    fn speed(&mut self) -> i32 {
        let magnitude = self.rng.random_range(MIN_SPEED..=MAX_SPEED);
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl Default for PlacementGenerator {
    fn default() -> Self {
        Self::new()
    }
}
