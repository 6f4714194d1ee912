//! Integer geometry shared by the sprite engine and the video layer.

/// Top-left corner of a sprite, relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Per-tick displacement. The sign carries the heading on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Velocity { dx, dy }
    }
}

/// Render extent of a sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn square(side: i32) -> Self {
        Extent {
            width: side,
            height: side,
        }
    }
}

/// Position plus extent, as handed to the visual layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub origin: Point,
    pub extent: Extent,
}

impl Bounds {
    pub const fn new(origin: Point, extent: Extent) -> Self {
        Bounds { origin, extent }
    }
}
