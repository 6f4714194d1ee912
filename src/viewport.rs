use crate::geometry::Extent;

/// Usable area of the window the sprites bounce around in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    width: i32,
    height: i32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let mut viewport = Viewport::default();
        viewport.resize(width, height);
        viewport
    }

    /// Store a new extent. Takes effect on the next step and placement.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = i32::try_from(width).unwrap_or(i32::MAX);
        self.height = i32::try_from(height).unwrap_or(i32::MAX);
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True until the container has reported a size with area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Largest x/y a sprite of `extent` can take while fully visible.
    /// Negative when the sprite is larger than the viewport.
    pub fn max_origin(&self, extent: Extent) -> (i32, i32) {
        (self.width - extent.width, self.height - extent.height)
    }
}
