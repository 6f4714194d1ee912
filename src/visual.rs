//! Boundary between the sprite engine and whatever draws the sprites.
//!
//! The engine only ever holds a [`VisualHandle`]; the layer behind it owns
//! the native player, its pipeline and its widget.

use std::fmt;

use thiserror::Error;

use crate::geometry::Bounds;

/// Opaque reference to a visual owned by a [`VisualLayer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualHandle(pub usize);

impl fmt::Display for VisualHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outline drawn around a visual (used as the dark-mode indicator).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStyle {
    pub rgb: [u8; 3],
    pub width: f32,
}

impl BorderStyle {
    pub const DARK_MODE: BorderStyle = BorderStyle {
        rgb: [0, 255, 0],
        width: 2.0,
    };
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VisualError {
    #[error("{0}")]
    Unavailable(String),
    #[error("unknown visual {0}")]
    UnknownHandle(VisualHandle),
}

pub trait VisualLayer {
    fn create_visual(&mut self) -> Result<VisualHandle, VisualError>;

    fn release_visual(&mut self, handle: VisualHandle) -> Result<(), VisualError>;

    fn set_visual_bounds(&mut self, handle: VisualHandle, bounds: Bounds);

    fn set_visual_border(&mut self, handle: VisualHandle, border: Option<BorderStyle>);
}
