use iced_video_player::Video;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::geometry::Bounds;
use crate::visual::{BorderStyle, VisualError, VisualHandle, VisualLayer};

/// A single on-screen player and where it should be drawn.
pub struct VideoSlot {
    /// `None` while no media source is selected; drawn as a placeholder.
    pub video: Option<Video>,
    pub bounds: Bounds,
    pub border: Option<BorderStyle>,
}

/// Owns every live video player. Dropping a slot stops its pipeline.
#[derive(Default)]
pub struct VideoLayer {
    source: Option<PathBuf>,
    url: Option<url::Url>,
    slots: BTreeMap<VisualHandle, VideoSlot>,
    next_id: usize,
}

impl VideoLayer {
    pub fn new() -> Self {
        VideoLayer::default()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Select the file every player created from now on will loop.
    /// Existing players keep their media until the population is rebuilt.
    pub fn set_source(&mut self, path: &Path) -> Result<(), VisualError> {
        let absolute = std::fs::canonicalize(path).map_err(|e| {
            VisualError::Unavailable(format!("video file not found: {}: {}", path.display(), e))
        })?;
        let url = url::Url::from_file_path(&absolute).map_err(|_| {
            VisualError::Unavailable(format!("invalid video path: {}", absolute.display()))
        })?;

        log::info!("Media source set: {}", absolute.display());
        self.source = Some(absolute);
        self.url = Some(url);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, handle: VisualHandle) -> Option<&VideoSlot> {
        self.slots.get(&handle)
    }

    /// Slots in creation order.
    pub fn slots(&self) -> impl Iterator<Item = (VisualHandle, &VideoSlot)> {
        self.slots.iter().map(|(handle, slot)| (*handle, slot))
    }

    fn open(&self) -> Result<Option<Video>, VisualError> {
        let Some(url) = &self.url else {
            return Ok(None);
        };
        let mut video = Video::new(url)
            .map_err(|e| VisualError::Unavailable(format!("failed to load video: {}", e)))?;
        video.set_looping(true);
        Ok(Some(video))
    }
}

impl VisualLayer for VideoLayer {
    fn create_visual(&mut self) -> Result<VisualHandle, VisualError> {
        let video = self.open()?;
        let handle = VisualHandle(self.next_id);
        self.next_id += 1;

        log::debug!(
            "Visual created: handle={}, placeholder={}, live={}",
            handle,
            video.is_none(),
            self.slots.len() + 1
        );
        self.slots.insert(
            handle,
            VideoSlot {
                video,
                bounds: Bounds::default(),
                border: None,
            },
        );
        Ok(handle)
    }

    fn release_visual(&mut self, handle: VisualHandle) -> Result<(), VisualError> {
        self.slots
            .remove(&handle)
            .map(drop)
            .ok_or(VisualError::UnknownHandle(handle))
    }

    fn set_visual_bounds(&mut self, handle: VisualHandle, bounds: Bounds) {
        if let Some(slot) = self.slots.get_mut(&handle) {
            slot.bounds = bounds;
        }
    }

    fn set_visual_border(&mut self, handle: VisualHandle, border: Option<BorderStyle>) {
        if let Some(slot) = self.slots.get_mut(&handle) {
            slot.border = border;
        }
    }
}
