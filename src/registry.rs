//! The set of bouncing sprites and their batch reconfiguration.

use crate::config::{MAX_NUM_VIDEOS, MAX_VIDEO_SIZE, MIN_NUM_VIDEOS, MIN_VIDEO_SIZE};
use crate::error::Error;
use crate::geometry::{Bounds, Extent, Point, Velocity};
use crate::placement::PlacementGenerator;
use crate::viewport::Viewport;
use crate::visual::{BorderStyle, VisualHandle, VisualLayer};

/// One bouncing video.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Slot index within the current batch.
    pub id: usize,
    pub visual: VisualHandle,
    pub position: Point,
    pub velocity: Velocity,
    pub size: Extent,
}

impl Sprite {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }
}

/// Outcome of a successful [`SpriteRegistry::set_population`].
#[derive(Debug, Default)]
pub struct Repopulation {
    pub released: usize,
    pub created: usize,
    /// Slots whose visual could not be created.
    pub failures: Vec<Error>,
}

/// Ordered sprites. Insertion order is both draw order and step order.
#[derive(Debug)]
pub struct SpriteRegistry {
    sprites: Vec<Sprite>,
    size: Extent,
    border: Option<BorderStyle>,
}

impl SpriteRegistry {
    pub fn new(video_size: u32) -> Self {
        SpriteRegistry {
            sprites: Vec::new(),
            size: Extent::square(clamp_size(video_size)),
            border: None,
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Size given to every sprite, including ones created later.
    pub fn size(&self) -> Extent {
        self.size
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn for_each(&self, visitor: impl FnMut(&Sprite)) {
        self.sprites.iter().for_each(visitor);
    }

    pub(crate) fn sprites_mut(&mut self) -> &mut [Sprite] {
        &mut self.sprites
    }

    /// Replace the whole batch with `count` freshly placed sprites.
    ///
    /// Every existing visual is released first, so at most `count` players
    /// are alive at once. A slot whose visual cannot be created is skipped
    /// and reported in [`Repopulation::failures`].
    pub fn set_population<L: VisualLayer>(
        &mut self,
        count: usize,
        layer: &mut L,
        viewport: &Viewport,
        placement: &mut PlacementGenerator,
    ) -> Result<Repopulation, Error> {
        if !(MIN_NUM_VIDEOS..=MAX_NUM_VIDEOS).contains(&count) {
            return Err(Error::InvalidPopulation {
                requested: count,
                min: MIN_NUM_VIDEOS,
                max: MAX_NUM_VIDEOS,
            });
        }

        let mut report = Repopulation {
            released: self.release_all(layer),
            ..Repopulation::default()
        };

        self.sprites.reserve(count);
        for slot in 0..count {
            let visual = match layer.create_visual() {
                Ok(visual) => visual,
                Err(source) => {
                    log::warn!("Skipping sprite slot {}: {}", slot, source);
                    report
                        .failures
                        .push(Error::ResourceUnavailable { slot, source });
                    continue;
                }
            };

            let sprite = Sprite {
                id: slot,
                visual,
                position: placement.place(viewport, self.size),
                velocity: placement.velocity(),
                size: self.size,
            };
            layer.set_visual_bounds(visual, sprite.bounds());
            if self.border.is_some() {
                layer.set_visual_border(visual, self.border);
            }
            self.sprites.push(sprite);
            report.created += 1;
        }

        log::info!(
            "Population rebuilt: requested={}, created={}, released={}, failed={}",
            count,
            report.created,
            report.released,
            report.failures.len()
        );
        Ok(report)
    }

    /// Release every visual and empty the registry. Release failures are
    /// logged and do not stop the remaining releases.
    pub fn release_all<L: VisualLayer>(&mut self, layer: &mut L) -> usize {
        let released = self.sprites.len();
        for sprite in self.sprites.drain(..) {
            if let Err(e) = layer.release_visual(sprite.visual) {
                log::warn!("Failed to release visual {}: {}", sprite.visual, e);
            }
        }
        released
    }

    /// Resize every sprite in place. Positions and velocities are kept.
    pub fn set_size_all<L: VisualLayer>(&mut self, video_size: u32, layer: &mut L) {
        self.size = Extent::square(clamp_size(video_size));
        for sprite in &mut self.sprites {
            sprite.size = self.size;
            layer.set_visual_bounds(sprite.visual, sprite.bounds());
        }
        log::debug!("Resized {} sprites to {:?}", self.sprites.len(), self.size);
    }

    /// Give every sprite a new random heading and speed.
    pub fn randomize_velocities(&mut self, placement: &mut PlacementGenerator) {
        for sprite in &mut self.sprites {
            sprite.velocity = placement.velocity();
        }
        log::debug!("Randomized velocities of {} sprites", self.sprites.len());
    }

    /// Apply `border` to every visual and to sprites created later.
    pub fn set_border_all<L: VisualLayer>(&mut self, border: Option<BorderStyle>, layer: &mut L) {
        self.border = border;
        for sprite in &self.sprites {
            layer.set_visual_border(sprite.visual, border);
        }
    }

    /// Push every sprite's current bounds to the layer.
    pub fn sync_visuals<L: VisualLayer>(&self, layer: &mut L) {
        self.for_each(|sprite| layer.set_visual_bounds(sprite.visual, sprite.bounds()));
    }

    #[cfg(test)]
    pub(crate) fn with_sprites(sprites: Vec<Sprite>) -> Self {
        let size = sprites
            .first()
            .map(|sprite| sprite.size)
            .unwrap_or(Extent::square(MAX_VIDEO_SIZE as i32));
        SpriteRegistry {
            sprites,
            size,
            border: None,
        }
    }
}

fn clamp_size(video_size: u32) -> i32 {
    video_size.clamp(MIN_VIDEO_SIZE, MAX_VIDEO_SIZE) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{MAX_SPEED, MIN_SPEED};
    use crate::visual::testing::RecordingLayer;
    use crate::visual::VisualError;

    fn populated(count: usize) -> (SpriteRegistry, RecordingLayer, PlacementGenerator) {
        let mut registry = SpriteRegistry::new(200);
        let mut layer = RecordingLayer::default();
        let mut placement = PlacementGenerator::seeded(3);
        registry
            .set_population(count, &mut layer, &Viewport::new(800, 600), &mut placement)
            .unwrap();
        (registry, layer, placement)
    }

    #[test]
    fn set_population_creates_exactly_n_sprites() {
        for n in [1, 10, 100] {
            let (registry, layer, _) = populated(n);
            assert_eq!(registry.len(), n);
            assert_eq!(layer.live.len(), n);
        }
    }

    #[test]
    fn new_sprites_are_placed_inside_the_viewport() {
        let (registry, layer, _) = populated(50);
        for sprite in registry.iter() {
            assert!((0..=600).contains(&sprite.position.x));
            assert!((0..=400).contains(&sprite.position.y));
            assert_eq!(sprite.size, Extent::square(200));
            assert_eq!(layer.bounds(sprite.visual), Some(sprite.bounds()));
        }
    }

    #[test]
    fn out_of_bounds_population_is_rejected_and_registry_untouched() {
        let (mut registry, mut layer, mut placement) = populated(4);
        let before: Vec<Sprite> = registry.iter().cloned().collect();

        for bad in [0, 101] {
            let err = registry
                .set_population(bad, &mut layer, &Viewport::new(800, 600), &mut placement)
                .unwrap_err();
            assert_eq!(
                err,
                Error::InvalidPopulation {
                    requested: bad,
                    min: 1,
                    max: 100
                }
            );
        }

        assert_eq!(registry.iter().cloned().collect::<Vec<_>>(), before);
        assert!(layer.released.is_empty());
    }

    #[test]
    fn shrinking_population_releases_every_old_visual_once() {
        let (mut registry, mut layer, mut placement) = populated(10);
        let old: Vec<VisualHandle> = registry.iter().map(|s| s.visual).collect();

        let report = registry
            .set_population(3, &mut layer, &Viewport::new(800, 600), &mut placement)
            .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(report.released, 10);
        assert_eq!(report.created, 3);
        let mut released = layer.released.clone();
        released.sort();
        assert_eq!(released, old);
        assert_eq!(layer.live.len(), 3);
    }

    #[test]
    fn failed_release_does_not_block_creation() {
        let (mut registry, mut layer, mut placement) = populated(5);
        layer.fail_releases = true;

        let report = registry
            .set_population(7, &mut layer, &Viewport::new(800, 600), &mut placement)
            .unwrap();

        assert_eq!(report.released, 5);
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn failed_creation_skips_slot_and_keeps_going() {
        let mut registry = SpriteRegistry::new(100);
        let mut layer = RecordingLayer {
            fail_creates: vec![1, 3],
            ..RecordingLayer::default()
        };
        let mut placement = PlacementGenerator::seeded(8);

        let report = registry
            .set_population(5, &mut layer, &Viewport::new(800, 600), &mut placement)
            .unwrap();

        assert_eq!(report.created, 3);
        assert_eq!(registry.len(), 3);
        let slots: Vec<usize> = registry.iter().map(|s| s.id).collect();
        assert_eq!(slots, vec![0, 2, 4]);
        assert!(matches!(
            report.failures.as_slice(),
            [
                Error::ResourceUnavailable {
                    slot: 1,
                    source: VisualError::Unavailable(_)
                },
                Error::ResourceUnavailable { slot: 3, .. },
            ]
        ));
    }

    #[test]
    fn set_size_all_keeps_position_and_velocity() {
        let (mut registry, mut layer, _) = populated(8);
        let before: Vec<(Point, Velocity)> =
            registry.iter().map(|s| (s.position, s.velocity)).collect();

        registry.set_size_all(120, &mut layer);

        let after: Vec<(Point, Velocity)> =
            registry.iter().map(|s| (s.position, s.velocity)).collect();
        assert_eq!(before, after);
        for sprite in registry.iter() {
            assert_eq!(sprite.size, Extent::square(120));
            assert_eq!(layer.bounds(sprite.visual).unwrap().extent, Extent::square(120));
        }
    }

    #[test]
    fn set_size_all_clamps_into_range() {
        let (mut registry, mut layer, _) = populated(2);
        registry.set_size_all(10, &mut layer);
        assert_eq!(registry.size(), Extent::square(50));
        registry.set_size_all(1_000, &mut layer);
        assert!(registry.iter().all(|s| s.size == Extent::square(200)));
    }

    #[test]
    fn resized_registry_creates_new_sprites_at_current_size() {
        let (mut registry, mut layer, mut placement) = populated(2);
        registry.set_size_all(75, &mut layer);
        registry
            .set_population(6, &mut layer, &Viewport::new(800, 600), &mut placement)
            .unwrap();
        assert!(registry.iter().all(|s| s.size == Extent::square(75)));
    }

    #[test]
    fn randomize_velocities_only_touches_velocity() {
        let (mut registry, _, mut placement) = populated(30);
        let before: Vec<(Point, Extent)> = registry.iter().map(|s| (s.position, s.size)).collect();

        registry.randomize_velocities(&mut placement);

        let after: Vec<(Point, Extent)> = registry.iter().map(|s| (s.position, s.size)).collect();
        assert_eq!(before, after);
        for sprite in registry.iter() {
            assert!((MIN_SPEED..=MAX_SPEED).contains(&sprite.velocity.dx.abs()));
            assert!((MIN_SPEED..=MAX_SPEED).contains(&sprite.velocity.dy.abs()));
        }
    }

    #[test]
    fn border_applies_to_existing_and_future_sprites() {
        let (mut registry, mut layer, mut placement) = populated(3);
        registry.set_border_all(Some(BorderStyle::DARK_MODE), &mut layer);
        assert!(
            registry
                .iter()
                .all(|s| layer.border(s.visual) == Some(BorderStyle::DARK_MODE))
        );

        registry
            .set_population(4, &mut layer, &Viewport::new(800, 600), &mut placement)
            .unwrap();
        assert!(
            registry
                .iter()
                .all(|s| layer.border(s.visual) == Some(BorderStyle::DARK_MODE))
        );

        registry.set_border_all(None, &mut layer);
        assert!(registry.iter().all(|s| layer.border(s.visual).is_none()));
    }

    #[test]
    fn for_each_visits_in_insertion_order() {
        let (registry, _, _) = populated(5);
        let mut ids = Vec::new();
        registry.for_each(|sprite| ids.push(sprite.id));
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
