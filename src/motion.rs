//! One animation tick: integrate, then reflect off the viewport walls.

use crate::registry::SpriteRegistry;
use crate::viewport::Viewport;

/// Advance every sprite by one tick.
///
/// The bounce test runs on the post-integration position, so a sprite can
/// overshoot a wall by up to one velocity step before heading back. Calling
/// this twice advances two ticks. Nothing moves while the viewport is empty.
pub fn step(registry: &mut SpriteRegistry, viewport: &Viewport) {
    if viewport.is_empty() {
        log::trace!("Viewport not sized yet, skipping tick");
        return;
    }

    for sprite in registry.sprites_mut() {
        sprite.position.x += sprite.velocity.dx;
        sprite.position.y += sprite.velocity.dy;

        let (max_x, max_y) = viewport.max_origin(sprite.size);
        if sprite.position.x <= 0 || sprite.position.x >= max_x {
            sprite.velocity.dx = -sprite.velocity.dx;
        }
        if sprite.position.y <= 0 || sprite.position.y >= max_y {
            sprite.velocity.dy = -sprite.velocity.dy;
        }
    }
}
