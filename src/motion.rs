//! Per-frame displacement of the player and the ghosts.

use crate::world::{Ghost, World};

/// Moves the player one step along its heading, then wraps.
///
/// Wrapping is a hard reset to the opposite edge, not a modulo: `x < 0`
/// lands exactly on `width`, `x > width` lands exactly on 0. Frozen while
/// blinking.
pub fn step_player(world: &mut World) {
    if world.player.blink.is_blinking() {
        return;
    }
    let (width, height) = (world.width(), world.height());
    let player = &mut world.player;
    player.pos += player.dir.offset() * world.config.speed;

    if player.pos.x < 0.0 {
        player.pos.x = width;
    }
    if player.pos.x > width {
        player.pos.x = 0.0;
    }
    if player.pos.y < 0.0 {
        player.pos.y = height;
    }
    if player.pos.y > height {
        player.pos.y = 0.0;
    }
}

/// Moves every ghost and bounces the ones that left the canvas.
///
/// Positions are never clamped; a ghost may sit outside the canvas for a
/// frame until its flipped heading carries it back.
pub fn step_ghosts(world: &mut World) {
    let (width, height) = (world.width(), world.height());
    for ghost in &mut world.ghosts {
        step_ghost(ghost, width, height);
    }
}

fn step_ghost(ghost: &mut Ghost, width: f64, height: f64) {
    ghost.pos += ghost.dir.offset() * ghost.speed;
    if ghost.pos.x < 0.0 || ghost.pos.x > width {
        ghost.dir = ghost.dir.flip_horizontal();
        tracing::debug!(x = ghost.pos.x, dir = ghost.dir.as_ref(), "ghost bounced");
    }
    if ghost.pos.y < 0.0 || ghost.pos.y > height {
        ghost.dir = ghost.dir.flip_vertical();
        tracing::debug!(y = ghost.pos.y, dir = ghost.dir.as_ref(), "ghost bounced");
    }
}
