//! Drawing. The world is painted through the [`Surface`] trait so the same
//! code drives the browser canvas and the recording surface used in tests.

use std::f64::consts::PI;

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use crate::blink::Visibility;
use crate::world::World;

/// Mouth opening of the player sprite, in radians.
pub const MOUTH_START: f64 = 0.2 * PI;
pub const MOUTH_END: f64 = 1.8 * PI;

/// Minimal immediate-mode 2D drawing context.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str);
    /// Arc from `start` to `end` closed through the center, filled then outlined.
    fn fill_wedge(&mut self, center: DVec2, radius: f64, start: f64, end: f64, fill: &str, outline: &str);
}

/// Paints one frame: walls, uncollected fruit, ghosts, then the player.
pub fn draw_world<S: Surface + ?Sized>(surface: &mut S, world: &World) {
    let palette = &world.config.palette;

    for wall in &world.obstacles {
        surface.fill_rect(wall.x, wall.y, wall.width, wall.height, &palette.obstacle);
    }
    for fruit in world.fruits.iter().filter(|f| !f.is_collected()) {
        surface.fill_circle(fruit.pos, world.config.fruit_radius, &palette.fruit);
    }
    for ghost in &world.ghosts {
        surface.fill_circle(ghost.pos, ghost.size, &palette.ghost);
    }

    let player = &world.player;
    if player.visibility == Visibility::Visible {
        surface.fill_wedge(player.pos, player.radius, MOUTH_START, MOUTH_END, &palette.player, &palette.player_outline);
    }
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        if let Err(err) = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI) {
            tracing::warn!(?err, "arc failed");
            return;
        }
        self.fill();
    }

    fn fill_wedge(&mut self, center: DVec2, radius: f64, start: f64, end: f64, fill: &str, outline: &str) {
        self.begin_path();
        if let Err(err) = self.arc(center.x, center.y, radius, start, end) {
            tracing::warn!(?err, "arc failed");
            return;
        }
        self.line_to(center.x, center.y);
        self.close_path();
        self.set_fill_style_str(fill);
        self.fill();
        self.set_stroke_style_str(outline);
        self.stroke();
    }
}
