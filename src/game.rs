//! The frame loop body, independent of the browser scheduler.

use crate::collision;
use crate::config::GameConfig;
use crate::input::InputSlot;
use crate::motion;
use crate::render::{self, Surface};
use crate::world::World;

pub struct Game<S: Surface> {
    pub world: World,
    pub input: InputSlot,
    surface: S,
}

impl<S: Surface> Game<S> {
    pub fn new(config: GameConfig, surface: S) -> Self {
        Self { world: World::new(config), input: InputSlot::new(), surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Advances the world to `now` without drawing.
    pub fn update(&mut self, now: f64) {
        let world = &mut self.world;
        if let Some(dir) = self.input.take() {
            world.player.dir = dir;
        }
        motion::step_player(world);
        motion::step_ghosts(world);
        collision::resolve(world, now);
        let config = &world.config;
        world.player.visibility = world.player.blink.advance(now, config.blink_duration_ms, config.blink_interval_ms);
    }

    /// One full tick: clear, update, draw.
    pub fn frame(&mut self, now: f64) {
        self.surface.clear(self.world.width(), self.world.height());
        self.update(now);
        render::draw_world(&mut self.surface, &self.world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::Visibility;
    use crate::direction::Direction;
    use crate::render::recording::{DrawCall, RecordingSurface};
    use glam::DVec2;

    fn game() -> Game<RecordingSurface> {
        Game::new(GameConfig::default(), RecordingSurface::default())
    }

    #[test]
    fn test_frame_clears_first() {
        let mut game = game();
        game.frame(0.0);
        assert_eq!(game.surface().calls.first(), Some(&DrawCall::Clear));
    }

    #[test]
    fn test_input_applied_before_motion() {
        let mut game = game();
        game.input.request(Direction::Up);
        game.update(16.0);
        assert_eq!(game.world.player.dir, Direction::Up);
        assert_eq!(game.world.player.pos, DVec2::new(250.0, 246.0));
    }

    #[test]
    fn test_blink_freezes_then_resumes() {
        let mut game = game();
        game.world.start_blinking(0.0);
        game.update(100.0);
        assert_eq!(game.world.player.pos, DVec2::new(250.0, 250.0));
        assert_eq!(game.world.player.visibility, Visibility::Hidden);
        game.update(600.0);
        assert_eq!(game.world.player.visibility, Visibility::Visible);
        game.update(2_001.0);
        assert!(!game.world.player.blink.is_blinking());
        assert_eq!(game.world.player.pos, DVec2::new(250.0, 250.0));
        game.update(2_017.0);
        assert_eq!(game.world.player.pos, DVec2::new(254.0, 250.0));
    }
}
