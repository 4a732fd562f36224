//! Player interactions with fruits, walls and ghosts.

use crate::world::World;

/// Marks every fruit within `player radius + fruit radius` as collected.
pub fn collect_fruit(world: &mut World) {
    let reach = world.player.radius + world.config.fruit_radius;
    let pos = world.player.pos;
    for fruit in world.fruits.iter_mut().filter(|f| !f.is_collected()) {
        if pos.distance(fruit.pos) < reach {
            fruit.collect();
            tracing::debug!(x = fruit.pos.x, y = fruit.pos.y, "fruit collected");
        }
    }
}

/// Undoes the last step once per wall the player center is strictly inside.
///
/// Reactive rather than predictive, so the sprite overlaps the wall for the
/// frame it walked in. Walls are tested in order against the position left
/// by the previous push, so overlapping walls can each push back.
pub fn push_out_of_obstacles(world: &mut World) {
    let back = world.player.dir.opposite().offset() * world.config.speed;
    for wall in &world.obstacles {
        if wall.contains_strict(world.player.pos) {
            world.player.pos += back;
        }
    }
}

/// True when any ghost overlaps the player sprite.
pub fn touches_ghost(world: &World) -> bool {
    let player = &world.player;
    world.ghosts.iter().any(|g| player.pos.distance(g.pos) < player.radius + g.size)
}

/// Runs all three checks in frame order; ghost contact starts the blink.
pub fn resolve(world: &mut World, now: f64) {
    collect_fruit(world);
    push_out_of_obstacles(world);
    if touches_ghost(world) {
        world.start_blinking(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::BlinkState;
    use crate::config::{GameConfig, Obstacle};
    use crate::direction::Direction;
    use glam::DVec2;

    fn world() -> World {
        World::new(GameConfig::default())
    }

    #[test]
    fn test_fruit_within_reach() {
        let mut w = world();
        w.player.pos = DVec2::new(53.0, 54.0);
        collect_fruit(&mut w);
        assert!(w.fruits[0].is_collected());
        assert!(!w.fruits[1].is_collected());
    }

    #[test]
    fn test_fruit_at_exact_reach_is_not_collected() {
        let mut w = world();
        w.player.pos = DVec2::new(50.0 + 19.0, 50.0);
        collect_fruit(&mut w);
        assert!(!w.fruits[0].is_collected());
    }

    #[test]
    fn test_collected_fruit_stays_collected() {
        let mut w = world();
        w.player.pos = DVec2::new(50.0, 50.0);
        collect_fruit(&mut w);
        w.player.pos = DVec2::new(450.0, 50.0);
        collect_fruit(&mut w);
        assert!(w.fruits[0].is_collected());
    }

    #[test]
    fn test_push_back_against_heading() {
        let mut w = world();
        w.player.pos = DVec2::new(130.0, 110.0);
        w.player.dir = Direction::Down;
        push_out_of_obstacles(&mut w);
        assert_eq!(w.player.pos, DVec2::new(130.0, 106.0));
    }

    #[test]
    fn test_overlapping_walls_push_additively() {
        let mut w = world();
        w.obstacles = vec![Obstacle::new(0.0, 0.0, 50.0, 50.0), Obstacle::new(10.0, 10.0, 50.0, 50.0)];
        w.player.pos = DVec2::new(20.0, 20.0);
        w.player.dir = Direction::Left;
        push_out_of_obstacles(&mut w);
        assert_eq!(w.player.pos, DVec2::new(28.0, 20.0));
    }

    #[test]
    fn test_later_wall_sees_pushed_position() {
        let mut w = world();
        w.obstacles = vec![Obstacle::new(0.0, 0.0, 50.0, 50.0), Obstacle::new(0.0, 18.0, 50.0, 10.0)];
        w.player.pos = DVec2::new(20.0, 20.0);
        w.player.dir = Direction::Down;
        push_out_of_obstacles(&mut w);
        assert_eq!(w.player.pos, DVec2::new(20.0, 16.0));
    }

    #[test]
    fn test_ghost_contact_triggers_blink() {
        let mut w = world();
        w.player.pos = DVec2::new(110.0, 300.0);
        assert!(touches_ghost(&w));
        resolve(&mut w, 42.0);
        assert_eq!(w.player.blink, BlinkState::Blinking { since_ms: 42.0 });
        assert_eq!(w.player.pos, DVec2::new(250.0, 250.0));
    }

    #[test]
    fn test_ghost_at_exact_reach_is_no_contact() {
        let mut w = world();
        w.player.pos = DVec2::new(100.0 + 29.0, 300.0);
        assert!(!touches_ghost(&w));
    }
}
