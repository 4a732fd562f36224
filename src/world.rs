//! World state: every mutable piece of one game instance.

use glam::DVec2;

use crate::blink::{BlinkState, Visibility};
use crate::config::{GameConfig, GhostSpawn};
use crate::direction::Direction;

pub use crate::config::Obstacle;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: DVec2,
    pub dir: Direction,
    pub radius: f64,
    pub blink: BlinkState,
    /// Result of the last blink advance; read by the renderer.
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fruit {
    pub pos: DVec2,
    collected: bool,
}

impl Fruit {
    pub fn new(pos: DVec2) -> Self {
        Self { pos, collected: false }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// One-way: there is no way to un-collect a fruit.
    pub fn collect(&mut self) {
        self.collected = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ghost {
    pub pos: DVec2,
    pub dir: Direction,
    pub size: f64,
    pub speed: f64,
}

impl From<&GhostSpawn> for Ghost {
    fn from(spawn: &GhostSpawn) -> Self {
        Self { pos: spawn.pos, dir: spawn.dir, size: spawn.size, speed: spawn.speed }
    }
}

#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub fruits: Vec<Fruit>,
    pub ghosts: Vec<Ghost>,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let player = Player {
            pos: config.center(),
            dir: Direction::default(),
            radius: config.player_radius(),
            blink: BlinkState::Normal,
            visibility: Visibility::Visible,
        };
        let obstacles = config.layout.obstacles.clone();
        let fruits = config.layout.fruits.iter().copied().map(Fruit::new).collect();
        let ghosts = config.layout.ghosts.iter().map(Ghost::from).collect();
        Self { config, player, obstacles, fruits, ghosts }
    }

    pub fn width(&self) -> f64 {
        self.config.width
    }

    pub fn height(&self) -> f64 {
        self.config.height
    }

    pub fn remaining_fruits(&self) -> usize {
        self.fruits.iter().filter(|f| !f.is_collected()).count()
    }

    /// Ghost contact: freeze, blink and respawn at the canvas center.
    /// No-op while already blinking.
    pub fn start_blinking(&mut self, now: f64) {
        if self.player.blink.trigger(now) {
            self.player.pos = self.config.center();
            tracing::info!(at_ms = now, "ghost contact, respawning at center");
        }
    }
}
