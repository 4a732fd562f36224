//! Tunables and the starting layout.
//!
//! Defaults reproduce the classic board: a 500x500 canvas, three wall
//! segments, three fruits and two patrolling ghosts.

use glam::DVec2;

use crate::direction::Direction;
use crate::error::ConfigError;

/// Axis-aligned wall segment. Immutable once the world is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// True when `point` lies strictly inside; edges do not count.
    pub fn contains_strict(&self, point: DVec2) -> bool {
        point.x > self.x && point.x < self.x + self.width && point.y > self.y && point.y < self.y + self.height
    }
}

/// Starting position, heading and stats of one ghost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GhostSpawn {
    pub pos: DVec2,
    pub dir: Direction,
    pub size: f64,
    pub speed: f64,
}

/// Entity placement for a fresh world.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Layout {
    pub obstacles: Vec<Obstacle>,
    pub fruits: Vec<DVec2>,
    pub ghosts: Vec<GhostSpawn>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            obstacles: vec![
                Obstacle::new(100.0, 100.0, 60.0, 20.0),
                Obstacle::new(300.0, 200.0, 20.0, 60.0),
                Obstacle::new(150.0, 300.0, 80.0, 20.0),
            ],
            fruits: vec![DVec2::new(50.0, 50.0), DVec2::new(400.0, 400.0), DVec2::new(250.0, 250.0)],
            ghosts: vec![
                GhostSpawn { pos: DVec2::new(100.0, 300.0), dir: Direction::Right, size: 20.0, speed: 2.0 },
                GhostSpawn { pos: DVec2::new(400.0, 100.0), dir: Direction::Left, size: 20.0, speed: 2.0 },
            ],
        }
    }
}

/// CSS colour strings handed straight to the canvas.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub player: String,
    pub player_outline: String,
    pub obstacle: String,
    pub fruit: String,
    pub ghost: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: "yellow".into(),
            player_outline: "black".into(),
            obstacle: "gray".into(),
            fruit: "red".into(),
            ghost: "blue".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub canvas_id: String,
    pub width: f64,
    pub height: f64,
    /// Player displacement per frame, in pixels.
    pub speed: f64,
    /// Cell size the sprite is derived from; the sprite is two pixels smaller.
    pub grid_size: f64,
    /// Shared by fruit pickup and fruit drawing.
    pub fruit_radius: f64,
    pub blink_duration_ms: f64,
    pub blink_interval_ms: f64,
    pub palette: Palette,
    pub layout: Layout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "gameCanvas".into(),
            width: 500.0,
            height: 500.0,
            speed: 4.0,
            grid_size: 20.0,
            fruit_radius: 10.0,
            blink_duration_ms: 2000.0,
            blink_interval_ms: 500.0,
            palette: Palette::default(),
            layout: Layout::default(),
        }
    }
}

impl GameConfig {
    pub fn player_radius(&self) -> f64 {
        (self.grid_size - 2.0) / 2.0
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::CanvasSize { width: self.width, height: self.height });
        }
        let positive = [
            ("speed", self.speed),
            ("player radius", self.player_radius()),
            ("fruit radius", self.fruit_radius),
            ("blink interval", self.blink_interval_ms),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for ghost in &self.layout.ghosts {
            if !(ghost.size > 0.0) {
                return Err(ConfigError::NonPositive { field: "ghost size", value: ghost.size });
            }
            if !(ghost.speed > 0.0) {
                return Err(ConfigError::NonPositive { field: "ghost speed", value: ghost.speed });
            }
        }
        if self.blink_duration_ms < 0.0 {
            return Err(ConfigError::NegativeBlinkDuration(self.blink_duration_ms));
        }
        Ok(())
    }

    /// Parses a (possibly partial) JSON config; absent fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::error::GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
