//! Pac-Man canvas core crate.
//!
//! A single sprite roams a 2D canvas, eats fruit, bumps into walls and
//! blinks back to the center when a patrolling ghost touches it. The game
//! state and per-frame rules are plain Rust and testable natively; `web`
//! binds them to a `<canvas>`, the arrow keys and four direction buttons.

use wasm_bindgen::prelude::*;

pub mod blink;
pub mod collision;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod motion;
pub mod render;
pub mod world;
mod web;

pub use config::GameConfig;
pub use direction::Direction;
pub use error::GameError;
pub use game::Game;
pub use world::World;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// Starts the game with the default board.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())?;
    Ok(())
}

/// Starts the game from an already-built config. Invalid configs are
/// rejected before anything is added to the page.
pub fn start_game_with(config: GameConfig) -> Result<(), GameError> {
    web::start(config)
}

/// Starts the game from a JSON config; omitted fields use the defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    web::start(GameConfig::from_json(json)?)?;
    Ok(())
}
