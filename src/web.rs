//! Browser wiring: canvas lookup, input listeners and the animation loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::{GameError, GameResult};
use crate::game::Game;
use crate::input::InputSlot;

const CONTROLS_ID: &str = "pacman-controls";

thread_local! {
    static GAME: RefCell<Option<Game<CanvasRenderingContext2d>>> = const { RefCell::new(None) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Sets up the page and starts ticking. A second call while a game is
/// running is ignored.
pub fn start(mut config: GameConfig) -> GameResult<()> {
    config.validate()?;
    if GAME.with(|g| g.borrow().is_some()) {
        tracing::warn!("game already running");
        return Ok(());
    }

    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas = find_or_create_canvas(&doc, &mut config)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .and_then(|c| c.dyn_into().ok())
        .ok_or_else(|| GameError::ContextUnavailable(config.canvas_id.clone()))?;
    // A page canvas may have overridden the size
    config.validate()?;

    tracing::info!(width = config.width, height = config.height, "starting game");
    let game = Game::new(config, ctx);
    bind_buttons(&doc, &game.input)?;
    bind_keys(&doc, game.input.clone())?;

    GAME.with(|g| g.replace(Some(game)));
    start_loop();
    Ok(())
}

/// Reuses the configured canvas if the page has one (its size wins over the
/// config), otherwise appends a new one sized from the config.
fn find_or_create_canvas(doc: &Document, config: &mut GameConfig) -> GameResult<HtmlCanvasElement> {
    if let Some(el) = doc.get_element_by_id(&config.canvas_id) {
        let canvas: HtmlCanvasElement = el
            .dyn_into()
            .map_err(|_| GameError::Js(format!("#{} is not a canvas", config.canvas_id)))?;
        config.width = canvas.width() as f64;
        config.height = canvas.height() as f64;
        return Ok(canvas);
    }

    let canvas: HtmlCanvasElement = doc
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| GameError::Js("created element is not a canvas".into()))?;
    canvas.set_id(&config.canvas_id);
    canvas.set_width(config.width as u32);
    canvas.set_height(config.height as u32);
    canvas.set_attribute("style", "display:block; margin:16px auto; background:#000; border:2px solid #222;")?;
    doc.body().ok_or(GameError::NoBody)?.append_child(&canvas)?;
    Ok(canvas)
}

fn arrow_label(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}

/// One click listener per direction button. Missing buttons are created in
/// a small control strip under the canvas.
fn bind_buttons(doc: &Document, input: &InputSlot) -> GameResult<()> {
    for dir in Direction::DIRECTIONS {
        let button = match doc.get_element_by_id(dir.as_ref()) {
            Some(el) => el,
            None => {
                let strip = match doc.get_element_by_id(CONTROLS_ID) {
                    Some(el) => el,
                    None => {
                        let div = doc.create_element("div")?;
                        div.set_id(CONTROLS_ID);
                        div.set_attribute("style", "text-align:center; font-size:24px;")?;
                        doc.body().ok_or(GameError::NoBody)?.append_child(&div)?;
                        div
                    }
                };
                let button = doc.create_element("button")?;
                button.set_id(dir.as_ref());
                button.set_text_content(Some(arrow_label(dir)));
                strip.append_child(&button)?;
                button
            }
        };

        let input = input.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            input.request(dir);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn bind_keys(doc: &Document, input: InputSlot) -> GameResult<()> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if let Some(dir) = Direction::from_key_code(&evt.code()) {
            // Arrow keys would otherwise scroll the page
            evt.prevent_default();
            input.request(dir);
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        GAME.with(|cell| {
            if let Some(game) = cell.borrow_mut().as_mut() {
                game.frame(ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    let Some(win) = window() else { return };
    if let Some(cb) = callback.borrow().as_ref() {
        if let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
            tracing::error!(?err, "requestAnimationFrame failed");
        }
    }
}
