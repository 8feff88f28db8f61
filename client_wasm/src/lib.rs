//! Browser host for the Pong core
//!
//! Draws on a 2D canvas, feeds the left paddle from the mouse, and ticks the
//! simulation once per animation frame.
//! Note: only built for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod input;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasRenderer;
use game_core::{CancelToken, Config, FrameScheduler, GameRng, PointerSlot};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Handle to a running game. Dropping it (or `free()` from JS) stops the game.
#[wasm_bindgen]
pub struct PongHandle {
    token: CancelToken,
    canvas: HtmlCanvasElement,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl PongHandle {
    /// Stop the frame loop and detach the mouse listener
    pub fn stop(&self) -> Result<(), JsValue> {
        self.token.cancel();
        self.canvas.remove_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        )
    }
}

impl Drop for PongHandle {
    fn drop(&mut self) {
        // The listener must not outlive its closure
        let _ = self.stop();
    }
}

/// Start a game on `canvas`
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<PongHandle, JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    // Surface size is read once; later canvas resizes are not picked up
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let config = Config::new().with_surface(width, height);

    let pointer = PointerSlot::new();
    let mut scheduler = FrameScheduler::new(config, GameRng::from_entropy(), pointer.clone())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut renderer = CanvasRenderer::new(&canvas)?;
    let on_mouse_move = input::listen_mouse_move(&canvas, pointer)?;

    let token = CancelToken::new();
    let loop_token = token.clone();
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        if loop_token.is_cancelled() {
            log::info!("frame loop stopped after {} frames", scheduler.frame());
            // Drop our own handle so the closure can be freed
            let _ = next_frame.borrow_mut().take();
            return;
        }

        if let Err(e) = scheduler.tick(&mut renderer) {
            log::error!("render failed, stopping: {:?}", e);
            loop_token.cancel();
        }

        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("could not schedule next frame: {:?}", e);
            }
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    log::info!("pong started on a {}x{} canvas", width, height);

    Ok(PongHandle {
        token,
        canvas,
        on_mouse_move,
    })
}
