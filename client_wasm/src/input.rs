//! Mouse input handling

use game_core::PointerSlot;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Pointer y relative to the canvas top edge
pub fn pointer_y(event: &MouseEvent, canvas: &HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (event.client_y() as f64 - rect.top()) as f32
}

/// Listen for `mousemove` on the canvas and feed the pointer slot.
///
/// The returned closure must stay alive for as long as the listener is
/// registered.
pub fn listen_mouse_move(
    canvas: &HtmlCanvasElement,
    slot: PointerSlot,
) -> Result<Closure<dyn FnMut(MouseEvent)>, JsValue> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        slot.set(pointer_y(&event, &target));
    });
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    Ok(on_move)
}
