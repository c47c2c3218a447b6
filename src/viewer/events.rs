//! Wheel event wiring for `CanvasTable` (wasm32 only).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, WheelEvent};

use super::SharedState;

/// Register the wheel listener on the canvas.
///
/// Registered with `passive: false` so `prevent_default()` is honored when
/// the table consumes the scroll; events the table cannot act on fall
/// through to the host's default scrolling. The returned closure must stay
/// alive as long as the listener.
pub(crate) fn attach_wheel(
    canvas: &HtmlCanvasElement,
    state: &Rc<RefCell<SharedState>>,
) -> Result<Closure<dyn FnMut(WheelEvent)>, JsValue> {
    let state = Rc::clone(state);
    let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
        let mut s = state.borrow_mut();
        let s = &mut *s;
        if s.table.apply_wheel(event.delta_x(), event.delta_y()) {
            event.prevent_default();
            s.table.repaint(&mut s.surface);
            s.sync_thumb_position();
        }
    }) as Box<dyn FnMut(WheelEvent)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &options,
    )?;

    Ok(closure)
}
