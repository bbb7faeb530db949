use super::{InputWiring, Listener};
use crate::constants::MIN_TOUCH_FORCE;
use crate::dom;
use crate::input;
use liquid_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Touches are tracked on the document body so a finger that slides onto the
/// button from outside still counts. Each button keeps only the touches that
/// land on its own surface.
pub fn wire(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    let body: web::EventTarget = dom::window_document()
        .and_then(|d| d.body())
        .ok_or_else(|| anyhow::anyhow!("no document body"))?
        .into();
    Ok(vec![
        wire_touches(w, &body, "touchstart")?,
        wire_touches(w, &body, "touchmove")?,
        wire_clear(w, &body, "touchend")?,
        wire_clear(w, &body, "touchcancel")?,
    ])
}

fn wire_touches(w: &InputWiring, body: &web::EventTarget, kind: &'static str) -> anyhow::Result<Listener> {
    let w = w.clone();
    // not passive: a touch on the button must not scroll the page
    Listener::attach(body, kind, false, move |ev: web::Event| {
        let Some(touch_ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let event = input::touches(touch_ev, &w.canvas, w.surface, MIN_TOUCH_FORCE);
        w.contacts.apply(event, w.surface);
        if !w.contacts.is_empty() {
            ev.prevent_default();
        }
    })
}

fn wire_clear(w: &InputWiring, body: &web::EventTarget, kind: &'static str) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::attach(body, kind, true, move |_ev: web::Event| {
        w.contacts.apply(InputEvent::TouchEnd, w.surface);
    })
}
