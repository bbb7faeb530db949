use super::{InputWiring, Listener};
use crate::input;
use liquid_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![wire_pointermove(w)?, wire_pointerleave(w)?])
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::attach(&target, "pointermove", true, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if let Some(event) = input::pointer_move(ev, &w.canvas, w.surface) {
            w.contacts.apply(event, w.surface);
        }
    })
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::attach(&target, "pointerleave", true, move |_ev: web::Event| {
        w.contacts.apply(InputEvent::PointerLeave, w.surface);
    })
}
