use liquid_core::{SharedContacts, Surface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;
mod touch;

/// An event listener that owns its closure.
///
/// The same closure is used to register and to deregister, so removal always
/// matches. Dropping the listener removes it.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub contacts: SharedContacts,
    pub surface: Surface,
}

/// Register mouse handlers on the canvas and touch handlers on the document
/// body. Every handler replaces the contact list; none edits it.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = pointer::wire(w)?;
    listeners.extend(touch::wire(w)?);
    Ok(listeners)
}
