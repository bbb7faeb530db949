use crate::dom;
use crate::events::{self, InputWiring, Listener};
use crate::frame::FrameLoop;
use crate::render::CanvasRenderer;
use liquid_core::{ButtonConfig, Compositor, Driver, SharedContacts};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// One live button: its driver, its frame loop and its input listeners.
/// Dropping it tears everything down.
pub struct Mounted {
    id: u32,
    driver: Rc<RefCell<Driver>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

impl Mounted {
    pub fn id(&self) -> u32 {
        self.id
    }

    fn teardown(&mut self) {
        self.frame_loop.stop();
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.stop();
            driver.contacts().clear();
        }
        if !self.listeners.is_empty() {
            self.listeners.clear();
            log::info!("[button {}] unmounted", self.id);
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub fn mount(canvas: Option<web::HtmlCanvasElement>, config: ButtonConfig) -> anyhow::Result<Mounted> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    if config.debug {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::resolve_canvas(&document, canvas, config.wrapper.as_deref())?;
    let surface = config.surface();
    let dpr = dom::size_canvas(&canvas, surface);
    log::debug!(
        "[button {}] surface {}x{} at dpr {}",
        id,
        surface.width,
        surface.height,
        dpr
    );

    let contacts = SharedContacts::new();
    let compositor = Compositor::new(&config, id as u64);
    let driver = Rc::new(RefCell::new(Driver::new(compositor, contacts.clone())));

    let listeners = events::wire_input_handlers(&InputWiring {
        canvas: canvas.clone(),
        contacts,
        surface,
    })?;
    let renderer = CanvasRenderer::new(&canvas, dpr, config.debug)?;

    driver.borrow_mut().start();
    let frame_loop = FrameLoop::start(id, driver.clone(), renderer, config.debug);
    log::info!("[button {}] mounted", id);

    Ok(Mounted {
        id,
        driver,
        frame_loop,
        listeners,
    })
}

/// Handle for a button mounted from JS.
#[wasm_bindgen]
pub struct LiquidButton {
    id: u32,
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl LiquidButton {
    /// Mount on `canvas`, or on a new canvas appended to the configured
    /// wrapper. `options` is a plain object; a given canvas's `data-*`
    /// attributes are read first and `options` override them.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: Option<web::HtmlCanvasElement>, options: JsValue) -> Result<LiquidButton, JsValue> {
        let from_markup = canvas.as_ref().map(|c| dom::data_options(c)).unwrap_or_default();
        let config = ButtonConfig::from_options(from_markup).with_options(dom::object_options(&options));
        let mounted = mount(canvas, config).map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        Ok(LiquidButton {
            id: mounted.id(),
            inner: Some(mounted),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Stop the animation and remove every listener. Safe to call twice.
    pub fn destroy(&mut self) {
        drop(self.inner.take());
    }
}
