#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod button;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

pub use button::LiquidButton;

thread_local! {
    // buttons mounted from markup at start-up; kept alive until `unmount_all`
    static AUTO_MOUNTED: RefCell<Vec<button::Mounted>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // the logger accepts debug records; buttons with `debug` set raise the filter
    console_log::init_with_level(log::Level::Debug).ok();
    log::set_max_level(log::LevelFilter::Info);
    log::info!("liquid-button starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down every button mounted from markup.
#[wasm_bindgen]
pub fn unmount_all() {
    let mounted = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    log::info!("unmounting {} buttons", mounted.len());
    drop(mounted);
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all(constants::AUTO_MOUNT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    for i in 0..nodes.length() {
        let Some(canvas) = nodes
            .get(i)
            .and_then(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            continue;
        };
        let config = liquid_core::ButtonConfig::from_options(dom::data_options(&canvas));
        match button::mount(Some(canvas), config) {
            Ok(m) => AUTO_MOUNTED.with(|all| all.borrow_mut().push(m)),
            Err(e) => log::error!("mount error: {:?}", e),
        }
    }
    Ok(())
}
