use crate::constants::DATA_ATTR_PREFIX;
use liquid_core::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `data-*` attributes of `el` as option pairs, prefix stripped.
pub fn data_options(el: &web::Element) -> Vec<(String, String)> {
    el.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = name.strip_prefix(DATA_ATTR_PREFIX)?.to_string();
            let value = el.get_attribute(&name)?;
            Some((key, value))
        })
        .collect()
}

/// Own enumerable properties of a plain JS object as option pairs. Numbers
/// and booleans are stringified; other values are skipped.
pub fn object_options(obj: &JsValue) -> Vec<(String, String)> {
    if obj.is_undefined() || obj.is_null() {
        return Vec::new();
    }
    let Some(obj) = obj.dyn_ref::<js_sys::Object>() else {
        log::warn!("[config] options must be an object, got {:?}", obj);
        return Vec::new();
    };
    js_sys::Object::entries(obj)
        .iter()
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            let key = pair.get(0).as_string()?;
            let v = pair.get(1);
            let value = v
                .as_string()
                .or_else(|| v.as_f64().map(|n| n.to_string()))
                .or_else(|| v.as_bool().map(|b| b.to_string()))?;
            Some((key, value))
        })
        .collect()
}

/// The canvas to draw on: `canvas` itself, or a new one appended to the
/// element with id `wrapper` (the document body when absent or missing).
/// An existing canvas without a parent is attached the same way.
pub fn resolve_canvas(
    document: &web::Document,
    canvas: Option<web::HtmlCanvasElement>,
    wrapper: Option<&str>,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = match canvas {
        Some(c) => c,
        None => document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    };
    if canvas.parent_element().is_none() {
        let host: web::Element = match wrapper.and_then(|id| document.get_element_by_id(id)) {
            Some(el) => el,
            None => document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no document body"))?
                .into(),
        };
        host.append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(canvas)
}

/// Give the canvas the drawable's CSS size and a backing store scaled by the
/// device pixel ratio. Returns the ratio used.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, surface: Surface) -> f64 {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", surface.width));
    _ = style.set_property("height", &format!("{}px", surface.height));
    let w_px = (surface.width as f64 * dpr).ceil() as u32;
    let h_px = (surface.height as f64 * dpr).ceil() as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    dpr
}
