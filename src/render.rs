use crate::constants::{
    DEBUG_DOT_COLOR, DEBUG_DOT_RADIUS, FONT_FAMILY, GRADIENT_RADIUS_DIAGONAL_DIVISOR,
};
use liquid_core::{ClosedPath, Fill, Frame, FrameSink, Label, RadialGradient, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D painter for [`Frame`]s. Works in surface units; the device
/// pixel ratio is folded into the context transform.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    debug: bool,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement, dpr: f64, debug: bool) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx, dpr, debug })
    }

    fn trace(&self, path: &ClosedPath) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(path.start.x as f64, path.start.y as f64);
        for seg in &path.segments {
            ctx.bezier_curve_to(
                seg.ctrl1.x as f64,
                seg.ctrl1.y as f64,
                seg.ctrl2.x as f64,
                seg.ctrl2.y as f64,
                seg.to.x as f64,
                seg.to.y as f64,
            );
        }
        ctx.close_path();
    }

    fn gradient(&self, g: &RadialGradient, surface: Surface) -> Option<web::CanvasGradient> {
        let (w, h) = (surface.width as f64, surface.height as f64);
        let cx = g.center.x as f64 * w;
        let cy = g.center.y as f64 * h;
        let r = g.radius as f64 * ((w * w + h * h) / GRADIENT_RADIUS_DIAGONAL_DIVISOR).sqrt();
        let grad = self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r).ok()?;
        _ = grad.add_color_stop(0.0, &g.inner);
        _ = grad.add_color_stop(1.0, &g.outer);
        Some(grad)
    }

    fn fill(&self, fill: &Fill, surface: Surface) {
        match fill {
            Fill::Flat(color) => {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill();
            }
            Fill::Gradients(gradients) => {
                for g in gradients {
                    match self.gradient(g, surface) {
                        Some(grad) => self.ctx.set_fill_style_canvas_gradient(&grad),
                        None => self.ctx.set_fill_style_str(&g.outer),
                    }
                    self.ctx.fill();
                }
            }
        }
    }

    fn label(&self, label: &Label, surface: Surface) {
        let ctx = &self.ctx;
        ctx.set_font(&format!("{}px {}", label.font_px, FONT_FAMILY));
        ctx.set_text_align("center");
        ctx.set_fill_style_str(&label.color);
        let x = surface.width as f64 / 2.0;
        let y = surface.height as f64 / 2.0 + label.baseline_offset as f64;
        _ = ctx.fill_text(&label.text, x, y);
    }

    fn dots(&self, path: &ClosedPath) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(DEBUG_DOT_COLOR);
        for p in std::iter::once(path.start).chain(path.segments.iter().map(|s| s.to)) {
            ctx.begin_path();
            _ = ctx.arc(p.x as f64, p.y as f64, DEBUG_DOT_RADIUS, 0.0, TAU);
            ctx.fill();
        }
    }
}

impl FrameSink for CanvasRenderer {
    fn present(&mut self, frame: &Frame) {
        let s = frame.surface;
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, s.width as f64, s.height as f64);
        for layer in &frame.layers {
            self.trace(&layer.path);
            self.fill(&layer.fill, s);
        }
        self.label(&frame.label, s);
        if self.debug {
            for layer in &frame.layers {
                self.dots(&layer.path);
            }
        }
    }
}
