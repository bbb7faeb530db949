//! Layer stack and per-frame render descriptors.
//!
//! All layers share the rest ring produced by the outline but simulate
//! independently. A [`Frame`] lists them bottom to top, so painting in order
//! puts the highlight layer last.

use crate::config::{ButtonConfig, Palette};
use crate::contact::Contact;
use crate::force::ForceField;
use crate::geometry::{Outline, Surface};
use crate::integrator;
use crate::layer::Layer;
use crate::smoother::{self, ClosedPath};
use glam::Vec2;
use rand::prelude::*;

/// Radial gradient centred on a contact, in coordinates normalized over the
/// whole drawable.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub inner: String,
    pub outer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Flat(String),
    /// One gradient per active contact, in contact order.
    Gradients(Vec<RadialGradient>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerFrame {
    pub path: ClosedPath,
    pub fill: Fill,
}

/// Centered label. `baseline_offset` is measured down from the vertical
/// middle of the drawable.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub color: String,
    pub font_px: f32,
    pub baseline_offset: f32,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub surface: Surface,
    pub layers: Vec<LayerFrame>,
    pub label: Label,
}

pub struct Compositor {
    layers: Vec<Layer>,
    outline: Outline,
    field: ForceField,
    tension: f32,
    noise: f32,
    palette: Palette,
    label: String,
    rng: StdRng,
}

impl Compositor {
    /// Build the layer stack for `config` with every ring at rest.
    ///
    /// `seed` drives the positional noise; equal seeds replay identically.
    pub fn new(config: &ButtonConfig, seed: u64) -> Self {
        let mut compositor = Self {
            layers: config.layers.iter().copied().map(Layer::new).collect(),
            outline: config.outline,
            field: config.force_field(),
            tension: config.tension,
            noise: config.noise,
            palette: config.palette.clone(),
            label: config.label.clone(),
            rng: StdRng::seed_from_u64(seed),
        };
        compositor.init_origins();
        compositor
    }

    /// Rebuild every ring from the outline. All motion is discarded.
    pub fn init_origins(&mut self) {
        let ring = self.outline.rest_ring();
        for layer in &mut self.layers {
            layer.init_origins(&ring);
        }
        log::debug!(
            "[compositor] {} layers x {} points on {}x{} (+{} margin)",
            self.layers.len(),
            ring.len(),
            self.outline.width,
            self.outline.height,
            self.outline.margin
        );
    }

    /// One integration tick on every layer.
    pub fn integrate(&mut self, contacts: &[Contact]) {
        let noise = self.noise;
        let rng = &mut self.rng;
        let mut jitter = || {
            if noise > 0.0 {
                Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * noise
            } else {
                Vec2::ZERO
            }
        };
        for layer in &mut self.layers {
            integrator::integrate(layer, &self.field, contacts, &mut jitter);
        }
    }

    /// Recompute the smoothing handles on every layer.
    pub fn smooth(&mut self) {
        for layer in &mut self.layers {
            smoother::smooth(layer.points_mut(), self.tension);
        }
    }

    /// Render descriptors for the current state. Gradients are built fresh
    /// from `contacts` on every call.
    pub fn frame(&self, contacts: &[Contact]) -> Frame {
        let surface = self.outline.surface();
        let top = self.layers.len().saturating_sub(1);
        let layers = self
            .layers
            .iter()
            .enumerate()
            .map(|(i, layer)| LayerFrame {
                path: ClosedPath::from_ring(layer.points()),
                fill: if i == top {
                    self.highlight_fill(contacts, surface)
                } else {
                    Fill::Flat(self.palette.body.clone())
                },
            })
            .collect();
        let height = self.outline.height;
        Frame {
            surface,
            layers,
            label: Label {
                text: self.label.clone(),
                color: self.palette.text.clone(),
                font_px: (height / 2.0).trunc(),
                baseline_offset: (height / 8.0).trunc(),
            },
        }
    }

    fn highlight_fill(&self, contacts: &[Contact], surface: Surface) -> Fill {
        if contacts.is_empty() {
            return Fill::Flat(self.palette.highlight.clone());
        }
        Fill::Gradients(
            contacts
                .iter()
                .map(|c| RadialGradient {
                    center: surface.normalize(c.position),
                    radius: c.force,
                    inner: self.palette.accent.clone(),
                    outer: self.palette.highlight.clone(),
                })
                .collect(),
        )
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}
