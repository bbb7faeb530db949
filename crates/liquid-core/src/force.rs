//! Forces acting on a single point.
//!
//! Both forces are velocity increments. Every normalization checks its
//! length first so a zero or non-finite distance contributes nothing instead
//! of writing NaN into state that persists for the life of the button.

use crate::contact::Contact;
use crate::geometry::Bounds;
use crate::layer::LayerSettings;
use crate::point::Point;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceField {
    /// Spring scale toward the rest position.
    pub force_factor: f32,
    /// Multiplier for contacts inside `bounds`.
    pub hover_factor: f32,
    /// The button interior.
    pub bounds: Bounds,
}

impl ForceField {
    /// Spring pull toward the rest position, offset by `jitter`.
    pub fn restoring(&self, point: &Point, jitter: Vec2) -> Vec2 {
        let delta = point.rest() - point.position + jitter;
        let d = delta.length();
        if !(d > 0.0 && d.is_finite()) {
            return Vec2::ZERO;
        }
        (delta / d) * (d * self.force_factor)
    }

    /// Push from one contact on a point at `position`.
    ///
    /// Falls off with the inverse of the distance and is clamped to
    /// `±settings.force_limit`. Contacts over the button interior use
    /// `mouse_force * hover_factor` instead of the raw `mouse_force`.
    pub fn pointer(&self, position: Vec2, contact: &Contact, settings: &LayerSettings) -> Vec2 {
        let away = position - contact.position;
        let dist = away.length();
        if !(dist > 0.0 && dist.is_finite()) {
            return Vec2::ZERO;
        }
        let base = if self.bounds.contains(contact.position) {
            settings.mouse_force * self.hover_factor
        } else {
            settings.mouse_force
        };
        let limit = settings.force_limit.abs();
        let magnitude = (base * contact.force / dist).max(-limit).min(limit);
        if !magnitude.is_finite() {
            return Vec2::ZERO;
        }
        (away / dist) * magnitude
    }
}
