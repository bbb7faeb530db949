//! Rest-shape generation and the rectangles the simulation measures against.
//!
//! The outline is a stadium: a straight top edge, a half-circle cap on the
//! right, a straight bottom edge and a half-circle cap on the left. Rest
//! points are laid out clockwise (in screen space) starting at the top-left
//! end of the top edge.

use crate::constants::{CAP_ARC_SCALE, MAX_RING_POINTS, MIN_RING_POINTS};
use glam::Vec2;
use std::f32::consts::PI;

/// Pixel size of the drawable surface (content box plus margin on each side).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Whether `p` lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }

    /// Map a surface position to `[0, 1]` over the whole drawable.
    #[inline]
    pub fn normalize(&self, p: Vec2) -> Vec2 {
        let w = if self.width > 0.0 { self.width } else { 1.0 };
        let h = if self.height > 0.0 { self.height } else { 1.0 };
        Vec2::new(p.x / w, p.y / h)
    }
}

/// The button's interior rectangle, edges included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Dimensions from which the rest ring is generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub gap: f32,
}

impl Outline {
    pub fn surface(&self) -> Surface {
        Surface {
            width: self.width + self.margin * 2.0,
            height: self.height + self.margin * 2.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: Vec2::splat(self.margin),
            max: Vec2::new(self.margin + self.width, self.margin + self.height),
        }
    }

    /// Ordered rest positions for one ring.
    ///
    /// Always returns at least [`MIN_RING_POINTS`] points. Sizes so small that
    /// the configured gap would leave fewer points are retried with the gap
    /// halved until the ring is large enough.
    pub fn rest_ring(&self) -> Vec<Vec2> {
        let mut gap = self.gap;
        loop {
            let ring = self.ring_with_gap(gap);
            if ring.len() >= MIN_RING_POINTS || gap <= f32::EPSILON {
                return ring;
            }
            log::debug!(
                "[outline] gap {} yields {} points, retrying with {}",
                gap,
                ring.len(),
                gap * 0.5
            );
            gap *= 0.5;
        }
    }

    fn ring_with_gap(&self, gap: f32) -> Vec<Vec2> {
        let (w, h, m) = (self.width, self.height, self.margin);
        let half = h / 2.0;
        let half_trunc = half.trunc();
        let arc_steps = (h * CAP_ARC_SCALE).trunc().max(1.0);
        let step_angle = PI / arc_steps;
        let cy = m + half;
        // bounds the walk even when `x += gap` stops advancing in f32
        let limit = (((w / gap).ceil() + (arc_steps / gap).ceil() + 2.0) * 2.0)
            .min(MAX_RING_POINTS as f32) as usize;
        let mut points = Vec::new();

        // top edge, left to right
        let mut x = half_trunc;
        while x < w - half_trunc && points.len() < limit {
            points.push(Vec2::new(x + m, m));
            x += gap;
        }

        // right cap, top to bottom
        let right_cx = m + w - half;
        let mut alpha = arc_steps;
        while alpha >= 0.0 && points.len() < limit {
            let angle = step_angle * alpha;
            points.push(Vec2::new(
                right_cx + angle.sin() * half,
                cy + angle.cos() * half,
            ));
            alpha -= gap;
        }

        // bottom edge, right to left
        let mut x = w - half_trunc - 1.0;
        while x >= half_trunc && points.len() < limit {
            points.push(Vec2::new(x + m, m + h));
            x -= gap;
        }

        // left cap, bottom to top
        let left_cx = m + half;
        let mut alpha = 0.0;
        while alpha <= arc_steps && points.len() < limit {
            let angle = step_angle * alpha;
            points.push(Vec2::new(
                left_cx - angle.sin() * half,
                cy + angle.cos() * half,
            ));
            alpha += gap;
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(width: f32, height: f32, margin: f32, gap: f32) -> Outline {
        Outline {
            width,
            height,
            margin,
            gap,
        }
    }

    #[test]
    fn ring_fits_inside_interior_bounds() {
        let o = outline(200.0, 50.0, 40.0, 5.0);
        let ring = o.rest_ring();
        assert!(ring.len() >= MIN_RING_POINTS);
        let eps = 1e-3;
        for p in &ring {
            assert!(p.x >= 40.0 - eps && p.x <= 240.0 + eps, "x out of range: {p:?}");
            assert!(p.y >= 40.0 - eps && p.y <= 90.0 + eps, "y out of range: {p:?}");
        }
    }

    #[test]
    fn ring_starts_on_top_edge_and_walks_clockwise() {
        let ring = outline(200.0, 50.0, 40.0, 5.0).rest_ring();
        assert_eq!(ring[0], Vec2::new(25.0 + 40.0, 40.0));
        assert_eq!(ring[1], Vec2::new(30.0 + 40.0, 40.0));
        // 30 top-edge points (x = 25..170), then the right cap begins at its top
        let cap_start = ring[30];
        assert!((cap_start.x - 215.0).abs() < 1e-3, "{cap_start:?}");
        assert!((cap_start.y - 40.0).abs() < 1e-3, "{cap_start:?}");
    }

    #[test]
    fn ring_is_deterministic() {
        let o = outline(180.0, 44.0, 12.0, 3.0);
        assert_eq!(o.rest_ring(), o.rest_ring());
    }

    #[test]
    fn tiny_outline_still_has_three_points() {
        // no straight edges and one point per cap at this gap
        let ring = outline(2.0, 8.0, 0.0, 50.0).rest_ring();
        assert!(ring.len() >= MIN_RING_POINTS, "got {}", ring.len());
        assert!(ring.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn stalled_step_is_capped() {
        // 1e-7 vanishes against x = 25 in f32, so the edge walk never advances
        let ring = outline(200.0, 50.0, 40.0, 1e-7).rest_ring();
        assert!(ring.len() <= MAX_RING_POINTS, "got {}", ring.len());

        let ring = outline(1e12, 50.0, 40.0, 5.0).rest_ring();
        assert!(ring.len() <= MAX_RING_POINTS, "got {}", ring.len());
        assert!(ring.len() >= MIN_RING_POINTS);
    }

    #[test]
    fn surface_adds_margin_on_both_sides() {
        let s = outline(200.0, 50.0, 40.0, 5.0).surface();
        assert_eq!(s.width, 280.0);
        assert_eq!(s.height, 130.0);
        assert!(s.contains(Vec2::ZERO));
        assert!(!s.contains(Vec2::new(280.0, 10.0)));
    }

    #[test]
    fn bounds_include_edges() {
        let b = outline(200.0, 50.0, 40.0, 5.0).bounds();
        assert!(b.contains(Vec2::new(40.0, 40.0)));
        assert!(b.contains(Vec2::new(240.0, 90.0)));
        assert!(!b.contains(Vec2::new(39.9, 60.0)));
    }
}
