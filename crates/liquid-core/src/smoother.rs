//! Closed-curve smoothing of a point ring.
//!
//! Each point gets a tangent parallel to the chord between its neighbours.
//! The handle on either side is as long as the distance to that neighbour
//! times `tension`, which keeps the joined cubic segments continuous in
//! direction at every point.

use crate::point::Point;
use glam::Vec2;
use std::fmt;

/// Recompute `handle_in` and `handle_out` of every point from its neighbours.
pub fn smooth(points: &mut [Point], tension: f32) {
    let n = points.len();
    if n == 0 {
        return;
    }
    for i in 0..n {
        let prev = points[(i + n - 1) % n].position;
        let next = points[(i + 1) % n].position;
        let point = &mut points[i];
        let p = point.position;
        let tangent = (next - prev).normalize_or_zero();
        point.handle_in = p - tangent * (p.distance(prev) * tension);
        point.handle_out = p + tangent * (p.distance(next) * tension);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub to: Vec2,
}

/// A closed outline: start at `start`, follow each segment, close.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ClosedPath {
    pub start: Vec2,
    pub segments: Vec<CubicSegment>,
}

impl ClosedPath {
    /// One segment per point, from each point to its successor, the last one
    /// returning to the first point.
    pub fn from_ring(points: &[Point]) -> Self {
        let n = points.len();
        let Some(first) = points.first() else {
            return Self::default();
        };
        let segments = (0..n)
            .map(|i| {
                let from = &points[i];
                let to = &points[(i + 1) % n];
                CubicSegment {
                    ctrl1: from.handle_out,
                    ctrl2: to.handle_in,
                    to: to.position,
                }
            })
            .collect();
        Self {
            start: first.position,
            segments,
        }
    }
}

/// SVG path data (`M x y C ... Z`).
impl fmt::Display for ClosedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M {} {}", self.start.x, self.start.y)?;
        for s in &self.segments {
            write!(
                f,
                " C {} {} {} {} {} {}",
                s.ctrl1.x, s.ctrl1.y, s.ctrl2.x, s.ctrl2.y, s.to.x, s.to.y
            )?;
        }
        write!(f, " Z")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(positions: &[Vec2]) -> Vec<Point> {
        positions.iter().copied().map(Point::at_rest).collect()
    }

    #[test]
    fn coincident_neighbours_do_not_produce_nan() {
        let mut points = ring(&[Vec2::ONE, Vec2::ONE, Vec2::ONE]);
        smooth(&mut points, 0.4);
        for p in &points {
            assert!(p.handle_in.is_finite() && p.handle_out.is_finite());
            assert_eq!(p.handle_in, Vec2::ONE);
            assert_eq!(p.handle_out, Vec2::ONE);
        }
    }

    #[test]
    fn handles_follow_neighbour_chord() {
        let mut points = ring(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]);
        smooth(&mut points, 0.5);
        // point 1: prev (0,0), next (10,10); chord direction (1,1)/sqrt2
        let p = &points[1];
        let dir = Vec2::new(1.0, 1.0).normalize();
        let expect_in = Vec2::new(10.0, 0.0) - dir * 5.0;
        let expect_out = Vec2::new(10.0, 0.0) + dir * 5.0;
        assert!((p.handle_in - expect_in).length() < 1e-5);
        assert!((p.handle_out - expect_out).length() < 1e-5);
    }

    #[test]
    fn ring_wraps_at_both_ends() {
        let mut points = ring(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 8.0),
        ]);
        smooth(&mut points, 0.4);
        // point 0 sees point 2 as prev and point 1 as next
        let chord = (Vec2::new(10.0, 0.0) - Vec2::new(5.0, 8.0)).normalize();
        let out = points[0].handle_out - points[0].position;
        assert!(out.normalize().dot(chord) > 0.9999);

        let path = ClosedPath::from_ring(&points);
        assert_eq!(path.segments.len(), 3);
        assert_eq!(path.segments[2].to, points[0].position);
        assert_eq!(path.segments[2].ctrl1, points[2].handle_out);
        assert_eq!(path.segments[2].ctrl2, points[0].handle_in);
    }

    #[test]
    fn path_data_is_closed() {
        let mut points = ring(&[Vec2::ZERO, Vec2::X, Vec2::Y]);
        smooth(&mut points, 0.0);
        let d = ClosedPath::from_ring(&points).to_string();
        assert!(d.starts_with("M 0 0 C "));
        assert!(d.ends_with(" Z"));
        assert_eq!(d.matches(" C ").count(), 3);
    }

    #[test]
    fn empty_ring_yields_empty_path() {
        assert!(ClosedPath::from_ring(&[]).segments.is_empty());
    }
}
