use glam::Vec2;

/// One vertex of a layer's outline ring.
///
/// `rest` is fixed when the ring is built; `position` and `velocity` are
/// advanced by the integrator every tick. The two handles are derived by the
/// smoother from the neighbours and carry no state of their own.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub position: Vec2,
    pub velocity: Vec2,
    pub handle_in: Vec2,
    pub handle_out: Vec2,
    rest: Vec2,
}

impl Point {
    /// A point sitting still at its rest position.
    pub fn at_rest(rest: Vec2) -> Self {
        Self {
            position: rest,
            velocity: Vec2::ZERO,
            handle_in: rest,
            handle_out: rest,
            rest,
        }
    }

    #[inline]
    pub fn rest(&self) -> Vec2 {
        self.rest
    }
}
