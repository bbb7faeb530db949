use crate::constants::DEFAULT_LAYERS;
use crate::point::Point;
use glam::Vec2;

/// Tuning for one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSettings {
    /// Velocity kept per tick, in `(0, 1]`. Lower settles faster.
    pub viscosity: f32,
    /// Base strength of the pointer push.
    pub mouse_force: f32,
    /// Largest pointer contribution a single contact may add per tick.
    pub force_limit: f32,
}

impl LayerSettings {
    pub const fn new(viscosity: f32, mouse_force: f32, force_limit: f32) -> Self {
        Self {
            viscosity,
            mouse_force,
            force_limit,
        }
    }

    /// Base settings for the layer at `index`, or the body layer's settings
    /// when there is no dedicated default for it.
    pub fn default_for(index: usize) -> Self {
        let (v, m, f) = DEFAULT_LAYERS
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_LAYERS[0]);
        Self::new(v, m, f)
    }
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self::default_for(0)
    }
}

/// An independently tuned ring of points.
#[derive(Clone, Debug)]
pub struct Layer {
    pub settings: LayerSettings,
    points: Vec<Point>,
}

impl Layer {
    pub fn new(settings: LayerSettings) -> Self {
        Self {
            settings,
            points: Vec::new(),
        }
    }

    /// Replace the whole ring with points at rest on `ring`.
    pub fn init_origins(&mut self, ring: &[Vec2]) {
        self.points = ring.iter().copied().map(Point::at_rest).collect();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access to the points. The ring length cannot change through it.
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }
}
