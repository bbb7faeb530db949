//! Physics and geometry for the liquid button.
//!
//! A ring of spring-loaded points rests on a stadium outline, is pushed
//! around by pointer and touch contacts and relaxes back. Each tick the ring
//! is smoothed into a closed cubic curve and composed with the other layers
//! into a [`Frame`] for whatever renderer the host provides.
//!
//! Main components:
//! - [`geometry`]: rest-ring generation and surface/interior rectangles.
//! - [`force`]: restoring and pointer forces.
//! - [`integrator`]: per-tick velocity/position update.
//! - [`smoother`]: handle computation and closed path emission.
//! - [`compositor`]: the layer stack and render descriptors.
//! - [`driver`]: step lifecycle.
//! - [`contact`]: contacts shared with input handlers.
//! - [`config`]: options and defaults.

pub mod compositor;
pub mod config;
pub mod constants;
pub mod contact;
pub mod driver;
pub mod error;
pub mod force;
pub mod geometry;
pub mod integrator;
pub mod layer;
pub mod point;
pub mod smoother;

pub use compositor::*;
pub use config::{ButtonConfig, Palette};
pub use contact::*;
pub use driver::*;
pub use error::ConfigError;
pub use force::ForceField;
pub use geometry::*;
pub use layer::*;
pub use point::Point;
pub use smoother::{ClosedPath, CubicSegment};
