//! Bullet Hit - swept circle hit-testing for bullet-pattern shooters
//!
//! Core modules:
//! - `collision`: Static overlap, swept collision and the batch filter
//! - `error`: The single error raised for objects that are not circles
//! - `sim`: Deterministic linearly moving bodies for driving the kernel
//! - `settings`: Demo scan configuration

pub mod collision;
pub mod error;
pub mod settings;
pub mod sim;

pub use collision::{
    Circle, CircleRecord, Field, HasGeometry, collides, collides_all, collides_any, overlaps,
};
pub use error::{InvalidCircleError, InvalidCircleKind};
pub use settings::{DensityPreset, ScanSettings};

use glam::DVec2;

/// Kernel configuration constants
pub mod consts {
    /// Radius used when an object does not carry one
    pub const DEFAULT_RADIUS: f64 = 0.5;
    /// Per-axis relative travel below which the swept test treats both
    /// circles as stationary
    pub const STATIONARY_EPSILON: f64 = 1e-4;

    /// Demo simulation rate (frames per second)
    pub const FRAME_RATE: u32 = 60;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, PI / 2.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }
}
