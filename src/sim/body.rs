//! Linearly moving circle bodies
//!
//! Minimal producer of movable circles. Each `step` remembers where the body
//! was before moving, which is exactly the `px`/`py` history the swept test
//! needs.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::collision::{Field, HasGeometry};

/// A bullet or target moving in a straight line each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: DVec2,
    /// Position before the last step
    pub prev: DVec2,
    /// Displacement per frame
    pub vel: DVec2,
    pub radius: f64,
}

impl Body {
    /// A body at rest; `prev` starts equal to `pos`
    pub fn new(id: u32, pos: DVec2, radius: f64) -> Self {
        Self {
            id,
            pos,
            prev: pos,
            vel: DVec2::ZERO,
            radius,
        }
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    /// Advance one frame along the current velocity
    pub fn step(&mut self) {
        self.prev = self.pos;
        self.pos += self.vel;
    }

    /// Move to an explicit position (e.g. player input), keeping the swept
    /// history
    pub fn move_to(&mut self, pos: DVec2) {
        self.prev = self.pos;
        self.vel = pos - self.pos;
        self.pos = pos;
    }

    /// True once both ends of the last step lie outside `radius` of the origin
    pub fn is_outside(&self, radius: f64) -> bool {
        let limit = radius + self.radius;
        self.pos.length_squared() > limit * limit && self.prev.length_squared() > limit * limit
    }
}

impl HasGeometry for Body {
    fn x(&self) -> Field {
        self.pos.x.into()
    }
    fn y(&self) -> Field {
        self.pos.y.into()
    }
    fn px(&self) -> Field {
        self.prev.x.into()
    }
    fn py(&self) -> Field {
        self.prev.y.into()
    }
    fn radius(&self) -> Field {
        self.radius.into()
    }
}
