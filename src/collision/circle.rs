//! Circle accessor
//!
//! Reduces any [`HasGeometry`] object to a flat [`Circle`] record: current
//! position, previous position and radius, with defaults applied.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Field, HasGeometry};
use crate::consts::DEFAULT_RADIUS;
use crate::error::InvalidCircleError;

/// Geometry of one movable circle for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Current position
    pub pos: DVec2,
    /// Position at the start of the frame
    pub prev: DVec2,
    pub radius: f64,
}

impl Circle {
    /// A circle that did not move this frame
    pub fn stationary(pos: DVec2, radius: f64) -> Self {
        Self {
            pos,
            prev: pos,
            radius,
        }
    }

    /// A circle that moved from `prev` to `pos` this frame
    pub fn moving(prev: DVec2, pos: DVec2, radius: f64) -> Self {
        Self { pos, prev, radius }
    }

    /// Read a circle out of a movable object.
    ///
    /// `x` and `y` must be present and numeric. `px`/`py` fall back to
    /// `x`/`y` independently and `radius` falls back to
    /// [`DEFAULT_RADIUS`], but only when absent: a present field that is not
    /// numeric is an error.
    pub fn from_geometry<G: HasGeometry + ?Sized>(obj: &G) -> Result<Self, InvalidCircleError> {
        let x = required("x", obj.x())?;
        let y = required("y", obj.y())?;
        let px = optional("px", obj.px(), x)?;
        let py = optional("py", obj.py(), y)?;
        let radius = optional("radius", obj.radius(), DEFAULT_RADIUS)?;

        Ok(Self {
            pos: DVec2::new(x, y),
            prev: DVec2::new(px, py),
            radius,
        })
    }

    /// Displacement over the frame
    #[inline]
    pub fn travel(&self) -> DVec2 {
        self.pos - self.prev
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.pos == self.prev
    }
}

fn required(name: &'static str, field: Field) -> Result<f64, InvalidCircleError> {
    match field {
        Field::Number(v) => Ok(v),
        Field::Absent => {
            log::debug!("circle rejected: missing `{name}`");
            Err(InvalidCircleError::missing(name))
        }
        Field::Malformed(found) => {
            log::debug!("circle rejected: `{name}` is {found}");
            Err(InvalidCircleError::non_numeric(name, found))
        }
    }
}

fn optional(name: &'static str, field: Field, default: f64) -> Result<f64, InvalidCircleError> {
    match field {
        Field::Absent => Ok(default),
        other => required(name, other),
    }
}

impl HasGeometry for Circle {
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

/// Flat wire shape of a movable circle, using the field names the pattern
/// engine and renderer expect. Optional fields may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CircleRecord {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub py: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl CircleRecord {
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn with_prev(mut self, px: f64, py: f64) -> Self {
        self.px = Some(px);
        self.py = Some(py);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl HasGeometry for CircleRecord {
    fn x(&self) -> Field {
        self.x.into()
    }
    fn y(&self) -> Field {
        self.y.into()
    }
    fn px(&self) -> Field {
        self.px.into()
    }
    fn py(&self) -> Field {
        self.py.into()
    }
    fn radius(&self) -> Field {
        self.radius.into()
    }
}
