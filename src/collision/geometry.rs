//! Read-only geometry capability
//!
//! Anything the pattern engine or renderer wants to hit-test implements
//! [`HasGeometry`]. Only `x` and `y` are required; `px`, `py` and `radius`
//! may be absent and are then defaulted by the circle accessor.
//!
//! An absent optional field gets its default. A malformed one is always
//! fatal.

use glam::DVec2;
use serde_json::Value;

/// The state of one named field on a movable object
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// The object does not carry this field
    Absent,
    /// The field holds a number
    Number(f64),
    /// The field exists but holds something that is not a number.
    /// Carries a short description of what was found.
    Malformed(String),
}

impl Field {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl From<Option<f64>> for Field {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Field::Absent, Field::Number)
    }
}

/// A movable circle, as seen by the collision kernel.
///
/// The kernel only reads through this trait and never keeps a reference
/// past a single call.
pub trait HasGeometry {
    /// Current x position (required)
    fn x(&self) -> Field;
    /// Current y position (required)
    fn y(&self) -> Field;

    /// Previous-frame x position, defaults to `x`
    fn px(&self) -> Field {
        Field::Absent
    }

    /// Previous-frame y position, defaults to `y`
    fn py(&self) -> Field {
        Field::Absent
    }

    /// Collision radius, defaults to `0.5`
    fn radius(&self) -> Field {
        Field::Absent
    }
}

impl<T: HasGeometry + ?Sized> HasGeometry for &T {
    fn x(&self) -> Field {
        (**self).x()
    }
    fn y(&self) -> Field {
        (**self).y()
    }
    fn px(&self) -> Field {
        (**self).px()
    }
    fn py(&self) -> Field {
        (**self).py()
    }
    fn radius(&self) -> Field {
        (**self).radius()
    }
}

impl<T: HasGeometry + ?Sized> HasGeometry for Box<T> {
    fn x(&self) -> Field {
        (**self).x()
    }
    fn y(&self) -> Field {
        (**self).y()
    }
    fn px(&self) -> Field {
        (**self).px()
    }
    fn py(&self) -> Field {
        (**self).py()
    }
    fn radius(&self) -> Field {
        (**self).radius()
    }
}

/// A bare stationary point, e.g. the player cursor
impl HasGeometry for (f64, f64) {
    fn x(&self) -> Field {
        self.0.into()
    }
    fn y(&self) -> Field {
        self.1.into()
    }
}

impl HasGeometry for DVec2 {
    fn x(&self) -> Field {
        self.x.into()
    }
    fn y(&self) -> Field {
        self.y.into()
    }
}

/// Dynamic objects, e.g. pattern data loaded from JSON.
///
/// Keys are looked up by name. A non-object value exposes no fields at all.
impl HasGeometry for Value {
    fn x(&self) -> Field {
        json_field(self, "x")
    }
    fn y(&self) -> Field {
        json_field(self, "y")
    }
    fn px(&self) -> Field {
        json_field(self, "px")
    }
    fn py(&self) -> Field {
        json_field(self, "py")
    }
    fn radius(&self) -> Field {
        json_field(self, "radius")
    }
}

fn json_field(value: &Value, name: &str) -> Field {
    match value.get(name) {
        None => Field::Absent,
        Some(Value::Number(n)) => n
            .as_f64()
            .map_or_else(|| Field::Malformed(n.to_string()), Field::Number),
        Some(Value::Null) => Field::Malformed("null".to_string()),
        Some(Value::Bool(b)) => Field::Malformed(format!("bool {b}")),
        Some(Value::String(s)) => Field::Malformed(format!("string {s:?}")),
        Some(Value::Array(_)) => Field::Malformed("array".to_string()),
        Some(Value::Object(_)) => Field::Malformed("object".to_string()),
    }
}
