//! Swept (continuous) circle collision
//!
//! Both circles move linearly from their previous to their current position
//! over one frame. We switch to a frame where `a` stays put at its previous
//! position, so `b` traces a segment and the problem becomes point vs
//! segment distance against the summed radius.

use super::circle::Circle;
use super::geometry::HasGeometry;
use crate::consts::STATIONARY_EPSILON;
use crate::error::InvalidCircleError;

/// Check whether two moving circles touched at any time during the frame.
///
/// Endpoints are inclusive and so is the distance comparison. When there is
/// no relative motion (within [`STATIONARY_EPSILON`] on each axis) this is
/// exactly the point vs circle check at the start of the frame.
#[inline]
pub fn circles_collide(a: &Circle, b: &Circle) -> bool {
    // b's travel with a's own motion subtracted out
    let dir = a.prev + (b.pos - a.pos) - b.prev;
    let diff = a.prev - b.prev;
    let r = a.radius + b.radius;

    if dir.x.abs() < STATIONARY_EPSILON && dir.y.abs() < STATIONARY_EPSILON {
        return diff.length_squared() <= r * r;
    }

    // Closest approach along the segment, not the infinite line
    let t = (diff.dot(dir) / dir.dot(dir)).clamp(0.0, 1.0);
    let dist = a.prev - (b.prev + dir * t);

    dist.length_squared() <= r * r
}

/// Check whether two movable objects collided during the past frame.
///
/// Objects without `px`/`py` are treated as stationary, objects without a
/// `radius` use the default radius.
pub fn collides<A, B>(a: &A, b: &B) -> Result<bool, InvalidCircleError>
where
    A: HasGeometry + ?Sized,
    B: HasGeometry + ?Sized,
{
    let a = Circle::from_geometry(a)?;
    let b = Circle::from_geometry(b)?;
    Ok(circles_collide(&a, &b))
}
