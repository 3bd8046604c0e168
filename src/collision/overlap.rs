//! Static overlap test
//!
//! Point-in-time check on current positions only. Useful for "has the player
//! entered this zone" style questions; for bullets use [`super::collides`].

use super::circle::Circle;
use super::geometry::HasGeometry;
use crate::error::InvalidCircleError;

/// Check if two circles overlap at their current positions.
///
/// Touching circles count as overlapping.
#[inline]
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let r = a.radius + b.radius;
    a.pos.distance_squared(b.pos) <= r * r
}

/// Check if two movable objects overlap at their current positions,
/// ignoring any motion history.
pub fn overlaps<A, B>(a: &A, b: &B) -> Result<bool, InvalidCircleError>
where
    A: HasGeometry + ?Sized,
    B: HasGeometry + ?Sized,
{
    let a = Circle::from_geometry(a)?;
    let b = Circle::from_geometry(b)?;
    Ok(circles_overlap(&a, &b))
}
