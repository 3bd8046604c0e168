//! Batch filter
//!
//! One reference (usually the player) against a whole population of
//! bullets. The reference is read once; each candidate is read and swept
//! against it in input order.

use super::circle::Circle;
use super::geometry::HasGeometry;
use super::swept::circles_collide;
use crate::error::InvalidCircleError;

/// Filter `candidates` down to those that collided with `reference` during
/// the past frame, preserving order.
///
/// Equivalent to calling [`super::collides`] on every candidate in turn.
/// Fails on the first candidate that is not a valid circle, in which case
/// no partial result is returned. An invalid reference fails before any
/// candidate is read.
pub fn collides_all<'a, R, T, I>(
    reference: &R,
    candidates: I,
) -> Result<Vec<&'a T>, InvalidCircleError>
where
    R: HasGeometry + ?Sized,
    T: HasGeometry + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let target = Circle::from_geometry(reference)?;
    let mut hits = Vec::new();
    let mut scanned = 0usize;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let circle = Circle::from_geometry(candidate).map_err(|e| e.at_candidate(index))?;
        if circles_collide(&target, &circle) {
            hits.push(candidate);
        }
        scanned += 1;
    }

    log::trace!("collides_all: {} of {} candidates hit", hits.len(), scanned);
    Ok(hits)
}

/// Like [`collides_all`] but returns the positions of the hits
pub fn collides_all_indices<'a, R, T, I>(
    reference: &R,
    candidates: I,
) -> Result<Vec<usize>, InvalidCircleError>
where
    R: HasGeometry + ?Sized,
    T: HasGeometry + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let target = Circle::from_geometry(reference)?;
    let mut hits = Vec::new();

    for (index, candidate) in candidates.into_iter().enumerate() {
        let circle = Circle::from_geometry(candidate).map_err(|e| e.at_candidate(index))?;
        if circles_collide(&target, &circle) {
            hits.push(index);
        }
    }

    Ok(hits)
}

/// Check whether any candidate collided with `reference`.
///
/// Stops at the first hit: candidates after it are never read, so an
/// invalid one there goes unnoticed.
pub fn collides_any<'a, R, T, I>(reference: &R, candidates: I) -> Result<bool, InvalidCircleError>
where
    R: HasGeometry + ?Sized,
    T: HasGeometry + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let target = Circle::from_geometry(reference)?;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let circle = Circle::from_geometry(candidate).map_err(|e| e.at_candidate(index))?;
        if circles_collide(&target, &circle) {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{CircleRecord, collides};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn dummy(x: f64, y: f64, px: f64, py: f64, radius: f64) -> CircleRecord {
        CircleRecord::point(x, y).with_prev(px, py).with_radius(radius)
    }

    #[test]
    fn test_collides_all_cross() {
        let a = dummy(0.0, 0.0, 100.0, 100.0, 1.0);
        let b = dummy(100.0, 100.0, 0.0, 100.0, 1.0);
        let c = dummy(0.0, 100.0, 100.0, 0.0, 1.0);
        let others = [a, b, c];

        let hits = collides_all(&a, &others).unwrap();
        assert_eq!(hits, vec![&a, &c]);
        // By reference, not by copy
        assert!(std::ptr::eq(hits[0], &others[0]));
        assert!(std::ptr::eq(hits[1], &others[2]));

        assert_eq!(collides_all_indices(&a, &others).unwrap(), vec![0, 2]);
        assert!(collides_any(&a, &others).unwrap());
    }

    #[test]
    fn test_collides_all_empty() {
        let none: Vec<CircleRecord> = Vec::new();
        assert!(collides_all(&(0.0, 0.0), &none).unwrap().is_empty());
        assert!(!collides_any(&(0.0, 0.0), &none).unwrap());
    }

    #[test]
    fn test_collides_all_mixed_trait_objects() {
        let bullets: Vec<Box<dyn HasGeometry>> = vec![
            Box::new((0.2_f64, 0.0_f64)),
            Box::new(dummy(50.0, 0.0, 50.0, 0.0, 1.0)),
            Box::new(json!({ "x": 1.0, "y": 0.0, "px": -1.0, "radius": 0.1 })),
        ];
        let hits = collides_all_indices(&(0.0, 0.0), &bullets).unwrap();
        assert_eq!(hits, vec![0, 2]);
    }

    #[test]
    fn test_collides_all_fails_on_first_bad_candidate() {
        let bullets = vec![
            json!({ "x": 0, "y": 0 }),
            json!({ "x": 0 }),
            json!({ "x": 0, "y": 0, "radius": "big" }),
        ];
        let err = collides_all(&(0.0, 0.0), &bullets).unwrap_err();
        assert_eq!(err.candidate, Some(1));
        assert_eq!(err.field, "y");
        assert!(err.is_missing());
    }

    #[test]
    fn test_collides_all_bad_reference_fails_first() {
        let bullets = vec![json!({ "x": 0 })];
        let err = collides_all(&json!({ "y": 0 }), &bullets).unwrap_err();
        assert_eq!(err.candidate, None);
        assert_eq!(err.field, "x");
    }

    #[test]
    fn test_collides_any_stops_at_first_hit() {
        let bullets = vec![json!({ "x": 0, "y": 0 }), json!({ "x": 0 })];
        assert!(collides_any(&(0.0, 0.0), &bullets).unwrap());

        let bullets = vec![json!({ "x": 9, "y": 9 }), json!({ "x": 0 })];
        let err = collides_any(&(0.0, 0.0), &bullets).unwrap_err();
        assert_eq!(err.candidate, Some(1));
    }

    #[test]
    fn test_collides_all_missing_fields_in_every_entry_point() {
        let bad: Value = json!({ "x": 1 });
        let ok = (0.0, 0.0);
        assert!(crate::collision::overlaps(&bad, &ok).is_err());
        assert!(collides(&bad, &ok).is_err());
        assert!(collides_all(&bad, [&ok]).is_err());
        assert!(collides_all(&ok, [&bad]).is_err());
    }

    fn arb_record() -> impl Strategy<Value = CircleRecord> {
        (
            -100.0..100.0f64,
            -100.0..100.0f64,
            -100.0..100.0f64,
            -100.0..100.0f64,
            0.0..20.0f64,
        )
            .prop_map(|(x, y, px, py, r)| dummy(x, y, px, py, r))
    }

    proptest! {
        #[test]
        fn test_prop_batch_matches_pairwise(
            reference in arb_record(),
            candidates in prop::collection::vec(arb_record(), 0..40),
        ) {
            let expected: Vec<&CircleRecord> = candidates
                .iter()
                .filter(|c| collides(&reference, *c).unwrap())
                .collect();
            let hits = collides_all(&reference, &candidates).unwrap();
            prop_assert_eq!(&hits, &expected);
            prop_assert_eq!(collides_any(&reference, &candidates).unwrap(), !expected.is_empty());

            let indices = collides_all_indices(&reference, &candidates).unwrap();
            prop_assert_eq!(indices.len(), hits.len());
            for (i, hit) in indices.iter().zip(&hits) {
                prop_assert!(std::ptr::eq(&candidates[*i], *hit));
            }
        }
    }
}
