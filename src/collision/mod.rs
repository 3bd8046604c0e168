//! Circle hit-testing kernel
//!
//! Pure and allocation-free apart from the result vector of the batch
//! filter. Holds no state between calls, so it can be used from any number
//! of threads on disjoint inputs.

pub mod batch;
pub mod circle;
pub mod geometry;
pub mod overlap;
pub mod swept;

pub use batch::{collides_all, collides_all_indices, collides_any};
pub use circle::{Circle, CircleRecord};
pub use geometry::{Field, HasGeometry};
pub use overlap::{circles_overlap, overlaps};
pub use swept::{circles_collide, collides};
