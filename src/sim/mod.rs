//! Deterministic bullet simulation
//!
//! A small producer of moving circles for driving the collision kernel:
//! - Fixed one-frame steps only
//! - Seeded RNG only
//! - Stable iteration order (by spawn order)

pub mod barrage;
pub mod body;

pub use barrage::{Barrage, FrameReport};
pub use body::Body;
