//! Per-quadrant asset resolution and packed sheet composition
//!
//! This module contains the rendering half of the engine:
//! - Resolution of one oriented asset per tile quadrant
//! - Layered quadrant draws packed into the output sheet

/// Quadrant identity and asset selection
pub mod quadrant;
/// Packed sheet composition from enumerated masks
pub mod sheet;

pub use quadrant::{Quadrant, resolve};
pub use sheet::compose;
