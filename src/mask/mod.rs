//! Neighbor masks and tiling scheme enumeration
//!
//! This module contains the connectivity model of the engine:
//! - Neighbor presence bitmasks decoded from counter values
//! - Scheme selection and ordered enumeration of valid masks

/// Tiling schemes and ordered mask enumeration
pub mod enumeration;
/// Neighbor presence bitmask value type
pub mod neighbors;

pub use enumeration::{Scheme, enumerate};
pub use neighbors::NeighborMask;
