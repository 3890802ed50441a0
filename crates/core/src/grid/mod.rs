//! Grid storage and projection

pub mod flood_grid;
pub mod projection;

// Re-export main types
pub use flood_grid::*;
pub use projection::{project, CoordinateProjector, METERS_PER_DEGREE_LAT};
