//! Grid-to-geographic projection
//!
//! Local flat-earth approximation anchored at the flood origin: one degree of
//! latitude is 111 km everywhere and one degree of longitude shrinks with
//! `cos(latitude)` of the origin. Good enough for a 5 km grid, wrong for
//! anything continental.

use super::{GridCell, GridConfig};
use crate::core_types::{GeoPoint, Meters};

/// Meters per degree of latitude
pub const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// Maps grid indices to latitude/longitude
///
/// The grid's center cell projects exactly onto the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateProjector {
    origin: GeoPoint,
    center_index: usize,
    cell_size: Meters,
    meters_per_degree_lng: f64,
}

impl CoordinateProjector {
    #[must_use]
    pub fn new(origin: GeoPoint, grid: &GridConfig) -> Self {
        Self {
            origin,
            center_index: grid.center_index(),
            cell_size: grid.cell_size,
            meters_per_degree_lng: METERS_PER_DEGREE_LAT * origin.lat.to_radians().cos(),
        }
    }

    #[must_use]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Geographic position of the cell at `(row, col)`
    #[must_use]
    pub fn project(&self, (row, col): GridCell) -> GeoPoint {
        let north_m = (row as f64 - self.center_index as f64) * *self.cell_size;
        let east_m = (col as f64 - self.center_index as f64) * *self.cell_size;

        GeoPoint {
            lat: self.origin.lat + north_m / METERS_PER_DEGREE_LAT,
            lng: self.origin.lng + east_m / self.meters_per_degree_lng,
        }
    }

    /// Project a sequence of cells, preserving order
    pub fn project_all(&self, cells: impl IntoIterator<Item = GridCell>) -> Vec<GeoPoint> {
        cells.into_iter().map(|cell| self.project(cell)).collect()
    }
}

/// One-shot projection without building a [`CoordinateProjector`]
#[must_use]
pub fn project(
    origin_lat: f64,
    origin_lng: f64,
    grid_size: usize,
    cell_size_m: f64,
    row: usize,
    col: usize,
) -> GeoPoint {
    let grid = GridConfig {
        size: grid_size,
        cell_size: Meters::new(cell_size_m),
    };
    CoordinateProjector::new(GeoPoint::new(origin_lat, origin_lng), &grid).project((row, col))
}
