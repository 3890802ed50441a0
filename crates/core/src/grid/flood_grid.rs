//! Boolean flood-state grid
//!
//! Stores a square grid as a flat `Vec<bool>` in row-major order
//! (`row * size + col`). Row 0 is the southern edge and column 0 the western
//! edge, so rows grow northwards and columns eastwards.

use crate::core_types::Meters;
use serde::{Deserialize, Serialize};

/// `(row, col)` index of one grid cell
pub type GridCell = (usize, usize);

/// The 8 surrounding `(d_row, d_col)` offsets, scanned row-major
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cells per side
    pub size: usize,
    /// Side length of one square cell
    pub cell_size: Meters,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 50,
            cell_size: Meters::new(100.0),
        }
    }
}

impl GridConfig {
    /// Index of the middle cell along each axis
    #[must_use]
    pub fn center_index(&self) -> usize {
        self.size / 2
    }
}

/// Square grid of flooded / dry cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodGrid {
    cells: Vec<bool>,
    size: usize,
}

impl FloodGrid {
    /// Create an all-dry grid
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![false; size * size],
            size,
        }
    }

    /// Create a grid whose only flooded cell is the center
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn with_origin(size: usize) -> Self {
        assert!(size > 0, "FloodGrid::with_origin: grid size must be non-zero");
        let mut grid = Self::new(size);
        let (row, col) = grid.center();
        grid.flood(row, col);
        grid
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The flood origin cell
    #[must_use]
    pub fn center(&self) -> GridCell {
        (self.size / 2, self.size / 2)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Flood state at `(row, col)`; cells outside the grid read as dry
    #[inline]
    #[must_use]
    pub fn is_flooded(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.cells[self.index(row, col)]
    }

    /// Mark a cell flooded. Out-of-grid indices are ignored.
    #[inline]
    pub fn flood(&mut self, row: usize, col: usize) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = true;
        }
    }

    /// In-grid neighbours of `(row, col)` paired with their offset
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = ((isize, isize), GridCell)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            self.contains(nr, nc).then_some(((dr, dc), (nr, nc)))
        })
    }

    /// Flooded cells in row-major order
    pub fn flooded_cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &flooded)| flooded)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    #[must_use]
    pub fn flooded_count(&self) -> usize {
        self.cells.iter().filter(|&&flooded| flooded).count()
    }

    /// Whether every cell flooded in `other` is flooded here too
    #[must_use]
    pub fn is_superset_of(&self, other: &FloodGrid) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(&mine, &theirs)| mine || !theirs)
    }

    /// Overwrite this grid with the contents of a same-sized grid
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn copy_from(&mut self, other: &FloodGrid) {
        assert_eq!(self.size, other.size, "FloodGrid::copy_from: size mismatch");
        self.cells.copy_from_slice(&other.cells);
    }
}
