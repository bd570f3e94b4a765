//! Logical pixel size to cell grid mapping, plus a per-cell occupancy bitmap.

use crate::foundation::core::{CellSize, GridCoord};
use crate::foundation::rng::Rng64;

/// Cell grid derived from a pixel size by floor division.
#[derive(Clone, Debug)]
pub struct GridData {
    cell: CellSize,
    width_px: u32,
    height_px: u32,
    width_in_cells: i32,
    height_in_cells: i32,
    mobile_width_cells: i32,
    occupied: Vec<bool>,
}

impl GridData {
    pub fn new(cell: CellSize, mobile_width_cells: i32) -> Self {
        Self {
            cell,
            width_px: 0,
            height_px: 0,
            width_in_cells: 0,
            height_in_cells: 0,
            mobile_width_cells,
            occupied: Vec::new(),
        }
    }

    /// Recompute cell counts for a new pixel size and reallocate the occupancy bitmap.
    ///
    /// Previous occupancy is discarded.
    pub fn resolve_size(&mut self, width_px: u32, height_px: u32) {
        self.width_px = width_px;
        self.height_px = height_px;
        self.width_in_cells = (width_px / self.cell.width_px.max(1)) as i32;
        self.height_in_cells = (height_px / self.cell.height_px.max(1)) as i32;
        self.occupied = vec![false; self.cell_count()];

        tracing::debug!(
            width_px,
            height_px,
            cells_x = self.width_in_cells,
            cells_y = self.height_in_cells,
            "grid resized"
        );
    }

    pub fn cell(&self) -> CellSize {
        self.cell
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn width_in_cells(&self) -> i32 {
        self.width_in_cells
    }

    pub fn height_in_cells(&self) -> i32 {
        self.height_in_cells
    }

    pub fn cell_count(&self) -> usize {
        (self.width_in_cells.max(0) as usize) * (self.height_in_cells.max(0) as usize)
    }

    /// Narrow grids switch views to their compact text.
    pub fn is_mobile(&self) -> bool {
        self.width_in_cells < self.mobile_width_cells
    }

    /// Pixel x of a grid column.
    pub fn pixel_x(&self, grid_x: i32) -> i32 {
        grid_x * self.cell.width_px as i32
    }

    /// Pixel y of a grid row.
    pub fn pixel_y(&self, grid_y: i32) -> i32 {
        grid_y * self.cell.height_px as i32
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width_in_cells && y >= 0 && y < self.height_in_cells
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width_in_cells + x) as usize
    }

    fn coord_of(&self, index: usize) -> GridCoord {
        let w = self.width_in_cells.max(1) as usize;
        GridCoord::new((index % w) as i32, (index / w) as i32)
    }

    // Occupancy

    /// Out-of-range cells are ignored.
    pub fn set_cell_occupied(&mut self, x: i32, y: i32, occupied: bool) {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            self.occupied[i] = occupied;
        }
    }

    /// Out-of-range cells read as unoccupied.
    pub fn is_cell_occupied(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.occupied[self.index(x, y)]
    }

    /// Mark every cell of a rectangle. Cells outside the grid are skipped.
    pub fn set_rectangle_occupied(
        &mut self,
        origin: GridCoord,
        width: i32,
        height: i32,
        occupied: bool,
    ) {
        for y in 0..height {
            for x in 0..width {
                self.set_cell_occupied(origin.x + x, origin.y + y, occupied);
            }
        }
    }

    /// `true` when a `width x height` rectangle anchored at flat cell `index` fits inside the
    /// grid and none of its cells are occupied.
    pub fn is_rectangle_empty(&self, index: usize, width: i32, height: i32) -> bool {
        if index >= self.cell_count() {
            return false;
        }
        let start = self.coord_of(index);
        if start.x + width > self.width_in_cells || start.y + height > self.height_in_cells {
            return false;
        }
        for y in 0..height {
            for x in 0..width {
                if self.is_cell_occupied(start.x + x, start.y + y) {
                    return false;
                }
            }
        }
        true
    }

    // Random picks

    /// Any cell, occupied or not. `None` on an empty grid.
    pub fn random_cell(&self, rng: &mut Rng64) -> Option<GridCoord> {
        if self.cell_count() == 0 {
            return None;
        }
        let x = rng.next_below(self.width_in_cells as usize) as i32;
        let y = rng.next_below(self.height_in_cells as usize) as i32;
        Some(GridCoord::new(x, y))
    }

    pub fn random_empty_cell(&self, rng: &mut Rng64) -> Option<GridCoord> {
        self.shuffled_indexes(rng)
            .into_iter()
            .find(|&i| !self.occupied[i])
            .map(|i| self.coord_of(i))
    }

    /// Top-left corner of a randomly chosen empty rectangle that fits the grid.
    pub fn random_empty_rectangle(
        &self,
        rng: &mut Rng64,
        width: i32,
        height: i32,
    ) -> Option<GridCoord> {
        self.shuffled_indexes(rng)
            .into_iter()
            .find(|&i| self.is_rectangle_empty(i, width, height))
            .map(|i| self.coord_of(i))
    }

    fn shuffled_indexes(&self, rng: &mut Rng64) -> Vec<usize> {
        let mut indexes: Vec<usize> = (0..self.cell_count()).collect();
        rng.shuffle(&mut indexes);
        indexes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/grid.rs"]
mod tests;
