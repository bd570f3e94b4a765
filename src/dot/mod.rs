//! Binary-state dots bound to pixel regions, and the manager that owns them.

use crate::foundation::core::CellSize;
use crate::grid::GridData;
use crate::surface::PixelSurface;

/// Flat dot index, `y * grid_width + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DotIndex(pub usize);

/// One grid cell. State changes are the only thing that touches the pixel surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub pixel_x: i32,
    pub pixel_y: i32,
    filled: bool,
}

impl Dot {
    pub fn new(pixel_x: i32, pixel_y: i32) -> Self {
        Self {
            pixel_x,
            pixel_y,
            filled: false,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Returns `true` when the state changed and a block was painted.
    fn set(
        &mut self,
        filled: bool,
        cell: CellSize,
        block: &[u8],
        surface: &mut dyn PixelSurface,
    ) -> bool {
        if self.filled == filled {
            return false;
        }
        self.filled = filled;
        surface.paint_region(self.pixel_x, self.pixel_y, cell.width_px, cell.height_px, block);
        true
    }
}

/// Owns every dot of the current grid size.
#[derive(Clone, Debug)]
pub struct DotManager {
    grid: GridData,
    dots: Vec<Dot>,
    filled_block: Vec<u8>,
    cleared_block: Vec<u8>,
}

impl DotManager {
    pub fn new(grid: GridData) -> Self {
        let cell = grid.cell();
        let mut out = Self {
            grid,
            dots: Vec::new(),
            filled_block: cell.filled_block(),
            cleared_block: cell.cleared_block(),
        };
        out.rebuild_dots();
        out
    }

    /// Recompute the grid for a new pixel size and rebuild every dot in the cleared state.
    ///
    /// Previous fill state is discarded without touching the surface; hosts resize (and
    /// therefore clear) their surface alongside.
    pub fn resolve_size(&mut self, width_px: u32, height_px: u32) {
        self.grid.resolve_size(width_px, height_px);
        self.rebuild_dots();
    }

    fn rebuild_dots(&mut self) {
        let w = self.grid.width_in_cells();
        let h = self.grid.height_in_cells();
        self.dots.clear();
        self.dots.reserve(self.grid.cell_count());
        for y in 0..h {
            for x in 0..w {
                self.dots.push(Dot::new(self.grid.pixel_x(x), self.grid.pixel_y(y)));
            }
        }
    }

    /// Clear every filled dot on the surface.
    pub fn reset(&mut self, surface: &mut dyn PixelSurface) {
        let cell = self.grid.cell();
        let mut cleared = 0usize;
        for dot in &mut self.dots {
            if dot.set(false, cell, &self.cleared_block, surface) {
                cleared += 1;
            }
        }
        tracing::debug!(cleared, "dots reset");
    }

    /// Resolve a grid coordinate to a dot.
    ///
    /// Rejects negative coordinates, `x` past the right edge, and any flat index beyond the dot
    /// count. There is no separate check of `y` against the bottom edge: a row past the bottom
    /// is only rejected once its flat index leaves the dot range.
    pub fn index_at(&self, grid_x: i32, grid_y: i32) -> Option<DotIndex> {
        let w = self.grid.width_in_cells();
        if grid_x < 0 || grid_x >= w || grid_y < 0 {
            return None;
        }
        let flat = i64::from(grid_y) * i64::from(w) + i64::from(grid_x);
        let flat = usize::try_from(flat).ok()?;
        if flat >= self.dots.len() {
            return None;
        }
        Some(DotIndex(flat))
    }

    /// Fill a dot; no-op when it is already filled or the index is stale.
    pub fn fill(&mut self, index: DotIndex, surface: &mut dyn PixelSurface) {
        self.set(index, true, surface);
    }

    /// Clear a dot; no-op when it is already clear or the index is stale.
    pub fn clear(&mut self, index: DotIndex, surface: &mut dyn PixelSurface) {
        self.set(index, false, surface);
    }

    fn set(&mut self, index: DotIndex, filled: bool, surface: &mut dyn PixelSurface) {
        let cell = self.grid.cell();
        let block = if filled {
            &self.filled_block
        } else {
            &self.cleared_block
        };
        if let Some(dot) = self.dots.get_mut(index.0)
            && dot.set(filled, cell, block, surface)
        {
            tracing::trace!(index = index.0, filled, "dot changed");
        }
    }

    pub fn is_filled(&self, index: DotIndex) -> bool {
        self.dots.get(index.0).is_some_and(Dot::is_filled)
    }

    pub fn filled_count(&self) -> usize {
        self.dots.iter().filter(|d| d.is_filled()).count()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dot(&self, index: DotIndex) -> Option<&Dot> {
        self.dots.get(index.0)
    }

    pub fn grid(&self) -> &GridData {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridData {
        &mut self.grid
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dot/dot.rs"]
mod tests;
