/// Integer cell position on the dot grid. Origin is top-left, one unit is one cell.
///
/// Coordinates may be negative or past the grid edge; resolving them to a dot is what decides
/// whether they paint anything.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel-space rectangle. The origin may be negative once padding is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grow the rectangle by `border` pixels on every side.
    pub fn padded(self, border: u32) -> Self {
        let b = border as i32;
        Self {
            x: self.x - b,
            y: self.y - b,
            width: self.width.saturating_add(border * 2),
            height: self.height.saturating_add(border * 2),
        }
    }

    /// Return `true` when the pixel `(px, py)` is inside `[x, x+w) x [y, y+h)`.
    pub fn contains(self, px: i32, py: i32) -> bool {
        let px = i64::from(px);
        let py = i64::from(py);
        let x0 = i64::from(self.x);
        let y0 = i64::from(self.y);
        px >= x0
            && py >= y0
            && px < x0 + i64::from(self.width)
            && py < y0 + i64::from(self.height)
    }
}

/// Pixel footprint of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellSize {
    pub width_px: u32,
    pub height_px: u32,
}

impl CellSize {
    pub const fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Bytes in one tightly packed RGBA8 block covering the cell.
    pub fn rgba_len(self) -> usize {
        (self.width_px as usize) * (self.height_px as usize) * 4
    }

    /// Opaque white block.
    pub fn filled_block(self) -> Vec<u8> {
        vec![255; self.rgba_len()]
    }

    /// Fully transparent block.
    pub fn cleared_block(self) -> Vec<u8> {
        vec![0; self.rgba_len()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
