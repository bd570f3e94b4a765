//! A single delay-gated run of cells painted one per frame.

use crate::dot::DotManager;
use crate::foundation::core::GridCoord;
use crate::shape::fill::DrawType;
use crate::surface::PixelSurface;

/// Unique per shape within a session. Never reused, even across resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    LineHorizontal,
    Rectangle,
    Glyph { width: i32, height: i32 },
}

/// Delay-gated sequence of grid positions, painted or cleared one per eligible tick.
#[derive(Clone, Debug)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    positions: Vec<GridCoord>,
    cursor: usize,
    delay: u32,
    draw: DrawType,
    complete: bool,
}

impl Shape {
    /// `positions` must already have fill transforms applied.
    pub(crate) fn new(
        id: ShapeId,
        kind: ShapeKind,
        positions: Vec<GridCoord>,
        delay: u32,
        draw: DrawType,
    ) -> Self {
        Self {
            id,
            kind,
            positions,
            cursor: 0,
            delay,
            draw,
            complete: false,
        }
    }

    /// Advance one step. Returns `true` once the shape is complete.
    ///
    /// - already complete: `true`, nothing painted
    /// - empty sequence: `false`, forever
    /// - delay left: count it down, `false`
    /// - otherwise visit the cursor position, advance, and report whether that was the last one
    ///
    /// Positions that resolve to no dot are skipped but still consume their step.
    pub fn tick(&mut self, dots: &mut DotManager, surface: &mut dyn PixelSurface) -> bool {
        if self.complete {
            return true;
        }
        if self.positions.is_empty() {
            return false;
        }
        if self.delay > 0 {
            self.delay -= 1;
            return false;
        }

        let p = self.positions[self.cursor];
        if let Some(index) = dots.index_at(p.x, p.y) {
            match self.draw {
                DrawType::Fill => dots.fill(index, surface),
                DrawType::Clear => dots.clear(index, surface),
            }
        }

        self.cursor += 1;
        if self.cursor >= self.positions.len() {
            self.complete = true;
            tracing::trace!(shape = self.id.0, "shape complete");
        }
        self.complete
    }

    /// Mark complete without visiting the remaining positions.
    pub fn stop(&mut self) {
        self.complete = true;
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn positions(&self) -> &[GridCoord] {
        &self.positions
    }

    /// Frames left before the first position is visited.
    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn draw_type(&self) -> DrawType {
        self.draw
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn glyph_width(&self) -> i32 {
        match self.kind {
            ShapeKind::Glyph { width, .. } => width,
            _ => 0,
        }
    }

    pub fn glyph_height(&self) -> i32 {
        match self.kind {
            ShapeKind::Glyph { height, .. } => height,
            _ => 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/shape.rs"]
mod tests;
