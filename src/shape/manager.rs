//! Shape factory and the registry of live shape ids.

use crate::foundation::core::GridCoord;
use crate::foundation::rng::Rng64;
use crate::shape::fill::{DrawType, FillStrategyType, FillType, apply_transforms};
use crate::shape::glyph::{GlyphTable, parse_text_to_glyph_codes};
use crate::shape::shape::{Shape, ShapeId, ShapeKind};
use std::collections::BTreeMap;

/// Construction parameters shared by every shape factory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeParams {
    pub delay: u32,
    pub fill: FillType,
    pub strategy: FillStrategyType,
    pub draw: DrawType,
}

impl ShapeParams {
    pub fn new(delay: u32, fill: FillType, strategy: FillStrategyType, draw: DrawType) -> Self {
        Self {
            delay,
            fill,
            strategy,
            draw,
        }
    }

    pub fn with_delay(self, delay: u32) -> Self {
        Self { delay, ..self }
    }
}

/// Shape factory and live-shape registry.
///
/// Shapes are returned by value to their owning component; the registry tracks ids only so a
/// shape can be removed by identity. Ids keep counting across [`ShapeManager::reset`].
#[derive(Debug)]
pub struct ShapeManager {
    glyphs: GlyphTable,
    rng: Rng64,
    registry: BTreeMap<ShapeId, ShapeKind>,
    next_id: u64,
}

impl ShapeManager {
    pub fn new(glyphs: GlyphTable, seed: u64) -> Self {
        Self {
            glyphs,
            rng: Rng64::new(seed),
            registry: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn build(
        &mut self,
        kind: ShapeKind,
        mut positions: Vec<GridCoord>,
        params: ShapeParams,
    ) -> Shape {
        apply_transforms(params.fill, params.strategy, &mut positions, &mut self.rng);

        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.registry.insert(id, kind);

        tracing::trace!(
            shape = id.0,
            ?kind,
            len = positions.len(),
            delay = params.delay,
            "shape added"
        );
        Shape::new(id, kind, positions, params.delay, params.draw)
    }

    /// `length` cells to the right of `(grid_x, grid_y)`.
    pub fn add_line_horizontal(
        &mut self,
        grid_x: i32,
        grid_y: i32,
        length: i32,
        params: ShapeParams,
    ) -> Shape {
        let positions = (0..length.max(0))
            .map(|i| GridCoord::new(grid_x + i, grid_y))
            .collect();
        self.build(ShapeKind::LineHorizontal, positions, params)
    }

    /// Filled rectangle, column by column: the outer loop runs over width, the inner over height.
    pub fn add_rectangle(
        &mut self,
        grid_x: i32,
        grid_y: i32,
        width: i32,
        height: i32,
        params: ShapeParams,
    ) -> Shape {
        let mut positions = Vec::with_capacity((width.max(0) * height.max(0)) as usize);
        for w in 0..width {
            for h in 0..height {
                positions.push(GridCoord::new(grid_x + w, grid_y + h));
            }
        }
        self.build(ShapeKind::Rectangle, positions, params)
    }

    /// One glyph, or `None` when the code has no bitmap.
    pub fn add_glyph(
        &mut self,
        code: &str,
        grid_x: i32,
        grid_y: i32,
        params: ShapeParams,
    ) -> Option<Shape> {
        let Some(bitmap) = self.glyphs.lookup(code) else {
            tracing::warn!(code, "unknown glyph code");
            return None;
        };
        let kind = ShapeKind::Glyph {
            width: bitmap.width(),
            height: bitmap.height(),
        };
        let positions = bitmap.filled_positions(GridCoord::new(grid_x, grid_y));
        Some(self.build(kind, positions, params))
    }

    /// Forget a shape by id. Returns `false` when it is not registered.
    pub fn remove_shape(&mut self, id: ShapeId) -> bool {
        let removed = self.registry.remove(&id).is_some();
        if removed {
            tracing::trace!(shape = id.0, "shape removed");
        }
        removed
    }

    /// Drop every registered shape.
    pub fn reset(&mut self) {
        tracing::debug!(shapes = self.registry.len(), "shape manager reset");
        self.registry.clear();
    }

    pub fn is_registered(&self, id: ShapeId) -> bool {
        self.registry.contains_key(&id)
    }

    pub fn shape_count(&self) -> usize {
        self.registry.len()
    }

    /// Width of a glyph in cells, 0 for an unknown code.
    pub fn glyph_width(&self, code: &str) -> i32 {
        self.glyphs.lookup(code).map_or(0, |b| b.width())
    }

    /// Height of a glyph in cells, 0 for an unknown code.
    pub fn glyph_height(&self, code: &str) -> i32 {
        self.glyphs.lookup(code).map_or(0, |b| b.height())
    }

    pub fn has_glyph(&self, code: &str) -> bool {
        self.glyphs.lookup(code).is_some()
    }

    pub fn parse_text_to_glyph_codes(&self, text: &str) -> Vec<String> {
        parse_text_to_glyph_codes(text)
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/manager.rs"]
mod tests;
