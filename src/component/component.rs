//! Components and the builder that lays text and rectangles out as shapes.

use crate::config::LayoutConstants;
use crate::dot::DotManager;
use crate::foundation::core::GridCoord;
use crate::shape::{
    DrawType, FillStrategyType, FillType, SPACE_CODE, Shape, ShapeManager, ShapeParams,
    parse_text_to_glyph_codes,
};
use crate::surface::PixelSurface;

/// Timing and transform settings for one component. Child `i` starts `delay + i * stagger`
/// frames in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub delay: u32,
    /// Per-child delay.
    pub stagger: u32,
    pub fill: FillType,
    pub strategy: FillStrategyType,
    pub draw: DrawType,
}

impl Style {
    pub fn new(delay: u32, stagger: u32, draw: DrawType) -> Self {
        Self {
            delay,
            stagger,
            draw,
            ..Self::default()
        }
    }

    pub fn with_fill(self, fill: FillType) -> Self {
        Self { fill, ..self }
    }

    pub fn with_strategy(self, strategy: FillStrategyType) -> Self {
        Self { strategy, ..self }
    }

    pub fn for_child(&self, index: usize) -> ShapeParams {
        let offset = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.stagger);
        ShapeParams::new(
            self.delay.saturating_add(offset),
            self.fill,
            self.strategy,
            self.draw,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    GlyphBox { text: String },
    GlyphBoxWidthFull { text: String },
    GlyphLineCentered { text: String, start_x: i32, width: i32 },
    Rectangle { width: i32, height: i32 },
    LineWidthFull,
}

/// Shapes created together for one drawing intent.
#[derive(Clone, Debug)]
pub struct Component {
    kind: ComponentKind,
    origin: GridCoord,
    style: Style,
    shapes: Vec<Shape>,
}

impl Component {
    /// Tick every owned shape once.
    ///
    /// Complete when every non-empty shape reports complete. Empty shapes (spaces) never
    /// complete on their own and are left out.
    pub fn tick(&mut self, dots: &mut DotManager, surface: &mut dyn PixelSurface) -> bool {
        let mut complete = true;
        for shape in &mut self.shapes {
            let done = shape.tick(dots, surface);
            if !done && !shape.is_empty() {
                complete = false;
            }
        }
        complete
    }

    /// Stop shapes that have not started painting yet.
    pub fn stop_unstarted_shapes(&mut self) {
        for shape in &mut self.shapes {
            if shape.delay() > 0 {
                shape.stop();
            }
        }
    }

    /// Drop every owned shape and deregister it.
    pub fn destroy(&mut self, shapes: &mut ShapeManager) {
        for shape in self.shapes.drain(..) {
            shapes.remove_shape(shape.id());
        }
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn origin(&self) -> GridCoord {
        self.origin
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Centered start column, for centered glyph lines.
    pub fn start_x(&self) -> Option<i32> {
        match self.kind {
            ComponentKind::GlyphLineCentered { start_x, .. } => Some(start_x),
            _ => None,
        }
    }

    /// Laid-out width in cells, for centered glyph lines.
    pub fn width(&self) -> Option<i32> {
        match self.kind {
            ComponentKind::GlyphLineCentered { width, .. } => Some(width),
            _ => None,
        }
    }
}

struct CenteredLayout {
    start_x: i32,
    width: i32,
    /// `(code index, column)` for every glyph that gets a shape.
    placements: Vec<(usize, i32)>,
}

/// Builds components against the current grid width and layout.
pub struct ComponentBuilder<'a> {
    shapes: &'a mut ShapeManager,
    grid_width: i32,
    layout: LayoutConstants,
}

impl<'a> ComponentBuilder<'a> {
    pub fn new(shapes: &'a mut ShapeManager, grid_width: i32, layout: LayoutConstants) -> Self {
        Self {
            shapes,
            grid_width,
            layout,
        }
    }

    fn spacing(&self) -> i32 {
        self.layout.glyph_spacing_x
    }

    fn component(
        kind: ComponentKind,
        origin: GridCoord,
        style: Style,
        shapes: Vec<Shape>,
    ) -> Component {
        tracing::trace!(
            ?kind,
            x = origin.x,
            y = origin.y,
            shapes = shapes.len(),
            "component built"
        );
        Component {
            kind,
            origin,
            style,
            shapes,
        }
    }

    /// Text laid out left to right from `origin`. Unknown codes are skipped without moving x.
    pub fn glyph_box(&mut self, text: &str, origin: GridCoord, style: Style) -> Component {
        let codes = self.shapes.parse_text_to_glyph_codes(text);
        let mut shapes = Vec::with_capacity(codes.len());
        let mut x = origin.x;
        for (i, code) in codes.iter().enumerate() {
            match self.shapes.add_glyph(code, x, origin.y, style.for_child(i)) {
                Some(shape) => {
                    x += shape.glyph_width() + self.spacing();
                    shapes.push(shape);
                }
                None => tracing::warn!(code = code.as_str(), "glyph box skipped unknown glyph"),
            }
        }
        Self::component(
            ComponentKind::GlyphBox {
                text: text.to_string(),
            },
            origin,
            style,
            shapes,
        )
    }

    /// Text repeated from `origin` until the next glyph would pass the right edge.
    pub fn glyph_box_width_full(
        &mut self,
        text: &str,
        origin: GridCoord,
        style: Style,
    ) -> Component {
        let codes = self.shapes.parse_text_to_glyph_codes(text);
        let spacing = self.spacing();
        let widths: Vec<i32> = codes.iter().map(|c| self.shapes.glyph_width(c)).collect();
        let cycle: i32 = widths.iter().map(|w| w + spacing).sum();

        let mut selected = Vec::new();
        if cycle > 0 {
            let mut width = 0;
            let mut i = 0;
            while width < self.grid_width {
                if width + widths[i] > self.grid_width {
                    break;
                }
                selected.push(i);
                width += widths[i] + spacing;
                i = (i + 1) % codes.len();
            }
        }

        let mut shapes = Vec::with_capacity(selected.len());
        let mut x = origin.x;
        for (n, &i) in selected.iter().enumerate() {
            let code = codes[i].as_str();
            if code == SPACE_CODE {
                x += self.layout.space_width + spacing;
                continue;
            }
            match self.shapes.add_glyph(code, x, origin.y, style.for_child(n)) {
                Some(shape) => {
                    x += shape.glyph_width() + spacing;
                    shapes.push(shape);
                }
                None => tracing::warn!(code, "full-width glyph box skipped unknown glyph"),
            }
        }

        Self::component(
            ComponentKind::GlyphBoxWidthFull {
                text: text.to_string(),
            },
            origin,
            style,
            shapes,
        )
    }

    /// Text centered horizontally on row `grid_y`.
    pub fn glyph_line_centered(&mut self, text: &str, grid_y: i32, style: Style) -> Component {
        let codes = self.shapes.parse_text_to_glyph_codes(text);
        let layout = self.centered_layout(&codes);

        let mut shapes = Vec::with_capacity(layout.placements.len());
        for &(i, x) in &layout.placements {
            if let Some(shape) = self.shapes.add_glyph(&codes[i], x, grid_y, style.for_child(i)) {
                shapes.push(shape);
            }
        }

        Self::component(
            ComponentKind::GlyphLineCentered {
                text: text.to_string(),
                start_x: layout.start_x,
                width: layout.width,
            },
            GridCoord::new(0, grid_y),
            style,
            shapes,
        )
    }

    /// Start column and width a centered line of `text` would get, without building it.
    pub fn centered_extent(&self, text: &str) -> (i32, i32) {
        let codes = parse_text_to_glyph_codes(text);
        let layout = self.centered_layout(&codes);
        (layout.start_x, layout.width)
    }

    /// Start column is `floor((grid_width - total + spacing) / 2)`, where `total` sums glyph
    /// widths plus spacing (unknown codes count as zero width) minus one trailing spacing.
    /// Placement then follows the glyph box rules.
    fn centered_layout(&self, codes: &[String]) -> CenteredLayout {
        let spacing = self.spacing();
        let total: i32 = codes
            .iter()
            .map(|c| self.shapes.glyph_width(c) + spacing)
            .sum::<i32>()
            - spacing;
        let start_x = (self.grid_width - total + spacing).div_euclid(2);

        let mut placements = Vec::with_capacity(codes.len());
        let mut x = start_x;
        for (i, code) in codes.iter().enumerate() {
            if code == SPACE_CODE {
                x += self.layout.space_width + spacing;
                continue;
            }
            if !self.shapes.has_glyph(code) {
                tracing::warn!(code = code.as_str(), "centered line skipped unknown glyph");
                continue;
            }
            placements.push((i, x));
            x += self.shapes.glyph_width(code) + spacing;
        }

        CenteredLayout {
            start_x,
            width: x - spacing - start_x,
            placements,
        }
    }

    pub fn rectangle(
        &mut self,
        origin: GridCoord,
        width: i32,
        height: i32,
        style: Style,
    ) -> Component {
        let shape = self
            .shapes
            .add_rectangle(origin.x, origin.y, width, height, style.for_child(0));
        Self::component(
            ComponentKind::Rectangle { width, height },
            origin,
            style,
            vec![shape],
        )
    }

    /// Horizontal line across the whole grid on row `grid_y`.
    pub fn line_width_full(&mut self, grid_y: i32, style: Style) -> Component {
        let shape = self
            .shapes
            .add_line_horizontal(0, grid_y, self.grid_width, style.for_child(0));
        Self::component(
            ComponentKind::LineWidthFull,
            GridCoord::new(0, grid_y),
            style,
            vec![shape],
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/component.rs"]
mod tests;
