//! Diagnostic page drawing every glyph and fill strategy.

use crate::component::Style;
use crate::foundation::core::GridCoord;
use crate::shape::{DrawType, FillStrategyType};
use crate::view::{DotMatrixView, TEST_VIEW_ID, ViewBase, ViewCtx};

const GLYPH_ROWS: [&str; 6] = [
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcd efgh ijkl mnop qrst uvwx yz",
    "0123456789",
    "- _ / : ; , . ' ! \"",
    "^ < {heart} > ^",
    "{wing-left} {skull} {wing-right}",
];
const FILLER_TEXT: &str = "HELLO";
const FILLER_ROWS: i32 = 2;
const REDRAW_PROBABILITY: f64 = 0.02;

/// Diagnostic page exercising every glyph, both lines and the three orderings.
#[derive(Clone, Debug)]
pub struct TestView {
    base: ViewBase,
}

impl Default for TestView {
    fn default() -> Self {
        Self::new()
    }
}

impl TestView {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(TEST_VIEW_ID),
        }
    }
}

impl DotMatrixView for TestView {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn start(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_start(delay);
        self.draw(ctx, delay, DrawType::Fill);
    }

    fn stop(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_stop(ctx.interactive, delay);
        self.draw(ctx, delay, DrawType::Clear);
    }

    fn draw(&mut self, ctx: &mut ViewCtx<'_>, delay: u32, draw: DrawType) {
        let layout = ctx.layout;
        let lh = layout.line_height;
        let grid_width = ctx.grid.width_in_cells().max(0) as u32;
        let third = grid_width / 3;
        let mut line = 2;

        let top = ctx
            .builder()
            .line_width_full(lh * line, Style::new(delay + 1, 0, draw));
        ctx.add(top);
        line += 2;

        for text in GLYPH_ROWS {
            let c = ctx
                .builder()
                .glyph_box(text, GridCoord::new(0, lh * line), Style::new(delay + 1, 1, draw));
            ctx.add(c);
            line += 2;
        }

        let rectangles = [
            (0, third, FillStrategyType::Reverse),
            (lh + 2, grid_width - third, FillStrategyType::Random),
            (lh * 2 + 4, grid_width, FillStrategyType::PassThrough),
        ];
        for (x, rect_delay, strategy) in rectangles {
            let c = ctx.builder().rectangle(
                GridCoord::new(x, lh * line),
                lh,
                lh,
                Style::new(delay + rect_delay, 0, draw).with_strategy(strategy),
            );
            ctx.add(c);
        }
        line += 2;

        for filler in line..line + FILLER_ROWS {
            let y = lh * filler;
            let c = ctx.builder().glyph_box_width_full(
                FILLER_TEXT,
                GridCoord::new(0, y),
                Style::new(delay + layout.delay_from_grid_position(0, y), 0, draw),
            );
            ctx.add(c);
        }

        let bottom = ctx.grid_lines() - 2;
        let c = ctx
            .builder()
            .line_width_full(lh * bottom, Style::new(delay + 1, 0, draw));
        ctx.add(c);
    }

    fn tick(&mut self, ctx: &mut ViewCtx<'_>) {
        if self.base.is_active() && ctx.rng.chance(REDRAW_PROBABILITY) {
            self.draw(ctx, 0, DrawType::Fill);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/diagnostic.rs"]
mod tests;
