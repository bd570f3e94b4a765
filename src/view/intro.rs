//! The landing page.

use crate::component::Style;
use crate::foundation::core::GridCoord;
use crate::shape::DrawType;
use crate::view::{DotMatrixView, INTRO_VIEW_ID, ViewBase, ViewCtx};

/// Glyph texts handed out one per row, wrapping around.
const CYCLE: [&str; 10] = ["{heart}", "1", ".", "0", "/", "0", "{smile}", ".", ".,", "-"];
const GLYPH_DELAY_IN: u32 = 2;
const GLYPH_DELAY_OUT: u32 = 0;
const REDRAW_DELAY: u32 = 120;
const ROW_DELAY_SCALE: u32 = 10;

/// Landing page: full-width rows of repeating glyphs that clear and refill forever.
#[derive(Clone, Debug)]
pub struct IntroView {
    base: ViewBase,
    cycle: usize,
    glyph_delay: u32,
}

impl Default for IntroView {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroView {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(INTRO_VIEW_ID),
            cycle: 0,
            glyph_delay: GLYPH_DELAY_IN,
        }
    }

    fn reset_cycle(&mut self) {
        self.cycle = 0;
    }

    fn next_text(&mut self) -> &'static str {
        let text = CYCLE[self.cycle % CYCLE.len()];
        self.cycle = (self.cycle + 1) % CYCLE.len();
        text
    }
}

impl DotMatrixView for IntroView {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn start(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_start(delay);
        self.glyph_delay = GLYPH_DELAY_IN;
        self.reset_cycle();
        self.draw(ctx, delay, DrawType::Fill);
    }

    fn stop(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_stop(ctx.interactive, delay);
        self.glyph_delay = GLYPH_DELAY_OUT;
        self.reset_cycle();
        self.draw(ctx, delay, DrawType::Clear);
    }

    /// Rows between header and footer. Lower rows start later, growing quadratically.
    fn draw(&mut self, ctx: &mut ViewCtx<'_>, delay: u32, draw: DrawType) {
        let layout = ctx.layout;
        let max_line = ctx.grid_lines() - layout.footer_lines;

        for line in (layout.header_lines + 1)..max_line {
            let y = layout.line_height * line;
            let row_delay = layout
                .delay_from_grid_position_quadratic(y, layout.header_lines, max_line)
                .saturating_mul(ROW_DELAY_SCALE);
            let text = self.next_text();
            let c = ctx.builder().glyph_box_width_full(
                text,
                GridCoord::new(0, y),
                Style::new(delay.saturating_add(row_delay), self.glyph_delay, draw),
            );
            ctx.add(c);
        }
    }

    fn on_draw_complete(&mut self, ctx: &mut ViewCtx<'_>) {
        if !self.base.is_active() {
            return;
        }
        tracing::debug!("intro redraw cycle");
        self.reset_cycle();
        self.draw(ctx, 0, DrawType::Clear);
        self.reset_cycle();
        self.draw(ctx, REDRAW_DELAY, DrawType::Fill);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/intro.rs"]
mod tests;
