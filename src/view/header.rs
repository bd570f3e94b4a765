//! The "Menu" button shown above every page.

use crate::component::Style;
use crate::interactive::PointerEvent;
use crate::shape::{DrawType, FillStrategyType};
use crate::view::{DotMatrixView, HEADER_VIEW_ID, ItemGeometry, Navigation, ViewBase, ViewCtx};

const LABEL: &str = "Menu";
const ROLLOVER_REDRAW_DELAY: u32 = 6;
const LINES_ABOVE_HEADER: i32 = 2;
const GLYPH_DELAY_IN: u32 = 2;
const GLYPH_DELAY_OUT: u32 = 0;

/// The "Menu" button at the top of every page.
#[derive(Clone, Debug)]
pub struct HeaderView {
    base: ViewBase,
    menu_open: bool,
    glyph_delay: u32,
    geometry: ItemGeometry,
}

impl Default for HeaderView {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderView {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(HEADER_VIEW_ID),
            menu_open: false,
            glyph_delay: GLYPH_DELAY_IN,
            geometry: ItemGeometry::default(),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn geometry(&self) -> ItemGeometry {
        self.geometry
    }

    /// Record the menu state and redraw the button to match.
    pub fn set_is_menu_open(&mut self, ctx: &mut ViewCtx<'_>, open: bool) {
        self.menu_open = open;
        if open {
            self.draw_surrounded(ctx, 0);
        } else {
            self.draw_unsurrounded(ctx, 0);
        }
    }

    fn grid_y(ctx: &ViewCtx<'_>) -> i32 {
        ctx.layout.line_height * (ctx.layout.header_lines - LINES_ABOVE_HEADER)
    }

    // The surround is placed from the label geometry, so it has to be known before the
    // first draw.
    fn measure(&mut self, ctx: &mut ViewCtx<'_>) {
        let y = Self::grid_y(ctx);
        let (x, width) = ctx.builder().centered_extent(LABEL);
        self.geometry = ItemGeometry { x, y, width };
    }

    fn draw_surrounded(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        ctx.add_surround(self.geometry, delay, FillStrategyType::PassThrough, DrawType::Fill);
        self.draw(ctx, delay + ROLLOVER_REDRAW_DELAY, DrawType::Clear);
    }

    fn draw_unsurrounded(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        ctx.add_surround(self.geometry, delay, FillStrategyType::PassThrough, DrawType::Clear);
        self.draw(ctx, delay + ROLLOVER_REDRAW_DELAY, DrawType::Fill);
    }
}

impl DotMatrixView for HeaderView {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn start(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_start(delay);
        self.glyph_delay = GLYPH_DELAY_IN;
        self.measure(ctx);
        self.draw_unsurrounded(ctx, delay);

        let geometry = self.geometry;
        self.base.set_item(0, geometry);
        self.base.register_region(ctx, 0, geometry);
    }

    fn stop(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_stop(ctx.interactive, delay);
        self.glyph_delay = GLYPH_DELAY_OUT;
        self.draw(ctx, delay, DrawType::Clear);
    }

    fn draw(&mut self, ctx: &mut ViewCtx<'_>, delay: u32, draw: DrawType) {
        let y = Self::grid_y(ctx);
        let style = Style::new(
            delay + ctx.layout.delay_from_grid_position(0, y),
            self.glyph_delay,
            draw,
        );
        let c = ctx.builder().glyph_line_centered(LABEL, y, style);
        self.geometry = ItemGeometry::of_centered(&c, y);
        ctx.add(c);
    }

    fn on_pointer(
        &mut self,
        ctx: &mut ViewCtx<'_>,
        _item: usize,
        event: PointerEvent,
    ) -> Option<Navigation> {
        match event {
            PointerEvent::Click => {
                self.menu_open = !self.menu_open;
                Some(if self.menu_open {
                    Navigation::MenuOpen
                } else {
                    Navigation::MenuClose
                })
            }
            PointerEvent::Over => {
                if self.menu_open {
                    self.draw_unsurrounded(ctx, 0);
                } else {
                    self.draw_surrounded(ctx, 0);
                }
                None
            }
            PointerEvent::Out => {
                if self.menu_open {
                    self.draw_surrounded(ctx, 0);
                } else {
                    self.draw_unsurrounded(ctx, 0);
                }
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/header.rs"]
mod tests;
