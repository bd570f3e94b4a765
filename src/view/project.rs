//! One page per project: title and credits.

use crate::component::Style;
use crate::interactive::PointerEvent;
use crate::shape::{DrawType, FillStrategyType};
use crate::view::{DotMatrixView, ItemGeometry, Navigation, ViewBase, ViewCtx, rollover_draw_types};

const ROLLOVER_REDRAW_DELAY: u32 = 20;
const GLYPH_DELAY_IN: u32 = 2;
const GLYPH_DELAY_OUT: u32 = 0;
/// Lines kept below the last credit.
const BOTTOM_MARGIN_LINES: i32 = 4;
const LINE_SPACING: i32 = 2;

/// A project page: the title near the bottom of the grid with its credits beneath.
///
/// Item 0 is the title; item `i + 1` is credit `i`. Only credits get regions.
#[derive(Clone, Debug)]
pub struct ProjectView {
    base: ViewBase,
    credit_over: Vec<bool>,
    glyph_delay: u32,
}

impl ProjectView {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(project_id),
            credit_over: Vec::new(),
            glyph_delay: GLYPH_DELAY_IN,
        }
    }

    pub fn is_credit_over(&self, index: usize) -> bool {
        self.credit_over.get(index).copied().unwrap_or(false)
    }

    fn redraw(&mut self, ctx: &mut ViewCtx<'_>) {
        self.draw(ctx, 0, DrawType::Clear);
        self.draw(ctx, ROLLOVER_REDRAW_DELAY, DrawType::Fill);
    }
}

impl DotMatrixView for ProjectView {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn start(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_start(delay);
        let credits = ctx
            .projects
            .project_by_id(self.base.id())
            .map_or(0, |p| p.credit.len());
        self.credit_over = vec![false; credits];
        self.glyph_delay = GLYPH_DELAY_IN;

        self.draw(ctx, delay, DrawType::Fill);

        let items: Vec<ItemGeometry> = self.base.items().iter().skip(1).copied().collect();
        for (credit, geometry) in items.into_iter().enumerate() {
            self.base.register_region(ctx, credit, geometry);
        }
    }

    fn stop(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_stop(ctx.interactive, delay);
        self.glyph_delay = GLYPH_DELAY_OUT;
        self.draw(ctx, delay, DrawType::Clear);
    }

    fn draw(&mut self, ctx: &mut ViewCtx<'_>, delay: u32, draw: DrawType) {
        let projects = ctx.projects;
        let Some(project) = projects.project_by_id(self.base.id()) else {
            tracing::warn!(project = self.base.id(), "no project for view");
            return;
        };

        let line_height = ctx.layout.line_height;
        let mobile = ctx.grid.is_mobile();
        let credits = i32::try_from(project.credit.len()).unwrap_or(i32::MAX / LINE_SPACING);
        let mut y = ctx.grid.height_in_cells()
            - (BOTTOM_MARGIN_LINES + LINE_SPACING * credits) * line_height;

        let title = ctx.builder().glyph_line_centered(
            project.display_name(mobile),
            y,
            Style::new(delay, self.glyph_delay, draw),
        );
        self.base.set_item(0, ItemGeometry::of_centered(&title, y));
        ctx.add(title);

        for (i, credit) in project.credit.iter().enumerate() {
            y += line_height * LINE_SPACING;
            let (text_draw, surround_draw) = rollover_draw_types(draw, self.is_credit_over(i));

            let c = ctx.builder().glyph_line_centered(
                &credit.text,
                y,
                Style::new(
                    delay + i as u32 + ROLLOVER_REDRAW_DELAY,
                    self.glyph_delay,
                    text_draw,
                ),
            );
            let geometry = ItemGeometry::of_centered(&c, y);
            ctx.add(c);
            self.base.set_item(i + 1, geometry);

            ctx.add_surround(geometry, delay, FillStrategyType::PassThrough, surround_draw);
        }
    }

    fn on_pointer(
        &mut self,
        ctx: &mut ViewCtx<'_>,
        item: usize,
        event: PointerEvent,
    ) -> Option<Navigation> {
        let projects = ctx.projects;
        let credit = projects
            .project_by_id(self.base.id())
            .and_then(|p| p.credit.get(item));
        let Some(credit) = credit else {
            tracing::warn!(view = self.base.id(), item, "pointer event for unknown credit");
            return None;
        };

        match event {
            PointerEvent::Click => credit.url.clone().map(Navigation::OpenUrl),
            PointerEvent::Over | PointerEvent::Out => {
                if let Some(over) = self.credit_over.get_mut(item) {
                    *over = event == PointerEvent::Over;
                }
                self.redraw(ctx);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/project.rs"]
mod tests;
