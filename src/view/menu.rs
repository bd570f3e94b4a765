//! The project menu page.

use crate::component::Style;
use crate::interactive::PointerEvent;
use crate::shape::{DrawType, FillStrategyType};
use crate::view::{
    DotMatrixView, ItemGeometry, Navigation, PROJECT_MENU_VIEW_ID, ViewBase, ViewCtx,
    rollover_draw_types,
};

const ROLLOVER_REDRAW_DELAY: u32 = 24;
const AUTO_REFRESH_FRAMES: u32 = 60 * 4;
const AUTO_REFRESH_PROBABILITY: f64 = 0.5;
const GLYPH_DELAY_IN: u32 = 4;
const GLYPH_DELAY_OUT: u32 = 0;
const LINE_SPACING: i32 = 2;
const MIN_START_LINE: i32 = 7;

#[derive(Clone, Debug)]
struct MenuRow {
    project_id: String,
    over: bool,
    requires_redraw: bool,
}

/// One centered line per project. Rows highlight on rollover and shuffle their highlight
/// on their own after the page has been idle for a while.
#[derive(Clone, Debug)]
pub struct ProjectMenuView {
    base: ViewBase,
    rows: Vec<MenuRow>,
    auto_refresh: Option<u32>,
    glyph_delay: u32,
}

impl Default for ProjectMenuView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectMenuView {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(PROJECT_MENU_VIEW_ID),
            rows: Vec::new(),
            auto_refresh: None,
            glyph_delay: GLYPH_DELAY_IN,
        }
    }

    /// Frames left before the next auto refresh, if one is armed.
    pub fn auto_refresh(&self) -> Option<u32> {
        self.auto_refresh
    }

    pub fn is_row_over(&self, index: usize) -> Option<bool> {
        self.rows.get(index).map(|r| r.over)
    }

    pub fn row_project_id(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(|r| r.project_id.as_str())
    }

    fn start_line(ctx: &ViewCtx<'_>, rows: usize) -> i32 {
        let menu_lines = i32::try_from(rows).unwrap_or(i32::MAX / LINE_SPACING) * LINE_SPACING;
        (ctx.grid_lines() - menu_lines).div_euclid(2).max(MIN_START_LINE)
    }

    fn redraw_flagged(&mut self, ctx: &mut ViewCtx<'_>) {
        self.draw(ctx, 0, DrawType::Clear);
        self.draw(ctx, ROLLOVER_REDRAW_DELAY, DrawType::Fill);
    }

    fn run_auto_refresh(&mut self, ctx: &mut ViewCtx<'_>) {
        tracing::debug!("project menu auto refresh");
        for row in &mut self.rows {
            if ctx.rng.chance(AUTO_REFRESH_PROBABILITY) {
                row.requires_redraw = true;
                row.over = ctx.rng.chance(AUTO_REFRESH_PROBABILITY);
            }
        }
        self.redraw_flagged(ctx);
    }
}

impl DotMatrixView for ProjectMenuView {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn start(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_start(delay);
        self.rows = ctx
            .projects
            .list_projects()
            .iter()
            .map(|p| MenuRow {
                project_id: p.id.clone(),
                over: false,
                requires_redraw: true,
            })
            .collect();
        self.glyph_delay = GLYPH_DELAY_IN;
        self.auto_refresh = None;

        self.draw(ctx, delay, DrawType::Fill);

        let items: Vec<ItemGeometry> = self.base.items().to_vec();
        for (i, geometry) in items.into_iter().enumerate() {
            self.base.register_region(ctx, i, geometry);
        }
    }

    fn stop(&mut self, ctx: &mut ViewCtx<'_>, delay: u32) {
        self.base.begin_stop(ctx.interactive, delay);
        self.glyph_delay = GLYPH_DELAY_OUT;
        self.auto_refresh = None;
        for row in &mut self.rows {
            row.requires_redraw = true;
        }
        self.draw(ctx, delay, DrawType::Clear);
    }

    /// Regenerate flagged rows only. A clear pass keeps the flags so the fill pass that
    /// follows redraws the same rows; the fill pass consumes them.
    fn draw(&mut self, ctx: &mut ViewCtx<'_>, delay: u32, draw: DrawType) {
        let projects = ctx.projects;
        let line_height = ctx.layout.line_height;
        let mobile = ctx.grid.is_mobile();
        let start = Self::start_line(ctx, self.rows.len());

        for (i, row) in self.rows.iter_mut().enumerate() {
            if !row.requires_redraw {
                continue;
            }
            let Some(project) = projects.project_by_id(&row.project_id) else {
                tracing::warn!(project = row.project_id.as_str(), "menu row has no project");
                continue;
            };

            let y = line_height * (start + LINE_SPACING * i as i32);
            let (text_draw, surround_draw) = rollover_draw_types(draw, row.over);

            let c = ctx.builder().glyph_line_centered(
                project.display_name(mobile),
                y,
                Style::new(delay + ROLLOVER_REDRAW_DELAY, self.glyph_delay, text_draw),
            );
            let geometry = ItemGeometry::of_centered(&c, y);
            ctx.add(c);
            self.base.set_item(i, geometry);

            ctx.add_surround(geometry, delay, FillStrategyType::Reverse, surround_draw);

            if draw == DrawType::Fill {
                row.requires_redraw = false;
            }
        }
    }

    fn tick(&mut self, ctx: &mut ViewCtx<'_>) {
        if !self.base.is_active() {
            return;
        }
        if let Some(frames) = self.auto_refresh {
            let left = frames.saturating_sub(1);
            if left == 0 {
                self.auto_refresh = None;
                self.run_auto_refresh(ctx);
            } else {
                self.auto_refresh = Some(left);
            }
        }
    }

    fn on_draw_complete(&mut self, _ctx: &mut ViewCtx<'_>) {
        if self.base.is_active() {
            self.auto_refresh = Some(AUTO_REFRESH_FRAMES);
        }
    }

    fn on_pointer(
        &mut self,
        ctx: &mut ViewCtx<'_>,
        item: usize,
        event: PointerEvent,
    ) -> Option<Navigation> {
        let Some(row) = self.rows.get_mut(item) else {
            tracing::warn!(item, "menu pointer event for unknown row");
            return None;
        };
        match event {
            PointerEvent::Click => Some(Navigation::ProjectSelected(row.project_id.clone())),
            PointerEvent::Over | PointerEvent::Out => {
                self.auto_refresh = None;
                row.over = event == PointerEvent::Over;
                row.requires_redraw = true;
                self.redraw_flagged(ctx);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/menu.rs"]
mod tests;
