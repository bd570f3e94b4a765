//! The orchestrator: owns every manager and view and drives them one frame at a time.
//!
//! Views create components, components create shapes, shapes paint dots.

use crate::component::ComponentManager;
use crate::config::{LayoutConstants, MatrixConfig};
use crate::dot::DotManager;
use crate::foundation::error::{DotMatrixError, DotMatrixResult};
use crate::foundation::rng::Rng64;
use crate::grid::GridData;
use crate::interactive::{InteractiveLayer, PointerEvent, RegionId};
use crate::project::{ProjectCatalog, ProjectSource};
use crate::shape::{GlyphTable, ShapeManager};
use crate::surface::PixelSurface;
use crate::view::{
    DotMatrixView, HeaderView, INTRO_VIEW_ID, IntroView, Navigation, PROJECT_MENU_VIEW_ID,
    ProjectMenuView, ProjectView, TestView, View, ViewCtx,
};

/// Offsets the view random stream from the shape stream drawn from the same seed.
const VIEW_RNG_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Shared animation state handed to views through a [`ViewCtx`].
pub struct Engine {
    dots: DotManager,
    shapes: ShapeManager,
    components: ComponentManager,
    projects: Box<dyn ProjectSource>,
    layout: LayoutConstants,
    rng: Rng64,
}

impl Engine {
    fn ctx<'a>(&'a mut self, interactive: &'a mut dyn InteractiveLayer) -> ViewCtx<'a> {
        ViewCtx {
            grid: self.dots.grid(),
            shapes: &mut self.shapes,
            components: &mut self.components,
            interactive,
            projects: &*self.projects,
            layout: self.layout,
            rng: &mut self.rng,
        }
    }
}

fn find_view<'v>(views: &'v mut [View], id: &str) -> Option<&'v mut View> {
    views.iter_mut().find(|v| v.id() == id)
}

/// Dot-matrix display with a header, switchable views and navigation.
///
/// Collaborators are passed per call: the pixel surface to [`Self::tick`] and
/// [`Self::set_size`], the interactive layer to anything that may start or stop a view.
pub struct DirectableDotMatrix {
    config: MatrixConfig,
    engine: Engine,
    header: HeaderView,
    views: Vec<View>,
    current_view: String,
    draw_complete_signaled: bool,
}

impl DirectableDotMatrix {
    /// Build the view set, size the grid and start the header and the initial view.
    #[tracing::instrument(skip(config, glyphs, projects, interactive))]
    pub fn new(
        config: MatrixConfig,
        glyphs: GlyphTable,
        projects: Box<dyn ProjectSource>,
        width_px: u32,
        height_px: u32,
        interactive: &mut dyn InteractiveLayer,
    ) -> DotMatrixResult<Self> {
        config.validate()?;

        let mut views = vec![
            View::Intro(IntroView::new()),
            View::ProjectMenu(ProjectMenuView::new()),
        ];
        views.extend(
            projects
                .list_projects()
                .iter()
                .map(|p| View::Project(ProjectView::new(p.id.clone()))),
        );
        views.push(View::Test(TestView::new()));

        if !views.iter().any(|v| v.id() == config.initial_view) {
            return Err(DotMatrixError::validation(format!(
                "initial view '{}' does not exist",
                config.initial_view
            )));
        }

        let mut dots =
            DotManager::new(GridData::new(config.cell_size(), config.mobile_width_cells));
        dots.resolve_size(width_px, height_px);

        let engine = Engine {
            dots,
            shapes: ShapeManager::new(glyphs, config.seed),
            components: ComponentManager::new(),
            projects,
            layout: config.layout,
            rng: Rng64::new(config.seed ^ VIEW_RNG_STREAM),
        };

        let mut matrix = Self {
            current_view: config.initial_view.clone(),
            config,
            engine,
            header: HeaderView::new(),
            views,
            draw_complete_signaled: false,
        };
        tracing::debug!(views = matrix.views.len(), initial = %matrix.current_view, "matrix built");
        matrix.start_header_and_current(interactive);
        Ok(matrix)
    }

    /// Default configuration with the bundled glyphs and projects.
    pub fn with_defaults(
        width_px: u32,
        height_px: u32,
        interactive: &mut dyn InteractiveLayer,
    ) -> DotMatrixResult<Self> {
        Self::new(
            MatrixConfig::default(),
            GlyphTable::builtin()?,
            Box::new(ProjectCatalog::builtin()?),
            width_px,
            height_px,
            interactive,
        )
    }

    /// One frame: views, then components, then the settle check.
    pub fn tick(&mut self, surface: &mut dyn PixelSurface, interactive: &mut dyn InteractiveLayer) {
        {
            let mut ctx = self.engine.ctx(interactive);
            for view in &mut self.views {
                view.as_dyn_mut().tick(&mut ctx);
            }
        }

        self.engine.components.tick(
            &mut self.engine.dots,
            &mut self.engine.shapes,
            surface,
        );

        let active = self.engine.components.active_count();
        if active == 0 && !self.draw_complete_signaled {
            tracing::debug!(view = %self.current_view, "draw complete");
            let mut ctx = self.engine.ctx(interactive);
            if let Some(view) = find_view(&mut self.views, &self.current_view) {
                view.as_dyn_mut().on_draw_complete(&mut ctx);
            }
            self.draw_complete_signaled = true;
        }
        if active > 0 && self.draw_complete_signaled {
            self.draw_complete_signaled = false;
        }
    }

    #[tracing::instrument(skip(self, interactive))]
    pub fn project_show(&mut self, project_id: &str, interactive: &mut dyn InteractiveLayer) {
        self.switch_to(project_id, false, interactive);
    }

    #[tracing::instrument(skip(self, interactive))]
    pub fn project_menu_open(&mut self, interactive: &mut dyn InteractiveLayer) {
        self.switch_to(PROJECT_MENU_VIEW_ID, true, interactive);
    }

    #[tracing::instrument(skip(self, interactive))]
    pub fn project_menu_close(&mut self, interactive: &mut dyn InteractiveLayer) {
        self.switch_to(INTRO_VIEW_ID, false, interactive);
    }

    /// Abandon all animation, clear the dots, resize the grid and redraw from a zero delay.
    #[tracing::instrument(skip(self, surface, interactive))]
    pub fn set_size(
        &mut self,
        width_px: u32,
        height_px: u32,
        surface: &mut dyn PixelSurface,
        interactive: &mut dyn InteractiveLayer,
    ) {
        {
            let mut ctx = self.engine.ctx(interactive);
            self.header.stop(&mut ctx, 0);
            if let Some(view) = find_view(&mut self.views, &self.current_view) {
                view.as_dyn_mut().stop(&mut ctx, 0);
            }
        }

        self.engine.components.reset(&mut self.engine.shapes);
        self.engine.shapes.reset();
        self.engine.dots.reset(surface);
        self.engine.dots.resolve_size(width_px, height_px);

        self.start_header_and_current(interactive);
    }

    /// Deliver a pointer event for a region and apply any navigation it produces.
    ///
    /// The navigation is also returned; [`Navigation::OpenUrl`] is left to the host.
    pub fn pointer(
        &mut self,
        region: RegionId,
        event: PointerEvent,
        interactive: &mut dyn InteractiveLayer,
    ) -> Option<Navigation> {
        let nav = if let Some(item) = self.header.base().item_for_region(region) {
            let mut ctx = self.engine.ctx(interactive);
            self.header.on_pointer(&mut ctx, item, event)
        } else if let Some((view, item)) = self.views.iter_mut().find_map(|v| {
            let item = v.as_dyn().base().item_for_region(region)?;
            Some((v, item))
        }) {
            let mut ctx = self.engine.ctx(interactive);
            view.as_dyn_mut().on_pointer(&mut ctx, item, event)
        } else {
            tracing::warn!(region = region.0, ?event, "pointer event for unknown region");
            return None;
        };

        match &nav {
            Some(Navigation::MenuOpen) => self.project_menu_open(interactive),
            Some(Navigation::MenuClose) => self.project_menu_close(interactive),
            Some(Navigation::ProjectSelected(id)) => self.project_show(id, interactive),
            Some(Navigation::OpenUrl(_)) | None => {}
        }
        nav
    }

    fn start_header_and_current(&mut self, interactive: &mut dyn InteractiveLayer) {
        let mut ctx = self.engine.ctx(interactive);
        self.header.start(&mut ctx, 0);
        if let Some(view) = find_view(&mut self.views, &self.current_view) {
            view.as_dyn_mut().start(&mut ctx, 0);
        }
    }

    // Components and shapes go first so nothing from the outgoing view keeps painting; the
    // stop then queues its own clear pass.
    fn stop_current_view(&mut self, interactive: &mut dyn InteractiveLayer) {
        tracing::debug!(view = %self.current_view, "stop current view");
        self.engine.components.reset(&mut self.engine.shapes);
        self.engine.shapes.reset();

        let mut ctx = self.engine.ctx(interactive);
        if let Some(view) = find_view(&mut self.views, &self.current_view) {
            view.as_dyn_mut().stop(&mut ctx, 0);
        }
    }

    fn switch_to(&mut self, target: &str, menu_open: bool, interactive: &mut dyn InteractiveLayer) {
        self.stop_current_view(interactive);

        let delay = self.config.page_transition_delay;
        let mut ctx = self.engine.ctx(interactive);
        self.header.set_is_menu_open(&mut ctx, menu_open);
        match find_view(&mut self.views, target) {
            Some(view) => view.as_dyn_mut().start(&mut ctx, delay),
            None => tracing::warn!(view = target, "no view to show"),
        }

        self.current_view = target.to_string();
    }

    pub fn active_component_count(&self) -> usize {
        self.engine.components.active_count()
    }

    pub fn current_view_id(&self) -> &str {
        &self.current_view
    }

    pub fn is_menu_open(&self) -> bool {
        self.header.is_menu_open()
    }

    pub fn filled_dot_count(&self) -> usize {
        self.engine.dots.filled_count()
    }

    pub fn dots(&self) -> &DotManager {
        &self.engine.dots
    }

    pub fn grid(&self) -> &GridData {
        self.engine.dots.grid()
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    pub fn projects(&self) -> &dyn ProjectSource {
        &*self.engine.projects
    }

    pub fn header(&self) -> &HeaderView {
        &self.header
    }

    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id() == id)
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/matrix.rs"]
mod tests;
