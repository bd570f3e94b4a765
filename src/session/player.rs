use crate::config::MatrixConfig;
use crate::display::{DisplaySize, DisplayTracker, fit_display};
use crate::foundation::error::DotMatrixResult;
use crate::interactive::{InMemoryInteractiveLayer, PointerEvent, RegionId};
use crate::matrix::DirectableDotMatrix;
use crate::project::{ProjectCatalog, ProjectSource};
use crate::session::clock::FrameClock;
use crate::shape::GlyphTable;
use crate::surface::InMemorySurface;
use crate::view::Navigation;

/// Snapshot of a player run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PlayerStats {
    pub frames: u64,
    pub paint_calls: u64,
    pub filled_dots: usize,
    pub active_components: usize,
    pub current_view: String,
    pub width_px: u32,
    pub height_px: u32,
}

/// Headless host: a matrix plus its clock, display fitting and recording collaborators.
pub struct Player {
    matrix: DirectableDotMatrix,
    clock: FrameClock,
    display: DisplayTracker,
    surface: InMemorySurface,
    interactive: InMemoryInteractiveLayer,
    frames: u64,
}

impl Player {
    /// Fit the container, then build the matrix at the fitted size.
    pub fn new(
        config: MatrixConfig,
        glyphs: GlyphTable,
        projects: Box<dyn ProjectSource>,
        container_width_px: u32,
        container_height_px: u32,
    ) -> DotMatrixResult<Self> {
        let size = fit_display(container_width_px, container_height_px, config.cell_width_px);
        let clock = FrameClock::new(config.fps);
        let mut interactive = InMemoryInteractiveLayer::new();
        let matrix = DirectableDotMatrix::new(
            config,
            glyphs,
            projects,
            size.width_px,
            size.height_px,
            &mut interactive,
        )?;
        Ok(Self {
            matrix,
            clock,
            display: DisplayTracker::with_size(size),
            surface: InMemorySurface::new(size.width_px, size.height_px),
            interactive,
            frames: 0,
        })
    }

    pub fn with_defaults(
        container_width_px: u32,
        container_height_px: u32,
    ) -> DotMatrixResult<Self> {
        Self::new(
            MatrixConfig::default(),
            GlyphTable::builtin()?,
            Box::new(ProjectCatalog::builtin()?),
            container_width_px,
            container_height_px,
        )
    }

    /// Feed elapsed time. When a step is due, refit the display (resizing on change) and tick.
    ///
    /// Returns whether a step ran.
    pub fn advance(
        &mut self,
        delta_ms: f64,
        container_width_px: u32,
        container_height_px: u32,
    ) -> bool {
        if !self.clock.advance(delta_ms) {
            return false;
        }
        let cell_width = self.matrix.config().cell_width_px;
        if let Some(size) = self
            .display
            .update(container_width_px, container_height_px, cell_width)
        {
            self.resize_to(size);
        }
        self.step();
        true
    }

    /// Tick once regardless of the clock.
    pub fn step(&mut self) {
        self.matrix.tick(&mut self.surface, &mut self.interactive);
        self.frames += 1;
    }

    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Refit to a new container and resize if the fitted size changed.
    pub fn resize(&mut self, container_width_px: u32, container_height_px: u32) -> DisplaySize {
        let cell_width = self.matrix.config().cell_width_px;
        if let Some(size) = self
            .display
            .update(container_width_px, container_height_px, cell_width)
        {
            self.resize_to(size);
        }
        self.size()
    }

    fn resize_to(&mut self, size: DisplaySize) {
        self.matrix.set_size(
            size.width_px,
            size.height_px,
            &mut self.surface,
            &mut self.interactive,
        );
        self.surface.resize(size.width_px, size.height_px);
    }

    pub fn pointer(&mut self, region: RegionId, event: PointerEvent) -> Option<Navigation> {
        self.matrix.pointer(region, event, &mut self.interactive)
    }

    /// Pointer event at a pixel, delivered to the topmost region there.
    pub fn pointer_at(&mut self, px: i32, py: i32, event: PointerEvent) -> Option<Navigation> {
        let Some(region) = self.interactive.region_at(px, py) else {
            tracing::debug!(px, py, ?event, "pointer event outside every region");
            return None;
        };
        self.pointer(region, event)
    }

    pub fn project_show(&mut self, project_id: &str) {
        self.matrix.project_show(project_id, &mut self.interactive);
    }

    pub fn project_menu_open(&mut self) {
        self.matrix.project_menu_open(&mut self.interactive);
    }

    pub fn project_menu_close(&mut self) {
        self.matrix.project_menu_close(&mut self.interactive);
    }

    pub fn matrix(&self) -> &DirectableDotMatrix {
        &self.matrix
    }

    pub fn surface(&self) -> &InMemorySurface {
        &self.surface
    }

    pub fn interactive(&self) -> &InMemoryInteractiveLayer {
        &self.interactive
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn size(&self) -> DisplaySize {
        DisplaySize {
            width_px: self.surface.width(),
            height_px: self.surface.height(),
        }
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            frames: self.frames,
            paint_calls: self.surface.paint_calls(),
            filled_dots: self.matrix.filled_dot_count(),
            active_components: self.matrix.active_component_count(),
            current_view: self.matrix.current_view_id().to_string(),
            width_px: self.surface.width(),
            height_px: self.surface.height(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
