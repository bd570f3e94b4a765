//! Named screens built from components.
//!
//! A view draws by handing components to the [`ComponentManager`]; it never paints dots itself.
//! Every call receives a [`ViewCtx`] borrowing the engine parts it may touch for that call.

pub mod diagnostic;
pub mod header;
pub mod intro;
pub mod menu;
pub mod project;

pub use diagnostic::TestView;
pub use header::HeaderView;
pub use intro::IntroView;
pub use menu::ProjectMenuView;
pub use project::ProjectView;

use crate::component::{Component, ComponentBuilder, ComponentManager, Style};
use crate::config::LayoutConstants;
use crate::foundation::core::{GridCoord, PixelRect};
use crate::foundation::rng::Rng64;
use crate::grid::GridData;
use crate::interactive::{InteractiveLayer, PointerEvent, RegionData, RegionId};
use crate::project::ProjectSource;
use crate::shape::{DrawType, FillStrategyType, ShapeManager};

pub const HEADER_VIEW_ID: &str = "header";
pub const INTRO_VIEW_ID: &str = "intro";
pub const PROJECT_MENU_VIEW_ID: &str = "project-menu";
pub const TEST_VIEW_ID: &str = "test";

/// Width of one strip in a rectangle block.
const RECTANGLE_BLOCK_STRIP: i32 = 3;

/// Requests a view hands back to its host after a pointer event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    MenuOpen,
    MenuClose,
    ProjectSelected(String),
    OpenUrl(String),
}

/// Engine parts a view may use during one call.
pub struct ViewCtx<'a> {
    pub grid: &'a GridData,
    pub shapes: &'a mut ShapeManager,
    pub components: &'a mut ComponentManager,
    pub interactive: &'a mut dyn InteractiveLayer,
    pub projects: &'a dyn ProjectSource,
    pub layout: LayoutConstants,
    pub rng: &'a mut Rng64,
}

impl ViewCtx<'_> {
    pub fn builder(&mut self) -> ComponentBuilder<'_> {
        ComponentBuilder::new(&mut *self.shapes, self.grid.width_in_cells(), self.layout)
    }

    pub fn add(&mut self, component: Component) {
        self.components.add(component);
    }

    /// Whole text lines that fit in the grid height.
    pub fn grid_lines(&self) -> i32 {
        self.grid
            .height_in_cells()
            .checked_div(self.layout.line_height)
            .unwrap_or(0)
    }

    /// A rectangle split into 3-cell-wide column strips, strip `i` delayed by `i` more frames.
    pub fn add_rectangles_block(
        &mut self,
        origin: GridCoord,
        width: i32,
        height: i32,
        style: Style,
    ) {
        let mut offset = 0;
        let mut strip = 0u32;
        while offset < width {
            let strip_width = RECTANGLE_BLOCK_STRIP.min(width - offset);
            let strip_style = Style {
                delay: style.delay.saturating_add(strip),
                ..style
            };
            let c = self.builder().rectangle(
                GridCoord::new(origin.x + offset, origin.y),
                strip_width,
                height,
                strip_style,
            );
            self.add(c);
            offset += RECTANGLE_BLOCK_STRIP;
            strip += 1;
        }
    }

    /// Rollover highlight: one line tall, one cell wider than the text on each side.
    pub fn add_surround(
        &mut self,
        geometry: ItemGeometry,
        delay: u32,
        strategy: FillStrategyType,
        draw: DrawType,
    ) {
        let style = Style::new(delay, 0, draw).with_strategy(strategy);
        self.add_rectangles_block(
            GridCoord::new(geometry.x - 1, geometry.y - 1),
            geometry.width + 2,
            self.layout.line_height,
            style,
        );
    }

    /// Pixel rectangle covering a laid-out text item.
    pub fn item_rect(&self, geometry: ItemGeometry) -> PixelRect {
        let cell = self.grid.cell();
        PixelRect::new(
            self.grid.pixel_x(geometry.x),
            self.grid.pixel_y(geometry.y),
            geometry.width.max(0) as u32 * cell.width_px,
            self.layout.character_height.max(0) as u32 * cell.height_px,
        )
    }
}

/// Grid placement of one laid-out text item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl ItemGeometry {
    pub(crate) fn of_centered(component: &Component, grid_y: i32) -> Self {
        Self {
            x: component.start_x().unwrap_or(0),
            y: grid_y,
            width: component.width().unwrap_or(0),
        }
    }
}

/// State every view carries: identity, active flag, item geometry and live regions.
#[derive(Clone, Debug)]
pub struct ViewBase {
    id: String,
    active: bool,
    items: Vec<ItemGeometry>,
    regions: Vec<(RegionId, usize)>,
}

impl ViewBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: false,
            items: Vec::new(),
            regions: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn items(&self) -> &[ItemGeometry] {
        &self.items
    }

    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.iter().map(|(id, _)| *id)
    }

    /// Forget previous bookkeeping and go active.
    pub(crate) fn begin_start(&mut self, delay: u32) {
        tracing::debug!(view = self.id.as_str(), delay, "view start");
        self.items.clear();
        self.regions.clear();
        self.active = true;
    }

    /// Remove every registered region and go inactive.
    pub(crate) fn begin_stop(&mut self, interactive: &mut dyn InteractiveLayer, delay: u32) {
        tracing::debug!(view = self.id.as_str(), delay, regions = self.regions.len(), "view stop");
        for (id, _) in self.regions.drain(..) {
            interactive.unregister_region(id);
        }
        self.active = false;
    }

    pub(crate) fn set_item(&mut self, index: usize, geometry: ItemGeometry) {
        if self.items.len() <= index {
            self.items.resize(index + 1, ItemGeometry::default());
        }
        self.items[index] = geometry;
    }

    pub(crate) fn register_region(
        &mut self,
        ctx: &mut ViewCtx<'_>,
        item: usize,
        geometry: ItemGeometry,
    ) {
        let rect = ctx.item_rect(geometry);
        let id = ctx.interactive.register_region(
            rect,
            RegionData {
                view_id: self.id.clone(),
                item,
            },
        );
        self.regions.push((id, item));
    }

    pub fn item_for_region(&self, region: RegionId) -> Option<usize> {
        self.regions
            .iter()
            .find(|(id, _)| *id == region)
            .map(|(_, item)| *item)
    }
}

/// Text and surround draw modes for a row with a rollover state.
///
/// A clear pass erases both. A fill pass inverts the row while the pointer is over it.
pub(crate) fn rollover_draw_types(pass: DrawType, over: bool) -> (DrawType, DrawType) {
    match (pass, over) {
        (DrawType::Clear, _) => (DrawType::Clear, DrawType::Clear),
        (DrawType::Fill, true) => (DrawType::Clear, DrawType::Fill),
        (DrawType::Fill, false) => (DrawType::Fill, DrawType::Clear),
    }
}

/// Capability shared by every screen.
pub trait DotMatrixView {
    fn base(&self) -> &ViewBase;
    fn base_mut(&mut self) -> &mut ViewBase;

    /// Go active and draw in fill mode.
    fn start(&mut self, ctx: &mut ViewCtx<'_>, delay: u32);

    /// Remove regions, go inactive and draw in clear mode.
    fn stop(&mut self, ctx: &mut ViewCtx<'_>, delay: u32);

    fn draw(&mut self, ctx: &mut ViewCtx<'_>, delay: u32, draw: DrawType);

    fn tick(&mut self, _ctx: &mut ViewCtx<'_>) {}

    /// Called once each time the drawing settles while this view is current.
    fn on_draw_complete(&mut self, _ctx: &mut ViewCtx<'_>) {}

    fn on_pointer(
        &mut self,
        _ctx: &mut ViewCtx<'_>,
        _item: usize,
        _event: PointerEvent,
    ) -> Option<Navigation> {
        None
    }

    fn id(&self) -> &str {
        self.base().id()
    }

    fn is_active(&self) -> bool {
        self.base().is_active()
    }
}

/// The switchable views. The header runs alongside them and is held on its own.
#[derive(Debug)]
pub enum View {
    Intro(IntroView),
    ProjectMenu(ProjectMenuView),
    Project(ProjectView),
    Test(TestView),
}

impl View {
    pub fn as_dyn(&self) -> &dyn DotMatrixView {
        match self {
            Self::Intro(v) => v,
            Self::ProjectMenu(v) => v,
            Self::Project(v) => v,
            Self::Test(v) => v,
        }
    }

    pub fn as_dyn_mut(&mut self) -> &mut dyn DotMatrixView {
        match self {
            Self::Intro(v) => v,
            Self::ProjectMenu(v) => v,
            Self::Project(v) => v,
            Self::Test(v) => v,
        }
    }

    pub fn id(&self) -> &str {
        self.as_dyn().id()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "../../tests/unit/view/view.rs"]
mod tests;
