//! Dotmatrix is a frame-driven animation engine for a grid of binary dots.
//!
//! Text, lines and rectangles are never drawn at once: they are scheduled as shapes that paint
//! one cell per frame after a delay, so pages build up and wipe away dot by dot.
//!
//! # Pipeline overview
//!
//! 1. **View**: a named page (`intro`, `project-menu`, one per project, `test`) turns layout
//!    into components, and registers pointer regions for its interactive items.
//! 2. **Component**: one drawing intent (a text line, a rectangle) becomes staggered shapes.
//! 3. **Shape**: an ordered, delay-gated sequence of grid cells, filtered and reordered once by
//!    a fill and a fill strategy.
//! 4. **Dot**: each cell change is pushed to a [`PixelSurface`] as one opaque or transparent
//!    block.
//!
//! [`DirectableDotMatrix`] owns all of it and advances one frame per [`DirectableDotMatrix::tick`];
//! [`Player`] adds a clock, display fitting and in-memory collaborators for headless use.
//!
//! Everything runs on the caller's thread. Randomness comes from one seed in [`MatrixConfig`],
//! so a run is reproducible.
#![forbid(unsafe_code)]

mod component;
mod config;
mod display;
mod dot;
mod foundation;
mod grid;
mod interactive;
mod matrix;
mod project;
mod session;
mod shape;
mod surface;
mod view;

pub use component::{Component, ComponentBuilder, ComponentKind, ComponentManager, Style};
pub use config::{LayoutConstants, MatrixConfig};
pub use display::{DisplaySize, DisplayTracker, fit_display};
pub use dot::{Dot, DotIndex, DotManager};
pub use foundation::core::{CellSize, GridCoord, PixelRect};
pub use foundation::error::{DotMatrixError, DotMatrixResult};
pub use foundation::rng::Rng64;
pub use grid::GridData;
pub use interactive::{
    InMemoryInteractiveLayer, InteractiveCall, InteractiveLayer, PointerEvent, Region, RegionData,
    RegionId,
};
pub use matrix::{DirectableDotMatrix, Engine};
pub use project::{Credit, Media, Project, ProjectCatalog, ProjectSource};
pub use session::{FrameClock, Player, PlayerStats};
pub use shape::fill::{
    RANDOM_FILL_DROP_PROBABILITY, apply_fill, apply_fill_strategy, apply_fill_with_probability,
    apply_transforms,
};
pub use shape::{
    DrawType, FillStrategyType, FillType, GlyphBitmap, GlyphTable, SPACE_CODE, Shape, ShapeId,
    ShapeKind, ShapeManager, ShapeParams, parse_text_to_glyph_codes,
};
pub use surface::{InMemorySurface, PixelSurface};
pub use view::{
    DotMatrixView, HEADER_VIEW_ID, HeaderView, INTRO_VIEW_ID, IntroView, ItemGeometry, Navigation,
    PROJECT_MENU_VIEW_ID, ProjectMenuView, ProjectView, TEST_VIEW_ID, TestView, View, ViewBase,
    ViewCtx,
};
