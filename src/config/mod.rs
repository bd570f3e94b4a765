//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a valid configuration.

use crate::foundation::core::CellSize;
use crate::foundation::error::{DotMatrixError, DotMatrixResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Top-level engine settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixConfig {
    /// Width of one grid cell in pixels.
    pub cell_width_px: u32,
    /// Height of one grid cell in pixels.
    pub cell_height_px: u32,
    /// Fixed simulation rate.
    pub fps: u32,
    /// Seed for every random decision the engine makes.
    pub seed: u64,
    /// Delay (frames) applied to the first draw of a view entered through navigation.
    pub page_transition_delay: u32,
    /// Grids narrower than this many cells use the short project names.
    pub mobile_width_cells: i32,
    /// View shown when the matrix is built.
    pub initial_view: String,
    /// Text and page layout constants.
    pub layout: LayoutConstants,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            cell_width_px: 3,
            cell_height_px: 3,
            fps: 60,
            seed: 0x5eed,
            page_transition_delay: 20,
            mobile_width_cells: 130,
            initial_view: "intro".to_string(),
            layout: LayoutConstants::default(),
        }
    }
}

impl MatrixConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> DotMatrixResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| DotMatrixError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DotMatrixResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DotMatrixError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> DotMatrixResult<()> {
        if self.cell_width_px == 0 || self.cell_height_px == 0 {
            return Err(DotMatrixError::config("cell size must be > 0"));
        }
        if self.fps == 0 {
            return Err(DotMatrixError::config("fps must be > 0"));
        }
        if self.initial_view.is_empty() {
            return Err(DotMatrixError::config("initial_view must not be empty"));
        }
        self.layout.validate()
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_width_px, self.cell_height_px)
    }

    /// Milliseconds in one simulation step.
    pub fn step_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps.max(1))
    }
}

/// Layout constants shared by every view, in grid cells unless noted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConstants {
    pub line_height: i32,
    /// Header height in lines.
    pub header_lines: i32,
    /// Footer height in lines.
    pub footer_lines: i32,
    pub character_height: i32,
    pub space_width: i32,
    pub glyph_spacing_x: i32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            line_height: 7,
            header_lines: 5,
            footer_lines: 7,
            character_height: 5,
            space_width: 3,
            glyph_spacing_x: 1,
        }
    }
}

impl LayoutConstants {
    pub fn validate(&self) -> DotMatrixResult<()> {
        if self.line_height <= 0 {
            return Err(DotMatrixError::config("layout.line_height must be > 0"));
        }
        if self.character_height <= 0 {
            return Err(DotMatrixError::config("layout.character_height must be > 0"));
        }
        if self.space_width < 0 || self.glyph_spacing_x < 0 {
            return Err(DotMatrixError::config(
                "layout.space_width and layout.glyph_spacing_x must be >= 0",
            ));
        }
        if self.header_lines < 0 || self.footer_lines < 0 {
            return Err(DotMatrixError::config(
                "layout header/footer line counts must be >= 0",
            ));
        }
        Ok(())
    }

    pub fn header_height_cells(&self) -> i32 {
        self.header_lines * self.line_height
    }

    pub fn footer_height_cells(&self) -> i32 {
        self.footer_lines * self.line_height
    }

    /// Diagonal stagger: cells further right and down start later.
    pub fn delay_from_grid_position(&self, grid_x: i32, grid_y: i32) -> u32 {
        (grid_x + grid_y).max(0) as u32
    }

    /// `floor((y - start)^2 / (max - start)^2)`, or 0 for a degenerate span.
    pub fn delay_from_grid_position_quadratic(&self, grid_y: i32, start: i32, max: i32) -> u32 {
        let span = i64::from(max - start).pow(2);
        if span == 0 {
            return 0;
        }
        let dist = i64::from(grid_y - start).pow(2);
        (dist / span).clamp(0, i64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/config.rs"]
mod tests;
