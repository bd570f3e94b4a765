pub mod fill;
pub mod glyph;
pub mod manager;
#[allow(clippy::module_inception)]
pub mod shape;

pub use fill::{DrawType, FillStrategyType, FillType};
pub use glyph::{GlyphBitmap, GlyphTable, SPACE_CODE, parse_text_to_glyph_codes};
pub use manager::{ShapeManager, ShapeParams};
pub use shape::{Shape, ShapeId, ShapeKind};
