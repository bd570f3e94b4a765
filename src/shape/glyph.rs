//! Glyph bitmaps and text-to-glyph-code parsing.

use crate::foundation::core::GridCoord;
use crate::foundation::error::{DotMatrixError, DotMatrixResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reserved glyph code emitted for a literal space.
pub const SPACE_CODE: &str = "space";

const BUILTIN_GLYPHS_JSON: &str = include_str!("../../assets/glyphs.json");

/// Rectangular 0/1 bitmap. Width and height come from the bitmap itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl GlyphBitmap {
    /// Build from rows of `'0'`/`'1'` characters.
    pub fn from_rows<S: AsRef<str>>(code: &str, rows: &[S]) -> DotMatrixResult<Self> {
        let Some(first) = rows.first() else {
            return Err(DotMatrixError::validation(format!("glyph '{code}' has no rows")));
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(DotMatrixError::validation(format!(
                "glyph '{code}' has empty rows"
            )));
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(DotMatrixError::validation(format!(
                    "glyph '{code}' row {y} has width {} (expected {width})",
                    row.chars().count()
                )));
            }
            for c in row.chars() {
                match c {
                    '0' => cells.push(false),
                    '1' => cells.push(true),
                    other => {
                        return Err(DotMatrixError::validation(format!(
                            "glyph '{code}' row {y} has invalid cell {other:?}"
                        )));
                    }
                }
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Out-of-range cells read as clear.
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.cells[(y * self.width + x) as usize]
    }

    /// Filled cells offset by `origin`, row-major.
    pub fn filled_positions(&self, origin: GridCoord) -> Vec<GridCoord> {
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_filled(x, y) {
                    out.push(GridCoord::new(origin.x + x, origin.y + y));
                }
            }
        }
        out
    }
}

/// Glyph code to bitmap lookup.
#[derive(Clone, Debug, Default)]
pub struct GlyphTable {
    glyphs: BTreeMap<String, GlyphBitmap>,
}

impl GlyphTable {
    /// The embedded 5-row font.
    pub fn builtin() -> DotMatrixResult<Self> {
        Self::from_json_str(BUILTIN_GLYPHS_JSON)
    }

    pub fn from_json_str(s: &str) -> DotMatrixResult<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(s)
            .map_err(|e| DotMatrixError::serde(format!("parse glyph JSON: {e}")))?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> DotMatrixResult<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(r)
            .map_err(|e| DotMatrixError::serde(format!("parse glyph JSON: {e}")))?;
        Self::from_raw(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DotMatrixResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DotMatrixError::config(format!("open glyph JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    fn from_raw(raw: BTreeMap<String, Vec<String>>) -> DotMatrixResult<Self> {
        let mut glyphs = BTreeMap::new();
        for (code, rows) in raw {
            let bitmap = GlyphBitmap::from_rows(&code, &rows)?;
            glyphs.insert(code, bitmap);
        }
        Ok(Self { glyphs })
    }

    pub fn insert(&mut self, code: impl Into<String>, bitmap: GlyphBitmap) {
        self.glyphs.insert(code.into(), bitmap);
    }

    /// Exact code first (symbolic names, punctuation), then the upper-cased code.
    pub fn lookup(&self, code: &str) -> Option<&GlyphBitmap> {
        self.glyphs
            .get(code)
            .or_else(|| self.glyphs.get(&code.to_uppercase()))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }
}

/// Split text into glyph codes.
///
/// `{name}` yields `name`; a `{` with no closing `}` later in the text yields a literal `"{"`;
/// a space yields [`SPACE_CODE`]; any other character yields itself.
pub fn parse_text_to_glyph_codes(text: &str) -> Vec<String> {
    let mut codes = Vec::new();
    let mut i = 0;
    while let Some(c) = text[i..].chars().next() {
        match c {
            '{' => {
                if let Some(end) = text[i..].find('}') {
                    codes.push(text[i + 1..i + end].to_string());
                    i += end + 1;
                    continue;
                }
                codes.push("{".to_string());
            }
            ' ' => codes.push(SPACE_CODE.to_string()),
            other => codes.push(other.to_string()),
        }
        i += c.len_utf8();
    }
    codes
}

#[cfg(test)]
#[path = "../../tests/unit/shape/glyph.rs"]
mod tests;
