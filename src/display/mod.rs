//! Fitting the matrix into a host container.

/// Pixel size the matrix is drawn at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DisplaySize {
    pub width_px: u32,
    pub height_px: u32,
}

/// Landscape containers get a square as tall as the container; portrait ones use the whole
/// container. The width is then rounded down to whole cells.
pub fn fit_display(
    container_width_px: u32,
    container_height_px: u32,
    cell_width_px: u32,
) -> DisplaySize {
    let (width, height) = if container_width_px > container_height_px {
        (container_height_px, container_height_px)
    } else {
        (container_width_px, container_height_px)
    };
    let cell = cell_width_px.max(1);
    DisplaySize {
        width_px: width / cell * cell,
        height_px: height,
    }
}

/// Remembers the last fitted size so callers only resize on change.
#[derive(Clone, Debug, Default)]
pub struct DisplayTracker {
    current: Option<DisplaySize>,
}

impl DisplayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that already knows the size the matrix was built with.
    pub fn with_size(size: DisplaySize) -> Self {
        Self {
            current: Some(size),
        }
    }

    pub fn current(&self) -> Option<DisplaySize> {
        self.current
    }

    /// Fit the container and return the new size if it differs from the last one.
    pub fn update(
        &mut self,
        container_width_px: u32,
        container_height_px: u32,
        cell_width_px: u32,
    ) -> Option<DisplaySize> {
        let fitted = fit_display(container_width_px, container_height_px, cell_width_px);
        if self.current == Some(fitted) {
            return None;
        }
        tracing::debug!(width = fitted.width_px, height = fitted.height_px, "display resized");
        self.current = Some(fitted);
        Some(fitted)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/display.rs"]
mod tests;
