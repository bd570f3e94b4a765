//! Pixel surface collaborator: the only place dot state becomes pixels.

/// Receiver of per-dot paint calls.
///
/// Ordering contract: `paint_region` is called once per dot state change, in the order the
/// engine changes dot state within a tick.
pub trait PixelSurface {
    /// Copy a tightly packed RGBA8 block of `width * height` pixels to `(x, y)`.
    fn paint_region(&mut self, x: i32, y: i32, width: u32, height: u32, rgba: &[u8]);
}

/// RGBA8 buffer surface for tests, headless rendering and PNG export.
#[derive(Clone, Debug, Default)]
pub struct InMemorySurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    paint_calls: u64,
}

impl InMemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
            paint_calls: 0,
        }
    }

    /// Reallocate to a new size; every pixel becomes transparent.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize((width as usize) * (height as usize) * 4, 0);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the RGBA8 buffer (row-major, no padding).
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Total `paint_region` calls accepted since construction.
    pub fn paint_calls(&self) -> u64 {
        self.paint_calls
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Count of fully opaque pixels.
    pub fn opaque_pixel_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|p| p[3] == 255).count()
    }
}

impl PixelSurface for InMemorySurface {
    fn paint_region(&mut self, x: i32, y: i32, width: u32, height: u32, rgba: &[u8]) {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            tracing::debug!(x, y, width, height, len = rgba.len(), "paint block size mismatch");
            return;
        }
        let (Ok(x0), Ok(y0)) = (u32::try_from(x), u32::try_from(y)) else {
            tracing::debug!(x, y, "paint block outside surface");
            return;
        };
        if x0.saturating_add(width) > self.width || y0.saturating_add(height) > self.height {
            tracing::debug!(x, y, width, height, "paint block outside surface");
            return;
        }

        let row_bytes = (width as usize) * 4;
        let stride = (self.width as usize) * 4;
        for row in 0..height as usize {
            let dst = (y0 as usize + row) * stride + (x0 as usize) * 4;
            let src = row * row_bytes;
            self.data[dst..dst + row_bytes].copy_from_slice(&rgba[src..src + row_bytes]);
        }
        self.paint_calls += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/surface.rs"]
mod tests;
