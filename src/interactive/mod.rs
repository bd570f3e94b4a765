//! Hit-region collaborator used for pointer input.

use crate::foundation::core::PixelRect;

/// Handle returned by [`InteractiveLayer::register_region`]. Never reused within a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(pub u64);

/// Payload attached to a region: which view owns it and which of its items it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionData {
    pub view_id: String,
    pub item: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Click,
    Over,
    Out,
}

/// Creates and destroys pointer hit regions. The engine never queries region state.
pub trait InteractiveLayer {
    fn register_region(&mut self, rect: PixelRect, data: RegionData) -> RegionId;
    fn unregister_region(&mut self, id: RegionId);
}

/// One recorded call on an [`InMemoryInteractiveLayer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractiveCall {
    Register { id: RegionId, view_id: String },
    Unregister { id: RegionId },
}

#[derive(Clone, Debug)]
pub struct Region {
    pub id: RegionId,
    /// Hit rectangle, already padded.
    pub rect: PixelRect,
    pub data: RegionData,
}

/// In-memory region table with a call log.
#[derive(Clone, Debug)]
pub struct InMemoryInteractiveLayer {
    border_px: u32,
    next_id: u64,
    regions: Vec<Region>,
    log: Vec<InteractiveCall>,
}

impl Default for InMemoryInteractiveLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryInteractiveLayer {
    /// Regions get a 10 px border on every side, so small glyph rows stay easy to hit.
    pub const DEFAULT_BORDER_PX: u32 = 10;

    pub fn new() -> Self {
        Self::with_border(Self::DEFAULT_BORDER_PX)
    }

    pub fn with_border(border_px: u32) -> Self {
        Self {
            border_px,
            next_id: 1,
            regions: Vec::new(),
            log: Vec::new(),
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Every register/unregister call, in order.
    pub fn calls(&self) -> &[InteractiveCall] {
        &self.log
    }

    pub fn clear_calls(&mut self) {
        self.log.clear();
    }

    /// Topmost (most recently registered) region containing the pixel.
    pub fn region_at(&self, px: i32, py: i32) -> Option<RegionId> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.rect.contains(px, py))
            .map(|r| r.id)
    }
}

impl InteractiveLayer for InMemoryInteractiveLayer {
    fn register_region(&mut self, rect: PixelRect, data: RegionData) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.log.push(InteractiveCall::Register {
            id,
            view_id: data.view_id.clone(),
        });
        self.regions.push(Region {
            id,
            rect: rect.padded(self.border_px),
            data,
        });
        id
    }

    fn unregister_region(&mut self, id: RegionId) {
        self.log.push(InteractiveCall::Unregister { id });
        let before = self.regions.len();
        self.regions.retain(|r| r.id != id);
        if self.regions.len() == before {
            tracing::warn!(id = id.0, "unregister of unknown region");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interactive/interactive.rs"]
mod tests;
