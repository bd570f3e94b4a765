//! The set of components still animating.

use crate::component::component::Component;
use crate::dot::DotManager;
use crate::shape::ShapeManager;
use crate::surface::PixelSurface;

/// Active components in registration order.
#[derive(Debug, Default)]
pub struct ComponentManager {
    components: Vec<Component>,
}

impl ComponentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Tick every component once, in order, evicting the ones that complete.
    ///
    /// Evicted components release their shape ids. Returns the number evicted this tick.
    pub fn tick(
        &mut self,
        dots: &mut DotManager,
        shapes: &mut ShapeManager,
        surface: &mut dyn PixelSurface,
    ) -> usize {
        let before = self.components.len();
        self.components.retain_mut(|c| {
            let complete = c.tick(dots, surface);
            if complete {
                c.destroy(shapes);
            }
            !complete
        });
        let evicted = before - self.components.len();
        if evicted > 0 {
            tracing::trace!(evicted, active = self.components.len(), "components evicted");
        }
        evicted
    }

    /// Drop every component, painted or not.
    pub fn reset(&mut self, shapes: &mut ShapeManager) {
        tracing::debug!(components = self.components.len(), "component manager reset");
        for c in &mut self.components {
            c.destroy(shapes);
        }
        self.components.clear();
    }

    pub fn stop_unstarted_shapes(&mut self) {
        for c in &mut self.components {
            c.stop_unstarted_shapes();
        }
    }

    /// Components still animating. Zero means the drawing has settled.
    pub fn active_count(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/manager.rs"]
mod tests;
