#[allow(clippy::module_inception)]
pub mod component;
pub mod manager;

pub use component::{Component, ComponentBuilder, ComponentKind, Style};
pub use manager::ComponentManager;
