//! Driving a matrix over time with in-memory collaborators.

pub mod clock;
pub mod player;

pub use clock::FrameClock;
pub use player::{Player, PlayerStats};
