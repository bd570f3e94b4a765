//! Position-sequence transforms applied once, at shape construction.

use crate::foundation::core::GridCoord;
use crate::foundation::rng::Rng64;

/// Content selection over a position sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillType {
    #[default]
    PassThrough,
    /// Drop each position independently.
    Random,
}

/// Ordering over a position sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillStrategyType {
    #[default]
    PassThrough,
    Reverse,
    Random,
}

/// What a shape does to the dots it visits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawType {
    #[default]
    Fill,
    Clear,
}

impl DrawType {
    pub fn inverse(self) -> Self {
        match self {
            Self::Fill => Self::Clear,
            Self::Clear => Self::Fill,
        }
    }
}

/// Drop probability used by [`FillType::Random`].
pub const RANDOM_FILL_DROP_PROBABILITY: f64 = 0.5;

pub fn apply_fill(fill: FillType, positions: &mut Vec<GridCoord>, rng: &mut Rng64) {
    apply_fill_with_probability(fill, positions, RANDOM_FILL_DROP_PROBABILITY, rng);
}

/// Dropped entries are removed, so a random fill shortens the sequence.
pub fn apply_fill_with_probability(
    fill: FillType,
    positions: &mut Vec<GridCoord>,
    drop_probability: f64,
    rng: &mut Rng64,
) {
    match fill {
        FillType::PassThrough => {}
        FillType::Random => positions.retain(|_| !rng.chance(drop_probability)),
    }
}

pub fn apply_fill_strategy(
    strategy: FillStrategyType,
    positions: &mut [GridCoord],
    rng: &mut Rng64,
) {
    match strategy {
        FillStrategyType::PassThrough => {}
        FillStrategyType::Reverse => positions.reverse(),
        FillStrategyType::Random => rng.shuffle(positions),
    }
}

/// Fill first, then strategy. A random fill changes the set before a random strategy permutes it.
pub fn apply_transforms(
    fill: FillType,
    strategy: FillStrategyType,
    positions: &mut Vec<GridCoord>,
    rng: &mut Rng64,
) {
    apply_fill(fill, positions, rng);
    apply_fill_strategy(strategy, positions, rng);
}

#[cfg(test)]
#[path = "../../tests/unit/shape/fill.rs"]
mod tests;
