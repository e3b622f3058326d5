//! Reward and spawn rolls.

pub mod roller;

pub use roller::{RewardBrackets, RewardRoller};
