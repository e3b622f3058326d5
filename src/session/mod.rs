//! Session state and the progression controller.

pub mod controller;
pub mod state;

pub use controller::{CommandOutcome, Dungeon};
pub use state::{GameSession, RoundState};
