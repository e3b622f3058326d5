//! Combatants: the player and the current enemy.

pub mod enemy;
pub mod player;

pub use enemy::Enemy;
pub use player::{Equipment, Player, Slot, SlotSet};
