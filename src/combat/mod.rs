//! Combat: round resolution and per-class hooks.

pub mod engine;
pub mod hooks;

pub use engine::{
    enemy_damage, player_damage, CombatEngine, CombatPhase, Combatant, RoundOutcome, RoundReport, StrikeEvent,
};
pub use hooks::{ClassHook, ClassHooks};
