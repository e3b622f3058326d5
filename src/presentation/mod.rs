//! Presentation boundary.
//!
//! The core never renders, animates, or plays sound. It calls out through
//! `Presentation` after each state change and asks it for yes/no answers
//! before committing a user action.
//!
//! ## Contract
//!
//! - Render calls receive the state *after* the change; they never see a
//!   speculative value.
//! - `confirm` blocks the command until answered. `false` leaves the state
//!   untouched.
//! - `pace` is the only place time passes. The core state machine is
//!   instant; a UI sleeps or animates here, tests record the call.

pub mod scripted;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{CardType, Rarity};
use crate::combat::Combatant;
use crate::entity::{Enemy, Player};
use crate::hand::Hand;

pub use scripted::{NullPresentation, PresentationEvent, ScriptedPresentation};

/// Fire-and-forget visual or audio cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectCue {
    /// A reward card landed in the hand.
    Loot(Rarity),
    /// A card went into an equipment slot.
    Equip(CardType, Rarity),
    /// A combatant landed a hit.
    Strike(Combatant),
    Defeated,
    Died,
}

/// Callbacks from the core into whatever displays the game.
///
/// Only `confirm` must be implemented; every other hook defaults to doing
/// nothing, so a headless driver can ignore what it does not display.
pub trait Presentation {
    fn render_player(&mut self, _player: Option<&Player>) {}

    fn render_enemy(&mut self, _enemy: Option<&Enemy>) {}

    fn render_hand(&mut self, _hand: &Hand) {}

    fn render_equipment(&mut self, _player: Option<&Player>) {}

    /// The hand is over the cap and the player must discard.
    fn show_discard_prompt(&mut self, _hand: &Hand) {}

    fn hide_discard_prompt(&mut self) {}

    fn set_attack_available(&mut self, _available: bool) {}

    /// One-way message ("Goblin defeated!", "You died!").
    fn notify(&mut self, _message: &str) {}

    /// Yes/no question. The command waits on the answer.
    fn confirm(&mut self, prompt: &str) -> bool;

    fn play_effect(&mut self, _cue: EffectCue) {}

    /// Presentation-side delay between two revealed state changes.
    fn pace(&mut self, _duration: Duration) {}
}
