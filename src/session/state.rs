//! Mutable game state, gathered in one aggregate.
//!
//! Every component takes a `GameSession` explicitly; nothing reads ambient
//! state.

use serde::{Deserialize, Serialize};

use crate::entity::{Enemy, Player};
use crate::hand::{DiscardGate, GateUpdate, Hand};

/// Per-round bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// The player already played, equipped, or discarded this round.
    pub round_action_used: bool,
    /// A reward was granted but the next spawn waits on a discard.
    pub pending_next_enemy: bool,
    /// Enemies defeated this session.
    pub rooms_cleared: u32,
}

/// Everything that changes during play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub player: Option<Player>,
    pub enemy: Option<Enemy>,
    pub hand: Hand,
    pub round: RoundState,
    pub gate: DiscardGate,
}

impl GameSession {
    /// An empty, pre-game session.
    #[must_use]
    pub fn new(hand_soft_cap: usize) -> Self {
        Self {
            player: None,
            enemy: None,
            hand: Hand::new(),
            round: RoundState::default(),
            gate: DiscardGate::new(hand_soft_cap),
        }
    }

    /// True once a class has been chosen.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.player.is_some()
    }

    /// True when attacking is admitted right now.
    #[must_use]
    pub fn attack_available(&self) -> bool {
        !self.gate.is_locked()
            && self.player.as_ref().is_some_and(Player::is_alive)
            && self.enemy.as_ref().is_some_and(Enemy::is_alive)
    }

    /// Re-run the discard gate against the current hand.
    pub fn reevaluate_gate(&mut self) -> GateUpdate {
        self.gate.evaluate(self.hand.len(), &mut self.round.pending_next_enemy)
    }

    /// Back to pre-game: no player, no enemy, empty hand, fresh round.
    pub fn reset(&mut self) {
        self.player = None;
        self.enemy = None;
        self.hand.clear();
        self.round = RoundState::default();
        self.gate.reset();
    }
}
