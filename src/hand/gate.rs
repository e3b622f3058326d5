//! Discard gate: admission control between the hand and the attack button.
//!
//! ## States
//!
//! - `Unlocked`: hand length ≤ cap, attacking allowed
//! - `Locked`: hand length > cap, attacking disabled until the player discards
//!
//! The gate is re-evaluated after every hand mutation. When it opens while a
//! spawn is deferred, it releases that spawn exactly once by clearing the
//! pending flag it was handed.

use log::debug;
use serde::{Deserialize, Serialize};

/// Whether the attack action is currently admitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

/// Result of one gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateUpdate {
    /// State after evaluation.
    pub state: LockState,
    /// True when the state flipped.
    pub changed: bool,
    /// True when a deferred enemy spawn must happen now.
    pub release_spawn: bool,
}

/// Lock state machine keyed on hand size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardGate {
    state: LockState,
    cap: usize,
}

impl DiscardGate {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            state: LockState::Unlocked,
            cap,
        }
    }

    #[must_use]
    pub fn state(&self) -> LockState {
        self.state
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Re-evaluate against `hand_len`.
    ///
    /// If the gate ends `Unlocked` and `pending_spawn` is set, the flag is
    /// cleared and `release_spawn` is reported.
    pub fn evaluate(&mut self, hand_len: usize, pending_spawn: &mut bool) -> GateUpdate {
        let next = if hand_len > self.cap {
            LockState::Locked
        } else {
            LockState::Unlocked
        };
        let changed = next != self.state;
        if changed {
            debug!("discard gate {:?} -> {:?} (hand {hand_len}, cap {})", self.state, next, self.cap);
        }
        self.state = next;

        let release_spawn = next == LockState::Unlocked && std::mem::take(pending_spawn);
        GateUpdate {
            state: next,
            changed,
            release_spawn,
        }
    }

    pub fn reset(&mut self) {
        self.state = LockState::Unlocked;
    }
}
