//! Attack resolution: one call resolves one round.
//!
//! ## Round state machine
//!
//! `Idle → Resolving → Idle`. A round is admitted only when the engine is
//! idle, the discard gate is unlocked, and both combatants are alive.
//!
//! ## Turn order
//!
//! The player strikes first when their class hook says so (Archer) or when
//! they already spent their round action; otherwise the enemy strikes first.
//!
//! ## Sequencing
//!
//! Each strike is applied and handed to the observer before the next one is
//! computed. A strike that drops its target to 0 ends the round: the other
//! side never acts.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::hooks::ClassHooks;
use crate::core::CombatError;
use crate::entity::{Enemy, Player};
use crate::session::GameSession;

/// One side of the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combatant {
    Player,
    Enemy,
}

impl Combatant {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Combatant::Player => Combatant::Enemy,
            Combatant::Enemy => Combatant::Player,
        }
    }
}

/// Engine re-entrancy state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CombatPhase {
    #[default]
    Idle,
    Resolving,
}

/// A single applied hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeEvent {
    pub attacker: Combatant,
    /// HP actually removed from the defender.
    pub damage: i32,
    /// Defender HP after the hit.
    pub defender_hp: i32,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both combatants still stand.
    Continue,
    EnemyDefeated,
    PlayerDied,
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub first: Combatant,
    pub strikes: SmallVec<[StrikeEvent; 2]>,
    pub outcome: RoundOutcome,
}

/// Damage the player deals per strike.
#[must_use]
pub fn player_damage(player: &Player) -> i32 {
    player.total_attack().max(0)
}

/// Damage the enemy deals per strike, after the player's defense.
#[must_use]
pub fn enemy_damage(enemy: &Enemy, player: &Player) -> i32 {
    enemy.attack().saturating_sub(player.total_defense()).max(0)
}

/// Resolves attack rounds.
#[derive(Clone, Debug, Default)]
pub struct CombatEngine {
    phase: CombatPhase,
    hooks: ClassHooks,
}

impl CombatEngine {
    #[must_use]
    pub fn new(hooks: ClassHooks) -> Self {
        Self {
            phase: CombatPhase::Idle,
            hooks,
        }
    }

    #[must_use]
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    #[must_use]
    pub fn hooks(&self) -> &ClassHooks {
        &self.hooks
    }

    /// Who strikes first this round.
    #[must_use]
    pub fn first_striker(&self, player: &Player, round_action_used: bool) -> Combatant {
        if self.hooks.get(&player.name).strikes_first || round_action_used {
            Combatant::Player
        } else {
            Combatant::Enemy
        }
    }

    /// Check preconditions and enter `Resolving`. Returns the first striker.
    pub fn try_begin(&mut self, session: &GameSession) -> Result<Combatant, CombatError> {
        if self.phase == CombatPhase::Resolving {
            return Err(CombatError::AlreadyResolving);
        }
        if session.gate.is_locked() {
            return Err(CombatError::DiscardRequired {
                hand_len: session.hand.len(),
            });
        }
        let (Some(player), Some(enemy)) = (&session.player, &session.enemy) else {
            return Err(CombatError::NoEncounter);
        };
        if !player.is_alive() || !enemy.is_alive() {
            return Err(CombatError::CombatantDown);
        }

        self.phase = CombatPhase::Resolving;
        Ok(self.first_striker(player, session.round.round_action_used))
    }

    /// Return to `Idle`. Also used to recover from an abandoned round.
    pub fn finish(&mut self) {
        self.phase = CombatPhase::Idle;
    }

    /// Resolve one round, calling `observe` after each applied strike.
    ///
    /// When both combatants survive, `round_action_used` is cleared for the
    /// next round. Defeat and death are reported, not handled, here.
    pub fn resolve_attack<F>(&mut self, session: &mut GameSession, mut observe: F) -> Result<RoundReport, CombatError>
    where
        F: FnMut(&GameSession, &StrikeEvent),
    {
        let first = self.try_begin(session)?;
        let mut strikes = SmallVec::new();
        let mut outcome = RoundOutcome::Continue;

        for attacker in [first, first.opponent()] {
            let (Some(player), Some(enemy)) = (session.player.as_mut(), session.enemy.as_mut()) else {
                self.finish();
                return Err(CombatError::NoEncounter);
            };
            let event = strike(player, enemy, attacker);
            debug!("{attacker:?} hits for {} (defender at {})", event.damage, event.defender_hp);

            observe(session, &event);
            strikes.push(event);

            if event.defender_hp == 0 {
                outcome = match attacker {
                    Combatant::Player => RoundOutcome::EnemyDefeated,
                    Combatant::Enemy => RoundOutcome::PlayerDied,
                };
                break;
            }
        }

        if outcome == RoundOutcome::Continue {
            session.round.round_action_used = false;
        }
        self.finish();

        Ok(RoundReport { first, strikes, outcome })
    }
}

fn strike(player: &mut Player, enemy: &mut Enemy, attacker: Combatant) -> StrikeEvent {
    let (damage, defender_hp) = match attacker {
        Combatant::Player => {
            let dealt = enemy.take_damage(player_damage(player));
            (dealt, enemy.current_hp)
        }
        Combatant::Enemy => {
            let dealt = player.take_damage(enemy_damage(enemy, player));
            (dealt, player.current_hp)
        }
    };
    StrikeEvent {
        attacker,
        damage,
        defender_hp,
    }
}
