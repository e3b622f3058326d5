//! Progression controller and the user-facing commands.
//!
//! `Dungeon` owns the session and drives it room by room:
//!
//! ```text
//! spawn enemy → attack rounds → enemy defeated → reward → (discard gate) → spawn enemy
//!                     └─ player died → reset
//! ```
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `start_new_game` | pick a class, grant the opening reward, spawn the first enemy |
//! | `play_card` | use a consumable or equip a card (round action) |
//! | `discard_card` | drop a card; voluntary discards fire class hooks |
//! | `attack` | resolve one round |
//! | `reset_session` | back to pre-game, save removed |
//! | `resume` | restore player and enemy from the store |
//!
//! Every state-changing command saves before it returns.

use log::{debug, info, warn};

use crate::cards::{Card, CardType, Catalog, CatalogSource};
use crate::combat::{CombatEngine, Combatant, RoundOutcome, RoundReport};
use crate::core::{CatalogError, DungeonConfig, DungeonError, EquipError, GameRng};
use crate::entity::{Enemy, Player};
use crate::hand::{Hand, LockState};
use crate::persistence::{KeyValueStore, SaveGateway, SaveState};
use crate::presentation::{EffectCue, Presentation};
use crate::reward::RewardRoller;

use super::state::{GameSession, RoundState};

/// Result of a command that asks for confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// The player answered no; nothing changed.
    Declined,
}

/// A running game: session state plus everything that acts on it.
pub struct Dungeon<P, S> {
    config: DungeonConfig,
    catalog: Catalog,
    roller: RewardRoller,
    engine: CombatEngine,
    session: GameSession,
    gateway: SaveGateway<S>,
    presentation: P,
}

impl<P: Presentation, S: KeyValueStore> Dungeon<P, S> {
    pub fn new(config: DungeonConfig, catalog: Catalog, presentation: P, store: S) -> Self {
        let roller = RewardRoller::new(GameRng::from_seed_option(config.seed), config.brackets);
        let engine = CombatEngine::new(config.class_hooks.clone());
        let session = GameSession::new(config.hand_soft_cap);
        let gateway = SaveGateway::new(store, config.save_key.clone(), config.save_format);

        Self {
            config,
            catalog,
            roller,
            engine,
            session,
            gateway,
            presentation,
        }
    }

    /// Load the catalog for `config.class_ids` from `source`, then build.
    pub fn from_source<C>(config: DungeonConfig, source: &C, presentation: P, store: S) -> Result<Self, CatalogError>
    where
        C: CatalogSource + ?Sized,
    {
        let catalog = Catalog::load(source, &config.class_ids)?;
        Ok(Self::new(config, catalog, presentation, store))
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        self.session.player.as_ref()
    }

    #[must_use]
    pub fn enemy(&self) -> Option<&Enemy> {
        self.session.enemy.as_ref()
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.session.hand
    }

    #[must_use]
    pub fn round(&self) -> RoundState {
        self.session.round
    }

    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.session.gate.state()
    }

    #[must_use]
    pub fn attack_available(&self) -> bool {
        self.session.attack_available()
    }

    #[must_use]
    pub fn engine(&self) -> &CombatEngine {
        &self.engine
    }

    #[must_use]
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.gateway.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.gateway.store_mut()
    }

    /// The persisted subset of the current session.
    #[must_use]
    pub fn snapshot(&self) -> SaveState {
        SaveState::new(self.session.player.clone(), self.session.enemy.clone())
    }

    // === Commands ===

    /// Start over as `class_id`. The opening reward lands before the first
    /// enemy spawns, so the first room follows the normal reward path.
    pub fn start_new_game(&mut self, class_id: &str) -> Result<(), DungeonError> {
        let class = self.catalog.class(class_id)?;
        let player = Player::from_class(class);
        info!("new game as {}", player.name);

        self.engine.finish();
        self.session.reset();
        self.session.player = Some(player);
        self.advance_room();

        self.refresh();
        self.save();
        Ok(())
    }

    /// Use or equip the card at `index`.
    ///
    /// Consumables ask "Use X?"; equipment asks to equip or replace. A card
    /// with no matching slot is rejected before any prompt.
    pub fn play_card(&mut self, index: usize) -> Result<CommandOutcome, DungeonError> {
        let card = self.card_at(index)?;
        self.check_round_action()?;

        if card.card_type == CardType::Consumable {
            return Ok(self.use_consumable(index, &card));
        }
        self.equip_from_hand(index, card)
    }

    /// Discard the card at `index`.
    ///
    /// While the gate is locked this is a forced discard: free, and no class
    /// hook fires. Otherwise it is the round's action.
    pub fn discard_card(&mut self, index: usize) -> Result<CommandOutcome, DungeonError> {
        let card = self.card_at(index)?;
        let forced = self.session.gate.is_locked();
        if !forced {
            self.check_round_action()?;
        }

        if !self.presentation.confirm(&format!("Discard {}?", card.name)) {
            return Ok(CommandOutcome::Declined);
        }
        self.session.hand.remove(index);
        debug!("discarded {} ({})", card.name, if forced { "forced" } else { "voluntary" });

        if !forced {
            self.session.round.round_action_used = true;
            self.run_discard_hook();
        }

        self.sync_gate();
        self.presentation.render_hand(&self.session.hand);
        self.save();
        Ok(CommandOutcome::Applied)
    }

    /// Resolve one attack round.
    ///
    /// On a kill the reward is granted before this returns; on death the
    /// session is reset.
    pub fn attack(&mut self) -> Result<RoundReport, DungeonError> {
        if !self.session.is_active() {
            return Err(DungeonError::NoSession);
        }

        let pause = self.config.hp_animation();
        let presentation = &mut self.presentation;
        let gateway = &mut self.gateway;
        let report = self.engine.resolve_attack(&mut self.session, |session, event| {
            presentation.play_effect(EffectCue::Strike(event.attacker));
            match event.attacker {
                Combatant::Player => presentation.render_enemy(session.enemy.as_ref()),
                Combatant::Enemy => presentation.render_player(session.player.as_ref()),
            }
            // Each strike is on disk before the next one starts
            persist(gateway, presentation, session);
            presentation.pace(pause);
        })?;

        match report.outcome {
            RoundOutcome::Continue => {
                self.presentation.set_attack_available(self.session.attack_available());
                self.save();
            }
            RoundOutcome::EnemyDefeated => self.on_enemy_defeated(),
            RoundOutcome::PlayerDied => self.on_player_died(),
        }
        Ok(report)
    }

    /// Back to pre-game and remove the save.
    pub fn reset_session(&mut self) {
        info!("session reset after {} rooms", self.session.round.rooms_cleared);
        self.engine.finish();
        self.session.reset();
        if let Err(e) = self.gateway.clear() {
            warn!("failed to remove save: {e}");
        }
        self.presentation.hide_discard_prompt();
        self.refresh();
    }

    /// Restore player and enemy from the store. Returns false when there is
    /// nothing usable to restore; an unreadable save counts as none.
    pub fn resume(&mut self) -> bool {
        let state = match self.gateway.load() {
            Ok(Some(state)) => state,
            Ok(None) => return false,
            Err(e) => {
                warn!("ignoring unreadable save: {e}");
                return false;
            }
        };
        let Some(mut player) = state.player else {
            return false;
        };
        player.clamp_hp();
        if !player.is_alive() {
            return false;
        }

        self.engine.finish();
        self.session.reset();
        info!("resumed as {} at {}/{} HP", player.name, player.current_hp, player.max_hp());
        self.session.player = Some(player);
        self.session.enemy = state
            .enemy
            .map(|mut enemy| {
                enemy.clamp_hp();
                enemy
            })
            .filter(Enemy::is_alive);
        if self.session.enemy.is_none() {
            self.spawn_enemy();
        }

        self.refresh();
        self.save();
        true
    }

    /// Put `card` straight into the hand, outside the reward roll.
    pub fn grant_card(&mut self, card: Card) -> Result<(), DungeonError> {
        if !self.session.is_active() {
            return Err(DungeonError::NoSession);
        }
        self.presentation.play_effect(EffectCue::Loot(card.rarity));
        self.session.hand.push(card);

        self.sync_gate();
        self.presentation.render_hand(&self.session.hand);
        self.save();
        Ok(())
    }

    // === Internals ===

    fn card_at(&self, index: usize) -> Result<Card, DungeonError> {
        if !self.session.is_active() {
            return Err(DungeonError::NoSession);
        }
        self.session.hand.get(index).cloned().ok_or(DungeonError::InvalidHandIndex {
            index,
            len: self.session.hand.len(),
        })
    }

    /// Plays are always allowed while the gate is locked; otherwise only one
    /// voluntary action per round.
    fn check_round_action(&self) -> Result<(), DungeonError> {
        let spent = self.config.single_action_per_round && self.session.round.round_action_used;
        if spent && !self.session.gate.is_locked() {
            return Err(DungeonError::RoundActionSpent);
        }
        Ok(())
    }

    fn use_consumable(&mut self, index: usize, card: &Card) -> CommandOutcome {
        if !self.presentation.confirm(&format!("Use {}?", card.name)) {
            return CommandOutcome::Declined;
        }
        let Some(player) = self.session.player.as_mut() else {
            return CommandOutcome::Declined;
        };
        let healed = player.apply_consumable(card);
        debug!("{} restored {healed} HP", card.name);

        self.session.hand.remove(index);
        self.session.round.round_action_used = true;
        self.presentation.notify(&format!("{} used!", card.name));

        self.presentation.render_player(self.session.player.as_ref());
        self.presentation.render_hand(&self.session.hand);
        self.sync_gate();
        self.save();
        CommandOutcome::Applied
    }

    fn equip_from_hand(&mut self, index: usize, card: Card) -> Result<CommandOutcome, DungeonError> {
        let player = self.session.player.as_ref().ok_or(DungeonError::NoSession)?;
        let Some(slot) = player.slot_for(card.card_type) else {
            self.presentation.notify("Cannot equip this card.");
            return Err(EquipError::InvalidSlot {
                card: card.name,
                card_type: card.card_type,
            }
            .into());
        };

        let prompt = match player.equipment.get(slot) {
            Some(current) => format!("Replace {} with {}?", current.name, card.name),
            None => format!("Are you sure you want to equip {}?", card.name),
        };
        if !self.presentation.confirm(&prompt) {
            return Ok(CommandOutcome::Declined);
        }

        let cue = EffectCue::Equip(card.card_type, card.rarity);
        let player = self.session.player.as_mut().ok_or(DungeonError::NoSession)?;
        if let Some(old) = player.equip(card)? {
            debug!("{} left the {slot:?} slot", old.name);
        }
        self.session.hand.remove(index);
        self.session.round.round_action_used = true;

        self.presentation.play_effect(cue);
        self.presentation.render_equipment(self.session.player.as_ref());
        self.presentation.render_player(self.session.player.as_ref());
        self.presentation.render_hand(&self.session.hand);
        self.sync_gate();
        self.save();
        Ok(CommandOutcome::Applied)
    }

    /// Apply the player's on-discard hook to a living enemy.
    fn run_discard_hook(&mut self) {
        let Some(player) = self.session.player.as_ref() else {
            return;
        };
        let damage = self.engine.hooks().get(&player.name).discard_damage;
        if damage <= 0 {
            return;
        }
        let Some(enemy) = self.session.enemy.as_mut().filter(|e| e.is_alive()) else {
            return;
        };

        let dealt = enemy.take_damage(damage);
        let killed = !enemy.is_alive();
        debug!("discard hook hits {} for {dealt}", enemy.name());

        self.presentation.play_effect(EffectCue::Strike(Combatant::Player));
        self.presentation.render_enemy(self.session.enemy.as_ref());
        persist(&mut self.gateway, &mut self.presentation, &self.session);
        self.presentation.pace(self.config.hp_animation());
        if killed {
            self.on_enemy_defeated();
        }
    }

    fn on_enemy_defeated(&mut self) {
        let name = self.session.enemy.as_ref().map_or_else(String::new, |e| e.name().to_string());
        self.session.round.rooms_cleared += 1;
        self.session.round.round_action_used = false;
        info!("{name} defeated, {} rooms cleared", self.session.round.rooms_cleared);

        self.presentation.play_effect(EffectCue::Defeated);
        self.presentation.notify(&format!("{name} defeated!"));
        self.advance_room();

        self.refresh();
        self.save();
    }

    fn on_player_died(&mut self) {
        info!("player died in room {}", self.session.round.rooms_cleared + 1);
        self.presentation.play_effect(EffectCue::Died);
        self.presentation.notify("You died!");
        self.reset_session();
    }

    /// Grant a reward and move on to the next room, unless the reward
    /// overflowed the hand; then the spawn waits for the gate to open.
    fn advance_room(&mut self) {
        match self.roller.roll_reward(&self.catalog) {
            Some(card) => {
                debug!("reward: {} ({})", card.name, card.rarity);
                self.presentation.play_effect(EffectCue::Loot(card.rarity));
                self.session.hand.push(card);
            }
            None => debug!("no reward available"),
        }
        self.session.round.pending_next_enemy = true;
        self.sync_gate();
    }

    /// Re-evaluate the discard gate and release a deferred spawn.
    fn sync_gate(&mut self) {
        let update = self.session.reevaluate_gate();
        if update.changed {
            match update.state {
                LockState::Locked => self.presentation.show_discard_prompt(&self.session.hand),
                LockState::Unlocked => self.presentation.hide_discard_prompt(),
            }
        }
        if update.release_spawn {
            self.spawn_enemy();
        }
        self.presentation.set_attack_available(self.session.attack_available());
    }

    fn spawn_enemy(&mut self) {
        self.session.enemy = self.roller.roll_enemy(&self.catalog);
        match &self.session.enemy {
            Some(enemy) => info!(
                "room {}: {} ({}, {} HP)",
                self.session.round.rooms_cleared + 1,
                enemy.name(),
                enemy.rarity(),
                enemy.current_hp
            ),
            None => warn!("creature pools are empty, no enemy spawned"),
        }
        self.presentation.render_enemy(self.session.enemy.as_ref());
    }

    fn refresh(&mut self) {
        let session = &self.session;
        self.presentation.render_player(session.player.as_ref());
        self.presentation.render_enemy(session.enemy.as_ref());
        self.presentation.render_equipment(session.player.as_ref());
        self.presentation.render_hand(&session.hand);
        self.presentation.set_attack_available(session.attack_available());
    }

    fn save(&mut self) {
        persist(&mut self.gateway, &mut self.presentation, &self.session);
    }
}

/// Write the `{player, enemy}` pair of an active session. A failed write is
/// reported and play continues in memory.
fn persist<S: KeyValueStore, P: Presentation>(
    gateway: &mut SaveGateway<S>,
    presentation: &mut P,
    session: &GameSession,
) {
    if !session.is_active() {
        return;
    }
    let state = SaveState::new(session.player.clone(), session.enemy.clone());
    if let Err(e) = gateway.save(&state) {
        warn!("save failed, continuing in memory: {e}");
        presentation.notify(&format!("Could not save: {e}"));
    }
}
