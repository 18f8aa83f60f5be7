//! Pixel Forge game implementation.

use std::sync::Arc;

use crate::cards::{build_deck, CardCatalog};
use crate::core::{
    Action, CombatPhase, GameConfig, GameRng, GameState, InstanceId, PlayerState, Side, TurnPhase,
    TurnStep,
};
use crate::error::{ActionError, ConfigError, Result};
use crate::opponent::{OpponentPolicy, ScriptedOpponent};
use crate::rules::{self, AttackOutcome, GameResult, RulesEngine};
use crate::triggers::AbilityRegistry;
use crate::zones::PlayerZones;

/// A configured Pixel Forge game: rules, catalog, abilities, and opponent.
///
/// The game itself holds no per-match state; every entry point takes the
/// `GameState` it mutates.
#[derive(Clone)]
pub struct PixelForge {
    config: GameConfig,
    catalog: CardCatalog,
    abilities: AbilityRegistry,
    policy: Arc<dyn OpponentPolicy>,
}

/// Builder for creating a PixelForge game.
pub struct PixelForgeBuilder {
    config: GameConfig,
    catalog: CardCatalog,
    abilities: AbilityRegistry,
    policy: Arc<dyn OpponentPolicy>,
}

impl Default for PixelForgeBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: CardCatalog::reference(),
            abilities: AbilityRegistry::reference(),
            policy: Arc::new(ScriptedOpponent),
        }
    }
}

impl PixelForgeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn abilities(mut self, abilities: AbilityRegistry) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Build the game and initial state, validating the config first.
    pub fn try_build(self, seed: u64) -> std::result::Result<(PixelForge, GameState), ConfigError> {
        self.config.validate()?;
        Ok(self.build(seed))
    }

    /// Build the game and initial state.
    pub fn build(self, seed: u64) -> (PixelForge, GameState) {
        if let Err(err) = self.config.validate() {
            log::error!("building with invalid config: {}", err);
            debug_assert!(false, "invalid game config: {}", err);
        }

        let game = PixelForge {
            config: self.config,
            catalog: self.catalog,
            abilities: self.abilities,
            policy: self.policy,
        };
        let state = game.new_game(GameRng::new(seed));

        (game, state)
    }
}

impl PixelForge {
    pub fn builder() -> PixelForgeBuilder {
        PixelForgeBuilder::new()
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn abilities(&self) -> &AbilityRegistry {
        &self.abilities
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Create a fresh game: two decks, starting hands, player to move.
    pub fn new_game(&self, rng: GameRng) -> GameState {
        let config = &self.config;
        let mut state = GameState::new(
            PlayerState::new("player", "Player", config.starting_health, config.starting_pixels),
            PlayerState::new("ai", "Opponent", config.starting_health, config.starting_pixels),
            rng,
        );

        for side in Side::ALL {
            let GameState { sides, rng, ids, .. } = &mut state;
            let deck = build_deck(&self.catalog, config.deck_size, rng, ids);
            let zones = &mut sides[side].zones;
            *zones = PlayerZones::with_deck(deck);
            for _ in 0..config.starting_hand_size {
                zones.draw();
            }
        }

        state.narrate("The battle begins! You go first.");
        let pixels = state.player().pixels;
        state.narrate(format!("Turn 1 - Your turn. ({} pixels available)", pixels));

        log::debug!(
            "new game: seed {}, {} cards per deck",
            state.rng.seed(),
            state.player().zones.total_cards()
        );
        state
    }

    // === Player entry points ===

    /// Deploy a card from the player's hand.
    pub fn play_card(&self, state: &mut GameState, card: InstanceId) -> Result<()> {
        Self::checked(state, Action::PlayCard(card), |state| {
            Self::player_gate(state, false)?;
            rules::play_card(state, &self.abilities, Side::Player, card)
        })
    }

    /// Select a player field card as the pending attacker.
    ///
    /// Rejected with `CombatPending` while another selection awaits a target.
    pub fn declare_attacker(&self, state: &mut GameState, card: InstanceId) -> Result<()> {
        Self::checked(state, Action::DeclareAttacker(card), |state| {
            Self::player_gate(state, false)?;
            rules::validate_attacker(state, Side::Player, card)?;

            let name = state
                .player()
                .field_card(card)
                .map(|c| c.name().to_string())
                .unwrap_or_default();
            state.selected_attacker = Some(card);
            state.combat = CombatPhase::AwaitingTarget;
            state.narrate(format!("{} is ready to attack. Choose a target.", name));
            Ok(())
        })
    }

    /// Drop the pending attacker selection.
    pub fn cancel_attack(&self, state: &mut GameState) -> Result<()> {
        Self::checked(state, Action::CancelAttack, |state| {
            Self::player_gate(state, true)?;
            if state.combat != CombatPhase::AwaitingTarget {
                return Err(ActionError::NoAttackerSelected);
            }

            state.clear_selection();
            state.narrate("Attack cancelled.");
            Ok(())
        })
    }

    /// Resolve the pending attack against an opponent field card, or
    /// directly when `target` is `None` and the opponent's field is empty.
    pub fn resolve_attack(&self, state: &mut GameState, target: Option<InstanceId>) -> Result<AttackOutcome> {
        Self::checked(state, Action::Attack { target }, |state| {
            Self::player_gate(state, true)?;
            let attacker = match (state.combat, state.selected_attacker) {
                (CombatPhase::AwaitingTarget, Some(attacker)) => attacker,
                _ => return Err(ActionError::NoAttackerSelected),
            };

            let outcome = rules::resolve_attack(state, &self.abilities, Side::Player, attacker, target)?;
            state.clear_selection();
            Ok(outcome)
        })
    }

    /// End the player's turn and run the opponent's turn to completion.
    ///
    /// Returns the actions the opponent took.
    pub fn end_turn(&self, state: &mut GameState) -> Result<Vec<Action>> {
        self.begin_end_turn(state)?;

        let start = state.history.len();
        while self.advance_opponent_turn(state).is_some() {}

        Ok(state
            .history
            .iter()
            .skip(start)
            .filter(|record| record.side == Side::Opponent)
            .map(|record| record.action.clone())
            .collect())
    }

    /// Hand the turn to the opponent without running it.
    ///
    /// Player input is rejected until `advance_opponent_turn` has run the
    /// hand-back step.
    pub fn begin_end_turn(&self, state: &mut GameState) -> Result<()> {
        Self::checked(state, Action::EndTurn, |state| {
            Self::player_gate(state, false)?;

            state.narrate("You end your turn.");
            state.turn = TurnPhase::OpponentTurn;
            state.opponent_processing = true;
            state.pending_step = Some(TurnStep::OpponentStart);
            Ok(())
        })
    }

    /// Run the next step of the opponent's turn.
    ///
    /// Returns the step that ran, or `None` if no opponent turn is pending.
    pub fn advance_opponent_turn(&self, state: &mut GameState) -> Option<TurnStep> {
        let step = state.pending_step?;

        let next = match step {
            TurnStep::OpponentStart => {
                rules::begin_turn(state, Side::Opponent, &self.config);
                Some(TurnStep::OpponentPlay)
            }
            TurnStep::OpponentPlay => {
                self.opponent_play(state);
                match self.config.opponent_attacks_per_turn {
                    0 => Some(TurnStep::HandBack),
                    remaining => Some(TurnStep::OpponentAttack { remaining }),
                }
            }
            TurnStep::OpponentAttack { remaining } => {
                if self.opponent_attack(state) && remaining > 1 {
                    Some(TurnStep::OpponentAttack {
                        remaining: remaining - 1,
                    })
                } else {
                    Some(TurnStep::HandBack)
                }
            }
            TurnStep::HandBack => {
                rules::begin_turn(state, Side::Player, &self.config);
                state.opponent_processing = false;
                None
            }
        };

        state.pending_step = if state.is_over() { None } else { next };
        log::debug!("opponent step {:?} done, next {:?}", step, state.pending_step);
        Some(step)
    }

    /// Discard the game and start a fresh one from a forked RNG stream.
    pub fn restart(&self, state: &mut GameState) {
        let rng = state.rng.fork();
        *state = self.new_game(rng);
    }

    // === Opponent turn ===

    fn opponent_play(&self, state: &mut GameState) -> Option<InstanceId> {
        let mut rng = state.policy_rng.clone();
        let choice = self.policy.choose_play(state, Side::Opponent, &mut rng);
        state.policy_rng = rng;

        let card = choice?;
        match rules::play_card(state, &self.abilities, Side::Opponent, card) {
            Ok(()) => {
                state.record_action(Side::Opponent, Action::PlayCard(card));
                Some(card)
            }
            Err(err) => {
                log::error!("{} policy chose an illegal play: {}", self.policy.name(), err);
                debug_assert!(false, "illegal opponent play: {}", err);
                None
            }
        }
    }

    fn opponent_attack(&self, state: &mut GameState) -> bool {
        let mut rng = state.policy_rng.clone();
        let choice = self.policy.choose_attack(state, Side::Opponent, &mut rng);
        state.policy_rng = rng;

        let Some(plan) = choice else {
            return false;
        };
        match rules::resolve_attack(state, &self.abilities, Side::Opponent, plan.attacker, plan.target) {
            Ok(_) => {
                state.record_action(Side::Opponent, Action::DeclareAttacker(plan.attacker));
                state.record_action(Side::Opponent, Action::Attack { target: plan.target });
                true
            }
            Err(err) => {
                log::error!("{} policy chose an illegal attack: {}", self.policy.name(), err);
                debug_assert!(false, "illegal opponent attack: {}", err);
                false
            }
        }
    }

    // === Gating ===

    fn player_gate(state: &GameState, combat_pending_ok: bool) -> Result<()> {
        if state.is_over() {
            return Err(ActionError::GameOver);
        }
        if state.opponent_processing {
            return Err(ActionError::OpponentProcessing);
        }
        if !state.is_turn_of(Side::Player) {
            return Err(ActionError::NotYourTurn);
        }
        if !combat_pending_ok && state.combat == CombatPhase::AwaitingTarget {
            return Err(ActionError::CombatPending);
        }
        Ok(())
    }

    /// Run a player request, recording it on success and narrating the
    /// rejection on failure.
    fn checked<T>(
        state: &mut GameState,
        action: Action,
        apply: impl FnOnce(&mut GameState) -> Result<T>,
    ) -> Result<T> {
        match apply(state) {
            Ok(value) => {
                state.record_action(Side::Player, action);
                Ok(value)
            }
            Err(err) => {
                log::warn!("rejected {}: {}", action, err);
                state.narrate(err.to_string());
                Err(err)
            }
        }
    }
}

impl RulesEngine for PixelForge {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, side: Side) -> Vec<Action> {
        let mut actions = Vec::new();
        let can_act = !state.is_over()
            && state.is_turn_of(side)
            && !(side.is_player() && state.opponent_processing);

        if can_act {
            let own = state.side(side);
            if side.is_player() && state.combat == CombatPhase::AwaitingTarget {
                let enemy_field = state.side(side.opposing()).field();
                actions.extend(enemy_field.iter().map(|card| Action::Attack {
                    target: Some(card.instance_id),
                }));
                if enemy_field.is_empty() {
                    actions.push(Action::Attack { target: None });
                }
                actions.push(Action::CancelAttack);
            } else {
                actions.extend(own.playable().map(|card| Action::PlayCard(card.instance_id)));
                actions.extend(own.ready_attackers().map(|card| Action::DeclareAttacker(card.instance_id)));
                if side.is_player() {
                    actions.push(Action::EndTurn);
                }
            }
        }

        if side.is_player() {
            actions.push(Action::Restart);
        }
        actions
    }

    fn apply_action(&mut self, state: &mut GameState, side: Side, action: &Action) -> Result<()> {
        if !side.is_player() {
            log::warn!("{} requested {} directly; the opponent acts through its policy", side, action);
            return Err(ActionError::NotYourTurn);
        }

        match action {
            Action::PlayCard(card) => self.play_card(state, *card),
            Action::DeclareAttacker(card) => self.declare_attacker(state, *card),
            Action::CancelAttack => self.cancel_attack(state),
            Action::Attack { target } => self.resolve_attack(state, *target).map(|_| ()),
            Action::EndTurn => self.end_turn(state).map(|_| ()),
            Action::Restart => {
                self.restart(state);
                Ok(())
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner
    }
}
