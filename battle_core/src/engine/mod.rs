//! Battle engine - turn order, action dispatch, win detection and the log
//!
//! The engine owns both participants for the length of a battle. The only
//! state transition is [`BattleEngine::execute_action`] (or its typed form
//! [`BattleEngine::perform`]); every call runs to completion before returning.
//!
//! Turn order is decided by speed: the faster participant acts first and ties
//! go to participant 1. The round counter increments each time control passes
//! to the participant that moves second.

mod log;

pub use log::{BattleLog, LogEntry};

use crate::config::{BattleConstants, ConfigError};
use crate::error::BattleError;
use crate::participant::Participant;
use crate::types::{Action, ActionOutcome, ParticipantId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Lifecycle of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    /// Turn order decided, no action dispatched yet
    NotStarted,
    InProgress,
    Finished,
}

/// Result of a successfully dispatched action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionReport {
    /// What the acting combatant did (may be a refused attempt)
    pub outcome: ActionOutcome,
    pub game_over: bool,
    pub winner: Option<ParticipantId>,
    /// Whose turn it is after this action
    pub current_participant: ParticipantId,
    pub round: u32,
}

/// Two-participant turn-based battle
#[derive(Debug)]
pub struct BattleEngine<R: Rng = ChaCha8Rng> {
    participants: [Participant; 2],
    current: ParticipantId,
    first: ParticipantId,
    round: u32,
    phase: BattlePhase,
    winner: Option<ParticipantId>,
    log: BattleLog,
    rules: BattleConstants,
    rng: R,
}

impl BattleEngine<ChaCha8Rng> {
    /// Start a battle with an entropy-seeded generator
    pub fn new(player1: Participant, player2: Participant) -> Result<Self, BattleError> {
        Self::with_rng(player1, player2, ChaCha8Rng::from_entropy())
    }

    /// Start a reproducible battle
    pub fn with_seed(
        player1: Participant,
        player2: Participant,
        seed: u64,
    ) -> Result<Self, BattleError> {
        Self::with_rng(player1, player2, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BattleEngine<R> {
    /// Start a battle with a caller-provided generator
    ///
    /// Both participants must already have a living combatant. Seats are assigned
    /// in argument order regardless of the ids the participants carry.
    pub fn with_rng(
        mut player1: Participant,
        mut player2: Participant,
        rng: R,
    ) -> Result<Self, BattleError> {
        if !player1.has_character() || !player2.has_character() {
            warn!("battle requires both participants to have a character");
            return Err(BattleError::CharacterUnavailable);
        }
        if !player1.is_alive() || !player2.is_alive() {
            warn!("battle requires both characters to be alive");
            return Err(BattleError::CharacterUnavailable);
        }
        player1.id = ParticipantId::One;
        player2.id = ParticipantId::Two;
        player1.is_active = false;
        player2.is_active = false;

        let mut engine = BattleEngine {
            participants: [player1, player2],
            current: ParticipantId::One,
            first: ParticipantId::One,
            round: 1,
            phase: BattlePhase::NotStarted,
            winner: None,
            log: BattleLog::new(),
            rules: BattleConstants::default(),
            rng,
        };
        engine.determine_turn_order();
        Ok(engine)
    }

    /// Replace the rule constants
    pub fn with_rules(mut self, rules: BattleConstants) -> Result<Self, ConfigError> {
        rules.validate()?;
        self.rules = rules;
        Ok(self)
    }

    fn speed(&self, id: ParticipantId) -> u32 {
        self.participant(id)
            .combatant()
            .map_or(0, |c| c.stats().speed)
    }

    fn determine_turn_order(&mut self) {
        self.first = if self.speed(ParticipantId::One) >= self.speed(ParticipantId::Two) {
            ParticipantId::One
        } else {
            ParticipantId::Two
        };
        self.current = self.first;
        self.participants[self.first.index()].is_active = true;
        self.participants[self.first.other().index()].is_active = false;

        let name = self.participant(self.first).name().to_string();
        info!(first = %name, "battle begins");
        self.log.push(self.round, log::opening_message(&name));
    }

    pub fn participant(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.index()]
    }

    pub fn player1(&self) -> &Participant {
        self.participant(ParticipantId::One)
    }

    pub fn player2(&self) -> &Participant {
        self.participant(ParticipantId::Two)
    }

    pub fn current_participant(&self) -> &Participant {
        self.participant(self.current)
    }

    pub fn current_id(&self) -> ParticipantId {
        self.current
    }

    /// Participant that acted first this battle
    pub fn first_mover(&self) -> ParticipantId {
        self.first
    }

    /// Opponent of the given participant, or of the current one
    pub fn opponent(&self, of: Option<ParticipantId>) -> &Participant {
        self.participant(of.unwrap_or(self.current).other())
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == BattlePhase::Finished
    }

    pub fn winner(&self) -> Option<&Participant> {
        self.winner.map(|id| self.participant(id))
    }

    pub fn winner_id(&self) -> Option<ParticipantId> {
        self.winner
    }

    pub fn battle_log(&self) -> &BattleLog {
        &self.log
    }

    pub fn rules(&self) -> &BattleConstants {
        &self.rules
    }

    /// Actions the current participant may take; empty once the battle is over
    pub fn available_actions(&self) -> Vec<Action> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.current_participant().available_actions(&self.rules)
    }

    /// Whether an action token is currently allowed, for input gating
    pub fn is_valid_action(&self, action: &str) -> bool {
        action
            .parse::<Action>()
            .is_ok_and(|a| self.available_actions().contains(&a))
    }

    /// Resolve one action token for the current participant
    pub fn execute_action(&mut self, action: &str) -> Result<ActionReport, BattleError> {
        if self.is_game_over() {
            warn!(action, "action rejected: battle is over");
            return Err(BattleError::GameOver);
        }
        let action = action.parse::<Action>().map_err(|e| {
            warn!(error = %e, "action rejected");
            e
        })?;
        self.perform(action)
    }

    /// Resolve one typed action for the current participant
    ///
    /// Engine-level rejections are returned as `Err` with no state change.
    /// A combatant refusing the action (not enough MP) is reported as an
    /// [`ActionOutcome::Failed`] inside a successful report. The refusal
    /// still uses up the turn, but leaves both combatants untouched.
    pub fn perform(&mut self, action: Action) -> Result<ActionReport, BattleError> {
        if self.is_game_over() {
            warn!(%action, "action rejected: battle is over");
            return Err(BattleError::GameOver);
        }

        let actor_id = self.current;
        let (actor, opponent) = split_pair(&mut self.participants, actor_id);
        let resolved = match action {
            Action::Attack => actor.attack(opponent, &self.rules, &mut self.rng),
            Action::Special => actor.special_attack(opponent, &self.rules, &mut self.rng),
            Action::Defend => actor.defend(&self.rules),
            Action::Heal => actor.heal(&self.rules, &mut self.rng),
        };
        let actor_name = actor.name().to_string();

        let outcome = match resolved {
            Ok(outcome) => {
                debug!(actor = %actor_name, %action, damage = outcome.damage(), "action resolved");
                outcome
            }
            Err(reason) => {
                debug!(actor = %actor_name, %action, %reason, "action refused");
                ActionOutcome::Failed { action, reason }
            }
        };
        self.log
            .push(self.round, log::outcome_message(&actor_name, &outcome));
        self.phase = BattlePhase::InProgress;
        self.check_game_over();
        if !self.is_game_over() {
            self.switch_turn();
        }

        Ok(ActionReport {
            outcome,
            game_over: self.is_game_over(),
            winner: self.winner,
            current_participant: self.current,
            round: self.round,
        })
    }

    /// Player 1 is checked first, so at most one winner is ever recorded
    fn check_game_over(&mut self) {
        let loser = if !self.participants[0].is_alive() {
            ParticipantId::One
        } else if !self.participants[1].is_alive() {
            ParticipantId::Two
        } else {
            return;
        };
        let winner = loser.other();

        self.phase = BattlePhase::Finished;
        self.winner = Some(winner);
        self.participants[winner.index()].add_win();
        self.participants[loser.index()].add_loss();

        let name = self.participant(winner).name().to_string();
        info!(winner = %name, round = self.round, "battle finished");
        self.log.push(self.round, log::victory_message(&name));
    }

    fn switch_turn(&mut self) {
        let outgoing = &mut self.participants[self.current.index()];
        if let Some(combatant) = outgoing.combatant_mut() {
            combatant.clear_defending();
        }
        outgoing.is_active = false;

        self.current = self.current.other();
        self.participants[self.current.index()].is_active = true;

        if self.current != self.first {
            self.round += 1;
            debug!(round = self.round, "round advanced");
        }
    }

    /// Restore both combatants and start a fresh battle with the same seats
    ///
    /// Win/loss records are kept.
    pub fn reset(&mut self) {
        for participant in &mut self.participants {
            participant.reset_for_battle();
        }
        self.round = 1;
        self.log.clear();
        self.phase = BattlePhase::NotStarted;
        self.winner = None;
        info!("battle reset");
        self.determine_turn_order();
    }
}

fn split_pair(
    participants: &mut [Participant; 2],
    actor: ParticipantId,
) -> (&mut Participant, &mut Participant) {
    let [first, second] = participants;
    match actor {
        ParticipantId::One => (first, second),
        ParticipantId::Two => (second, first),
    }
}
