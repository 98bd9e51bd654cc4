//! Participant - a named seat wrapping a combatant and a win/loss record

use crate::combatant::Combatant;
use crate::config::BattleConstants;
use crate::error::BattleError;
use crate::types::{Action, ActionOutcome, ParticipantId};
use rand::Rng;
use roster_core::Archetype;

/// A player seat: identity, selected combatant and battle record
#[derive(Debug, Clone)]
pub struct Participant {
    pub(crate) id: ParticipantId,
    name: String,
    combatant: Option<Combatant>,
    wins: u32,
    total_battles: u32,
    pub(crate) is_active: bool,
}

impl Participant {
    /// Create a participant that has not picked a character yet
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Participant {
            id,
            name: name.into(),
            combatant: None,
            wins: 0,
            total_battles: 0,
            is_active: false,
        }
    }

    /// Create a participant already bound to an archetype
    pub fn with_archetype(id: ParticipantId, name: impl Into<String>, archetype: Archetype) -> Self {
        let mut participant = Self::new(id, name);
        participant.select_character(archetype);
        participant
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn total_battles(&self) -> u32 {
        self.total_battles
    }

    pub fn losses(&self) -> u32 {
        self.total_battles - self.wins
    }

    /// Whether it is this participant's turn
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Bind a fresh combatant of the given archetype, replacing any previous one
    pub fn select_character(&mut self, archetype: Archetype) -> &Combatant {
        self.combatant.insert(Combatant::new(archetype, self.name.clone()))
    }

    pub fn has_character(&self) -> bool {
        self.combatant.is_some()
    }

    pub fn combatant(&self) -> Option<&Combatant> {
        self.combatant.as_ref()
    }

    pub fn combatant_mut(&mut self) -> Option<&mut Combatant> {
        self.combatant.as_mut()
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.as_ref().is_some_and(Combatant::is_alive)
    }

    /// The combatant if it can act this turn
    fn ready(&mut self) -> Result<&mut Combatant, BattleError> {
        match self.combatant.as_mut() {
            Some(combatant) if combatant.is_alive() => Ok(combatant),
            _ => Err(BattleError::CharacterUnavailable),
        }
    }

    pub fn attack(
        &mut self,
        opponent: &mut Participant,
        rules: &BattleConstants,
        rng: &mut impl Rng,
    ) -> Result<ActionOutcome, BattleError> {
        let attacker = self.ready()?;
        let target = opponent
            .combatant
            .as_mut()
            .ok_or(BattleError::CharacterUnavailable)?;
        Ok(attacker.attack(target, rules, rng))
    }

    pub fn special_attack(
        &mut self,
        opponent: &mut Participant,
        rules: &BattleConstants,
        rng: &mut impl Rng,
    ) -> Result<ActionOutcome, BattleError> {
        let attacker = self.ready()?;
        let target = opponent
            .combatant
            .as_mut()
            .ok_or(BattleError::CharacterUnavailable)?;
        attacker.special_attack(target, rules, rng)
    }

    pub fn defend(&mut self, rules: &BattleConstants) -> Result<ActionOutcome, BattleError> {
        Ok(self.ready()?.defend(rules))
    }

    pub fn heal(
        &mut self,
        rules: &BattleConstants,
        rng: &mut impl Rng,
    ) -> Result<ActionOutcome, BattleError> {
        self.ready()?.heal(rules, rng)
    }

    /// Enough MP for the archetype's special attack
    pub fn can_use_special(&self) -> bool {
        self.combatant
            .as_ref()
            .is_some_and(|c| c.current_mp() >= c.special_cost())
    }

    /// Enough MP to heal and not already at full HP
    pub fn can_heal(&self, rules: &BattleConstants) -> bool {
        self.combatant
            .as_ref()
            .is_some_and(|c| c.current_mp() >= rules.heal.mp_cost && c.current_hp() < c.max_hp())
    }

    /// Actions this participant may take right now; empty if dead or unset
    pub fn available_actions(&self, rules: &BattleConstants) -> Vec<Action> {
        if !self.is_alive() {
            return Vec::new();
        }

        let mut actions = vec![Action::Attack, Action::Defend];
        if self.can_use_special() {
            actions.push(Action::Special);
        }
        if self.can_heal(rules) {
            actions.push(Action::Heal);
        }
        actions
    }

    /// Short tooltip text for an action
    pub fn action_description(&self, action: Action, rules: &BattleConstants) -> String {
        let Some(combatant) = self.combatant.as_ref() else {
            return String::new();
        };

        match action {
            Action::Attack => format!(
                "Basic attack ({} base damage)",
                combatant.stats().attack_power
            ),
            Action::Special => format!(
                "{} ({} MP)",
                combatant.special_name(),
                combatant.special_cost()
            ),
            Action::Defend => format!(
                "Defend and restore MP (+{:.0}% defense)",
                (rules.defend.defense_multiplier - 1.0) * 100.0
            ),
            Action::Heal => format!(
                "Restore HP ({} MP, ~{:.0}% max HP)",
                rules.heal.mp_cost,
                rules.heal.hp_fraction * 100.0
            ),
        }
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
        self.total_battles += 1;
    }

    pub fn add_loss(&mut self) {
        self.total_battles += 1;
    }

    /// Percentage of battles won, 0 when none were played
    pub fn win_rate(&self) -> f64 {
        if self.total_battles == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total_battles as f64 * 100.0
    }

    /// Restore the combatant for a rematch; the win/loss record is kept
    pub fn reset_for_battle(&mut self) {
        if let Some(combatant) = self.combatant.as_mut() {
            combatant.reset();
        }
        self.is_active = false;
    }
}
