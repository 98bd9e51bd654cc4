//! Battle log - append-only record of what happened each round

use crate::types::{Action, ActionOutcome};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One line of the battle log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub round: u32,
    pub message: String,
    /// Milliseconds since the UNIX epoch
    pub timestamp: u64,
}

/// Ordered log; entries are only ever appended
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: u32, message: impl Into<String>) {
        self.entries.push(LogEntry {
            round,
            message: message.into(),
            timestamp: now_millis(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Only used when a new battle starts
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

pub(crate) fn opening_message(first: &str) -> String {
    format!("Battle begins! {first} goes first!")
}

pub(crate) fn victory_message(winner: &str) -> String {
    format!("{winner} wins the battle!")
}

/// Describe an action outcome; `actor` names whoever took the turn
pub(crate) fn outcome_message(actor: &str, outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Attack { attacker, target, damage, is_critical: true } => {
            format!("{attacker} lands a CRITICAL HIT on {target} for {damage} damage!")
        }
        ActionOutcome::Attack { attacker, target, damage, .. } => {
            format!("{attacker} attacks {target} for {damage} damage!")
        }
        ActionOutcome::Special { special, attacker, target, damage, hits } if *hits > 1 => {
            format!("{attacker} uses {special} on {target}, landing {hits} hits for {damage} damage!")
        }
        ActionOutcome::Special { special, attacker, target, damage, .. } => {
            format!("{attacker} uses {special} on {target} for {damage} damage!")
        }
        ActionOutcome::Defend { character, mp_restored } => {
            format!("{character} takes a defensive stance and restores {mp_restored} MP!")
        }
        ActionOutcome::Heal { character, amount } => {
            format!("{character} heals for {amount} HP!")
        }
        ActionOutcome::Failed { action, reason } => {
            let attempt = match action {
                Action::Attack => "attack",
                Action::Special => "use special attack",
                Action::Defend => "defend",
                Action::Heal => "heal",
            };
            format!("{actor} tried to {attempt} but {reason}!")
        }
    }
}
