//! Core types shared by combatants, participants and the engine

use crate::error::BattleError;
use roster_core::SpecialKind;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A combat action a participant can take on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack,
    Special,
    Defend,
    Heal,
}

impl Action {
    /// Get all action variants
    pub fn all() -> &'static [Action] {
        &[Action::Attack, Action::Special, Action::Defend, Action::Heal]
    }

    /// Token used by input layers
    pub fn key(&self) -> &'static str {
        match self {
            Action::Attack => "attack",
            Action::Special => "special",
            Action::Defend => "defend",
            Action::Heal => "heal",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Action {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(Action::Attack),
            "special" => Ok(Action::Special),
            "defend" => Ok(Action::Defend),
            "heal" => Ok(Action::Heal),
            _ => Err(BattleError::InvalidAction(s.to_string())),
        }
    }
}

/// Seat identifier; serialized as 1 or 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantId {
    One,
    Two,
}

impl ParticipantId {
    /// The other seat
    pub fn other(&self) -> ParticipantId {
        match self {
            ParticipantId::One => ParticipantId::Two,
            ParticipantId::Two => ParticipantId::One,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            ParticipantId::One => 1,
            ParticipantId::Two => 2,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            ParticipantId::One => 0,
            ParticipantId::Two => 1,
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

impl Serialize for ParticipantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// What a single action did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Attack {
        attacker: String,
        target: String,
        damage: u32,
        is_critical: bool,
    },
    Special {
        special: SpecialKind,
        attacker: String,
        target: String,
        /// Total damage applied to the target
        damage: u32,
        /// Number of sub-hits summed into `damage`
        hits: u32,
    },
    Defend {
        character: String,
        /// MP actually gained; less than the nominal restore when the
        /// combatant was already close to max MP
        mp_restored: u32,
    },
    Heal {
        character: String,
        amount: u32,
    },
    /// The action was attempted but refused by the combatant
    Failed {
        action: Action,
        #[serde(serialize_with = "reason_text")]
        reason: BattleError,
    },
}

impl ActionOutcome {
    /// The action that produced this outcome
    pub fn action(&self) -> Action {
        match self {
            ActionOutcome::Attack { .. } => Action::Attack,
            ActionOutcome::Special { .. } => Action::Special,
            ActionOutcome::Defend { .. } => Action::Defend,
            ActionOutcome::Heal { .. } => Action::Heal,
            ActionOutcome::Failed { action, .. } => *action,
        }
    }

    pub fn succeeded(&self) -> bool {
        !matches!(self, ActionOutcome::Failed { .. })
    }

    /// Damage dealt to the opponent (0 for non-damaging outcomes)
    pub fn damage(&self) -> u32 {
        match self {
            ActionOutcome::Attack { damage, .. } | ActionOutcome::Special { damage, .. } => *damage,
            _ => 0,
        }
    }

    /// Refusal reason for failed outcomes
    pub fn reason(&self) -> Option<&BattleError> {
        match self {
            ActionOutcome::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

fn reason_text<S: Serializer>(reason: &BattleError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}
