//! Read-only projections of engine state for renderers and UI

use crate::combatant::Combatant;
use crate::engine::{BattleEngine, BattlePhase, LogEntry};
use crate::participant::Participant;
use crate::types::ParticipantId;
use rand::Rng;
use roster_core::Archetype;
use serde::Serialize;

/// Full view of a battle at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub round: u32,
    pub phase: BattlePhase,
    pub current_participant: ParticipantId,
    pub player1: ParticipantStatus,
    pub player2: ParticipantStatus,
    pub is_game_over: bool,
    pub winner: Option<ParticipantId>,
    pub battle_log: Vec<LogEntry>,
}

impl GameState {
    pub fn participant(&self, id: ParticipantId) -> &ParticipantStatus {
        match id {
            ParticipantId::One => &self.player1,
            ParticipantId::Two => &self.player2,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantStatus {
    pub id: ParticipantId,
    pub name: String,
    pub is_active: bool,
    pub has_character: bool,
    pub character: Option<CharacterStatus>,
    pub record: RecordStatus,
}

impl ParticipantStatus {
    pub fn from_participant(participant: &Participant) -> Self {
        ParticipantStatus {
            id: participant.id(),
            name: participant.name().to_string(),
            is_active: participant.is_active(),
            has_character: participant.has_character(),
            character: participant.combatant().map(CharacterStatus::from_combatant),
            record: RecordStatus {
                wins: participant.wins(),
                total_battles: participant.total_battles(),
                win_rate: participant.win_rate(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterStatus {
    pub archetype: Archetype,
    pub icon: &'static str,
    pub color: &'static str,
    pub current_hp: u32,
    pub max_hp: u32,
    pub current_mp: u32,
    pub max_mp: u32,
    pub hp_percentage: f64,
    pub mp_percentage: f64,
    pub is_alive: bool,
    pub is_defending: bool,
}

impl CharacterStatus {
    pub fn from_combatant(combatant: &Combatant) -> Self {
        let info = combatant.info();
        CharacterStatus {
            archetype: combatant.archetype(),
            icon: info.icon,
            color: info.color,
            current_hp: combatant.current_hp(),
            max_hp: combatant.max_hp(),
            current_mp: combatant.current_mp(),
            max_mp: combatant.max_mp(),
            hp_percentage: combatant.hp_percentage(),
            mp_percentage: combatant.mp_percentage(),
            is_alive: combatant.is_alive(),
            is_defending: combatant.is_defending(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordStatus {
    pub wins: u32,
    pub total_battles: u32,
    pub win_rate: f64,
}

/// Post-battle summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleStatistics {
    pub rounds: u32,
    /// Winner's name, `None` while the battle is undecided
    pub winner: Option<String>,
    pub player1: CombatantStatistics,
    pub player2: CombatantStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatantStatistics {
    pub name: String,
    pub archetype: Archetype,
    pub damage_dealt: u32,
    pub damage_received: u32,
    pub actions_used: u32,
    pub final_hp: u32,
    pub survived: bool,
}

impl CombatantStatistics {
    fn from_combatant(name: &str, combatant: &Combatant) -> Self {
        CombatantStatistics {
            name: name.to_string(),
            archetype: combatant.archetype(),
            damage_dealt: combatant.damage_dealt(),
            damage_received: combatant.damage_received(),
            actions_used: combatant.actions_used(),
            final_hp: combatant.current_hp(),
            survived: combatant.is_alive(),
        }
    }
}

impl<R: Rng> BattleEngine<R> {
    /// Snapshot of the whole battle
    pub fn game_state(&self) -> GameState {
        GameState {
            round: self.round(),
            phase: self.phase(),
            current_participant: self.current_id(),
            player1: ParticipantStatus::from_participant(self.player1()),
            player2: ParticipantStatus::from_participant(self.player2()),
            is_game_over: self.is_game_over(),
            winner: self.winner_id(),
            battle_log: self.battle_log().entries().to_vec(),
        }
    }

    /// Summary of damage and actions per participant
    ///
    /// Returns `None` only if a participant lost its combatant, which the
    /// engine never does on its own.
    pub fn battle_statistics(&self) -> Option<BattleStatistics> {
        let p1 = self.player1();
        let p2 = self.player2();

        Some(BattleStatistics {
            rounds: self.round(),
            winner: self.winner().map(|w| w.name().to_string()),
            player1: CombatantStatistics::from_combatant(p1.name(), p1.combatant()?),
            player2: CombatantStatistics::from_combatant(p2.name(), p2.combatant()?),
        })
    }
}
