//! Match setup - who plays which archetype, under which rules

use super::{BattleConstants, ConfigError};
use crate::engine::BattleEngine;
use crate::participant::Participant;
use crate::types::ParticipantId;
use roster_core::Archetype;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A match description, usually read from a TOML file
///
/// ```toml
/// seed = 42
///
/// [[players]]
/// name = "Alice"
/// archetype = "warrior"
///
/// [[players]]
/// name = "Bob"
/// archetype = "mage"
///
/// [rules.heal]
/// mp_cost = 25
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Fixed RNG seed; omitted means entropy
    #[serde(default)]
    pub seed: Option<u64>,
    pub players: Vec<PlayerConfig>,
    #[serde(default)]
    pub rules: BattleConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    /// Archetype key such as "warrior"
    pub archetype: String,
}

impl MatchConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: MatchConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::Validation(format!(
                "a match needs exactly 2 players, found {}",
                self.players.len()
            )));
        }
        for player in &self.players {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation("player name must not be empty".to_string()));
            }
            player.archetype.parse::<Archetype>()?;
        }
        self.rules.validate()
    }

    /// Seat both players with their selected archetypes
    pub fn build_participants(&self) -> Result<(Participant, Participant), ConfigError> {
        self.validate()?;
        let seat = |id: ParticipantId, player: &PlayerConfig| -> Result<Participant, ConfigError> {
            let archetype = player.archetype.parse::<Archetype>()?;
            Ok(Participant::with_archetype(id, player.name.clone(), archetype))
        };
        Ok((
            seat(ParticipantId::One, &self.players[0])?,
            seat(ParticipantId::Two, &self.players[1])?,
        ))
    }

    /// Create a ready-to-play engine for this match
    pub fn build_engine(&self) -> Result<BattleEngine, ConfigError> {
        let (player1, player2) = self.build_participants()?;
        let engine = match self.seed {
            Some(seed) => BattleEngine::with_seed(player1, player2, seed)?,
            None => BattleEngine::new(player1, player2)?,
        };
        engine.with_rules(self.rules.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::RosterError;

    const MATCH: &str = r#"
seed = 42

[[players]]
name = "Alice"
archetype = "warrior"

[[players]]
name = "Bob"
archetype = "Mage"

[rules.heal]
mp_cost = 25
"#;

    #[test]
    fn test_parse_match() {
        let config = MatchConfig::parse(MATCH).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.players[1].name, "Bob");
        assert_eq!(config.rules.heal.mp_cost, 25);
        assert_eq!(config.rules.attack, crate::config::AttackConstants::default());
    }

    #[test]
    fn test_build_engine() {
        let engine = MatchConfig::parse(MATCH).unwrap().build_engine().unwrap();
        assert_eq!(engine.player1().name(), "Alice");
        assert_eq!(
            engine.player2().combatant().unwrap().archetype(),
            Archetype::Mage
        );
        assert_eq!(engine.rules().heal.mp_cost, 25);
        assert_eq!(engine.current_id(), ParticipantId::Two);
    }

    #[test]
    fn test_unknown_archetype() {
        let toml = r#"
[[players]]
name = "Alice"
archetype = "paladin"

[[players]]
name = "Bob"
archetype = "mage"
"#;
        match MatchConfig::parse(toml) {
            Err(ConfigError::Roster(RosterError::UnknownArchetype(key))) => {
                assert_eq!(key, "paladin")
            }
            other => panic!("Expected unknown archetype, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_player_count() {
        let toml = r#"
[[players]]
name = "Alice"
archetype = "archer"
"#;
        assert!(matches!(
            MatchConfig::parse(toml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_same_seed_same_battle() {
        let config = MatchConfig::parse(MATCH).unwrap();
        let mut a = config.build_engine().unwrap();
        let mut b = config.build_engine().unwrap();
        for _ in 0..6 {
            if a.is_game_over() {
                break;
            }
            let ra = a.execute_action("attack").unwrap();
            let rb = b.execute_action("attack").unwrap();
            assert_eq!(ra, rb);
        }
    }
}
