use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RosterError;

/// Character archetype a player can pick before a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Warrior,
    Mage,
    Archer,
}

impl Archetype {
    /// Get all archetype variants
    pub fn all() -> &'static [Archetype] {
        &[Archetype::Warrior, Archetype::Mage, Archetype::Archer]
    }

    /// The lowercase key used for selection and configuration files
    pub fn key(&self) -> &'static str {
        match self {
            Archetype::Warrior => "warrior",
            Archetype::Mage => "mage",
            Archetype::Archer => "archer",
        }
    }

    /// The special attack this archetype resolves
    pub fn special(&self) -> SpecialKind {
        match self {
            Archetype::Warrior => SpecialKind::BerserkerStrike,
            Archetype::Mage => SpecialKind::Fireball,
            Archetype::Archer => SpecialKind::MultiShot,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::Warrior => write!(f, "Warrior"),
            Archetype::Mage => write!(f, "Mage"),
            Archetype::Archer => write!(f, "Archer"),
        }
    }
}

impl FromStr for Archetype {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warrior" => Ok(Archetype::Warrior),
            "mage" => Ok(Archetype::Mage),
            "archer" => Ok(Archetype::Archer),
            _ => Err(RosterError::UnknownArchetype(s.to_string())),
        }
    }
}

/// Archetype-specific special attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    BerserkerStrike,
    Fireball,
    MultiShot,
}

impl SpecialKind {
    /// Get all special attack variants
    pub fn all() -> &'static [SpecialKind] {
        &[
            SpecialKind::BerserkerStrike,
            SpecialKind::Fireball,
            SpecialKind::MultiShot,
        ]
    }

    /// Archetype that owns this special attack
    pub fn archetype(&self) -> Archetype {
        match self {
            SpecialKind::BerserkerStrike => Archetype::Warrior,
            SpecialKind::Fireball => Archetype::Mage,
            SpecialKind::MultiShot => Archetype::Archer,
        }
    }
}

impl fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialKind::BerserkerStrike => write!(f, "Berserker Strike"),
            SpecialKind::Fireball => write!(f, "Fireball"),
            SpecialKind::MultiShot => write!(f, "Multi Shot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_archetype_keys() {
        assert_eq!("warrior".parse::<Archetype>().unwrap(), Archetype::Warrior);
        assert_eq!("Mage".parse::<Archetype>().unwrap(), Archetype::Mage);
        assert_eq!(" archer ".parse::<Archetype>().unwrap(), Archetype::Archer);
    }

    #[test]
    fn test_parse_unknown_archetype() {
        let err = "paladin".parse::<Archetype>().unwrap_err();
        assert_eq!(err, RosterError::UnknownArchetype("paladin".to_string()));
    }

    #[test]
    fn test_key_round_trips_through_parse() {
        for archetype in Archetype::all() {
            assert_eq!(archetype.key().parse::<Archetype>().unwrap(), *archetype);
        }
    }

    #[test]
    fn test_special_ownership() {
        for archetype in Archetype::all() {
            assert_eq!(archetype.special().archetype(), *archetype);
        }
        assert_eq!(SpecialKind::MultiShot.to_string(), "Multi Shot");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&SpecialKind::BerserkerStrike).unwrap();
        assert_eq!(json, "\"berserker_strike\"");
        let parsed: Archetype = serde_json::from_str("\"archer\"").unwrap();
        assert_eq!(parsed, Archetype::Archer);
    }
}
