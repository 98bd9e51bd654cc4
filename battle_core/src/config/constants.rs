//! Tunable rule constants
//!
//! Defaults reproduce the standard rules exactly. Every field carries a serde
//! default, so a rules file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Rule constants used by every combat computation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BattleConstants {
    #[serde(default)]
    pub attack: AttackConstants,
    #[serde(default)]
    pub defend: DefendConstants,
    #[serde(default)]
    pub heal: HealConstants,
    #[serde(default)]
    pub specials: SpecialConstants,
}

impl BattleConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: BattleConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: BattleConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject values that would break the damage formulas
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attack.variance == 0 {
            return Err(invalid("attack.variance must be at least 1"));
        }
        if self.attack.defense_divisor == 0 {
            return Err(invalid("attack.defense_divisor must be at least 1"));
        }
        if self.attack.crit_multiplier < 1.0 {
            return Err(invalid("attack.crit_multiplier must be at least 1.0"));
        }
        if self.defend.defense_multiplier < 0.0 {
            return Err(invalid("defend.defense_multiplier must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.defend.mp_restore_fraction) {
            return Err(invalid("defend.mp_restore_fraction must be within 0..=1"));
        }
        if self.heal.variance == 0 {
            return Err(invalid("heal.variance must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.heal.hp_fraction) {
            return Err(invalid("heal.hp_fraction must be within 0..=1"));
        }

        for (name, tuning) in [
            ("berserker_strike", &self.specials.berserker_strike),
            ("fireball", &self.specials.fireball),
            ("multi_shot", &self.specials.multi_shot),
        ] {
            if tuning.variance == 0 || tuning.defense_divisor == 0 || tuning.hits == 0 {
                return Err(invalid(&format!(
                    "specials.{name}: variance, defense_divisor and hits must be at least 1"
                )));
            }
            if tuning.multiplier < 0.0 {
                return Err(invalid(&format!("specials.{name}.multiplier must not be negative")));
            }
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Validation(message.to_string())
}

/// Basic attack: `attack_power + roll(0..variance) - offset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackConstants {
    #[serde(default = "default_attack_variance")]
    pub variance: u32,
    #[serde(default = "default_attack_offset")]
    pub offset: u32,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    /// Effective defense is divided by this before being subtracted
    #[serde(default = "default_attack_defense_divisor")]
    pub defense_divisor: u32,
}

impl Default for AttackConstants {
    fn default() -> Self {
        AttackConstants {
            variance: 10,
            offset: 5,
            crit_multiplier: 1.5,
            defense_divisor: 2,
        }
    }
}

fn default_attack_variance() -> u32 {
    10
}
fn default_attack_offset() -> u32 {
    5
}
fn default_crit_multiplier() -> f64 {
    1.5
}
fn default_attack_defense_divisor() -> u32 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefendConstants {
    /// Defense multiplier applied against basic attacks while defending
    #[serde(default = "default_defense_multiplier")]
    pub defense_multiplier: f64,
    /// Fraction of max MP restored by defending
    #[serde(default = "default_mp_restore_fraction")]
    pub mp_restore_fraction: f64,
}

impl Default for DefendConstants {
    fn default() -> Self {
        DefendConstants {
            defense_multiplier: 1.5,
            mp_restore_fraction: 0.1,
        }
    }
}

fn default_defense_multiplier() -> f64 {
    1.5
}
fn default_mp_restore_fraction() -> f64 {
    0.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealConstants {
    #[serde(default = "default_heal_mp_cost")]
    pub mp_cost: u32,
    /// Fraction of max HP restored before the random bonus
    #[serde(default = "default_heal_hp_fraction")]
    pub hp_fraction: f64,
    #[serde(default = "default_heal_variance")]
    pub variance: u32,
}

impl Default for HealConstants {
    fn default() -> Self {
        HealConstants {
            mp_cost: 20,
            hp_fraction: 0.3,
            variance: 10,
        }
    }
}

fn default_heal_mp_cost() -> u32 {
    20
}
fn default_heal_hp_fraction() -> f64 {
    0.3
}
fn default_heal_variance() -> u32 {
    10
}

/// Per-hit special damage: `floor(attack_power * multiplier) + roll(0..variance)
/// - floor(defense / defense_divisor)`, repeated `hits` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialTuning {
    pub multiplier: f64,
    pub variance: u32,
    pub defense_divisor: u32,
    #[serde(default = "default_hits")]
    pub hits: u32,
}

fn default_hits() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialConstants {
    #[serde(default = "default_berserker_strike")]
    pub berserker_strike: SpecialTuning,
    #[serde(default = "default_fireball")]
    pub fireball: SpecialTuning,
    #[serde(default = "default_multi_shot")]
    pub multi_shot: SpecialTuning,
}

impl Default for SpecialConstants {
    fn default() -> Self {
        SpecialConstants {
            berserker_strike: default_berserker_strike(),
            fireball: default_fireball(),
            multi_shot: default_multi_shot(),
        }
    }
}

fn default_berserker_strike() -> SpecialTuning {
    SpecialTuning {
        multiplier: 1.8,
        variance: 15,
        defense_divisor: 3,
        hits: 1,
    }
}
fn default_fireball() -> SpecialTuning {
    SpecialTuning {
        multiplier: 2.2,
        variance: 20,
        defense_divisor: 4,
        hits: 1,
    }
}
fn default_multi_shot() -> SpecialTuning {
    SpecialTuning {
        multiplier: 0.7,
        variance: 8,
        defense_divisor: 3,
        hits: 3,
    }
}
