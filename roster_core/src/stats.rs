//! Base stat table for each archetype

use crate::types::{Archetype, SpecialKind};
use serde::{Deserialize, Serialize};

/// Fixed base stats an archetype starts every battle with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack_power: u32,
    pub defense: u32,
    pub speed: u32,
    /// Chance in 0..=1 that a basic attack is critical
    pub critical_chance: f64,
    /// MP spent by the archetype's special attack
    pub special_cost: u32,
}

impl ArchetypeStats {
    const WARRIOR: ArchetypeStats = ArchetypeStats {
        max_hp: 120,
        max_mp: 30,
        attack_power: 25,
        defense: 20,
        speed: 15,
        critical_chance: 0.10,
        special_cost: 15,
    };

    const MAGE: ArchetypeStats = ArchetypeStats {
        max_hp: 80,
        max_mp: 100,
        attack_power: 30,
        defense: 10,
        speed: 20,
        critical_chance: 0.15,
        special_cost: 25,
    };

    const ARCHER: ArchetypeStats = ArchetypeStats {
        max_hp: 90,
        max_mp: 50,
        attack_power: 28,
        defense: 15,
        speed: 25,
        critical_chance: 0.25,
        special_cost: 20,
    };

    /// Look up the base stats for an archetype
    pub fn for_archetype(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Warrior => Self::WARRIOR,
            Archetype::Mage => Self::MAGE,
            Archetype::Archer => Self::ARCHER,
        }
    }
}

/// Presentation metadata for character selection and HUDs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeInfo {
    pub archetype: Archetype,
    pub display_name: &'static str,
    pub icon: &'static str,
    /// CSS-style hex colour
    pub color: &'static str,
    pub special: SpecialKind,
    pub stats: ArchetypeStats,
}

impl ArchetypeInfo {
    pub fn for_archetype(archetype: Archetype) -> Self {
        let (icon, color) = match archetype {
            Archetype::Warrior => ("🛡️", "#ff6b6b"),
            Archetype::Mage => ("🔮", "#4ecdc4"),
            Archetype::Archer => ("🏹", "#00d4ff"),
        };
        ArchetypeInfo {
            archetype,
            display_name: match archetype {
                Archetype::Warrior => "Warrior",
                Archetype::Mage => "Mage",
                Archetype::Archer => "Archer",
            },
            icon,
            color,
            special: archetype.special(),
            stats: ArchetypeStats::for_archetype(archetype),
        }
    }
}

impl Archetype {
    /// Base stats for this archetype
    pub fn base_stats(&self) -> ArchetypeStats {
        ArchetypeStats::for_archetype(*self)
    }

    /// Display metadata for this archetype
    pub fn info(&self) -> ArchetypeInfo {
        ArchetypeInfo::for_archetype(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_table_matches() {
        let w = Archetype::Warrior.base_stats();
        assert_eq!((w.max_hp, w.max_mp, w.attack_power, w.defense, w.speed), (120, 30, 25, 20, 15));
        assert!((w.critical_chance - 0.10).abs() < f64::EPSILON);
        assert_eq!(w.special_cost, 15);

        let m = Archetype::Mage.base_stats();
        assert_eq!((m.max_hp, m.max_mp, m.attack_power, m.defense, m.speed), (80, 100, 30, 10, 20));
        assert!((m.critical_chance - 0.15).abs() < f64::EPSILON);
        assert_eq!(m.special_cost, 25);

        let a = Archetype::Archer.base_stats();
        assert_eq!((a.max_hp, a.max_mp, a.attack_power, a.defense, a.speed), (90, 50, 28, 15, 25));
        assert!((a.critical_chance - 0.25).abs() < f64::EPSILON);
        assert_eq!(a.special_cost, 20);
    }

    #[test]
    fn test_info_carries_stats() {
        let info = Archetype::Mage.info();
        assert_eq!(info.display_name, "Mage");
        assert_eq!(info.special, SpecialKind::Fireball);
        assert_eq!(info.stats, Archetype::Mage.base_stats());
    }

    #[test]
    fn test_parse_stats_from_toml() {
        let toml = r#"
max_hp = 120
max_mp = 30
attack_power = 25
defense = 20
speed = 15
critical_chance = 0.1
special_cost = 15
"#;
        let stats: ArchetypeStats = toml::from_str(toml).unwrap();
        assert_eq!(stats, Archetype::Warrior.base_stats());
    }
}
