//! Combatant - the stateful in-battle character owned by a participant

mod special;

pub use special::{resolve_special, tuning, SpecialStrike};

use crate::config::BattleConstants;
use crate::error::BattleError;
use crate::types::ActionOutcome;
use rand::Rng;
use roster_core::{Archetype, ArchetypeInfo, ArchetypeStats, SpecialKind};

/// Lowest damage any single hit can deal
pub const MIN_DAMAGE: u32 = 1;

/// A character in battle: base stats, HP/MP and cumulative statistics
///
/// HP and MP are always within `0..=max`. State only changes through the
/// action methods, [`Combatant::take_damage`] and [`Combatant::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    archetype: Archetype,
    name: String,
    stats: ArchetypeStats,
    current_hp: u32,
    current_mp: u32,
    is_defending: bool,
    damage_dealt: u32,
    damage_received: u32,
    actions_used: u32,
}

impl Combatant {
    /// Create a combatant at full HP/MP with the archetype's base stats
    pub fn new(archetype: Archetype, name: impl Into<String>) -> Self {
        let stats = archetype.base_stats();
        Combatant {
            archetype,
            name: name.into(),
            stats,
            current_hp: stats.max_hp,
            current_mp: stats.max_mp,
            is_defending: false,
            damage_dealt: 0,
            damage_received: 0,
            actions_used: 0,
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &ArchetypeStats {
        &self.stats
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn current_mp(&self) -> u32 {
        self.current_mp
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    pub fn max_mp(&self) -> u32 {
        self.stats.max_mp
    }

    pub fn is_defending(&self) -> bool {
        self.is_defending
    }

    pub fn damage_dealt(&self) -> u32 {
        self.damage_dealt
    }

    pub fn damage_received(&self) -> u32 {
        self.damage_received
    }

    pub fn actions_used(&self) -> u32 {
        self.actions_used
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn special_kind(&self) -> SpecialKind {
        self.archetype.special()
    }

    pub fn special_cost(&self) -> u32 {
        self.stats.special_cost
    }

    /// Display name of this archetype's special attack
    pub fn special_name(&self) -> String {
        self.special_kind().to_string()
    }

    pub fn info(&self) -> ArchetypeInfo {
        self.archetype.info()
    }

    pub fn hp_percentage(&self) -> f64 {
        percent(self.current_hp, self.stats.max_hp)
    }

    pub fn mp_percentage(&self) -> f64 {
        percent(self.current_mp, self.stats.max_mp)
    }

    /// Set current HP, clamped to `0..=max_hp`
    pub fn set_current_hp(&mut self, hp: u32) {
        self.current_hp = hp.min(self.stats.max_hp);
    }

    /// Set current MP, clamped to `0..=max_mp`
    pub fn set_current_mp(&mut self, mp: u32) {
        self.current_mp = mp.min(self.stats.max_mp);
    }

    pub(crate) fn clear_defending(&mut self) {
        self.is_defending = false;
    }

    /// Basic attack against a target
    ///
    /// Rolls `attack_power + roll(0..variance) - offset`, then a critical
    /// check against `critical_chance`. Half of the target's (possibly
    /// defending) defense is subtracted and the result floored at 1.
    pub fn attack(
        &mut self,
        target: &mut Combatant,
        rules: &BattleConstants,
        rng: &mut impl Rng,
    ) -> ActionOutcome {
        let attack = &rules.attack;
        let base = self.stats.attack_power as i64 + rng.gen_range(0..attack.variance) as i64
            - attack.offset as i64;
        let is_critical = rng.gen::<f64>() < self.stats.critical_chance;
        let raw = if is_critical {
            (base as f64 * attack.crit_multiplier).floor() as i64
        } else {
            base
        };

        let defense = if target.is_defending {
            target.stats.defense as f64 * rules.defend.defense_multiplier
        } else {
            target.stats.defense as f64
        };
        let reduction = (defense / attack.defense_divisor as f64).floor() as i64;
        let damage = (raw - reduction).max(MIN_DAMAGE as i64) as u32;

        self.actions_used += 1;
        target.take_damage(damage);
        self.damage_dealt += damage;

        ActionOutcome::Attack {
            attacker: self.name.clone(),
            target: target.name.clone(),
            damage,
            is_critical,
        }
    }

    /// Archetype special attack; costs `special_cost` MP
    pub fn special_attack(
        &mut self,
        target: &mut Combatant,
        rules: &BattleConstants,
        rng: &mut impl Rng,
    ) -> Result<ActionOutcome, BattleError> {
        let cost = self.special_cost();
        if self.current_mp < cost {
            return Err(BattleError::InsufficientMp {
                required: cost,
                available: self.current_mp,
            });
        }

        self.actions_used += 1;
        self.current_mp -= cost;

        let strike = resolve_special(
            self.special_kind(),
            self.stats.attack_power,
            target.stats.defense,
            &rules.specials,
            rng,
        );
        let damage = strike.total();
        target.take_damage(damage);
        self.damage_dealt += damage;

        Ok(ActionOutcome::Special {
            special: strike.kind,
            attacker: self.name.clone(),
            target: target.name.clone(),
            damage,
            hits: strike.hits.len() as u32,
        })
    }

    /// Raise guard until the next hit or turn change, restoring some MP
    pub fn defend(&mut self, rules: &BattleConstants) -> ActionOutcome {
        self.actions_used += 1;
        self.is_defending = true;

        let restore = (self.stats.max_mp as f64 * rules.defend.mp_restore_fraction).floor() as u32;
        let before = self.current_mp;
        self.current_mp = (self.current_mp + restore).min(self.stats.max_mp);

        ActionOutcome::Defend {
            character: self.name.clone(),
            mp_restored: self.current_mp - before,
        }
    }

    /// Spend MP to recover HP, never exceeding max HP
    pub fn heal(
        &mut self,
        rules: &BattleConstants,
        rng: &mut impl Rng,
    ) -> Result<ActionOutcome, BattleError> {
        let heal = &rules.heal;
        if self.current_mp < heal.mp_cost {
            return Err(BattleError::InsufficientMp {
                required: heal.mp_cost,
                available: self.current_mp,
            });
        }

        self.actions_used += 1;
        self.current_mp -= heal.mp_cost;

        let rolled = (self.stats.max_hp as f64 * heal.hp_fraction).floor() as u32
            + rng.gen_range(0..heal.variance);
        let amount = rolled.min(self.stats.max_hp - self.current_hp);
        self.current_hp += amount;

        Ok(ActionOutcome::Heal {
            character: self.name.clone(),
            amount,
        })
    }

    /// Apply incoming damage; any hit breaks a defensive stance
    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.damage_received += amount;
        self.is_defending = false;
    }

    /// Restore full HP/MP and zero the battle statistics
    pub fn reset(&mut self) {
        self.current_hp = self.stats.max_hp;
        self.current_mp = self.stats.max_mp;
        self.is_defending = false;
        self.damage_dealt = 0;
        self.damage_received = 0;
        self.actions_used = 0;
    }
}

fn percent(current: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    current as f64 / max as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn make_test_rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(12345)
    }

    fn pair(a: Archetype, b: Archetype) -> (Combatant, Combatant) {
        (Combatant::new(a, "Attacker"), Combatant::new(b, "Target"))
    }

    #[test]
    fn test_new_combatant_full_resources() {
        let mage = Combatant::new(Archetype::Mage, "Merlin");
        assert_eq!(mage.current_hp(), 80);
        assert_eq!(mage.current_mp(), 100);
        assert_eq!(mage.special_cost(), 25);
        assert_eq!(mage.special_name(), "Fireball");
        assert!(mage.is_alive());
        assert!((mage.hp_percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attack_damage_range() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        for _ in 0..300 {
            let (mut warrior, mut mage) = pair(Archetype::Warrior, Archetype::Mage);
            let outcome = warrior.attack(&mut mage, &rules, &mut rng);
            // base 20..=29, crit floor(base*1.5) 30..=43, minus floor(10/2)
            let ActionOutcome::Attack { damage, is_critical, .. } = outcome else {
                panic!("expected attack outcome");
            };
            if is_critical {
                assert!((25..=38).contains(&damage), "crit {}", damage);
            } else {
                assert!((15..=24).contains(&damage), "hit {}", damage);
            }
            assert_eq!(mage.current_hp(), 80 - damage);
            assert_eq!(mage.damage_received(), damage);
            assert_eq!(warrior.damage_dealt(), damage);
            assert_eq!(warrior.actions_used(), 1);
        }
    }

    #[test]
    fn test_defending_target_takes_less() {
        let mut rules = BattleConstants::default();
        rules.attack.variance = 1;
        let mut rng = make_test_rng();

        let (mut mage, mut warrior) = pair(Archetype::Mage, Archetype::Warrior);
        mage.stats.critical_chance = 0.0;

        let open = mage.attack(&mut warrior, &rules, &mut rng);
        // 30 - 5 - floor(20 / 2)
        assert_eq!(open.damage(), 15);

        warrior.defend(&rules);
        assert!(warrior.is_defending());
        let guarded = mage.attack(&mut warrior, &rules, &mut rng);
        // 25 - floor(30 / 2)
        assert_eq!(guarded.damage(), 10);
        assert!(!warrior.is_defending());
    }

    #[test]
    fn test_attack_never_below_one() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        let (mut archer, mut warrior) = pair(Archetype::Archer, Archetype::Warrior);
        warrior.stats.defense = 500;
        for _ in 0..50 {
            let outcome = archer.attack(&mut warrior, &rules, &mut rng);
            assert_eq!(outcome.damage(), 1);
        }
    }

    #[test]
    fn test_special_insufficient_mp_changes_nothing() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        let (mut mage, mut warrior) = pair(Archetype::Mage, Archetype::Warrior);
        mage.set_current_mp(0);

        let before = (mage.clone(), warrior.clone());
        let err = mage.special_attack(&mut warrior, &rules, &mut rng).unwrap_err();
        assert_eq!(err, BattleError::InsufficientMp { required: 25, available: 0 });
        assert_eq!((mage, warrior), before);
    }

    #[test]
    fn test_special_spends_mp() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        let (mut archer, mut mage) = pair(Archetype::Archer, Archetype::Mage);

        let outcome = archer.special_attack(&mut mage, &rules, &mut rng).unwrap();
        let ActionOutcome::Special { special, damage, hits, .. } = outcome else {
            panic!("expected special outcome");
        };
        assert_eq!(special, SpecialKind::MultiShot);
        assert_eq!(hits, 3);
        assert_eq!(archer.current_mp(), 30);
        assert_eq!(mage.current_hp(), 80 - damage);
        assert_eq!(archer.actions_used(), 1);
    }

    #[test]
    fn test_defend_restores_mp_capped() {
        let rules = BattleConstants::default();
        let mut mage = Combatant::new(Archetype::Mage, "Merlin");

        let outcome = mage.defend(&rules);
        assert_eq!(outcome, ActionOutcome::Defend { character: "Merlin".to_string(), mp_restored: 0 });
        assert_eq!(mage.current_mp(), 100);

        mage.set_current_mp(50);
        let outcome = mage.defend(&rules);
        assert_eq!(outcome, ActionOutcome::Defend { character: "Merlin".to_string(), mp_restored: 10 });
        assert_eq!(mage.current_mp(), 60);
        assert_eq!(mage.actions_used(), 2);
    }

    #[test]
    fn test_heal_capped_at_max() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        let mut warrior = Combatant::new(Archetype::Warrior, "Conan");
        warrior.set_current_hp(110);

        let outcome = warrior.heal(&rules, &mut rng).unwrap();
        assert_eq!(outcome, ActionOutcome::Heal { character: "Conan".to_string(), amount: 10 });
        assert_eq!(warrior.current_hp(), 120);
        assert_eq!(warrior.current_mp(), 10);
    }

    #[test]
    fn test_heal_amount_range() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        for _ in 0..100 {
            let mut mage = Combatant::new(Archetype::Mage, "Merlin");
            mage.set_current_hp(1);
            let outcome = mage.heal(&rules, &mut rng).unwrap();
            let ActionOutcome::Heal { amount, .. } = outcome else {
                panic!("expected heal outcome");
            };
            // floor(80 * 0.3) + 0..=9
            assert!((24..=33).contains(&amount));
        }
    }

    #[test]
    fn test_heal_requires_mp() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        let mut warrior = Combatant::new(Archetype::Warrior, "Conan");
        warrior.set_current_mp(19);
        warrior.set_current_hp(50);
        assert!(matches!(
            warrior.heal(&rules, &mut rng),
            Err(BattleError::InsufficientMp { required: 20, available: 19 })
        ));
        assert_eq!(warrior.current_hp(), 50);
        assert_eq!(warrior.actions_used(), 0);
    }

    #[test]
    fn test_take_damage_saturates() {
        let mut archer = Combatant::new(Archetype::Archer, "Robin");
        archer.take_damage(500);
        assert_eq!(archer.current_hp(), 0);
        assert_eq!(archer.damage_received(), 500);
        assert!(!archer.is_alive());
    }

    #[test]
    fn test_reset() {
        let rules = BattleConstants::default();
        let mut rng = make_test_rng();
        let (mut warrior, mut archer) = pair(Archetype::Warrior, Archetype::Archer);
        warrior.special_attack(&mut archer, &rules, &mut rng).unwrap();
        archer.defend(&rules);

        archer.reset();
        warrior.reset();
        assert_eq!(archer, Combatant::new(Archetype::Archer, "Target"));
        assert_eq!(warrior, Combatant::new(Archetype::Warrior, "Attacker"));
    }

    #[test]
    fn test_setters_clamp() {
        let mut mage = Combatant::new(Archetype::Mage, "Merlin");
        mage.set_current_hp(1_000);
        mage.set_current_mp(1_000);
        assert_eq!(mage.current_hp(), 80);
        assert_eq!(mage.current_mp(), 100);
    }
}
