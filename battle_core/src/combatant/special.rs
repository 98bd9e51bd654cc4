//! Special attack resolution
//!
//! All three specials share one envelope: each hit rolls
//! `floor(attack_power * multiplier) + roll(0..variance)`, subtracts
//! `floor(defense / defense_divisor)` and is floored at 1. The hits are summed
//! into a single damage application by the caller.

use super::MIN_DAMAGE;
use crate::config::{SpecialConstants, SpecialTuning};
use rand::Rng;
use roster_core::SpecialKind;

/// Damage rolled by a special attack, before it is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialStrike {
    pub kind: SpecialKind,
    /// Damage of each individual hit, each at least 1
    pub hits: Vec<u32>,
}

impl SpecialStrike {
    pub fn total(&self) -> u32 {
        self.hits.iter().sum()
    }
}

/// Tuning for a special attack kind
pub fn tuning(kind: SpecialKind, specials: &SpecialConstants) -> &SpecialTuning {
    match kind {
        SpecialKind::BerserkerStrike => &specials.berserker_strike,
        SpecialKind::Fireball => &specials.fireball,
        SpecialKind::MultiShot => &specials.multi_shot,
    }
}

/// Roll every hit of a special attack against a target's defense
pub fn resolve_special(
    kind: SpecialKind,
    attack_power: u32,
    target_defense: u32,
    specials: &SpecialConstants,
    rng: &mut impl Rng,
) -> SpecialStrike {
    let tuning = tuning(kind, specials);
    let scaled = (attack_power as f64 * tuning.multiplier).floor() as i64;
    let reduction = (target_defense / tuning.defense_divisor) as i64;

    let hits = (0..tuning.hits)
        .map(|_| {
            let rolled = scaled + rng.gen_range(0..tuning.variance) as i64;
            (rolled - reduction).max(MIN_DAMAGE as i64) as u32
        })
        .collect();

    SpecialStrike { kind, hits }
}
