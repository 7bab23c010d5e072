//! Attack resolution math
//!
//! Pure functions computing one attack's outcome from two stat blocks. The
//! random source is a parameter so tests can inject deterministic sequences.
//!
//! Resolution order: evasion roll, defense mitigation, critical roll,
//! penetration bonus, floor. An evaded attack short-circuits before any
//! damage computation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::CharacterBattleStats;

/// Attacker-side inputs to one attack resolution
#[derive(Debug, Clone, Copy)]
pub struct AttackProfile {
    pub attack: f64,
    pub critical_chance: f64,
    pub critical_damage: f64,
    pub penetration: f64,
}

/// Defender-side inputs to one attack resolution
#[derive(Debug, Clone, Copy)]
pub struct DefenseProfile {
    pub defense: f64,
    pub evasion: f64,
}

impl CharacterBattleStats {
    pub fn attack_profile(&self) -> AttackProfile {
        AttackProfile {
            attack: self.attack as f64,
            critical_chance: self.critical_chance,
            critical_damage: self.critical_damage,
            penetration: self.penetration,
        }
    }

    pub fn defense_profile(&self) -> DefenseProfile {
        DefenseProfile {
            defense: self.defense as f64,
            evasion: self.evasion,
        }
    }
}

/// Outcome of one attack resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Raw damage before flooring (0 when evaded)
    pub damage: f64,
    pub is_critical: bool,
    pub is_evaded: bool,
    /// Integer damage applied to the defender (0 when evaded, else >= 1)
    pub actual_damage: u32,
}

impl AttackOutcome {
    fn evaded() -> Self {
        Self {
            damage: 0.0,
            is_critical: false,
            is_evaded: true,
            actual_damage: 0,
        }
    }
}

/// Resolve one attack
///
/// Malformed inputs are clamped rather than rejected: attack is at least 1,
/// defense at least 0, percentage fields bounded to their documented ranges.
///
/// # Arguments
/// * `rng` - Random source for the evasion and critical rolls
/// * `attacker` - Attacker-side stats
/// * `defender` - Defender-side stats
pub fn resolve_attack(
    rng: &mut impl Rng,
    attacker: &AttackProfile,
    defender: &DefenseProfile,
) -> AttackOutcome {
    let attack = attacker.attack.max(1.0);
    let critical_chance = attacker.critical_chance.clamp(0.0, 100.0);
    let critical_damage = attacker.critical_damage.max(100.0);
    let penetration = attacker.penetration.clamp(0.0, 100.0);
    let defense = defender.defense.max(0.0);
    let evasion = defender.evasion.clamp(0.0, 100.0);

    if rng.gen_range(0.0..100.0) < evasion {
        return AttackOutcome::evaded();
    }

    let mut damage = (attack - defense * 0.5).max(1.0);

    let is_critical = rng.gen_range(0.0..100.0) < critical_chance;
    if is_critical {
        damage *= critical_damage / 100.0;
    }

    // Penetration is an additive bonus after mitigation
    damage += damage * penetration / 100.0;

    let actual_damage = damage.floor().max(1.0) as u32;

    AttackOutcome {
        damage,
        is_critical,
        is_evaded: false,
        actual_damage,
    }
}

/// Healing gained from life steal: floor(damage * pct / 100)
///
/// The caller caps the applied healing at max health.
pub fn life_steal_amount(damage: u32, life_steal_pct: f64) -> u32 {
    let pct = life_steal_pct.clamp(0.0, 100.0);
    (damage as f64 * pct / 100.0).floor() as u32
}

/// Effective attack interval: floor(base / (1 + speed/100))
pub fn attack_interval_ms(base_ms: u64, attack_speed_pct: f64) -> u64 {
    let speed = attack_speed_pct.max(0.0);
    (base_ms as f64 / (1.0 + speed / 100.0)).floor() as u64
}
