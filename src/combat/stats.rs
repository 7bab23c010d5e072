//! Battle-stat blocks for combatants
//!
//! Both the player and monsters share the same stat shape. Percentage fields
//! are clamped into their documented ranges on construction; out-of-range
//! data from an external provider is corrected, never rejected.

use serde::{Deserialize, Serialize};

use crate::stats::ProgressionLevels;

/// Complete battle stats for one combatant
///
/// Percentage fields are in percent units (e.g. `critical_chance: 25.0`
/// means 25%). `critical_damage` is the total multiplier in percent:
/// 150 means a critical hit deals 1.5x damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterBattleStats {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    /// Attack speed bonus (%) - shortens the attack interval
    pub attack_speed: f64,
    /// Chance to critically hit (%), in [0, 100]
    pub critical_chance: f64,
    /// Critical hit multiplier (%), at least 100
    pub critical_damage: f64,
    /// Chance to fully negate an incoming attack (%), in [0, 100]
    pub evasion: f64,
    /// Bonus damage after defense mitigation (%), in [0, 100]
    pub penetration: f64,
    /// Portion of dealt damage converted to healing (%), in [0, 100]
    pub life_steal: f64,
    /// Source progression levels these stats were derived from
    pub levels: ProgressionLevels,
}

impl CharacterBattleStats {
    /// Correct out-of-range fields instead of rejecting them
    ///
    /// Applied to externally supplied stat blocks (monster data). Negative
    /// percentages become 0, chances cap at 100, and health never exceeds
    /// max health.
    pub fn clamped(mut self) -> Self {
        self.attack_speed = self.attack_speed.max(0.0);
        self.critical_chance = self.critical_chance.clamp(0.0, 100.0);
        self.critical_damage = self.critical_damage.max(100.0);
        self.evasion = self.evasion.clamp(0.0, 100.0);
        self.penetration = self.penetration.clamp(0.0, 100.0);
        self.life_steal = self.life_steal.clamp(0.0, 100.0);
        self.health = self.health.min(self.max_health);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage, saturating at zero
    pub fn apply_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Add healing, capped at max health
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }
}

/// A monster encounter: identity plus the shared stat shape
///
/// Monsters are passive stat blocks supplied by an external data provider;
/// the engine never makes decisions on their behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub gold_reward: u64,
    pub stats: CharacterBattleStats,
}

impl Monster {
    /// Build a monster, clamping any out-of-range stat fields
    pub fn new(name: impl Into<String>, gold_reward: u64, stats: CharacterBattleStats) -> Self {
        Self {
            name: name.into(),
            gold_reward,
            stats: stats.clamped(),
        }
    }
}
