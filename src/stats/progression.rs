//! Progression categories feeding battle-stat derivation
//!
//! The leveling system (external to this crate) tracks four categories.
//! Battle stats are derived from these levels, never stored independently.

use serde::{Deserialize, Serialize};

/// Per-category levels earned through progression
///
/// Each category feeds a distinct slice of the derived battle stats:
/// - `strength`: health, defense, life steal
/// - `combat`: attack, critical chance
/// - `agility`: attack speed, evasion
/// - `fortune`: critical damage, penetration, global stat bonus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionLevels {
    pub strength: u32,
    pub combat: u32,
    pub agility: u32,
    pub fortune: u32,
}

impl ProgressionLevels {
    pub fn new(strength: u32, combat: u32, agility: u32, fortune: u32) -> Self {
        Self {
            strength,
            combat,
            agility,
            fortune,
        }
    }

    /// Sum of all category levels, never below 1
    pub fn total_level(&self) -> u32 {
        (self.strength + self.combat + self.agility + self.fortune).max(1)
    }
}
