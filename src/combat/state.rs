//! Canonical battle state and read-only snapshots
//!
//! One `BattleState` exists per encounter and is owned exclusively by its
//! engine. Everything external sees `BattleSnapshot` values cloned from the
//! canonical state; holders can never mutate the original through them.

use serde::{Deserialize, Serialize};

use crate::combat::{BattleLog, BattleLogEntry, CharacterBattleStats, Monster};
use crate::core::error::{EngineError, Result};

/// Global fast-forward multiplier applied to both combatants' intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleSpeed {
    Normal,
    Double,
    Triple,
}

impl BattleSpeed {
    pub fn multiplier(self) -> u64 {
        match self {
            BattleSpeed::Normal => 1,
            BattleSpeed::Double => 2,
            BattleSpeed::Triple => 3,
        }
    }

    /// Parse a raw multiplier; only 1, 2, and 3 are valid
    pub fn from_multiplier(value: u8) -> Result<Self> {
        match value {
            1 => Ok(BattleSpeed::Normal),
            2 => Ok(BattleSpeed::Double),
            3 => Ok(BattleSpeed::Triple),
            other => Err(EngineError::InvalidSpeed(other)),
        }
    }
}

/// Canonical mutable state of one encounter
#[derive(Debug, Clone)]
pub struct BattleState {
    pub player_stats: CharacterBattleStats,
    /// The current opponent; None once defeated
    pub current_monster: Option<Monster>,
    pub battle_log: BattleLog,
    /// Gold accumulated across this session
    pub total_gold: u64,
    pub is_active: bool,
    pub is_paused: bool,
    pub speed: BattleSpeed,
}

impl BattleState {
    /// Fresh encounter state with an empty log
    pub fn new(player_stats: CharacterBattleStats, monster: Monster, log_capacity: usize) -> Self {
        Self {
            player_stats,
            current_monster: Some(monster),
            battle_log: BattleLog::new(log_capacity),
            total_gold: 0,
            is_active: true,
            is_paused: false,
            speed: BattleSpeed::Normal,
        }
    }

    /// Immutable copy for callbacks and rendering
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            player_stats: self.player_stats.clone(),
            current_monster: self.current_monster.clone(),
            battle_log: self.battle_log.to_vec(),
            total_gold: self.total_gold,
            is_active: self.is_active,
            is_paused: self.is_paused,
            speed: self.speed,
        }
    }
}

/// Value-type copy of the battle state pushed to observers each mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub player_stats: CharacterBattleStats,
    pub current_monster: Option<Monster>,
    /// Log entries, oldest first
    pub battle_log: Vec<BattleLogEntry>,
    pub total_gold: u64,
    pub is_active: bool,
    pub is_paused: bool,
    pub speed: BattleSpeed,
}
