//! Bounded battle log
//!
//! Append-only, time-ordered record of combat events for the front-end.
//! Capacity-bounded with FIFO eviction so an arbitrarily long battle never
//! grows the log past its cap.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Which side performed an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combatant {
    Player,
    Monster,
}

/// Category of a battle log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEventKind {
    Attack,
    Critical,
    Evade,
    Victory,
    Defeat,
    Gold,
}

/// One immutable battle log entry
///
/// `attacker` is set for attack/critical/evade events; bookkeeping events
/// (victory, defeat, gold) carry none. `timestamp_ms` is battle-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub kind: LogEventKind,
    pub attacker: Option<Combatant>,
    pub damage: Option<u32>,
    pub message: String,
    pub timestamp_ms: u64,
}

impl BattleLogEntry {
    pub fn attack(attacker: Combatant, target: &str, damage: u32, timestamp_ms: u64) -> Self {
        let message = match attacker {
            Combatant::Player => format!("You hit {} for {} damage", target, damage),
            Combatant::Monster => format!("{} hits you for {} damage", target, damage),
        };
        Self {
            kind: LogEventKind::Attack,
            attacker: Some(attacker),
            damage: Some(damage),
            message,
            timestamp_ms,
        }
    }

    pub fn critical(attacker: Combatant, target: &str, damage: u32, timestamp_ms: u64) -> Self {
        let message = match attacker {
            Combatant::Player => format!("Critical! You hit {} for {} damage", target, damage),
            Combatant::Monster => format!("Critical! {} hits you for {} damage", target, damage),
        };
        Self {
            kind: LogEventKind::Critical,
            attacker: Some(attacker),
            damage: Some(damage),
            message,
            timestamp_ms,
        }
    }

    /// The attacker's strike was evaded by the other side
    pub fn evade(attacker: Combatant, monster_name: &str, timestamp_ms: u64) -> Self {
        let message = match attacker {
            Combatant::Player => format!("{} evades your attack", monster_name),
            Combatant::Monster => format!("You evade {}'s attack", monster_name),
        };
        Self {
            kind: LogEventKind::Evade,
            attacker: Some(attacker),
            damage: None,
            message,
            timestamp_ms,
        }
    }

    pub fn victory(monster_name: &str, timestamp_ms: u64) -> Self {
        Self {
            kind: LogEventKind::Victory,
            attacker: None,
            damage: None,
            message: format!("{} defeated!", monster_name),
            timestamp_ms,
        }
    }

    pub fn defeat(timestamp_ms: u64) -> Self {
        Self {
            kind: LogEventKind::Defeat,
            attacker: None,
            damage: None,
            message: "You have been defeated".to_string(),
            timestamp_ms,
        }
    }

    pub fn gold(amount: u64, timestamp_ms: u64) -> Self {
        Self {
            kind: LogEventKind::Gold,
            attacker: None,
            damage: None,
            message: format!("Looted {} gold", amount),
            timestamp_ms,
        }
    }
}

/// Capacity-bounded FIFO log of battle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleLog {
    entries: VecDeque<BattleLogEntry>,
    capacity: usize,
}

impl BattleLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when at capacity
    pub fn push(&mut self, entry: BattleLogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&BattleLogEntry> {
        self.entries.back()
    }

    /// Owned copy of the entries, oldest first
    pub fn to_vec(&self) -> Vec<BattleLogEntry> {
        self.entries.iter().cloned().collect()
    }
}
