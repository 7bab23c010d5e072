//! Engine configuration with documented constants
//!
//! All combat pacing numbers are collected here with explanations of their
//! purpose and how they interact with each other.

/// Tuning constants for the battle engine
///
/// These values set the pacing of combat. Changing them affects how long a
/// battle feels, not how damage resolves.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base time between attacks for a combatant with 0% attack speed (ms)
    ///
    /// Effective interval = base / (1 + attackSpeed/100), then divided by the
    /// global speed multiplier. At the default (1000ms), a combatant with
    /// 100% attack speed on 2x speed attacks every 250ms.
    pub base_attack_interval_ms: u64,

    /// Delay between a monster's defeat and the end-of-battle callback (ms)
    ///
    /// Gives the front-end a short window to show the kill before the caller
    /// advances to the next encounter. Scaled inversely by the speed
    /// multiplier. Player defeat has no such window: the session ends
    /// synchronously.
    pub victory_transition_delay_ms: u64,

    /// Maximum number of entries retained in the battle log
    ///
    /// The log is FIFO-bounded: when full, the oldest entry is evicted.
    pub battle_log_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_attack_interval_ms: 1000,
            victory_transition_delay_ms: 1500,
            battle_log_capacity: 20,
        }
    }
}
