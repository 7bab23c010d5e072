pub mod damage;
pub mod log;
pub mod state;
pub mod stats;

pub use damage::{
    attack_interval_ms, life_steal_amount, resolve_attack, AttackOutcome, AttackProfile,
    DefenseProfile,
};
pub use log::{BattleLog, BattleLogEntry, Combatant, LogEventKind};
pub use state::{BattleSnapshot, BattleSpeed, BattleState};
pub use stats::{CharacterBattleStats, Monster};
