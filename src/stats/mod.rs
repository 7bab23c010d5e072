pub mod progression;
pub mod resolver;

pub use progression::ProgressionLevels;
pub use resolver::resolve_battle_stats;
