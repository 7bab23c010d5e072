pub mod audio;
pub mod driver;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod scheduler;

pub use audio::{AudioPort, NullAudio};
pub use driver::run_realtime;
pub use engine::{BattleEndCallback, BattleEngine, BattleOutcome, EnginePhase, StateCallback};
pub use scheduler::{AttackScheduler, ScheduledEvent};
