//! Real-time driver
//!
//! The engine core is synchronous and clock-fed; this driver supplies the
//! clock. It sleeps until the next scheduled deadline and feeds elapsed
//! wall time back into the engine until no work remains.

use tokio::time::{sleep, Duration, Instant};

use crate::engine::BattleEngine;

/// Run an engine in real time until it has no scheduled work left
///
/// `max_battle_ms` is an optional wall-clock cap: the engine itself has no
/// timeout, so a battle of perpetual evades could otherwise run forever.
pub async fn run_realtime(engine: &mut BattleEngine, max_battle_ms: Option<u64>) {
    let origin = Instant::now();
    engine.start();

    while let Some(deadline) = engine.next_deadline() {
        let cap = max_battle_ms.unwrap_or(u64::MAX);
        let target = deadline.min(cap);
        let now = origin.elapsed().as_millis() as u64;
        if target > now {
            sleep(Duration::from_millis(target - now)).await;
        }

        let now = origin.elapsed().as_millis() as u64;
        if now >= cap {
            tracing::warn!(cap_ms = cap, "battle wall-clock cap reached; stopping engine");
            engine.stop();
            break;
        }
        engine.advance_to(now);
    }
}
