//! Battle engine integration tests
//!
//! End-to-end scenarios driving the engine through its public surface:
//! the deterministic clock for state-machine checks, and the real-time
//! driver for the full async path.

use std::sync::{Arc, Mutex};

use gloomspire::combat::{
    BattleSnapshot, BattleSpeed, BattleState, CharacterBattleStats, LogEventKind, Monster,
};
use gloomspire::core::EngineConfig;
use gloomspire::engine::{run_realtime, BattleEngine, BattleOutcome, EnginePhase, NullAudio};
use gloomspire::stats::{resolve_battle_stats, ProgressionLevels};

fn flat_stats(health: u32, attack: u32, attack_speed: f64) -> CharacterBattleStats {
    CharacterBattleStats {
        health,
        max_health: health,
        attack,
        defense: 0,
        attack_speed,
        critical_chance: 0.0,
        critical_damage: 150.0,
        evasion: 0.0,
        penetration: 0.0,
        life_steal: 0.0,
        levels: ProgressionLevels::default(),
    }
}

type Ends = Arc<Mutex<Vec<(bool, Option<Monster>)>>>;
type Snaps = Arc<Mutex<Vec<BattleSnapshot>>>;

fn build_engine(state: BattleState, config: EngineConfig) -> (BattleEngine, Snaps, Ends) {
    let snaps: Snaps = Arc::new(Mutex::new(Vec::new()));
    let ends: Ends = Arc::new(Mutex::new(Vec::new()));
    let snaps_cb = snaps.clone();
    let ends_cb = ends.clone();
    let engine = BattleEngine::new(
        state,
        config,
        7,
        Box::new(NullAudio),
        Box::new(move |snap| snaps_cb.lock().unwrap().push(snap.clone())),
        Box::new(move |victory, monster| ends_cb.lock().unwrap().push((victory, monster))),
    );
    (engine, snaps, ends)
}

/// A 1-health monster dies to the first guaranteed hit: gold is credited,
/// the monster slot clears, and the end callback fires only after the
/// transition delay.
#[test]
fn test_one_hit_victory_full_flow() {
    let state = BattleState::new(
        flat_stats(500, 40, 0.0),
        Monster::new("Gutter Imp", 60, flat_stats(1, 10, 0.0)),
        20,
    );
    let (mut engine, snaps, ends) = build_engine(state, EngineConfig::default());
    engine.start();

    engine.advance_to(1000);

    let snap = engine.snapshot();
    assert!(snap.current_monster.is_none());
    assert_eq!(snap.total_gold, 60);
    assert!(ends.lock().unwrap().is_empty(), "callback must be deferred");

    engine.advance_to(2500);
    let ends = ends.lock().unwrap();
    assert_eq!(ends.len(), 1);
    let (victory, monster) = &ends[0];
    assert!(*victory);
    assert_eq!(monster.as_ref().unwrap().name, "Gutter Imp");
    assert_eq!(monster.as_ref().unwrap().gold_reward, 60);

    // Observers saw the attack, victory, and gold mutations
    assert!(snaps.lock().unwrap().len() >= 3);
}

/// A lethal monster tick ends the session synchronously: active flag drops,
/// the callback fires exactly once, and the log receives nothing further.
#[test]
fn test_player_defeat_is_synchronous_and_final() {
    let state = BattleState::new(
        flat_stats(5, 1, 0.0),
        Monster::new("Pit Fiend", 999, flat_stats(10_000, 300, 100.0)),
        20,
    );
    let (mut engine, _, ends) = build_engine(state, EngineConfig::default());
    engine.start();

    // Monster interval is 500ms; the first tick is lethal
    engine.advance_to(500);
    assert_eq!(engine.phase(), EnginePhase::Ended(BattleOutcome::Defeat));

    let snap = engine.snapshot();
    assert!(!snap.is_active);
    assert_eq!(snap.battle_log.last().unwrap().kind, LogEventKind::Defeat);
    assert_eq!(ends.lock().unwrap().len(), 1);
    assert_eq!(ends.lock().unwrap()[0], (false, None));

    let log_len = snap.battle_log.len();
    engine.advance_to(120_000);
    assert_eq!(engine.snapshot().battle_log.len(), log_len);
    assert_eq!(ends.lock().unwrap().len(), 1);
}

/// Doubling the speed halves observable tick spacing while the battle
/// stays active and unpaused.
#[test]
fn test_double_speed_halves_tick_spacing() {
    let state = BattleState::new(
        flat_stats(10_000, 10, 0.0),
        Monster::new("Target Dummy", 0, flat_stats(10_000, 10, 0.0)),
        20,
    );
    let (mut engine, _, _) = build_engine(state, EngineConfig::default());
    engine.start();
    assert_eq!(engine.next_deadline(), Some(1000));

    engine.set_speed(BattleSpeed::Double);
    assert_eq!(engine.next_deadline(), Some(500));

    let snap = engine.snapshot();
    assert!(snap.is_active);
    assert!(!snap.is_paused);

    // Ticks now land every 500ms
    engine.advance_to(500);
    assert_eq!(engine.snapshot().battle_log.len(), 2);
    engine.advance_to(1000);
    assert_eq!(engine.snapshot().battle_log.len(), 4);
}

/// The log never exceeds its capacity across a long grind, and eviction is
/// oldest-first.
#[test]
fn test_log_capacity_and_fifo_over_long_battle() {
    let state = BattleState::new(
        flat_stats(1_000_000, 1, 0.0),
        Monster::new("Iron Golem", 0, flat_stats(1_000_000, 1, 0.0)),
        20,
    );
    let (mut engine, _, _) = build_engine(state, EngineConfig::default());
    engine.start();

    let mut previous_first_ts = 0;
    for window in 1..=10u64 {
        engine.advance_to(window * 30_000);
        let snap = engine.snapshot();
        assert!(snap.battle_log.len() <= 20);
        let first_ts = snap.battle_log.first().unwrap().timestamp_ms;
        assert!(first_ts >= previous_first_ts, "eviction must be oldest-first");
        previous_first_ts = first_ts;
    }
}

/// Derived stats feed a full battle end-to-end: a mid-level player grinds
/// down a weaker monster and wins.
#[test]
fn test_resolved_stats_win_against_weaker_monster() {
    let mut player = resolve_battle_stats(&ProgressionLevels::new(20, 20, 10, 10));
    let mut monster_stats = resolve_battle_stats(&ProgressionLevels::new(2, 2, 1, 0));
    // Deterministic fight: neither side can evade or crit
    monster_stats.evasion = 0.0;
    monster_stats.critical_chance = 0.0;
    player.evasion = 0.0;
    player.critical_chance = 0.0;

    let state = BattleState::new(player, Monster::new("Mire Crawler", 40, monster_stats), 20);
    let (mut engine, _, ends) = build_engine(state, EngineConfig::default());
    engine.start();

    engine.advance_to(600_000);
    let ends = ends.lock().unwrap();
    assert_eq!(ends.len(), 1);
    assert!(ends[0].0, "stronger player must win");

    let snap = engine.snapshot();
    assert_eq!(snap.total_gold, 40);
    assert!(snap.player_stats.health > 0);
}

/// Full async path: the real-time driver runs a short battle to completion.
#[tokio::test]
async fn test_realtime_driver_completes_battle() {
    let config = EngineConfig {
        base_attack_interval_ms: 10,
        victory_transition_delay_ms: 20,
        battle_log_capacity: 20,
    };
    let state = BattleState::new(
        flat_stats(500, 40, 0.0),
        Monster::new("Gutter Imp", 60, flat_stats(1, 10, 0.0)),
        20,
    );
    let (mut engine, _, ends) = build_engine(state, config);

    run_realtime(&mut engine, Some(5_000)).await;

    assert_eq!(engine.phase(), EnginePhase::Ended(BattleOutcome::Victory));
    assert_eq!(ends.lock().unwrap().len(), 1);
    assert!(ends.lock().unwrap()[0].0);
}

/// The driver's wall-clock cap stops a stalemate battle.
#[tokio::test]
async fn test_realtime_driver_cap_stops_stalemate() {
    let config = EngineConfig {
        base_attack_interval_ms: 10,
        victory_transition_delay_ms: 20,
        battle_log_capacity: 20,
    };
    // Both sides evade everything: no health ever changes
    let mut player = flat_stats(100, 10, 0.0);
    player.evasion = 100.0;
    let mut monster_stats = flat_stats(100, 10, 0.0);
    monster_stats.evasion = 100.0;

    let state = BattleState::new(player, Monster::new("Mirror Shade", 0, monster_stats), 20);
    let (mut engine, _, ends) = build_engine(state, config);

    run_realtime(&mut engine, Some(100)).await;

    assert!(ends.lock().unwrap().is_empty());
    assert!(!engine.snapshot().is_active);
    assert_eq!(engine.next_deadline(), None);
}
