//! Gloomspire - demo battle runner
//!
//! Builds a player from progression levels, pits them against a scaled demo
//! monster, and runs the battle in real time, printing combat events as
//! they land. A JSON transcript of every state snapshot can be written for
//! inspection.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;

use gloomspire::combat::{BattleSnapshot, BattleSpeed, BattleState, Monster};
use gloomspire::core::error::Result;
use gloomspire::core::EngineConfig;
use gloomspire::engine::{run_realtime, BattleEngine, NullAudio};
use gloomspire::stats::{resolve_battle_stats, ProgressionLevels};

#[derive(Parser)]
#[command(name = "gloomspire", about = "Run a demo battle in the terminal")]
struct Args {
    /// RNG seed for damage rolls
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Player strength level (health, defense, life steal)
    #[arg(long, default_value_t = 10)]
    strength: u32,

    /// Player combat level (attack, critical chance)
    #[arg(long, default_value_t = 10)]
    combat: u32,

    /// Player agility level (attack speed, evasion)
    #[arg(long, default_value_t = 10)]
    agility: u32,

    /// Player fortune level (critical damage, penetration)
    #[arg(long, default_value_t = 10)]
    fortune: u32,

    /// Monster difficulty tier
    #[arg(long, default_value_t = 5)]
    floor: u32,

    /// Speed multiplier (1, 2, or 3)
    #[arg(long, default_value_t = 1)]
    speed: u8,

    /// Wall-clock cap in milliseconds, so a stalemate cannot hang the demo
    #[arg(long)]
    max_ms: Option<u64>,

    /// Write the full snapshot transcript to this file as JSON
    #[arg(long)]
    transcript: Option<PathBuf>,
}

/// Demo monster scaled by floor; real monster data comes from the game's
/// content provider, not this crate.
fn demo_monster(floor: u32) -> Monster {
    let levels = ProgressionLevels::new(floor * 2, floor * 2, floor, floor / 2);
    let mut stats = resolve_battle_stats(&levels);
    // Monsters are softer than a player of equal level
    stats.max_health = (stats.max_health as f64 * 0.8) as u32;
    stats.health = stats.max_health;
    Monster::new(format!("Floor {} Horror", floor), floor as u64 * 25, stats)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("gloomspire=debug")
        .init();

    let args = Args::parse();
    let speed = BattleSpeed::from_multiplier(args.speed)?;

    let levels = ProgressionLevels::new(args.strength, args.combat, args.agility, args.fortune);
    let player = resolve_battle_stats(&levels);
    let monster = demo_monster(args.floor);

    println!("=== GLOOMSPIRE ===");
    println!(
        "You ({} hp, {} atk) vs {} ({} hp, {} atk)",
        player.max_health, player.attack, monster.name, monster.stats.max_health, monster.stats.attack
    );
    println!();

    let state = BattleState::new(player, monster, EngineConfig::default().battle_log_capacity);

    let snapshots: Arc<Mutex<Vec<BattleSnapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let snapshots_cb = snapshots.clone();
    let mut last_printed: Option<(u64, String)> = None;
    let on_state_update = Box::new(move |snap: &BattleSnapshot| {
        if let Some(entry) = snap.battle_log.last() {
            let key = (entry.timestamp_ms, entry.message.clone());
            if last_printed.as_ref() != Some(&key) {
                println!("[{:>6}ms] {}", entry.timestamp_ms, entry.message);
                last_printed = Some(key);
            }
        }
        snapshots_cb
            .lock()
            .expect("snapshot buffer poisoned")
            .push(snap.clone());
    });

    let on_battle_end = Box::new(move |victory: bool, monster: Option<Monster>| {
        println!();
        if victory {
            let name = monster.map(|m| m.name).unwrap_or_else(|| "monster".into());
            println!("Victory! {} falls.", name);
        } else {
            println!("Defeat. The depths claim another.");
        }
    });

    let mut engine = BattleEngine::new(
        state,
        EngineConfig::default(),
        args.seed,
        Box::new(NullAudio),
        on_state_update,
        on_battle_end,
    );
    engine.set_speed(speed);

    run_realtime(&mut engine, args.max_ms).await;

    let final_snap = engine.snapshot();
    println!();
    println!(
        "Gold: {} | Your health: {}/{}",
        final_snap.total_gold, final_snap.player_stats.health, final_snap.player_stats.max_health
    );

    if let Some(path) = args.transcript {
        let snapshots = snapshots.lock().expect("snapshot buffer poisoned");
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, &*snapshots)?;
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}
