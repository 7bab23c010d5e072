//! Battle engine
//!
//! Owns the canonical `BattleState` for one encounter and advances it on a
//! millisecond combat clock. Each due tick runs to completion before the
//! next one is considered (read, mutate, log, notify), so observers always
//! see consistent snapshots. The engine itself never blocks; a driver feeds
//! it wall-clock time.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{
    attack_interval_ms, life_steal_amount, resolve_attack, BattleLogEntry, BattleSnapshot,
    BattleSpeed, BattleState, Combatant, Monster,
};
use crate::core::error::{EngineError, Result};
use crate::core::EngineConfig;
use crate::engine::audio::AudioPort;
use crate::engine::scheduler::{AttackScheduler, ScheduledEvent};

/// Observer notified with a fresh snapshot after every state mutation
pub type StateCallback = Box<dyn FnMut(&BattleSnapshot) + Send>;

/// Terminal notification: `(victory, defeated_monster)`
///
/// The monster is present only on victory; it is captured before the state's
/// monster slot is cleared so the deferred callback still has it.
pub type BattleEndCallback = Box<dyn FnMut(bool, Option<Monster>) + Send>;

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    /// A tick handler failed; the engine stopped itself
    Errored,
}

/// Engine lifecycle
///
/// `VictoryPending` covers the transition window between the monster's
/// defeat and the deferred end-of-battle callback. `Ended` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Idle,
    Running,
    VictoryPending,
    Ended(BattleOutcome),
}

/// Stateful orchestrator for one encounter
///
/// Both combatants attack on independent repeating deadlines held in a
/// single `AttackScheduler`. Equal deadlines resolve the player's tick
/// first; a lethal player hit therefore cancels the monster's simultaneous
/// attack.
pub struct BattleEngine {
    state: BattleState,
    config: EngineConfig,
    rng: ChaCha8Rng,
    audio: Box<dyn AudioPort + Send>,
    scheduler: AttackScheduler,
    phase: EnginePhase,
    clock_ms: u64,
    /// Defeated monster held for the deferred victory callback
    pending_victory: Option<Monster>,
    on_state_update: StateCallback,
    on_battle_end: BattleEndCallback,
}

impl BattleEngine {
    pub fn new(
        initial_state: BattleState,
        config: EngineConfig,
        seed: u64,
        audio: Box<dyn AudioPort + Send>,
        on_state_update: StateCallback,
        on_battle_end: BattleEndCallback,
    ) -> Self {
        Self {
            state: initial_state,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            audio,
            scheduler: AttackScheduler::new(),
            phase: EnginePhase::Idle,
            clock_ms: 0,
            pending_victory: None,
            on_state_update,
            on_battle_end,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Current position of the combat clock (ms)
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Earliest pending deadline, for real-time drivers
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> BattleSnapshot {
        self.state.snapshot()
    }

    /// Begin scheduling attacks
    ///
    /// Requires an idle engine, an active battle, and a monster present;
    /// otherwise a logged no-op.
    pub fn start(&mut self) {
        if self.phase != EnginePhase::Idle {
            tracing::warn!(phase = ?self.phase, "start() ignored: engine is not idle");
            return;
        }
        if !self.state.is_active || self.state.current_monster.is_none() {
            tracing::warn!("start() ignored: battle inactive or no monster present");
            return;
        }
        self.phase = EnginePhase::Running;
        self.schedule_both_attacks();
        tracing::info!(
            player_interval_ms = self.player_interval_ms(),
            "battle started"
        );
    }

    /// Gate combat actions without suspending the scheduler
    ///
    /// Deadlines keep firing on schedule while paused; due ticks are
    /// consumed and rescheduled without acting.
    pub fn pause(&mut self) {
        if self.phase != EnginePhase::Running {
            tracing::warn!(phase = ?self.phase, "pause() ignored");
            return;
        }
        if !self.state.is_paused {
            self.state.is_paused = true;
            self.emit_snapshot();
            tracing::debug!("battle paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase != EnginePhase::Running {
            tracing::warn!(phase = ?self.phase, "resume() ignored");
            return;
        }
        if self.state.is_paused {
            self.state.is_paused = false;
            self.emit_snapshot();
            tracing::debug!("battle resumed");
        }
    }

    /// Change the global speed multiplier
    ///
    /// Clears both combatants' pending deadlines and reschedules from now,
    /// resetting each timer's in-flight phase. Acceptable: every attack is
    /// a discrete event, not a continuous process.
    pub fn set_speed(&mut self, speed: BattleSpeed) {
        if matches!(self.phase, EnginePhase::Ended(_)) {
            tracing::warn!("set_speed() ignored: battle already ended");
            return;
        }
        self.state.speed = speed;
        if self.phase == EnginePhase::Running {
            self.scheduler.cancel_attacks();
            self.schedule_both_attacks();
        }
        self.emit_snapshot();
        tracing::debug!(multiplier = speed.multiplier(), "battle speed changed");
    }

    /// Cancel all scheduled work and deactivate the battle; idempotent
    pub fn stop(&mut self) {
        self.scheduler.clear();
        self.state.is_active = false;
        if !matches!(self.phase, EnginePhase::Ended(_)) {
            self.phase = EnginePhase::Idle;
        }
        self.emit_snapshot();
        tracing::debug!("battle stopped");
    }

    /// Alias for `stop()`, for callers tearing the engine down
    pub fn cleanup(&mut self) {
        self.stop();
    }

    /// Advance the combat clock, dispatching every due event in timestamp
    /// order
    ///
    /// A failed tick handler stops the engine rather than leaving deadlines
    /// scheduled behind an inconsistent state.
    pub fn advance_to(&mut self, now_ms: u64) {
        while matches!(
            self.phase,
            EnginePhase::Running | EnginePhase::VictoryPending
        ) {
            let Some((at, event)) = self.scheduler.pop_due(now_ms) else {
                break;
            };
            self.clock_ms = self.clock_ms.max(at);
            if let Err(err) = self.dispatch(event) {
                tracing::error!(error = %err, "tick handler failed; stopping engine");
                self.scheduler.clear();
                self.state.is_active = false;
                self.phase = EnginePhase::Ended(BattleOutcome::Errored);
                self.emit_snapshot();
            }
        }
        self.clock_ms = self.clock_ms.max(now_ms);
    }

    fn dispatch(&mut self, event: ScheduledEvent) -> Result<()> {
        match event {
            ScheduledEvent::PlayerAttack => self.player_attack(),
            ScheduledEvent::MonsterAttack => self.monster_attack(),
            ScheduledEvent::EndOfBattle => {
                self.finish_victory();
                Ok(())
            }
        }
    }

    /// Player interval after attack speed and the global multiplier
    fn player_interval_ms(&self) -> u64 {
        (attack_interval_ms(
            self.config.base_attack_interval_ms,
            self.state.player_stats.attack_speed,
        ) / self.state.speed.multiplier())
        .max(1)
    }

    fn monster_interval_ms(&self) -> Option<u64> {
        self.state.current_monster.as_ref().map(|monster| {
            (attack_interval_ms(
                self.config.base_attack_interval_ms,
                monster.stats.attack_speed,
            ) / self.state.speed.multiplier())
            .max(1)
        })
    }

    fn schedule_both_attacks(&mut self) {
        let next_player = self.clock_ms + self.player_interval_ms();
        self.scheduler
            .schedule(next_player, ScheduledEvent::PlayerAttack);
        if let Some(interval) = self.monster_interval_ms() {
            self.scheduler
                .schedule(self.clock_ms + interval, ScheduledEvent::MonsterAttack);
        }
    }

    fn player_attack(&mut self) -> Result<()> {
        if self.state.is_paused {
            let next = self.clock_ms + self.player_interval_ms();
            self.scheduler.schedule(next, ScheduledEvent::PlayerAttack);
            return Ok(());
        }
        let Some(monster) = self.state.current_monster.as_ref() else {
            return Err(EngineError::InvalidState(
                "player attack scheduled with no monster".into(),
            ));
        };
        let attacker = self.state.player_stats.attack_profile();
        let defender = monster.stats.defense_profile();
        let monster_name = monster.name.clone();

        self.audio.play_attack(Combatant::Player);
        let outcome = resolve_attack(&mut self.rng, &attacker, &defender);

        let mut defeated = false;
        if outcome.is_evaded {
            self.audio.play_evade();
            self.push_log(BattleLogEntry::evade(
                Combatant::Player,
                &monster_name,
                self.clock_ms,
            ));
        } else {
            self.audio.play_hit(outcome.is_critical);
            if let Some(monster) = self.state.current_monster.as_mut() {
                monster.stats.apply_damage(outcome.actual_damage);
                defeated = !monster.stats.is_alive();
            }
            let healed =
                life_steal_amount(outcome.actual_damage, self.state.player_stats.life_steal);
            if healed > 0 {
                self.state.player_stats.heal(healed);
            }
            let entry = if outcome.is_critical {
                BattleLogEntry::critical(
                    Combatant::Player,
                    &monster_name,
                    outcome.actual_damage,
                    self.clock_ms,
                )
            } else {
                BattleLogEntry::attack(
                    Combatant::Player,
                    &monster_name,
                    outcome.actual_damage,
                    self.clock_ms,
                )
            };
            self.push_log(entry);
        }

        if defeated {
            self.handle_monster_defeat();
        } else {
            let next = self.clock_ms + self.player_interval_ms();
            self.scheduler.schedule(next, ScheduledEvent::PlayerAttack);
        }
        Ok(())
    }

    fn monster_attack(&mut self) -> Result<()> {
        if self.state.is_paused {
            if let Some(interval) = self.monster_interval_ms() {
                self.scheduler
                    .schedule(self.clock_ms + interval, ScheduledEvent::MonsterAttack);
            }
            return Ok(());
        }
        let Some(monster) = self.state.current_monster.as_ref() else {
            return Err(EngineError::InvalidState(
                "monster attack scheduled with no monster".into(),
            ));
        };
        let attacker = monster.stats.attack_profile();
        let life_steal_pct = monster.stats.life_steal;
        let monster_name = monster.name.clone();
        let defender = self.state.player_stats.defense_profile();

        self.audio.play_attack(Combatant::Monster);
        let outcome = resolve_attack(&mut self.rng, &attacker, &defender);

        let mut player_down = false;
        if outcome.is_evaded {
            self.audio.play_evade();
            self.push_log(BattleLogEntry::evade(
                Combatant::Monster,
                &monster_name,
                self.clock_ms,
            ));
        } else {
            self.audio.play_hit(outcome.is_critical);
            self.state.player_stats.apply_damage(outcome.actual_damage);
            let healed = life_steal_amount(outcome.actual_damage, life_steal_pct);
            if healed > 0 {
                if let Some(monster) = self.state.current_monster.as_mut() {
                    monster.stats.heal(healed);
                }
            }
            player_down = !self.state.player_stats.is_alive();
            let entry = if outcome.is_critical {
                BattleLogEntry::critical(
                    Combatant::Monster,
                    &monster_name,
                    outcome.actual_damage,
                    self.clock_ms,
                )
            } else {
                BattleLogEntry::attack(
                    Combatant::Monster,
                    &monster_name,
                    outcome.actual_damage,
                    self.clock_ms,
                )
            };
            self.push_log(entry);
        }

        if player_down {
            self.handle_player_defeat();
        } else if let Some(interval) = self.monster_interval_ms() {
            self.scheduler
                .schedule(self.clock_ms + interval, ScheduledEvent::MonsterAttack);
        }
        Ok(())
    }

    /// Victory: loot, log, then a short transition window before the
    /// end-of-battle callback
    fn handle_monster_defeat(&mut self) {
        self.scheduler.cancel_attacks();
        let Some(monster) = self.state.current_monster.take() else {
            return;
        };
        self.state.total_gold += monster.gold_reward;
        self.push_log(BattleLogEntry::victory(&monster.name, self.clock_ms));
        self.push_log(BattleLogEntry::gold(monster.gold_reward, self.clock_ms));
        self.audio.play_victory();

        let delay = self.config.victory_transition_delay_ms / self.state.speed.multiplier();
        self.phase = EnginePhase::VictoryPending;
        self.pending_victory = Some(monster);
        self.scheduler
            .schedule(self.clock_ms + delay, ScheduledEvent::EndOfBattle);
        tracing::info!(
            gold = self.state.total_gold,
            delay_ms = delay,
            "monster defeated"
        );
    }

    fn finish_victory(&mut self) {
        self.phase = EnginePhase::Ended(BattleOutcome::Victory);
        let monster = self.pending_victory.take();
        (self.on_battle_end)(true, monster);
    }

    /// Defeat ends the session synchronously: no transition window
    fn handle_player_defeat(&mut self) {
        self.scheduler.clear();
        self.state.is_active = false;
        self.push_log(BattleLogEntry::defeat(self.clock_ms));
        self.audio.play_defeat();
        self.phase = EnginePhase::Ended(BattleOutcome::Defeat);
        (self.on_battle_end)(false, None);
        tracing::info!("player defeated");
    }

    fn push_log(&mut self, entry: BattleLogEntry) {
        self.state.battle_log.push(entry);
        self.emit_snapshot();
    }

    fn emit_snapshot(&mut self) {
        let snapshot = self.state.snapshot();
        (self.on_state_update)(&snapshot);
    }
}
