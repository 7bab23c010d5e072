//! Attack scheduling on a shared combat clock
//!
//! Instead of two host timers racing each other, a single priority queue
//! holds the next-fire timestamp of every pending event. Ordering between
//! near-simultaneous ticks is explicit: at equal timestamps the player's
//! attack resolves first, so a lethal player hit cancels the monster's
//! simultaneous tick.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Event kinds the engine schedules on the combat clock
///
/// The derived order is the tie-break policy at equal timestamps:
/// player attack, then monster attack, then the end-of-battle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScheduledEvent {
    PlayerAttack,
    MonsterAttack,
    EndOfBattle,
}

/// Priority queue of (fire time, event) pairs, earliest first
#[derive(Debug, Default)]
pub struct AttackScheduler {
    queue: BinaryHeap<Reverse<(u64, ScheduledEvent)>>,
}

impl AttackScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, fire_at_ms: u64, event: ScheduledEvent) {
        self.queue.push(Reverse((fire_at_ms, event)));
    }

    /// Earliest pending fire time, if any
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse((at, _))| *at)
    }

    /// Pop the next event due at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, ScheduledEvent)> {
        match self.queue.peek() {
            Some(Reverse((at, _))) if *at <= now_ms => {
                let Reverse(entry) = self.queue.pop()?;
                Some(entry)
            }
            _ => None,
        }
    }

    /// Remove all pending attack ticks, keeping transition events
    pub fn cancel_attacks(&mut self) {
        self.queue
            .retain(|Reverse((_, event))| *event == ScheduledEvent::EndOfBattle);
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
