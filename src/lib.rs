//! Gloomspire - real-time combat engine for a single-player progression game
//!
//! Two combatants (the player and a monster) attack each other on
//! independent timers derived from their own stats until one side's health
//! reaches zero. This crate covers stat derivation, damage resolution, the
//! bounded battle log, and the engine that schedules and applies attack
//! ticks. Rendering, audio output, persistence, and progression live in the
//! consuming application.

pub mod combat;
pub mod core;
pub mod engine;
pub mod stats;
