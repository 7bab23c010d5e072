//! Injected audio capability
//!
//! The combat core never talks to a sound system directly; it announces
//! moments worth hearing through this port. Front-ends plug in a real
//! implementation, everything else uses `NullAudio`.

use crate::combat::Combatant;

/// Capability set for combat sound feedback
///
/// All methods default to no-ops so implementations only override the cues
/// they care about.
pub trait AudioPort {
    /// A combatant begins an attack swing
    fn play_attack(&mut self, _attacker: Combatant) {}

    /// An attack landed; `critical` selects the heavier cue
    fn play_hit(&mut self, _critical: bool) {}

    /// An attack was evaded
    fn play_evade(&mut self) {}

    fn play_victory(&mut self) {}

    fn play_defeat(&mut self) {}
}

/// Silent implementation for headless use and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioPort for NullAudio {}
