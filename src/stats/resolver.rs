//! Battle-stat derivation from progression levels
//!
//! Pure and deterministic: the same levels always produce the same stats.
//! Each category contributes to its own slice of the stat block, plus a
//! small global multiplier from fortune.

use crate::combat::CharacterBattleStats;
use crate::stats::ProgressionLevels;

/// Derive a full battle-stat block from progression levels
///
/// Base values scale with the total level; each category adds its own
/// bonuses on top. Fortune applies a global multiplier (0.2% per level) to
/// health, attack, and defense, floored to integers.
pub fn resolve_battle_stats(levels: &ProgressionLevels) -> CharacterBattleStats {
    let total = levels.total_level() as f64;
    let strength = levels.strength as f64;
    let combat = levels.combat as f64;
    let agility = levels.agility as f64;
    let fortune = levels.fortune as f64;

    let base_health = (total * 50.0 + strength * 20.0 + 200.0).max(200.0);
    let base_attack = (total * 10.0 + combat * 5.0 + 50.0).max(50.0);
    let base_defense = (total * 5.0 + strength * 3.0 + 20.0).max(20.0);

    // Global multiplier from fortune, applied to the three flat stats only
    let stat_bonus = 1.0 + fortune * 0.002;

    let max_health = (base_health * stat_bonus).floor() as u32;
    let attack = (base_attack * stat_bonus).floor() as u32;
    let defense = (base_defense * stat_bonus).floor() as u32;

    CharacterBattleStats {
        health: max_health,
        max_health,
        attack,
        defense,
        attack_speed: (agility * 2.0).max(0.0),
        critical_chance: (5.0 + combat * 0.5).clamp(5.0, 100.0),
        critical_damage: (150.0 + fortune).max(150.0),
        evasion: (5.0 + agility * 0.3).clamp(5.0, 50.0),
        penetration: (fortune * 0.5).clamp(0.0, 50.0),
        life_steal: (strength * 0.1).clamp(0.0, 30.0),
        levels: *levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_baseline() {
        let stats = resolve_battle_stats(&ProgressionLevels::default());

        // total_level floors at 1
        assert_eq!(stats.max_health, 250);
        assert_eq!(stats.health, 250);
        assert_eq!(stats.attack, 60);
        assert_eq!(stats.defense, 25);
        assert_eq!(stats.attack_speed, 0.0);
        assert_eq!(stats.critical_chance, 5.0);
        assert_eq!(stats.critical_damage, 150.0);
        assert_eq!(stats.evasion, 5.0);
        assert_eq!(stats.penetration, 0.0);
        assert_eq!(stats.life_steal, 0.0);
    }

    #[test]
    fn test_strength_feeds_health_defense_life_steal() {
        let stats = resolve_battle_stats(&ProgressionLevels::new(10, 0, 0, 0));

        // total=10: health = 10*50 + 10*20 + 200 = 900
        assert_eq!(stats.max_health, 900);
        // defense = 10*5 + 10*3 + 20 = 100
        assert_eq!(stats.defense, 100);
        assert_eq!(stats.life_steal, 1.0);
    }

    #[test]
    fn test_combat_feeds_attack_and_crit_chance() {
        let stats = resolve_battle_stats(&ProgressionLevels::new(0, 10, 0, 0));

        // attack = 10*10 + 10*5 + 50 = 200
        assert_eq!(stats.attack, 200);
        assert_eq!(stats.critical_chance, 10.0);
    }

    #[test]
    fn test_agility_feeds_speed_and_evasion() {
        let stats = resolve_battle_stats(&ProgressionLevels::new(0, 0, 10, 0));

        assert_eq!(stats.attack_speed, 20.0);
        assert_eq!(stats.evasion, 8.0);
    }

    #[test]
    fn test_fortune_feeds_crit_damage_penetration_and_bonus() {
        let stats = resolve_battle_stats(&ProgressionLevels::new(0, 0, 0, 100));

        assert_eq!(stats.critical_damage, 250.0);
        assert_eq!(stats.penetration, 50.0);
        // stat_bonus = 1.2 on health = (100*50 + 200) * 1.2 = 6240
        assert_eq!(stats.max_health, 6240);
    }

    #[test]
    fn test_evasion_caps_at_50() {
        let stats = resolve_battle_stats(&ProgressionLevels::new(0, 0, 1000, 0));
        assert_eq!(stats.evasion, 50.0);
    }

    #[test]
    fn test_life_steal_caps_at_30() {
        let stats = resolve_battle_stats(&ProgressionLevels::new(1000, 0, 0, 0));
        assert_eq!(stats.life_steal, 30.0);
    }

    #[test]
    fn test_deterministic() {
        let levels = ProgressionLevels::new(7, 11, 13, 17);
        assert_eq!(
            resolve_battle_stats(&levels),
            resolve_battle_stats(&levels)
        );
    }
}
