//! Arena domain: tests for seeded enemy placement.

use super::{ArenaSettings, enemy_placements};

#[test]
fn test_placements_are_deterministic_per_seed() {
    let settings = ArenaSettings::default();
    assert_eq!(enemy_placements(&settings), enemy_placements(&settings));

    let other = ArenaSettings {
        seed: settings.seed + 1,
        ..settings.clone()
    };
    assert_ne!(enemy_placements(&settings), enemy_placements(&other));
}

#[test]
fn test_placements_respect_count_bounds_and_levels() {
    let settings = ArenaSettings {
        enemy_count: 32,
        min_health_level: 2,
        max_health_level: 4,
        half_extent: 10.0,
        ..Default::default()
    };

    let placements = enemy_placements(&settings);

    assert_eq!(placements.len(), 32);
    for placement in placements {
        assert!((2..=4).contains(&placement.health_level));
        assert!(placement.position.x.abs() <= 8.0);
        assert!((0.0..=8.0).contains(&placement.position.z));
        assert_eq!(placement.position.y, 0.0);
    }
}

#[test]
fn test_no_enemies_when_count_is_zero() {
    let settings = ArenaSettings {
        enemy_count: 0,
        ..Default::default()
    };
    assert!(enemy_placements(&settings).is_empty());
}
