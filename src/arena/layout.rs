//! Arena domain: seeded enemy placement.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub seed: u64,
    pub enemy_count: u32,
    pub min_health_level: i32,
    pub max_health_level: i32,
    /// Half the side length of the square floor.
    pub half_extent: f32,
    pub ledge_height: f32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            seed: 7,
            enemy_count: 4,
            min_health_level: 5,
            max_health_level: 15,
            half_extent: 20.0,
            ledge_height: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyPlacement {
    /// Floor position under the enemy.
    pub position: Vec3,
    pub health_level: i32,
}

/// Keeps enemies off the ledge and away from the walls.
const PLACEMENT_MARGIN: f32 = 2.0;

/// Enemy positions and levels for the configured seed. The same settings
/// always produce the same layout.
pub fn enemy_placements(settings: &ArenaSettings) -> Vec<EnemyPlacement> {
    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    let reach = (settings.half_extent - PLACEMENT_MARGIN).max(0.0);
    let min_level = settings.min_health_level.min(settings.max_health_level);

    (0..settings.enemy_count)
        .map(|_| {
            let x = rng.random_range(-reach..=reach);
            // Front half of the arena; the ledge sits behind the spawn
            let z = rng.random_range(0.0..=reach);
            let health_level = rng.random_range(min_level..=settings.max_health_level);
            EnemyPlacement {
                position: Vec3::new(x, 0.0, z),
                health_level,
            }
        })
        .collect()
}
