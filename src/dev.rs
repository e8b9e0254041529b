//! Debug-only helpers: probe visualisation and a stand-in melee hit.

use bevy::color::palettes::css::{LIME, RED};
use bevy::prelude::*;

use crate::enemy::{DamageEvent, Enemy, EnemyStats};
use crate::input::InputHandler;
use crate::locomotion::{CharacterFlags, LocomotionTuning, PlayerLocomotion};
use crate::player::{Player, PlayerFrame};

/// Reach of the debug melee hit.
const DEBUG_MELEE_RANGE: f32 = 2.5;
const DEBUG_LIGHT_DAMAGE: i32 = 10;
const DEBUG_HEAVY_DAMAGE: i32 = 25;

pub struct DevToolsPlugin;

impl Plugin for DevToolsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (draw_ground_probe, debug_melee).after(PlayerFrame),
        );
    }
}

fn draw_ground_probe(
    mut gizmos: Gizmos,
    tuning: Res<LocomotionTuning>,
    query: Query<(&PlayerLocomotion, &CharacterFlags), With<Player>>,
) {
    for (locomotion, flags) in &query {
        let color = if flags.is_grounded { LIME } else { RED };
        gizmos.ray(
            locomotion.ground_probe_origin,
            Vec3::NEG_Y * tuning.minimum_distance_needed_to_begin_fall,
            color,
        );
    }
}

/// Attack buttons damage living enemies within reach of the player.
fn debug_melee(
    players: Query<(&Transform, &InputHandler), With<Player>>,
    enemies: Query<(Entity, &Transform, &EnemyStats), With<Enemy>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for (player_transform, input) in &players {
        let amount = if input.heavy_attack {
            DEBUG_HEAVY_DAMAGE
        } else if input.light_attack {
            DEBUG_LIGHT_DAMAGE
        } else {
            continue;
        };

        for (entity, enemy_transform, stats) in &enemies {
            if stats.is_dead() {
                continue;
            }
            let distance = enemy_transform
                .translation
                .distance(player_transform.translation);
            if distance <= DEBUG_MELEE_RANGE {
                damage_events.write(DamageEvent {
                    target: entity,
                    amount,
                });
            }
        }
    }
}
