//! Player domain: construction of the player body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{CharacterFlags, GameLayer, LocomotionTuning, PlayerLocomotion};
use crate::player::{Player, PlayerManager};

const BODY_RADIUS: f32 = 0.3;
const BODY_LENGTH: f32 = 1.2;

/// Spawn the player at `position` (feet) wired to an existing camera rig.
/// The body mass comes from `tuning` so fall forces integrate against it.
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    camera_rig: Entity,
    tuning: &LocomotionTuning,
    position: Vec3,
) -> Entity {
    // Transform origin sits at the feet; the capsule is lifted onto it
    let half_height = BODY_RADIUS + BODY_LENGTH / 2.0;

    let player = commands
        .spawn((
            // Identity & wiring
            (
                Name::new("Player"),
                Player,
                PlayerManager::new(camera_rig),
                PlayerLocomotion {
                    target_position: position,
                    ..default()
                },
                CharacterFlags {
                    is_grounded: true,
                    ..default()
                },
            ),
            Transform::from_translation(position),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::compound(vec![(
                    Vec3::Y * half_height,
                    Quat::IDENTITY,
                    Collider::capsule(BODY_RADIUS, BODY_LENGTH),
                )]),
                Mass(tuning.body_mass),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Controller,
                    [GameLayer::Default, GameLayer::Environment, GameLayer::Enemy],
                ),
            ),
        ))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(Capsule3d::new(BODY_RADIUS, BODY_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.85, 0.82, 0.75))),
        Transform::from_xyz(0.0, half_height, 0.0),
        ChildOf(player),
    ));

    info!("Spawned player {:?} at {:?}", player, position);
    player
}
