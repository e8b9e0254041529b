//! Arena domain: test level with a ledge to fall from and training enemies.

mod layout;
#[cfg(test)]
mod tests;

pub use layout::{ArenaSettings, EnemyPlacement, enemy_placements};

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraSettings, spawn_camera_rig};
use crate::enemy::{Enemy, EnemyStats};
use crate::locomotion::{GameLayer, LocomotionTuning};
use crate::player::spawn_player;

/// Marker for static level geometry.
#[derive(Component, Debug)]
pub struct ArenaGeometry;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaSettings>()
            .add_systems(Startup, spawn_arena);
    }
}

fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ArenaSettings>,
    camera_settings: Res<CameraSettings>,
    tuning: Res<LocomotionTuning>,
) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let size = settings.half_extent * 2.0;
    spawn_block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(size, 1.0, size),
        Vec3::new(0.0, -0.5, 0.0),
        Color::srgb(0.35, 0.4, 0.35),
    );

    // Raised ledge to walk off
    let ledge_top = settings.ledge_height;
    spawn_block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(6.0, ledge_top, 6.0),
        Vec3::new(0.0, ledge_top / 2.0, -8.0),
        Color::srgb(0.45, 0.4, 0.35),
    );

    let spawn_point = Vec3::new(0.0, ledge_top, -8.0);
    let rig = spawn_camera_rig(&mut commands, &camera_settings, spawn_point);
    spawn_player(
        &mut commands,
        &mut meshes,
        &mut materials,
        rig,
        &tuning,
        spawn_point,
    );

    let enemy_mesh = meshes.add(Capsule3d::new(0.35, 1.1));
    let enemy_material = materials.add(Color::srgb(0.6, 0.2, 0.2));
    for placement in enemy_placements(&settings) {
        let enemy = commands
            .spawn((
                Name::new("Enemy"),
                Enemy,
                EnemyStats::new(placement.health_level),
                Transform::from_translation(placement.position + Vec3::Y * 0.9),
                Mesh3d(enemy_mesh.clone()),
                MeshMaterial3d(enemy_material.clone()),
                RigidBody::Static,
                Collider::capsule(0.35, 1.1),
                CollisionLayers::new(GameLayer::Enemy, LayerMask::ALL),
            ))
            .id();
        debug!(
            "Enemy {:?} level {} at {:?}",
            enemy, placement.health_level, placement.position
        );
    }

    info!(
        "Arena ready: seed={}, enemies={}",
        settings.seed, settings.enemy_count
    );
}

fn spawn_block(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    size: Vec3,
    center: Vec3,
    color: Color,
) {
    commands.spawn((
        ArenaGeometry,
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(color)),
        Transform::from_translation(center),
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        CollisionLayers::new(GameLayer::Environment, LayerMask::ALL),
    ));
}
