//! Camera domain: third-person orbit rig driven by the player manager.

mod rig;

pub use rig::{CameraPivot, CameraRig, CameraSettings};

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::locomotion::CameraBasis;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>();
    }
}

/// Read access to rigs and the cameras they carry.
#[derive(SystemParam)]
pub struct CameraView<'w, 's> {
    rigs: Query<'w, 's, &'static CameraRig>,
    cameras: Query<'w, 's, &'static GlobalTransform, With<Camera3d>>,
}

impl CameraView<'_, '_> {
    /// Movement basis of the camera mounted on `rig`.
    pub fn basis(&self, rig: Entity) -> Option<CameraBasis> {
        let rig = self.rigs.get(rig).ok()?;
        let transform = self.cameras.get(rig.camera).ok()?;
        Some(CameraBasis::from_transform(transform))
    }
}

/// Spawn rig, pivot and camera at `position`; returns the rig entity.
pub fn spawn_camera_rig(
    commands: &mut Commands,
    settings: &CameraSettings,
    position: Vec3,
) -> Entity {
    let rig = commands
        .spawn((Name::new("CameraRig"), Transform::from_translation(position)))
        .id();
    let pivot = commands
        .spawn((
            Name::new("CameraPivot"),
            CameraPivot,
            Transform::from_xyz(0.0, settings.pivot_height, 0.0),
            ChildOf(rig),
        ))
        .id();
    let camera = commands
        .spawn((
            Name::new("MainCamera"),
            Camera3d::default(),
            Transform::from_xyz(0.0, 0.0, settings.camera_distance),
            ChildOf(pivot),
        ))
        .id();

    commands.entity(rig).insert(CameraRig::new(pivot, camera));
    info!("Spawned camera rig {:?}", rig);
    rig
}
