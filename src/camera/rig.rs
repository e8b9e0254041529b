//! Camera domain: orbit rig state and follow/rotation math.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Seconds-ish time constant for chasing the target.
    pub follow_speed: f32,
    pub look_speed: f32,
    pub pivot_speed: f32,
    /// Pitch limits in degrees.
    pub min_pivot: f32,
    pub max_pivot: f32,
    /// Distance from the pivot to the camera.
    pub camera_distance: f32,
    /// Height of the pivot above the rig origin.
    pub pivot_height: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            follow_speed: 0.1,
            look_speed: 0.1,
            pivot_speed: 0.03,
            min_pivot: -35.0,
            max_pivot: 35.0,
            camera_distance: 4.0,
            pivot_height: 1.6,
        }
    }
}

/// Yaw on the rig, pitch on the pivot child, camera on the pivot's child.
#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    /// Yaw in degrees.
    pub look_angle: f32,
    /// Pitch in degrees, positive looks down.
    pub pivot_angle: f32,
    pub pivot: Entity,
    pub camera: Entity,
}

/// Marker for the rig's pitch pivot.
#[derive(Component, Debug)]
pub struct CameraPivot;

impl CameraRig {
    pub fn new(pivot: Entity, camera: Entity) -> Self {
        Self {
            look_angle: 0.0,
            pivot_angle: 0.0,
            pivot,
            camera,
        }
    }

    /// Next rig position when chasing `target`.
    pub fn follow_target(
        &self,
        current: Vec3,
        target: Vec3,
        delta: f32,
        settings: &CameraSettings,
    ) -> Vec3 {
        let t = (delta / settings.follow_speed).clamp(0.0, 1.0);
        current.lerp(target, t)
    }

    /// Accumulate look deltas; a zero step leaves the angles alone.
    pub fn handle_camera_rotation(
        &mut self,
        delta: f32,
        mouse_x: f32,
        mouse_y: f32,
        settings: &CameraSettings,
    ) {
        if delta <= 0.0 {
            return;
        }
        self.look_angle += mouse_x * settings.look_speed / delta;
        self.pivot_angle -= mouse_y * settings.pivot_speed / delta;
        self.pivot_angle = self
            .pivot_angle
            .clamp(settings.min_pivot, settings.max_pivot);
    }

    /// Rig rotation; positive look angles turn right.
    pub fn yaw(&self) -> Quat {
        Quat::from_rotation_y(-self.look_angle.to_radians())
    }

    /// Pivot rotation; positive pivot angles tilt down.
    pub fn pitch(&self) -> Quat {
        Quat::from_rotation_x(-self.pivot_angle.to_radians())
    }
}
