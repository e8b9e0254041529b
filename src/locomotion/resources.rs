//! Locomotion domain: tuning resource and fixed thresholds.

use bevy::prelude::*;
use serde::Deserialize;

/// Forward probe length used to stop pushing into walls.
pub const OBSTACLE_PROBE_DISTANCE: f32 = 0.4;
/// Airborne time after which the forward fall force weakens.
pub const FALL_IMPULSE_DECAY_TIME: f32 = 0.3;
/// Forward force divisor once the fall has lasted past the decay time.
pub const LATE_FALL_IMPULSE_DIVISOR: f32 = 30.0;
/// Forward force divisor right after leaving a ledge.
pub const EARLY_FALL_IMPULSE_DIVISOR: f32 = 5.0;
/// Airborne time above which touching down plays the landing clip.
pub const HARD_LANDING_TIME: f32 = 0.5;
/// Time constant for easing onto the ground height.
pub const GROUND_SNAP_TIME: f32 = 0.1;
/// `move_amount` boundary between walking and running.
pub const RUN_THRESHOLD: f32 = 0.5;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Height above the feet where ground probes start.
    pub ground_detection_ray_start_point: f32,
    /// Downward probe length; no hit within it means airborne.
    pub minimum_distance_needed_to_begin_fall: f32,
    /// How far ahead along the move direction the ground probe is shifted.
    pub ground_direction_ray_distance: f32,
    pub movement_speed: f32,
    pub walking_speed: f32,
    pub sprint_speed: f32,
    pub rotation_speed: f32,
    pub falling_speed: f32,
    pub body_mass: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            ground_detection_ray_start_point: 0.5,
            minimum_distance_needed_to_begin_fall: 1.0,
            ground_direction_ray_distance: 0.2,
            movement_speed: 5.0,
            walking_speed: 3.0,
            sprint_speed: 7.0,
            rotation_speed: 10.0,
            falling_speed: 45.0,
            body_mass: 1.0,
        }
    }
}

impl LocomotionTuning {
    /// Pick the ground speed for this frame; the flag reports sprinting.
    pub fn select_speed(&self, move_amount: f32, sprint_flag: bool) -> (f32, bool) {
        if sprint_flag && move_amount > RUN_THRESHOLD {
            (self.sprint_speed, true)
        } else if move_amount < RUN_THRESHOLD {
            (self.walking_speed, false)
        } else {
            (self.movement_speed, false)
        }
    }
}

/// Divisor for the forward force while falling: strong at first, then weak.
pub fn fall_impulse_divisor(in_air_timer: f32) -> f32 {
    if in_air_timer > FALL_IMPULSE_DECAY_TIME {
        LATE_FALL_IMPULSE_DIVISOR
    } else {
        EARLY_FALL_IMPULSE_DIVISOR
    }
}
