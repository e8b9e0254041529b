//! Locomotion domain: per-frame movement, rolling and falling logic.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationState, Animator};
use crate::input::InputHandler;
use crate::locomotion::probe::{GroundProbe, ProbeFilter};
use crate::locomotion::resources::{
    GROUND_SNAP_TIME, HARD_LANDING_TIME, LocomotionTuning, OBSTACLE_PROBE_DISTANCE,
    fall_impulse_divisor,
};
use crate::locomotion::{CharacterFlags, PendingForce, PlayerLocomotion};

/// Horizontal reference frame of the active camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    pub fn from_transform(transform: &GlobalTransform) -> Self {
        Self {
            forward: transform.forward().as_vec3(),
            right: transform.right().as_vec3(),
        }
    }

    /// Direction of the input axes relative to the camera, unnormalized.
    pub fn relative(&self, horizontal: f32, vertical: f32) -> Vec3 {
        self.forward * vertical + self.right * horizontal
    }
}

/// Everything one locomotion step reads or writes on the player.
pub struct LocomotionFrame<'a> {
    pub delta: f32,
    pub input: &'a InputHandler,
    pub camera: CameraBasis,
    pub tuning: &'a LocomotionTuning,
    pub flags: &'a mut CharacterFlags,
    pub animator: &'a mut Animator,
    pub transform: &'a mut Transform,
    pub velocity: &'a mut LinearVelocity,
    pub force: &'a mut PendingForce,
}

/// Outcome of touching down after being airborne.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Long fall: play the landing clip and lock input while it runs.
    Hard,
    /// Short hop: return to neutral without locking.
    Soft,
}

impl Landing {
    pub fn classify(in_air_timer: f32) -> Self {
        if in_air_timer > HARD_LANDING_TIME {
            Landing::Hard
        } else {
            Landing::Soft
        }
    }

    fn animation(&self) -> (AnimationState, bool) {
        match self {
            Landing::Hard => (AnimationState::Land, true),
            Landing::Soft => (AnimationState::Empty, false),
        }
    }
}

/// Rotation that faces `direction` with +Y up.
pub fn look_rotation(direction: Vec3) -> Quat {
    Transform::default().looking_to(direction, Vec3::Y).rotation
}

/// Remove the component of `vector` along `normal`; a zero normal leaves
/// the vector untouched.
pub fn project_on_plane(vector: Vec3, normal: Vec3) -> Vec3 {
    let sqr_mag = normal.length_squared();
    if sqr_mag < f32::EPSILON {
        return vector;
    }
    vector - normal * (vector.dot(normal) / sqr_mag)
}

impl PlayerLocomotion {
    pub fn handle_movement(&mut self, frame: &mut LocomotionFrame) {
        if frame.flags.is_interacting || frame.flags.is_in_air {
            return;
        }

        let input = frame.input;
        let mut direction = frame
            .camera
            .relative(input.horizontal, input.vertical)
            .normalize_or_zero();
        direction.y = 0.0;

        let (speed, sprinting) = frame
            .tuning
            .select_speed(input.move_amount, input.sprint_flag);
        frame.flags.is_sprinting = sprinting;
        self.move_direction = direction * speed;

        frame.velocity.0 = project_on_plane(self.move_direction, self.normal_vector);

        frame
            .animator
            .update_animator_values(input.move_amount, 0.0, sprinting, frame.delta);

        if frame.animator.can_rotate() {
            self.handle_rotation(frame);
        }
    }

    pub fn handle_rotation(&self, frame: &mut LocomotionFrame) {
        let input = frame.input;
        let mut target = frame
            .camera
            .relative(input.horizontal, input.vertical)
            .normalize_or_zero();
        target.y = 0.0;

        if target.length_squared() < f32::EPSILON {
            target = frame.transform.forward().as_vec3();
        }

        let t = (frame.tuning.rotation_speed * frame.delta).clamp(0.0, 1.0);
        let rotation = frame.transform.rotation.slerp(look_rotation(target), t);
        frame.transform.rotation = rotation;
    }

    pub fn handle_rolling_and_sprinting(&mut self, frame: &mut LocomotionFrame) {
        if frame.flags.is_interacting || frame.flags.is_in_air {
            return;
        }
        let input = frame.input;
        if !input.roll_flag {
            return;
        }

        self.move_direction = frame.camera.relative(input.horizontal, input.vertical);

        if input.move_amount > 0.0 {
            frame
                .animator
                .play_target_animation(AnimationState::Rolling, true);
            self.move_direction.y = 0.0;
            frame.transform.rotation = look_rotation(self.move_direction);
            debug!("Rolling toward {:?}", self.move_direction);
        } else {
            frame
                .animator
                .play_target_animation(AnimationState::Backstep, true);
            debug!("Backstep");
        }
    }

    /// Ground and ledge detection. `move_direction` is this frame's movement
    /// output and steers both the fall force and the ground probe.
    pub fn handle_falling(
        &mut self,
        frame: &mut LocomotionFrame,
        probe: &impl GroundProbe,
        mut move_direction: Vec3,
    ) {
        let tuning = frame.tuning;
        frame.flags.is_grounded = false;

        let position = frame.transform.translation;
        let mut origin = position;
        origin.y += tuning.ground_detection_ray_start_point;

        if probe
            .cast(
                origin,
                frame.transform.forward(),
                OBSTACLE_PROBE_DISTANCE,
                ProbeFilter::Obstacles,
            )
            .is_some()
        {
            move_direction = Vec3::ZERO;
        }

        if frame.flags.is_in_air {
            frame.flags.is_interacting = true;
            frame.force.add(Vec3::NEG_Y * tuning.falling_speed);
            // Carry the player off the ledge, weaker the longer the fall
            frame.force.add(
                move_direction * tuning.falling_speed / fall_impulse_divisor(self.in_air_timer),
            );
        }

        origin += move_direction.normalize_or_zero() * tuning.ground_direction_ray_distance;
        self.ground_probe_origin = origin;
        self.target_position = position;

        match probe.cast(
            origin,
            Dir3::NEG_Y,
            tuning.minimum_distance_needed_to_begin_fall,
            ProbeFilter::Ground,
        ) {
            Some(hit) => {
                self.normal_vector = hit.normal;
                frame.flags.is_grounded = true;
                self.target_position.y = hit.point.y;

                if frame.flags.is_in_air {
                    let landing = Landing::classify(self.in_air_timer);
                    let (state, interacting) = landing.animation();
                    frame.animator.play_target_animation(state, interacting);
                    debug!(
                        "Landed: {:?} after {:.2}s airborne",
                        landing, self.in_air_timer
                    );
                    self.in_air_timer = 0.0;
                    frame.flags.is_in_air = false;
                }
            }
            None => {
                frame.flags.is_grounded = false;

                if !frame.flags.is_in_air {
                    if !frame.flags.is_interacting {
                        frame
                            .animator
                            .play_target_animation(AnimationState::Falling, true);
                    }

                    let velocity = frame.velocity.0.normalize_or_zero();
                    frame.velocity.0 = velocity * (tuning.movement_speed / 2.0);
                    frame.flags.is_in_air = true;
                    debug!("Left ground at {:?}", position);
                }
            }
        }

        if frame.flags.is_grounded {
            if frame.flags.is_interacting || frame.input.move_amount > 0.0 {
                let t = (frame.delta / GROUND_SNAP_TIME).clamp(0.0, 1.0);
                frame.transform.translation = position.lerp(self.target_position, t);
            } else {
                frame.transform.translation = self.target_position;
            }
        }
    }
}
