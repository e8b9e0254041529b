//! Locomotion domain: components and physics layers for the player body.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering. Variant order fixes the bit
/// index, and the ground mask depends on `Controller` = 8, `Trigger` = 11.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    Effects,
    IgnoreRaycast,
    Props,
    Water,
    Ui,
    Pickups,
    Projectiles,
    /// Player character controllers
    Controller,
    /// Static level geometry
    Environment,
    /// Enemy bodies
    Enemy,
    /// Trigger volumes - never ground
    Trigger,
}

/// Layers the downward ground probe may hit.
pub fn ground_check_mask() -> LayerMask {
    LayerMask(!(GameLayer::Controller.to_bits() | GameLayer::Trigger.to_bits()))
}

/// Grounded/airborne locomotion state, owned by the locomotion handlers.
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerLocomotion {
    pub move_direction: Vec3,
    /// Normal of the last ground hit; zero until the first hit.
    pub normal_vector: Vec3,
    pub target_position: Vec3,
    pub in_air_timer: f32,
    /// Origin of the last downward ground probe, for debug drawing.
    pub ground_probe_origin: Vec3,
}

/// Per-frame character flags shared between the manager and locomotion.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterFlags {
    pub is_interacting: bool,
    pub is_sprinting: bool,
    pub is_in_air: bool,
    pub is_grounded: bool,
}

/// Force accumulated during the frame, applied on the next physics step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PendingForce(pub Vec3);

impl PendingForce {
    pub fn add(&mut self, force: Vec3) {
        self.0 += force;
    }

    /// Velocity change for one step of `dt` on a body of `mass`, clearing
    /// the accumulator.
    pub fn take_velocity_change(&mut self, mass: f32, dt: f32) -> Vec3 {
        let force = std::mem::take(&mut self.0);
        if mass <= 0.0 {
            return Vec3::ZERO;
        }
        force / mass * dt
    }
}
