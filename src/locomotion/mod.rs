//! Locomotion domain: grounded/airborne movement for the player body.

mod components;
mod handlers;
mod probe;
mod resources;
pub(crate) mod systems;

pub use components::{
    CharacterFlags, GameLayer, PendingForce, PlayerLocomotion, ground_check_mask,
};
pub use handlers::{CameraBasis, Landing, LocomotionFrame, project_on_plane};
pub use probe::{GroundProbe, ProbeFilter, ProbeHit};
pub use resources::{LocomotionTuning, fall_impulse_divisor};

use bevy::prelude::*;

use crate::locomotion::systems::integrate_pending_force;

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .add_systems(FixedUpdate, integrate_pending_force);
    }
}
