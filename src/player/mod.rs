//! Player domain: the manager that sequences input, locomotion and camera.

mod spawn;
mod systems;

pub use spawn::spawn_player;

use bevy::ecs::system::ScheduleSystem;
use bevy::prelude::*;

use crate::animation::{Animator, AnimatorTick};
use crate::input::{InputHandler, tick_input};
use crate::locomotion::systems::{handle_falling, handle_movement, handle_rolling_and_sprinting};
use crate::locomotion::{CharacterFlags, PendingForce, PlayerLocomotion};
use crate::player::systems::{
    drive_camera, reset_frame_flags, sync_interacting_flag, transition_to_falling_animation,
};

#[derive(Component, Debug)]
#[require(InputHandler, PlayerLocomotion, CharacterFlags, Animator, PendingForce)]
pub struct Player;

/// Wiring the player needs from outside its own entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerManager {
    /// Rig that follows this player and supplies its movement basis.
    pub camera_rig: Entity,
}

impl PlayerManager {
    pub fn new(camera_rig: Entity) -> Self {
        Self { camera_rig }
    }
}

/// Ordered per-frame player update. Movement must run before falling,
/// which consumes the frame's move direction.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerFrame;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        add_player_frame(app, handle_falling);
    }
}

/// Register the manager's frame order with `ground_step` as the falling step.
pub(crate) fn add_player_frame<M>(
    app: &mut App,
    ground_step: impl IntoScheduleConfigs<ScheduleSystem, M>,
) {
    app.add_systems(
        Update,
        (
            sync_interacting_flag,
            tick_input,
            handle_movement,
            handle_rolling_and_sprinting,
            ground_step,
            transition_to_falling_animation,
        )
            .chain()
            .in_set(PlayerFrame)
            .after(AnimatorTick),
    )
    .add_systems(FixedUpdate, drive_camera)
    .add_systems(PostUpdate, reset_frame_flags);
}
