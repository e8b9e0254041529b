//! Player domain: manager-owned steps of the frame sequence.

use bevy::prelude::*;

use crate::animation::{AnimationState, Animator};
use crate::camera::{CameraPivot, CameraRig, CameraSettings};
use crate::input::InputHandler;
use crate::locomotion::{CharacterFlags, PlayerLocomotion};
use crate::player::{Player, PlayerManager};

/// Frame start: the animator decides whether the player is locked.
pub(crate) fn sync_interacting_flag(
    mut query: Query<(&Animator, &mut CharacterFlags), With<Player>>,
) {
    for (animator, mut flags) in &mut query {
        flags.is_interacting = animator.is_interacting();
    }
}

/// Frame end of the locomotion chain: pick up falling when nothing else
/// is playing.
pub(crate) fn transition_to_falling_animation(
    mut query: Query<(&CharacterFlags, &mut Animator), With<Player>>,
) {
    for (flags, mut animator) in &mut query {
        if flags.is_in_air
            && !animator.is_interacting()
            && animator.state() != AnimationState::Falling
        {
            animator.play_target_animation(AnimationState::Falling, true);
        }
    }
}

/// Physics step: chase the player and apply look input to its rig.
pub(crate) fn drive_camera(
    time: Res<Time>,
    settings: Res<CameraSettings>,
    players: Query<(&Transform, &InputHandler, &PlayerManager), With<Player>>,
    mut rigs: Query<(&mut CameraRig, &mut Transform), Without<Player>>,
    mut pivots: Query<&mut Transform, (With<CameraPivot>, Without<CameraRig>, Without<Player>)>,
) {
    let delta = time.delta_secs();

    for (player_transform, input, manager) in &players {
        // A missing rig is reported by the locomotion systems
        let Ok((mut rig, mut rig_transform)) = rigs.get_mut(manager.camera_rig) else {
            continue;
        };

        rig_transform.translation = rig.follow_target(
            rig_transform.translation,
            player_transform.translation,
            delta,
            &settings,
        );

        rig.handle_camera_rotation(delta, input.mouse_x, input.mouse_y, &settings);
        rig_transform.rotation = rig.yaw();

        if let Ok(mut pivot_transform) = pivots.get_mut(rig.pivot) {
            pivot_transform.rotation = rig.pitch();
        }
    }
}

/// Late frame: clear one-shot input and advance the airborne clock.
pub(crate) fn reset_frame_flags(
    time: Res<Time>,
    mut query: Query<(&mut InputHandler, &mut PlayerLocomotion, &CharacterFlags), With<Player>>,
) {
    let delta = time.delta_secs();
    for (mut input, mut locomotion, flags) in &mut query {
        input.reset_frame_flags();
        if flags.is_in_air {
            locomotion.in_air_timer += delta;
        }
    }
}
