//! Locomotion domain: systems that run the handlers on the player entity.

use avian3d::prelude::*;
use bevy::ecs::query::QueryData;
use bevy::prelude::*;

use crate::animation::Animator;
use crate::camera::CameraView;
use crate::input::InputHandler;
use crate::locomotion::handlers::LocomotionFrame;
use crate::locomotion::probe::SpatialProbe;
use crate::locomotion::{CharacterFlags, LocomotionTuning, PendingForce, PlayerLocomotion};
use crate::player::{Player, PlayerManager};

#[derive(QueryData)]
#[query_data(mutable)]
pub(crate) struct LocomotionQuery {
    entity: Entity,
    manager: &'static PlayerManager,
    input: &'static InputHandler,
    locomotion: &'static mut PlayerLocomotion,
    flags: &'static mut CharacterFlags,
    animator: &'static mut Animator,
    transform: &'static mut Transform,
    velocity: &'static mut LinearVelocity,
    force: &'static mut PendingForce,
}

/// Build a [`LocomotionFrame`] for every player and hand it to `step`.
/// Players whose camera rig is gone are skipped; the first miss is logged.
pub(crate) fn for_each_player(
    delta: f32,
    tuning: &LocomotionTuning,
    camera_view: &CameraView,
    query: &mut Query<LocomotionQuery, With<Player>>,
    mut step: impl FnMut(Entity, &mut PlayerLocomotion, &mut LocomotionFrame<'_>),
) {
    for mut player in query.iter_mut() {
        let Some(camera) = camera_view.basis(player.manager.camera_rig) else {
            error_once!(
                "Player {:?} has no usable camera rig {:?}",
                player.entity, player.manager.camera_rig
            );
            continue;
        };

        let entity = player.entity;
        let mut frame = LocomotionFrame {
            delta,
            input: player.input,
            camera,
            tuning,
            flags: &mut player.flags,
            animator: &mut player.animator,
            transform: &mut player.transform,
            velocity: &mut player.velocity,
            force: &mut player.force,
        };
        step(entity, &mut *player.locomotion, &mut frame);
    }
}

pub(crate) fn handle_movement(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    camera_view: CameraView,
    mut query: Query<LocomotionQuery, With<Player>>,
) {
    for_each_player(
        time.delta_secs(),
        &tuning,
        &camera_view,
        &mut query,
        |_, locomotion, frame| locomotion.handle_movement(frame),
    );
}

pub(crate) fn handle_rolling_and_sprinting(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    camera_view: CameraView,
    mut query: Query<LocomotionQuery, With<Player>>,
) {
    for_each_player(
        time.delta_secs(),
        &tuning,
        &camera_view,
        &mut query,
        |_, locomotion, frame| locomotion.handle_rolling_and_sprinting(frame),
    );
}

pub(crate) fn handle_falling(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    camera_view: CameraView,
    spatial_query: SpatialQuery,
    mut query: Query<LocomotionQuery, With<Player>>,
) {
    for_each_player(
        time.delta_secs(),
        &tuning,
        &camera_view,
        &mut query,
        |entity, locomotion, frame| {
            let probe = SpatialProbe::new(&spatial_query, entity);
            let move_direction = locomotion.move_direction;
            locomotion.handle_falling(frame, &probe, move_direction);
        },
    );
}

/// Apply forces gathered during the frame as a velocity change.
pub(crate) fn integrate_pending_force(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut PendingForce, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    for (mut force, mut velocity) in &mut query {
        if force.0 == Vec3::ZERO {
            continue;
        }
        velocity.0 += force.take_velocity_change(tuning.body_mass, dt);
    }
}
