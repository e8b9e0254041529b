//! Enemy domain: health pools, damage messages and enemy animation.

mod events;
mod stats;
mod systems;

pub use events::{DamageEvent, EnemyDied};
pub use stats::{DamageOutcome, EnemyStats, HEALTH_PER_LEVEL};

use bevy::prelude::*;

use crate::animation::{AnimationState, Animator, AnimatorTick};
use crate::enemy::systems::{apply_damage, play_idle_animation};

#[derive(Component, Debug)]
#[require(Animator = Animator::new(AnimationState::Idle))]
pub struct Enemy;

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<EnemyDied>()
            .add_systems(
                Update,
                (apply_damage, play_idle_animation)
                    .chain()
                    .after(AnimatorTick),
            );
    }
}
