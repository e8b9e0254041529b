//! Animation domain: animator state shared by the player and enemies.

mod animator;
#[cfg(test)]
mod tests;

pub use animator::{AnimationState, Animator, snap_blend_axis};

use bevy::prelude::*;

/// Animator clocks advance here, before gameplay reads them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimatorTick;

pub struct AnimatorPlugin;

impl Plugin for AnimatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, tick_animators.in_set(AnimatorTick));
    }
}

fn tick_animators(time: Res<Time>, mut query: Query<&mut Animator>) {
    let delta = time.delta_secs();
    for mut animator in &mut query {
        animator.tick(delta);
    }
}
