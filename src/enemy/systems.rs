//! Enemy domain: damage application and idle animation.

use bevy::prelude::*;

use crate::animation::{AnimationState, Animator};
use crate::enemy::{DamageEvent, DamageOutcome, EnemyDied, EnemyStats};

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut died_events: MessageWriter<EnemyDied>,
    mut query: Query<(&mut EnemyStats, &mut Animator)>,
) {
    for event in damage_events.read() {
        let Ok((mut stats, mut animator)) = query.get_mut(event.target) else {
            continue;
        };

        match stats.take_damage(event.amount, &mut animator) {
            DamageOutcome::Damaged => debug!(
                "Enemy {:?} took {} damage ({}/{})",
                event.target,
                event.amount,
                stats.current_health(),
                stats.max_health()
            ),
            DamageOutcome::Killed => {
                info!("Enemy {:?} died", event.target);
                died_events.write(EnemyDied {
                    entity: event.target,
                });
            }
            DamageOutcome::Ignored => {}
        }
    }
}

/// Idle is the resting clip; hit reactions and death take precedence.
pub(crate) fn play_idle_animation(mut query: Query<(&EnemyStats, &mut Animator)>) {
    for (stats, mut animator) in &mut query {
        if stats.is_dead() || animator.is_busy() {
            continue;
        }
        if animator.state() != AnimationState::Idle {
            animator.play(AnimationState::Idle);
        }
    }
}
