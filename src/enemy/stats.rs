//! Enemy domain: health pool and damage application.

use bevy::prelude::*;

use crate::animation::{AnimationState, Animator};

/// Health points granted per health level.
pub const HEALTH_PER_LEVEL: i32 = 10;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct EnemyStats {
    pub health_level: i32,
    max_health: i32,
    current_health: i32,
}

/// What a hit did to the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Damaged,
    Killed,
    /// Already dead; nothing changed.
    Ignored,
}

impl EnemyStats {
    /// Derive max health from the level once and start at full health.
    /// Levels past the representable range saturate at `i32::MAX` health.
    pub fn new(health_level: i32) -> Self {
        let max_health = health_level.max(0).saturating_mul(HEALTH_PER_LEVEL);
        Self {
            health_level,
            max_health,
            current_health: max_health,
        }
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn is_dead(&self) -> bool {
        self.current_health == 0
    }

    pub fn take_damage(&mut self, damage: i32, animator: &mut Animator) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }

        self.current_health = self.current_health.saturating_sub(damage).min(self.max_health);
        animator.play(AnimationState::Damage);

        if self.current_health <= 0 {
            self.current_health = 0;
            animator.play(AnimationState::Dead);
            return DamageOutcome::Killed;
        }
        DamageOutcome::Damaged
    }
}
