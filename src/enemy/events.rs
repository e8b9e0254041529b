//! Enemy domain: damage and death messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}

/// Emitted once when an enemy's health reaches zero.
#[derive(Debug)]
pub struct EnemyDied {
    pub entity: Entity,
}

impl Message for EnemyDied {}
