//! Input domain: device polling and the per-frame input handler.

mod devices;
mod handler;
#[cfg(test)]
mod tests;

pub use handler::{InputHandler, InputSample, InputSource, ROLL_TAP_WINDOW, move_amount};

use bevy::prelude::*;
use serde::Deserialize;

use crate::input::devices::DeviceInput;
use crate::player::Player;

/// Device scaling applied while sampling.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Degrees-per-pixel style scale applied to raw mouse motion.
    pub mouse_sensitivity: f32,
    /// Scale applied to the right stick.
    pub stick_sensitivity: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.05,
            stick_sensitivity: 0.5,
        }
    }
}

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSettings>();
    }
}

/// Poll the devices once and feed every player's handler.
pub(crate) fn tick_input(
    time: Res<Time>,
    devices: DeviceInput,
    mut query: Query<&mut InputHandler, With<Player>>,
) {
    let sample = devices.sample();
    let delta = time.delta_secs();
    for mut handler in &mut query {
        handler.tick_input(delta, &sample);
    }
}
