//! Input domain: per-frame input state derived from device samples.

use bevy::prelude::*;

/// A release shorter than this (seconds held) is a roll tap; anything longer
/// was a sprint hold.
pub const ROLL_TAP_WINDOW: f32 = 0.5;

/// One poll of the input devices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Movement axes, each in [-1, 1].
    pub movement: Vec2,
    /// Camera look deltas for this frame.
    pub camera: Vec2,
    /// Roll/sprint button currently down.
    pub roll_held: bool,
    pub light_attack: bool,
    pub heavy_attack: bool,
}

/// Polling interface over the input devices, sampled once per frame.
pub trait InputSource {
    fn sample(&self) -> InputSample;
}

/// Normalized input state read by locomotion and the camera.
#[derive(Component, Debug, Clone, Default)]
pub struct InputHandler {
    pub horizontal: f32,
    pub vertical: f32,
    pub move_amount: f32,
    pub mouse_x: f32,
    pub mouse_y: f32,

    pub roll_held: bool,
    pub light_attack: bool,
    pub heavy_attack: bool,

    pub roll_flag: bool,
    pub sprint_flag: bool,
    pub roll_input_timer: f32,
}

impl InputHandler {
    /// Consume this frame's sample and update every derived value.
    pub fn tick_input(&mut self, delta: f32, sample: &InputSample) {
        self.move_input(sample);
        self.handle_roll_input(delta);
    }

    fn move_input(&mut self, sample: &InputSample) {
        self.horizontal = sample.movement.x;
        self.vertical = sample.movement.y;
        self.move_amount = move_amount(self.horizontal, self.vertical);
        self.mouse_x = sample.camera.x;
        self.mouse_y = sample.camera.y;

        self.roll_held = sample.roll_held;
        self.light_attack = sample.light_attack;
        self.heavy_attack = sample.heavy_attack;
    }

    /// Tap-versus-hold discrimination for the roll/sprint button.
    pub fn handle_roll_input(&mut self, delta: f32) {
        if self.roll_held {
            self.roll_input_timer += delta;
            self.sprint_flag = true;
        } else {
            if self.roll_input_timer > 0.0 && self.roll_input_timer < ROLL_TAP_WINDOW {
                self.sprint_flag = false;
                self.roll_flag = true;
                debug!("Roll tapped after {:.3}s", self.roll_input_timer);
            }
            self.roll_input_timer = 0.0;
        }
    }

    /// Clear the one-shot flags once every consumer has read them.
    pub fn reset_frame_flags(&mut self) {
        self.roll_flag = false;
        self.sprint_flag = false;
        self.light_attack = false;
        self.heavy_attack = false;
    }
}

/// Combined stick magnitude used for speed tiers and blending.
pub fn move_amount(horizontal: f32, vertical: f32) -> f32 {
    (horizontal.abs() + vertical.abs()).clamp(0.0, 1.0)
}
