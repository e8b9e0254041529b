//! Input domain: keyboard, mouse and gamepad polling.

use bevy::ecs::system::SystemParam;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::input::{InputSample, InputSettings, InputSource};

/// Stick deflection below this is treated as resting.
const STICK_DEADZONE: f32 = 0.1;

/// Live device state for the current frame.
#[derive(SystemParam)]
pub(crate) struct DeviceInput<'w, 's> {
    keyboard: Res<'w, ButtonInput<KeyCode>>,
    mouse_buttons: Res<'w, ButtonInput<MouseButton>>,
    mouse_motion: Res<'w, AccumulatedMouseMotion>,
    gamepads: Query<'w, 's, &'static Gamepad>,
    settings: Res<'w, InputSettings>,
}

impl InputSource for DeviceInput<'_, '_> {
    fn sample(&self) -> InputSample {
        let mut movement = keyboard_axis(&self.keyboard);

        // Mouse Y grows downward; flip it so looking up is positive
        let mut camera = Vec2::new(
            self.mouse_motion.delta.x,
            -self.mouse_motion.delta.y,
        ) * self.settings.mouse_sensitivity;

        let mut roll_held =
            self.keyboard.pressed(KeyCode::ShiftLeft) || self.keyboard.pressed(KeyCode::Space);
        let mut light_attack = self.mouse_buttons.just_pressed(MouseButton::Left);
        let mut heavy_attack = self.mouse_buttons.just_pressed(MouseButton::Right);

        if let Some(gamepad) = self.gamepads.iter().next() {
            let left = gamepad.left_stick();
            if left.length() > STICK_DEADZONE && left.length() > movement.length() {
                movement = left.clamp(Vec2::NEG_ONE, Vec2::ONE);
            }
            let right = gamepad.right_stick();
            if right.length() > STICK_DEADZONE {
                camera += right * self.settings.stick_sensitivity;
            }
            roll_held |= gamepad.pressed(GamepadButton::East);
            light_attack |= gamepad.just_pressed(GamepadButton::RightTrigger);
            heavy_attack |= gamepad.just_pressed(GamepadButton::RightTrigger2);
        }

        InputSample {
            movement,
            camera,
            roll_held,
            light_attack,
            heavy_attack,
        }
    }
}

/// WASD/arrow composite, normalized so diagonals are not faster.
fn keyboard_axis(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    Vec2::new(x, y).normalize_or_zero()
}
