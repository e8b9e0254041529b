//! Input domain: tests for axis normalization and roll/sprint discrimination.

use bevy::prelude::Vec2;

use super::{InputHandler, InputSample, InputSource, ROLL_TAP_WINDOW, move_amount};

/// Replays a fixed sample, standing in for the device poll.
struct ScriptedInput(InputSample);

impl InputSource for ScriptedInput {
    fn sample(&self) -> InputSample {
        self.0
    }
}

fn held(held: bool) -> InputSample {
    InputSample {
        roll_held: held,
        ..Default::default()
    }
}

/// Hold the roll button for `frames` frames of `dt`, then release once.
fn hold_then_release(handler: &mut InputHandler, frames: u32, dt: f32) {
    for _ in 0..frames {
        handler.tick_input(dt, &held(true));
    }
    handler.tick_input(dt, &held(false));
}

// -----------------------------------------------------------------------------
// Axis tests
// -----------------------------------------------------------------------------

#[test]
fn test_move_amount_is_clamped_sum_of_axes() {
    let steps: [f32; 6] = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];
    for h in steps {
        for v in steps {
            for (sh, sv) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
                let expected = (h + v).clamp(0.0, 1.0);
                assert_eq!(move_amount(h * sh, v * sv), expected, "h={h} v={v}");
            }
        }
    }
}

#[test]
fn test_tick_input_copies_axes_and_camera() {
    let source = ScriptedInput(InputSample {
        movement: Vec2::new(-0.4, 0.3),
        camera: Vec2::new(2.0, -1.5),
        ..Default::default()
    });
    let mut handler = InputHandler::default();

    handler.tick_input(0.016, &source.sample());

    assert_eq!(handler.horizontal, -0.4);
    assert_eq!(handler.vertical, 0.3);
    assert!((handler.move_amount - 0.7).abs() < 1e-6);
    assert_eq!(handler.mouse_x, 2.0);
    assert_eq!(handler.mouse_y, -1.5);
}

#[test]
fn test_full_diagonal_move_amount_saturates() {
    let mut handler = InputHandler::default();
    handler.tick_input(
        0.016,
        &InputSample {
            movement: Vec2::new(1.0, 1.0),
            ..Default::default()
        },
    );
    assert_eq!(handler.move_amount, 1.0);
}

// -----------------------------------------------------------------------------
// Roll / sprint tests
// -----------------------------------------------------------------------------

#[test]
fn test_short_tap_sets_roll_flag() {
    let mut handler = InputHandler::default();
    hold_then_release(&mut handler, 10, 0.02);

    assert!(handler.roll_flag);
    assert!(!handler.sprint_flag);
    assert_eq!(handler.roll_input_timer, 0.0);
}

#[test]
fn test_long_hold_sprints_without_rolling() {
    let mut handler = InputHandler::default();
    for _ in 0..30 {
        handler.tick_input(0.02, &held(true));
    }
    assert!(handler.sprint_flag);
    assert!(handler.roll_input_timer >= ROLL_TAP_WINDOW);

    handler.tick_input(0.02, &held(false));
    assert!(!handler.roll_flag);
    assert!(handler.sprint_flag);
    assert_eq!(handler.roll_input_timer, 0.0);
}

#[test]
fn test_release_exactly_at_window_does_not_roll() {
    let mut handler = InputHandler::default();
    handler.tick_input(ROLL_TAP_WINDOW, &held(true));
    handler.tick_input(0.0, &held(false));
    assert!(!handler.roll_flag);
}

#[test]
fn test_release_without_hold_sets_nothing() {
    let mut handler = InputHandler::default();
    handler.tick_input(0.02, &held(false));
    assert!(!handler.roll_flag);
    assert!(!handler.sprint_flag);
}

#[test]
fn test_holding_sets_sprint_each_frame() {
    let mut handler = InputHandler::default();
    handler.tick_input(0.02, &held(true));
    assert!(handler.sprint_flag);

    handler.reset_frame_flags();
    assert!(!handler.sprint_flag);

    handler.tick_input(0.02, &held(true));
    assert!(handler.sprint_flag);
    assert!((handler.roll_input_timer - 0.04).abs() < 1e-6);
}

#[test]
fn test_reset_frame_flags_clears_one_shots() {
    let mut handler = InputHandler {
        roll_flag: true,
        sprint_flag: true,
        light_attack: true,
        heavy_attack: true,
        move_amount: 0.5,
        ..Default::default()
    };

    handler.reset_frame_flags();

    assert!(!handler.roll_flag);
    assert!(!handler.sprint_flag);
    assert!(!handler.light_attack);
    assert!(!handler.heavy_attack);
    assert_eq!(handler.move_amount, 0.5);
}
