//! Animation domain: tests for clip names, one-shot playback and blending.

use super::{AnimationState, Animator, snap_blend_axis};

#[test]
fn test_clip_names_match_assets() {
    let expected = [
        (AnimationState::Idle, "Idle"),
        (AnimationState::Damage, "Damage_01"),
        (AnimationState::Dead, "Dead_01"),
        (AnimationState::Rolling, "Rolling"),
        (AnimationState::Backstep, "Backstep"),
        (AnimationState::Land, "Land"),
        (AnimationState::Falling, "Falling"),
        (AnimationState::Empty, "Empty"),
    ];
    for (state, name) in expected {
        assert_eq!(state.clip_name(), name);
    }
}

#[test]
fn test_play_target_animation_sets_interacting() {
    let mut animator = Animator::default();
    animator.play_target_animation(AnimationState::Rolling, true);

    assert_eq!(animator.state(), AnimationState::Rolling);
    assert!(animator.is_interacting());
    assert!(animator.is_busy());
}

#[test]
fn test_one_shot_returns_to_empty_and_releases() {
    let mut animator = Animator::default();
    animator.play_target_animation(AnimationState::Backstep, true);

    animator.tick(0.3);
    assert_eq!(animator.state(), AnimationState::Backstep);
    assert!(animator.is_interacting());

    animator.tick(0.4);
    assert_eq!(animator.state(), AnimationState::Empty);
    assert!(!animator.is_interacting());
    assert!(!animator.is_busy());
}

#[test]
fn test_looping_and_holding_clips_never_finish() {
    let mut falling = Animator::default();
    falling.play_target_animation(AnimationState::Falling, true);
    let mut dead = Animator::new(AnimationState::Idle);
    dead.play(AnimationState::Dead);

    for _ in 0..100 {
        falling.tick(0.1);
        dead.tick(0.1);
    }

    assert_eq!(falling.state(), AnimationState::Falling);
    assert!(falling.is_interacting());
    assert_eq!(dead.state(), AnimationState::Dead);
}

#[test]
fn test_play_keeps_interacting_bool() {
    let mut animator = Animator::default();
    animator.play_target_animation(AnimationState::Land, true);
    animator.play(AnimationState::Damage);
    assert!(animator.is_interacting());
}

#[test]
fn test_roll_locks_facing_until_it_finishes() {
    let mut animator = Animator::default();
    assert!(animator.can_rotate());

    animator.play_target_animation(AnimationState::Rolling, true);
    assert!(!animator.can_rotate());

    animator.tick(0.5);
    assert!(!animator.can_rotate());

    animator.tick(0.5);
    assert_eq!(animator.state(), AnimationState::Empty);
    assert!(animator.can_rotate());
}

#[test]
fn test_falling_and_hit_clips_keep_rotation() {
    let mut animator = Animator::default();
    animator.play_target_animation(AnimationState::Land, true);
    assert!(!animator.can_rotate());

    animator.play_target_animation(AnimationState::Falling, true);
    assert!(animator.can_rotate());

    animator.play(AnimationState::Damage);
    assert!(animator.can_rotate());
}

#[test]
fn test_snap_blend_axis_steps() {
    assert_eq!(snap_blend_axis(0.0), 0.0);
    assert_eq!(snap_blend_axis(0.3), 0.5);
    assert_eq!(snap_blend_axis(0.55), 1.0);
    assert_eq!(snap_blend_axis(0.9), 1.0);
    assert_eq!(snap_blend_axis(-0.2), -0.5);
    assert_eq!(snap_blend_axis(-0.55), -1.0);
}

#[test]
fn test_sprinting_drives_vertical_to_two() {
    let mut animator = Animator::default();
    for _ in 0..200 {
        animator.update_animator_values(1.0, 0.0, true, 0.05);
    }
    assert!((animator.vertical - 2.0).abs() < 1e-3);
    assert!(animator.horizontal.abs() < 1e-6);
}

#[test]
fn test_blend_values_are_damped() {
    let mut animator = Animator::default();
    animator.update_animator_values(1.0, 0.0, false, 0.016);
    assert!(animator.vertical > 0.0);
    assert!(animator.vertical < 1.0);
}
