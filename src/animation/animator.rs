//! Animator state and clip requests.
//!
//! Clip names are shared with the character animation assets, so the
//! strings returned by [`AnimationState::clip_name`] must not change.

use bevy::prelude::*;

/// Damp time applied to the locomotion blend parameters.
const BLEND_DAMP_TIME: f32 = 0.1;

/// Axis values at or past this snap to a full step.
const BLEND_SNAP_THRESHOLD: f32 = 0.55;

/// Clips the gameplay code can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    /// Neutral state; locomotion blending plays underneath.
    #[default]
    Empty,
    Idle,
    Rolling,
    Backstep,
    Falling,
    Land,
    Damage,
    Dead,
}

impl AnimationState {
    pub fn clip_name(&self) -> &'static str {
        match self {
            AnimationState::Empty => "Empty",
            AnimationState::Idle => "Idle",
            AnimationState::Rolling => "Rolling",
            AnimationState::Backstep => "Backstep",
            AnimationState::Falling => "Falling",
            AnimationState::Land => "Land",
            AnimationState::Damage => "Damage_01",
            AnimationState::Dead => "Dead_01",
        }
    }

    /// Length of one-shot clips in seconds; `None` for clips that loop or hold.
    pub fn one_shot_duration(&self) -> Option<f32> {
        match self {
            AnimationState::Rolling => Some(0.9),
            AnimationState::Backstep => Some(0.6),
            AnimationState::Land => Some(0.5),
            AnimationState::Damage => Some(0.4),
            AnimationState::Empty
            | AnimationState::Idle
            | AnimationState::Falling
            | AnimationState::Dead => None,
        }
    }

    /// Clips that own the character's facing while they play.
    pub fn locks_rotation(&self) -> bool {
        matches!(
            self,
            AnimationState::Rolling | AnimationState::Backstep | AnimationState::Land
        )
    }
}

/// Per-character animator: current clip, blend parameters, and the
/// `isInteracting` bool gameplay reads back every frame.
#[derive(Component, Debug, Clone)]
pub struct Animator {
    state: AnimationState,
    elapsed: f32,
    is_interacting: bool,
    can_rotate: bool,
    pub vertical: f32,
    pub horizontal: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimationState::Empty)
    }
}

impl Animator {
    pub fn new(initial: AnimationState) -> Self {
        Self {
            state: initial,
            elapsed: 0.0,
            is_interacting: false,
            can_rotate: true,
            vertical: 0.0,
            horizontal: 0.0,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_interacting(&self) -> bool {
        self.is_interacting
    }

    pub fn can_rotate(&self) -> bool {
        self.can_rotate
    }

    /// True while a one-shot clip is still running.
    pub fn is_busy(&self) -> bool {
        self.state
            .one_shot_duration()
            .is_some_and(|duration| self.elapsed < duration)
    }

    /// Start `state` from its first frame and set the interacting bool.
    /// Facing-locked clips stop rotation until they finish.
    pub fn play_target_animation(&mut self, state: AnimationState, is_interacting: bool) {
        if self.state != state {
            debug!(
                "Animator: {} -> {} (interacting={})",
                self.state.clip_name(),
                state.clip_name(),
                is_interacting
            );
        }
        self.state = state;
        self.elapsed = 0.0;
        self.is_interacting = is_interacting;
        self.can_rotate = !state.locks_rotation();
    }

    /// Like [`Self::play_target_animation`] but leaves the interacting bool alone.
    pub fn play(&mut self, state: AnimationState) {
        let interacting = self.is_interacting;
        self.play_target_animation(state, interacting);
    }

    /// Advance the clip; finished one-shots return to `Empty` and release
    /// the interacting lock.
    pub fn tick(&mut self, delta: f32) {
        self.elapsed += delta;
        let finished = self
            .state
            .one_shot_duration()
            .is_some_and(|duration| self.elapsed >= duration);
        if finished {
            self.state = AnimationState::Empty;
            self.elapsed = 0.0;
            self.is_interacting = false;
            self.can_rotate = true;
        }
    }

    /// Feed the locomotion blend tree. Axes snap to half steps; sprinting
    /// pushes vertical to 2.
    pub fn update_animator_values(
        &mut self,
        vertical_movement: f32,
        horizontal_movement: f32,
        is_sprinting: bool,
        delta: f32,
    ) {
        let mut vertical = snap_blend_axis(vertical_movement);
        let mut horizontal = snap_blend_axis(horizontal_movement);

        if is_sprinting {
            vertical = 2.0;
            horizontal = horizontal_movement;
        }

        self.vertical = damp_toward(self.vertical, vertical, delta);
        self.horizontal = damp_toward(self.horizontal, horizontal, delta);
    }
}

/// Snap a raw axis to one of -1, -0.5, 0, 0.5, 1.
pub fn snap_blend_axis(value: f32) -> f32 {
    if value > 0.0 && value < BLEND_SNAP_THRESHOLD {
        0.5
    } else if value >= BLEND_SNAP_THRESHOLD {
        1.0
    } else if value < 0.0 && value > -BLEND_SNAP_THRESHOLD {
        -0.5
    } else if value <= -BLEND_SNAP_THRESHOLD {
        -1.0
    } else {
        0.0
    }
}

fn damp_toward(current: f32, target: f32, delta: f32) -> f32 {
    if delta <= 0.0 {
        return current;
    }
    let t = (delta / (BLEND_DAMP_TIME + delta)).min(1.0);
    current + (target - current) * t
}
