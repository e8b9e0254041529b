//! Loader for the RON gameplay tuning file read at startup.

use std::fs;
use std::path::Path;

use ron::Options;
use serde::Deserialize;
use thiserror::Error;

use crate::arena::ArenaSettings;
use crate::camera::CameraSettings;
use crate::enemy::HEALTH_PER_LEVEL;
use crate::input::InputSettings;
use crate::locomotion::LocomotionTuning;

/// Default location of the tuning file, relative to the working directory.
pub const GAMEPLAY_CONFIG_PATH: &str = "assets/data/gameplay.ron";

/// All tunable gameplay values. Missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub locomotion: LocomotionTuning,
    pub camera: CameraSettings,
    pub input: InputSettings,
    pub arena: ArenaSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// A tuning value that is present but unusable.
#[derive(Debug, Error, PartialEq)]
#[error("{section}.{field}: {reason}")]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(section: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            section,
            field,
            reason: reason.into(),
        }
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a tuning document from a RON string.
pub fn parse_gameplay_config(file: &str, contents: &str) -> Result<GameplayConfig, ConfigError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ConfigError::Parse {
            file: file.to_string(),
            source,
        })
}

/// Read and parse the tuning file at `path`.
pub fn load_gameplay_config(path: &Path) -> Result<GameplayConfig, ConfigError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: file.clone(),
        source,
    })?;
    parse_gameplay_config(&file, &contents)
}

/// Check value ranges and orderings the gameplay code relies on.
/// Returns every problem found, empty if the config is usable.
pub fn validate_config(config: &GameplayConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let loco = &config.locomotion;
    for (field, value) in [
        ("walking_speed", loco.walking_speed),
        ("movement_speed", loco.movement_speed),
        ("sprint_speed", loco.sprint_speed),
        ("rotation_speed", loco.rotation_speed),
        ("falling_speed", loco.falling_speed),
        ("body_mass", loco.body_mass),
        (
            "minimum_distance_needed_to_begin_fall",
            loco.minimum_distance_needed_to_begin_fall,
        ),
    ] {
        if value <= 0.0 {
            errors.push(ValidationError::new(
                "locomotion",
                field,
                format!("must be positive, got {value}"),
            ));
        }
    }
    if loco.walking_speed > loco.movement_speed || loco.movement_speed > loco.sprint_speed {
        errors.push(ValidationError::new(
            "locomotion",
            "movement_speed",
            format!(
                "expected walking <= movement <= sprint, got {} / {} / {}",
                loco.walking_speed, loco.movement_speed, loco.sprint_speed
            ),
        ));
    }

    let camera = &config.camera;
    for (field, value) in [
        ("follow_speed", camera.follow_speed),
        ("look_speed", camera.look_speed),
        ("pivot_speed", camera.pivot_speed),
    ] {
        if value <= 0.0 {
            errors.push(ValidationError::new(
                "camera",
                field,
                format!("must be positive, got {value}"),
            ));
        }
    }
    if camera.min_pivot > camera.max_pivot {
        errors.push(ValidationError::new(
            "camera",
            "min_pivot",
            format!(
                "min_pivot {} exceeds max_pivot {}",
                camera.min_pivot, camera.max_pivot
            ),
        ));
    }

    if config.input.mouse_sensitivity < 0.0 {
        errors.push(ValidationError::new(
            "input",
            "mouse_sensitivity",
            "must not be negative",
        ));
    }

    let arena = &config.arena;
    if arena.min_health_level < 1 || arena.min_health_level > arena.max_health_level {
        errors.push(ValidationError::new(
            "arena",
            "min_health_level",
            format!(
                "expected 1 <= min <= max, got {}..={}",
                arena.min_health_level, arena.max_health_level
            ),
        ));
    }
    let max_level = i32::MAX / HEALTH_PER_LEVEL;
    if arena.max_health_level > max_level {
        errors.push(ValidationError::new(
            "arena",
            "max_health_level",
            format!(
                "must be at most {max_level}, got {}",
                arena.max_health_level
            ),
        ));
    }

    errors
}
