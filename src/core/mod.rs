//! Core domain: gameplay tuning load and resource installation.

mod config;

pub use config::{
    ConfigError, GAMEPLAY_CONFIG_PATH, GameplayConfig, ValidationError, load_gameplay_config,
    parse_gameplay_config, validate_config,
};

use std::path::Path;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let config = load_or_default(Path::new(GAMEPLAY_CONFIG_PATH));
        app.insert_resource(config.locomotion)
            .insert_resource(config.camera)
            .insert_resource(config.input)
            .insert_resource(config.arena);
    }
}

/// Load the tuning file, falling back to built-in defaults when it is
/// missing, malformed, or fails validation.
fn load_or_default(path: &Path) -> GameplayConfig {
    let config = match load_gameplay_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default gameplay tuning", e);
            return GameplayConfig::default();
        }
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid gameplay tuning: {}", error);
        }
        warn!(
            "{} tuning error(s) in {}; using default gameplay tuning",
            errors.len(),
            path.display()
        );
        return GameplayConfig::default();
    }

    info!("Loaded gameplay tuning from {}", path.display());
    config
}
