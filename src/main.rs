mod animation;
mod arena;
mod camera;
mod core;
#[cfg(feature = "dev-tools")]
mod dev;
mod enemy;
mod input;
mod locomotion;
mod player;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Souls".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        input::PlayerInputPlugin,
        animation::AnimatorPlugin,
        locomotion::LocomotionPlugin,
        camera::CameraPlugin,
        player::PlayerPlugin,
        enemy::EnemyPlugin,
        arena::ArenaPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(dev::DevToolsPlugin);

    app.run();
}
