use bevy::prelude::*;
use halo_core::SwarmConfig;
use halo_render::plugin::HaloRenderPlugin;
use halo_render::swarm::SwarmState;

fn main() {
    let config = SwarmConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Halo — Breathing Orbit".into(),
                resolution: (1280.0, 800.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.03)))
        .insert_resource(SwarmState::new(config))
        .add_plugins(HaloRenderPlugin)
        .run();
}
