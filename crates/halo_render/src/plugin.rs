use bevy::prelude::*;

use super::breath::{self, BreathClock};
use super::globe;
use super::swarm;

/// Main render plugin: breathing globe plus the orbiting shard swarm
pub struct HaloRenderPlugin;

impl Plugin for HaloRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BreathClock>()
            .add_systems(Startup, (spawn_scene, globe::spawn_globe, swarm::spawn_swarm))
            .add_systems(
                Update,
                (
                    breath::tick_breath,
                    globe::breathe_globe.after(breath::tick_breath),
                    swarm::update_swarm.after(breath::tick_breath),
                ),
            );
    }
}

/// Camera and key light; the swarm material is emissive, the light is for
/// the globe surface.
fn spawn_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9000.0,
            ..default()
        },
        Transform::from_xyz(5.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
