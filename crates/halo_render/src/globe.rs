use bevy::prelude::*;

use super::breath::BreathClock;
use super::swarm::SwarmState;

/// Marker for the central globe entity
#[derive(Component)]
pub struct Globe;

/// Fraction of the globe radius added at full inhale. Kept well below the
/// engine's globe clearance margin so the visual pulse can never reach the
/// innermost shard orbit.
const BREATH_SCALE_GAIN: f32 = 0.06;

/// Spawn the central globe at the origin
pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    state: Res<SwarmState>,
) {
    let mesh = meshes.add(Sphere::new(state.config.globe_radius).mesh().ico(4).unwrap());
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.12, 0.35, 0.55),
        emissive: LinearRgba::rgb(0.05, 0.18, 0.35),
        perceptual_roughness: 0.35,
        ..default()
    });

    commands.spawn((Mesh3d(mesh), MeshMaterial3d(material), Transform::IDENTITY, Globe));

    info!("Globe spawned (radius {})", state.config.globe_radius);
}

/// Pulse the globe scale with the breath cycle
pub fn breathe_globe(clock: Res<BreathClock>, mut query: Query<&mut Transform, With<Globe>>) {
    let scale = 1.0 + BREATH_SCALE_GAIN * clock.phase();
    for mut transform in query.iter_mut() {
        transform.scale = Vec3::splat(scale);
    }
}
