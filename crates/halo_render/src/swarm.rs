use bevy::prelude::*;
use halo_core::SwarmConfig;
use halo_orbit::{kepler, position, radius, sizing};

use super::breath::BreathClock;

/// Swarm state tracked as a Bevy Resource: the immutable tuning block plus
/// the one pre-allocated position buffer the engine writes into each frame.
#[derive(Resource)]
pub struct SwarmState {
    pub config: SwarmConfig,
    /// Caller-owned output buffer, sized once and reused every frame
    pub positions: Vec<[f32; 3]>,
    /// Accumulated rotation of the swarm root around the globe axis
    pub swarm_angle: f32,
}

impl SwarmState {
    pub fn new(config: SwarmConfig) -> Self {
        let n = config.particle_count.max(1) as usize;
        Self {
            config,
            positions: vec![[0.0; 3]; n],
            swarm_angle: 0.0,
        }
    }
}

/// Marker for one shard entity; the index keys into the position buffer
#[derive(Component)]
pub struct Shard {
    pub index: usize,
}

/// Marker for the rotating parent of all shard entities
#[derive(Component)]
pub struct SwarmRoot;

/// Spawn shard entities as children of a rotating root, sharing one
/// low-poly mesh and one material.
pub fn spawn_swarm(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    state: Res<SwarmState>,
) {
    let n = state.config.particle_count.max(1);
    let size = sizing::shard_size(n, &state.config);

    let mesh = meshes.add(Sphere::new(size).mesh().ico(1).unwrap());
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.95, 0.85, 0.55),
        emissive: LinearRgba::rgb(1.8, 1.4, 0.7),
        unlit: true,
        ..default()
    });

    commands
        .spawn((Transform::IDENTITY, Visibility::default(), SwarmRoot))
        .with_children(|parent| {
            for index in 0..n as usize {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::IDENTITY,
                    Shard { index },
                ));
            }
        });

    info!("Spawned {} shards (radius {:.4})", n, size);
}

/// Per-frame swarm update: fill the position buffer from the engine, sync
/// shard transforms, and spin the root at the breath-modulated Keplerian
/// rate (closer orbits and deeper inhale both speed the swarm up).
pub fn update_swarm(
    time: Res<Time>,
    clock: Res<BreathClock>,
    mut state: ResMut<SwarmState>,
    mut root_query: Query<&mut Transform, With<SwarmRoot>>,
    mut shard_query: Query<(&mut Transform, &Shard), Without<SwarmRoot>>,
) {
    let phase = clock.phase();

    let state = &mut *state;
    position::fill_positions(phase, clock.elapsed(), &state.config, &mut state.positions);

    for (mut transform, shard) in shard_query.iter_mut() {
        if let Some(p) = state.positions.get(shard.index) {
            transform.translation = Vec3::new(p[0], p[1], p[2]);
        }
    }

    let n = state.positions.len() as u32;
    let r = radius::orbit_radius(phase, n, &state.config);
    let v = kepler::keplerian_velocity(r, phase, state.config.base_orbit_speed, &state.config);
    state.swarm_angle = (state.swarm_angle + v.velocity * time.delta_secs()).rem_euclid(std::f32::consts::TAU);

    for mut transform in root_query.iter_mut() {
        transform.rotation = Quat::from_rotation_y(state.swarm_angle);
    }
}
