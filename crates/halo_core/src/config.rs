use serde::{Deserialize, Serialize};

/// Swarm tuning block. Loaded once at startup, never mutated afterwards;
/// every engine function takes it by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Radius of the central globe, centered at the origin
    pub globe_radius: f32,
    /// Orbit altitude at full inhale, as a fraction of the globe radius
    pub inhale_surface_ratio: f32,
    /// Orbit altitude at full exhale, as a fraction of the globe radius
    pub exhale_surface_ratio: f32,
    /// Shard radius before the 1/sqrt(N) crowding reduction
    pub base_shard_size: f32,
    /// Shard radius floor at very high particle counts
    pub min_shard_size: f32,
    /// Shard radius cap at very low particle counts
    pub max_shard_size: f32,
    /// Orbital speed at the reference radius with neutral breath (rad/s)
    pub base_orbit_speed: f32,
    /// Apparent gravitational parameter at neutral breath
    pub base_gm: f32,
    /// Radius at which the velocity ratio is normalized to 1.0
    pub reference_radius: f32,
    /// Lower clamp on the velocity ratio
    pub min_velocity_factor: f32,
    /// Upper clamp on the velocity ratio
    pub max_velocity_factor: f32,
    /// Breath coupling of the apparent mass: GM scales by 1 + c*(2*phase - 1)
    pub mass_modulation: f32,
    /// Number of shards in the swarm
    pub particle_count: u32,
    /// Per-axis amplitude of the ambient wobble
    pub wobble_amplitude: f32,
    /// Period of the ambient wobble in seconds
    pub wobble_period: f32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            globe_radius: 1.5,
            inhale_surface_ratio: 0.5,
            exhale_surface_ratio: 3.0,
            base_shard_size: 0.35,
            min_shard_size: 0.008,
            max_shard_size: 0.05,
            base_orbit_speed: 0.4,
            base_gm: 1.0,
            reference_radius: 4.0,
            min_velocity_factor: 0.5,
            max_velocity_factor: 2.0,
            mass_modulation: 0.6,
            particle_count: 300,
            wobble_amplitude: 0.04,
            wobble_period: 4.0,
        }
    }
}

impl SwarmConfig {
    /// Orbit radius at full inhale (before the dynamic crowding floor)
    pub fn min_orbit_radius(&self) -> f32 {
        self.globe_radius * (1.0 + self.inhale_surface_ratio)
    }

    /// Orbit radius at full exhale
    pub fn max_orbit_radius(&self) -> f32 {
        self.globe_radius * (1.0 + self.exhale_surface_ratio)
    }
}
