use halo_core::SwarmConfig;
use halo_core::constants::MIN_KEPLER_RADIUS;

/// Result of the apparent two-body velocity relation
#[derive(Debug, Clone, Copy)]
pub struct KeplerianVelocity {
    /// Orbital speed to apply this frame
    pub velocity: f32,
    /// Clamped speed multiplier relative to the reference orbit
    pub velocity_ratio: f32,
    /// Breath-modulated gravitational parameter used for this sample
    pub effective_gm: f32,
    /// Whether the raw ratio hit the configured clamp bounds
    pub was_clamped: bool,
}

/// Orbital speed from v = sqrt(GM/r), with GM "breathing": inhale raises
/// the apparent mass and pulls the swarm into a faster orbit, exhale
/// relaxes it. The ratio is normalized so a shard at the reference radius
/// with neutral breath moves at exactly `base_speed`, and clamped so
/// extreme radii cannot produce runaway or frozen motion.
pub fn keplerian_velocity(
    radius: f32,
    breath_phase: f32,
    base_speed: f32,
    config: &SwarmConfig,
) -> KeplerianVelocity {
    let r = radius.clamp(MIN_KEPLER_RADIUS, f32::MAX);
    let phase = breath_phase.clamp(0.0, 1.0);

    // 1 + c*(2p - 1): 0.4x gravity at full exhale, 1.6x at full inhale
    // with the observed coupling of 0.6, unity at the neutral point
    let mass_modulation = 1.0 + config.mass_modulation * (2.0 * phase - 1.0);
    let effective_gm = config.base_gm * mass_modulation;

    let reference = (config.base_gm / config.reference_radius).sqrt();
    let raw_ratio = (effective_gm / r).sqrt() / reference;
    let velocity_ratio = raw_ratio.clamp(config.min_velocity_factor, config.max_velocity_factor);

    KeplerianVelocity {
        velocity: base_speed * velocity_ratio,
        velocity_ratio,
        effective_gm,
        was_clamped: raw_ratio != velocity_ratio,
    }
}
