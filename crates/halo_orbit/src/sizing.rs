use halo_core::SwarmConfig;
use halo_core::constants::PARTICLE_MARGIN;

/// Visual/collision radius of one shard in a swarm of n.
///
/// Shrinks as 1/sqrt(n) so the total projected area of the swarm stays
/// roughly constant as the count grows, clamped to the configured bounds.
pub fn shard_size(n: u32, config: &SwarmConfig) -> f32 {
    let n = n.max(1);
    (config.base_shard_size / (n as f32).sqrt())
        .clamp(config.min_shard_size, config.max_shard_size)
}

/// Center-to-center distance below which two shards visually overlap
pub fn required_particle_clearance(n: u32, config: &SwarmConfig) -> f32 {
    2.0 * shard_size(n, config) + PARTICLE_MARGIN
}
