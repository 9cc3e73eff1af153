use crate::fibonacci;
use crate::radius;
use crate::wobble;
use halo_core::SwarmConfig;

/// Fill `out` with shard positions for one animation frame.
///
/// The shard count is the buffer length; callers size the buffer once from
/// `config.particle_count` and reuse it every frame, so the hot path never
/// allocates. Each position is `direction * orbit_radius + wobble`, pure in
/// `(index, count, breath_phase, time)`.
pub fn fill_positions(breath_phase: f32, time: f32, config: &SwarmConfig, out: &mut [[f32; 3]]) {
    let n = out.len() as u32;
    if n == 0 {
        return;
    }

    // Radius is shared by the whole swarm at a given phase
    let r = radius::orbit_radius(breath_phase, n, config);

    for (i, slot) in out.iter_mut().enumerate() {
        let dir = fibonacci::direction(i as u32, n);
        let w = wobble::offset(i as u32, time, config);
        slot[0] = dir[0] * r + w[0];
        slot[1] = dir[1] * r + w[1];
        slot[2] = dir[2] * r + w[2];
    }
}

/// Allocating convenience for tooling and tests; the render loop uses
/// [`fill_positions`] with its own persistent buffer.
pub fn positions(breath_phase: f32, time: f32, n: u32, config: &SwarmConfig) -> Vec<[f32; 3]> {
    let mut out = vec![[0.0f32; 3]; n.max(1) as usize];
    fill_positions(breath_phase, time, config, &mut out);
    out
}
