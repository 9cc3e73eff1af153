use halo_core::SwarmConfig;
use halo_core::constants::GLOBE_CLEARANCE;
use halo_orbit::{position, sizing};

/// Worst pairwise spacing found in one frame of the swarm
#[derive(Debug, Clone, Copy)]
pub struct CollisionReport {
    pub has_collision: bool,
    /// Smallest center-to-center distance between any two shards
    pub min_distance: f32,
    /// Minimum spacing the shard diameter + margin demands
    pub required_min_distance: f32,
    /// How far below the requirement the worst pair sits (0 when clear)
    pub overlap: f32,
    /// Indices of the closest pair
    pub worst_pair: (usize, usize),
}

/// Worst globe clearance found in one frame of the swarm
#[derive(Debug, Clone, Copy)]
pub struct GlobeClearanceReport {
    pub has_collision: bool,
    /// Smallest gap between a shard center and the globe surface
    pub min_surface_distance: f32,
    /// Minimum gap the shard radius + globe buffer demands
    pub required_min_distance: f32,
    pub overlap: f32,
    /// Index of the shard closest to the surface
    pub worst_index: usize,
}

/// Check every shard pair at one (phase, time) sample. O(N^2) — fine for
/// tooling, never called per frame.
pub fn check_particle_collisions(
    breath_phase: f32,
    time: f32,
    config: &SwarmConfig,
) -> CollisionReport {
    let n = config.particle_count.max(1);
    let pts = position::positions(breath_phase, time, n, config);
    let required = sizing::required_particle_clearance(n, config);

    let mut min_distance = f32::INFINITY;
    let mut worst_pair = (0, 0);

    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let dx = pts[i][0] - pts[j][0];
            let dy = pts[i][1] - pts[j][1];
            let dz = pts[i][2] - pts[j][2];
            let d = (dx * dx + dy * dy + dz * dz).sqrt();
            if d < min_distance {
                min_distance = d;
                worst_pair = (i, j);
            }
        }
    }

    CollisionReport {
        has_collision: min_distance < required,
        min_distance,
        required_min_distance: required,
        overlap: (required - min_distance).max(0.0),
        worst_pair,
    }
}

/// Check every shard against the globe surface at one (phase, time) sample
pub fn check_globe_collisions(
    breath_phase: f32,
    time: f32,
    config: &SwarmConfig,
) -> GlobeClearanceReport {
    let n = config.particle_count.max(1);
    let pts = position::positions(breath_phase, time, n, config);
    let required = sizing::shard_size(n, config) + GLOBE_CLEARANCE;

    let mut min_surface_distance = f32::INFINITY;
    let mut worst_index = 0;

    for (i, p) in pts.iter().enumerate() {
        let dist = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() - config.globe_radius;
        if dist < min_surface_distance {
            min_surface_distance = dist;
            worst_index = i;
        }
    }

    GlobeClearanceReport {
        has_collision: min_surface_distance < required,
        min_surface_distance,
        required_min_distance: required,
        overlap: (required - min_surface_distance).max(0.0),
        worst_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(n: u32) -> SwarmConfig {
        SwarmConfig {
            particle_count: n,
            ..SwarmConfig::default()
        }
    }

    #[test]
    fn test_no_collisions_across_count_and_phase_grid() {
        for n in [50, 100, 200, 300, 500] {
            let cfg = config_with(n);
            for phase in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
                let pp = check_particle_collisions(phase, 0.0, &cfg);
                assert!(
                    !pp.has_collision,
                    "n={} phase={}: pair {:?} at {} < {}",
                    n, phase, pp.worst_pair, pp.min_distance, pp.required_min_distance
                );
                let gg = check_globe_collisions(phase, 0.0, &cfg);
                assert!(
                    !gg.has_collision,
                    "n={} phase={}: shard {} at {} above surface",
                    n, phase, gg.worst_index, gg.min_surface_distance
                );
            }
        }
    }

    #[test]
    fn test_tightest_packing_at_full_inhale() {
        // 300 shards fully inhaled is the crowded end of the default
        // envelope and must still clear the spacing requirement.
        let cfg = config_with(300);
        let report = check_particle_collisions(1.0, 0.0, &cfg);
        assert!(!report.has_collision);
        assert!(report.min_distance >= report.required_min_distance);
        assert_eq!(report.overlap, 0.0);
    }

    #[test]
    fn test_single_shard_has_no_pairs() {
        let cfg = config_with(1);
        let report = check_particle_collisions(0.5, 0.0, &cfg);
        assert!(!report.has_collision);
        assert_eq!(report.min_distance, f32::INFINITY);
    }

    #[test]
    fn test_detects_forced_overlap() {
        // Two shards so large that even the crowding floor (whose chord
        // coefficient is tuned for larger lattices) cannot separate them.
        // The checker must report the overlap as data, not swallow it.
        let cfg = SwarmConfig {
            particle_count: 2,
            min_shard_size: 3.0,
            max_shard_size: 3.0,
            ..SwarmConfig::default()
        };
        let report = check_particle_collisions(1.0, 0.0, &cfg);
        assert!(report.has_collision);
        assert!(report.overlap > 0.0);
        assert!(report.worst_pair.0 < report.worst_pair.1);
    }

    #[test]
    fn test_detects_orbit_inside_globe_buffer() {
        // An inhale ratio that dives below the surface buffer must show up
        // in the globe report.
        let cfg = SwarmConfig {
            particle_count: 200,
            inhale_surface_ratio: -0.9,
            ..SwarmConfig::default()
        };
        let report = check_globe_collisions(1.0, 0.0, &cfg);
        assert!(report.has_collision);
        assert!(report.overlap > 0.0);
    }

    #[test]
    fn test_globe_clearance_shrinks_with_inhale() {
        let cfg = config_with(100);
        let exhale = check_globe_collisions(0.0, 0.0, &cfg);
        let inhale = check_globe_collisions(1.0, 0.0, &cfg);
        assert!(exhale.min_surface_distance > inhale.min_surface_distance);
        assert!(!inhale.has_collision);
    }
}
