use crate::sizing;
use crate::wobble;
use halo_core::SwarmConfig;
use halo_core::constants::NEIGHBOR_CHORD_COEFF;

/// Orbit radius for the given breath phase: full exhale (0) sits at the
/// outer bound, full inhale (1) at the inner bound, linear in between.
/// The inner bound is overridden by [`dynamic_min_radius`] when the swarm
/// is crowded enough that the configured minimum would force overlaps.
pub fn orbit_radius(breath_phase: f32, n: u32, config: &SwarmConfig) -> f32 {
    let t = breath_phase.clamp(0.0, 1.0);
    let base = lerp(config.max_orbit_radius(), config.min_orbit_radius(), t);
    let floor = dynamic_min_radius(n, config);

    // NaN phase falls through to the else branch and propagates
    if base < floor { floor } else { base }
}

/// Smallest sphere radius on which n lattice points keep their required
/// clearance even at worst-case wobble alignment.
///
/// Nearest-neighbor chords on the Fibonacci lattice scale as
/// `r * NEIGHBOR_CHORD_COEFF / sqrt(n)`, so solving
/// `chord >= clearance + 2 * wobble_max` for r gives the floor. With the
/// default config this stays below the configured minimum until
/// n ~ 2,500 and only then starts pushing the swarm outward.
pub fn dynamic_min_radius(n: u32, config: &SwarmConfig) -> f32 {
    let n = n.max(1);
    let needed = sizing::required_particle_clearance(n, config)
        + wobble::max_relative_magnitude(config);
    needed * (n as f32).sqrt() / NEIGHBOR_CHORD_COEFF
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        let cfg = SwarmConfig::default();
        let n = 300;
        assert!((orbit_radius(0.0, n, &cfg) - cfg.max_orbit_radius()).abs() < 1e-6);
        assert!((orbit_radius(1.0, n, &cfg) - cfg.min_orbit_radius()).abs() < 1e-6);
        let mid = (cfg.max_orbit_radius() + cfg.min_orbit_radius()) / 2.0;
        assert!((orbit_radius(0.5, n, &cfg) - mid).abs() < 1e-5);
    }

    #[test]
    fn test_non_increasing_in_phase() {
        let cfg = SwarmConfig::default();
        let mut prev = f32::INFINITY;
        for k in 0..=20 {
            let r = orbit_radius(k as f32 / 20.0, 300, &cfg);
            assert!(r <= prev);
            prev = r;
        }
    }

    #[test]
    fn test_out_of_range_phase_clamps() {
        let cfg = SwarmConfig::default();
        assert_eq!(orbit_radius(-2.0, 100, &cfg), orbit_radius(0.0, 100, &cfg));
        assert_eq!(orbit_radius(7.5, 100, &cfg), orbit_radius(1.0, 100, &cfg));
    }

    #[test]
    fn test_nan_phase_propagates() {
        let cfg = SwarmConfig::default();
        assert!(orbit_radius(f32::NAN, 100, &cfg).is_nan());
    }

    #[test]
    fn test_floor_inactive_at_tested_counts() {
        // The surface-distance design targets only hold while the
        // configured minimum radius wins; the floor must stay out of the
        // way for every count the collision grid exercises.
        let cfg = SwarmConfig::default();
        for n in [50, 100, 200, 300, 500, 1000] {
            assert!(
                dynamic_min_radius(n, &cfg) < cfg.min_orbit_radius(),
                "floor active at n={}",
                n
            );
        }
    }

    #[test]
    fn test_floor_takes_over_when_crowded() {
        let cfg = SwarmConfig::default();
        let n = 10_000;
        let floor = dynamic_min_radius(n, &cfg);
        assert!(floor > cfg.min_orbit_radius());
        assert_eq!(orbit_radius(1.0, n, &cfg), floor);
        // Exhale end is still governed by the breath envelope
        assert_eq!(orbit_radius(0.0, n, &cfg), cfg.max_orbit_radius());
    }
}
