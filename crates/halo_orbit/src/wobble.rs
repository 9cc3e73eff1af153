use halo_core::SwarmConfig;
use halo_core::constants::GOLDEN_ANGLE;
use std::f32::consts::TAU;

// Axis phase offsets of 2*pi/3. Three equal sinusoids a third of a cycle
// apart have a constant sum of squares (3/2), so the wobble magnitude is
// exactly amplitude * sqrt(3/2) at all times.
const AXIS_OFFSET: f32 = TAU / 3.0;

/// Ambient wobble offset for shard i at the given time.
///
/// Deterministic and periodic with period `config.wobble_period`; the
/// per-shard phase comes from the golden angle, not from randomness, so
/// identical inputs always reproduce the same offset.
pub fn offset(i: u32, time: f32, config: &SwarmConfig) -> [f32; 3] {
    let omega = TAU / config.wobble_period;
    let phase = i as f32 * GOLDEN_ANGLE;
    let a = config.wobble_amplitude;
    let t = omega * time + phase;

    [a * t.sin(), a * (t + AXIS_OFFSET).sin(), a * (t + 2.0 * AXIS_OFFSET).sin()]
}

/// Worst-case wobble displacement of a single shard
pub fn max_magnitude(config: &SwarmConfig) -> f32 {
    config.wobble_amplitude * (1.5f32).sqrt()
}

/// Worst-case wobble-induced reduction of the gap between two shards.
/// The componentwise difference of two equal-frequency sinusoids has
/// amplitude at most 2a, and the constant-magnitude argument above applies
/// to the difference vector as well.
pub fn max_relative_magnitude(config: &SwarmConfig) -> f32 {
    2.0 * max_magnitude(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_magnitude_is_bounded_and_constant() {
        let cfg = SwarmConfig::default();
        let bound = max_magnitude(&cfg);
        for i in [0u32, 7, 130, 999] {
            for k in 0..50 {
                let t = k as f32 * 0.173;
                let mag = length(offset(i, t, &cfg));
                assert!(mag <= bound + 1e-5, "i={} t={}: {} > {}", i, t, mag, bound);
                // Constant-magnitude property of the 2pi/3 axis layout
                assert!((mag - bound).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_periodic() {
        let cfg = SwarmConfig::default();
        for i in [0u32, 11, 420] {
            let a = offset(i, 1.3, &cfg);
            let b = offset(i, 1.3 + cfg.wobble_period, &cfg);
            for axis in 0..3 {
                assert!((a[axis] - b[axis]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_neighbors_are_decorrelated() {
        // Adjacent indices should not wobble in lockstep, or the swarm
        // would visibly shear as one rigid body.
        let cfg = SwarmConfig::default();
        let a = offset(10, 0.0, &cfg);
        let b = offset(11, 0.0, &cfg);
        let diff = length([a[0] - b[0], a[1] - b[1], a[2] - b[2]]);
        assert!(diff > 0.01 * cfg.wobble_amplitude);
        assert!(diff <= max_relative_magnitude(&cfg) + 1e-5);
    }
}
