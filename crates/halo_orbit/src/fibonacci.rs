use halo_core::constants::GOLDEN_ANGLE;

/// Unit direction of point i on a Fibonacci sphere of n points.
///
/// Uses the midpoint lattice `y = 1 - (2i+1)/n` with the golden-angle
/// spiral, which keeps spacing uniform right up to the poles. O(1) per
/// point: retrieving one direction never requires generating the rest.
pub fn direction(i: u32, n: u32) -> [f32; 3] {
    if n <= 1 {
        // Degenerate lattice: park the lone shard at the north pole
        return [0.0, 1.0, 0.0];
    }

    let y = 1.0 - (2 * i + 1) as f32 / n as f32;
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let theta = i as f32 * GOLDEN_ANGLE;

    [theta.cos() * ring, y, theta.sin() * ring]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_directions_are_unit_vectors() {
        for n in [2, 17, 100, 999] {
            for i in 0..n {
                let d = direction(i, n);
                assert!(
                    (length(d) - 1.0).abs() < 1e-5,
                    "n={} i={}: |d|={}",
                    n,
                    i,
                    length(d)
                );
            }
        }
    }

    #[test]
    fn test_degenerate_counts_use_pole() {
        assert_eq!(direction(0, 0), [0.0, 1.0, 0.0]);
        assert_eq!(direction(0, 1), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_midpoint_lattice_avoids_poles() {
        // First and last points sit strictly inside the caps, so no two
        // points collapse onto a pole.
        let n = 64;
        let first = direction(0, n);
        let last = direction(n - 1, n);
        assert!(first[1] < 1.0);
        assert!(last[1] > -1.0);
    }

    #[test]
    fn test_coverage_is_balanced() {
        // Centroid of the lattice should be near the origin (no hemisphere bias)
        let n = 200;
        let mut sum = [0.0f32; 3];
        for i in 0..n {
            let d = direction(i, n);
            sum[0] += d[0];
            sum[1] += d[1];
            sum[2] += d[2];
        }
        assert!(length(sum) / (n as f32) < 0.02, "centroid drift: {:?}", sum);
    }
}
