//! Worst-case collision sweep across swarm sizes.
//! Intended for CI: exits non-zero if any tuning regression is found.

use halo_core::SwarmConfig;
use halo_orbit::{radius, sizing};
use halo_verify::scan;

const COUNTS: &[u32] = &[50, 100, 200, 300, 500, 1000];
const SPOT_SAMPLES: usize = 200;
const SPOT_SEED: u64 = 42;

fn main() {
    let mut all_passed = true;

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║    ORBITAL SWARM VERIFICATION                                ║");
    println!("║    {} swarm sizes × full breath cycle × one wobble period     ", COUNTS.len());
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    for &n in COUNTS {
        eprintln!("Scanning n = {}...", n);
        let cfg = SwarmConfig {
            particle_count: n,
            ..SwarmConfig::default()
        };

        let report = scan::comprehensive_scan(&cfg);
        let spot = scan::random_spot_checks(&cfg, SPOT_SAMPLES, SPOT_SEED);
        let passed = report.passed() && spot.failures == 0;
        all_passed &= passed;

        let shard = sizing::shard_size(n, &cfg);
        let floor = radius::dynamic_min_radius(n, &cfg);

        println!("━━━ N = {} ━━━", n);
        println!(
            "  shard radius {:.4} | inner orbit {:.3}{}",
            shard,
            radius::orbit_radius(1.0, n, &cfg),
            if floor > cfg.min_orbit_radius() { " (crowding floor)" } else { "" }
        );
        println!(
            "  worst pair spacing  {:.4} / required {:.4}  (phase {:.2}, t {:.2})",
            report.worst_particle.min_distance,
            report.worst_particle.required_min_distance,
            report.particle_worst_phase,
            report.particle_worst_time
        );
        println!(
            "  worst globe gap     {:.4} / required {:.4}  (phase {:.2}, t {:.2})",
            report.worst_globe.min_surface_distance,
            report.worst_globe.required_min_distance,
            report.globe_worst_phase,
            report.globe_worst_time
        );
        println!(
            "  spot checks         {}/{} clean",
            spot.samples - spot.failures,
            spot.samples
        );

        for phase in [0.0f32, 0.5, 1.0] {
            let s = scan::surface_distance_report(phase, &cfg);
            println!(
                "  altitude @ phase {:.1}  avg {:.3} vs design {:.3}  [{}]",
                phase,
                s.avg_surface_distance,
                s.expected_surface_distance,
                if s.within_tolerance { "ok" } else { "DRIFT" }
            );
            all_passed &= s.within_tolerance;
        }

        println!("  result: {}", if passed { "PASS" } else { "FAIL" });
        println!();
    }

    if all_passed {
        println!("All swarm sizes verified collision-free.");
    } else {
        println!("Verification FAILED — see worst cases above.");
        std::process::exit(1);
    }
}
