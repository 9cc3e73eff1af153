use crate::collision::{self, CollisionReport, GlobeClearanceReport};
use halo_core::SwarmConfig;
use halo_core::constants::{PHASE_SCAN_SAMPLES, SURFACE_TOLERANCE, TIME_SCAN_SAMPLES};
use halo_orbit::{position, radius};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Worst samples found while sweeping time across one wobble period
#[derive(Debug, Clone, Copy)]
pub struct TimeScanReport {
    pub worst_particle: CollisionReport,
    /// Time at which the worst pairwise spacing occurred
    pub particle_worst_time: f32,
    pub worst_globe: GlobeClearanceReport,
    pub globe_worst_time: f32,
}

impl TimeScanReport {
    pub fn passed(&self) -> bool {
        !self.worst_particle.has_collision && !self.worst_globe.has_collision
    }
}

/// Worst case over the full breath cycle crossed with the time sweep
#[derive(Debug, Clone, Copy)]
pub struct ComprehensiveReport {
    pub worst_particle: CollisionReport,
    pub particle_worst_phase: f32,
    pub particle_worst_time: f32,
    pub worst_globe: GlobeClearanceReport,
    pub globe_worst_phase: f32,
    pub globe_worst_time: f32,
}

impl ComprehensiveReport {
    pub fn passed(&self) -> bool {
        !self.worst_particle.has_collision && !self.worst_globe.has_collision
    }
}

/// Measured vs theoretical altitude of the swarm above the globe surface
#[derive(Debug, Clone, Copy)]
pub struct SurfaceDistanceReport {
    pub avg_surface_distance: f32,
    /// `orbit_radius(phase) - globe_radius`, the design altitude
    pub expected_surface_distance: f32,
    pub deviation: f32,
    pub within_tolerance: bool,
}

/// Outcome of the seeded random (phase, time) spot-check sweep
#[derive(Debug, Clone, Copy)]
pub struct SpotCheckReport {
    pub samples: usize,
    pub failures: usize,
    pub worst_particle: CollisionReport,
    pub worst_phase: f32,
    pub worst_time: f32,
}

/// Sweep one full wobble period at a fixed breath phase. The wobble's worst
/// alignment is not guaranteed to occur at t = 0, so the checkers are
/// re-run at `TIME_SCAN_SAMPLES` points across the period.
pub fn time_scan(breath_phase: f32, config: &SwarmConfig) -> TimeScanReport {
    let mut worst_particle: Option<(CollisionReport, f32)> = None;
    let mut worst_globe: Option<(GlobeClearanceReport, f32)> = None;

    for k in 0..TIME_SCAN_SAMPLES {
        // Period-exclusive endpoint: t = period would repeat t = 0
        let t = config.wobble_period * k as f32 / TIME_SCAN_SAMPLES as f32;

        let pp = collision::check_particle_collisions(breath_phase, t, config);
        if worst_particle.is_none_or(|(w, _)| pp.min_distance < w.min_distance) {
            worst_particle = Some((pp, t));
        }

        let gg = collision::check_globe_collisions(breath_phase, t, config);
        if worst_globe.is_none_or(|(w, _)| gg.min_surface_distance < w.min_surface_distance) {
            worst_globe = Some((gg, t));
        }
    }

    let (worst_particle, particle_worst_time) = worst_particle.unwrap();
    let (worst_globe, globe_worst_time) = worst_globe.unwrap();
    TimeScanReport {
        worst_particle,
        particle_worst_time,
        worst_globe,
        globe_worst_time,
    }
}

/// Cross the time sweep with a dense sweep of the breath cycle
/// (`PHASE_SCAN_SAMPLES` points including both endpoints and the key
/// quarter-phases). Fixed iteration bounds, intended for CI.
pub fn comprehensive_scan(config: &SwarmConfig) -> ComprehensiveReport {
    let mut report: Option<ComprehensiveReport> = None;

    for k in 0..PHASE_SCAN_SAMPLES {
        let phase = k as f32 / (PHASE_SCAN_SAMPLES - 1) as f32;
        let scan = time_scan(phase, config);

        let r = report.get_or_insert(ComprehensiveReport {
            worst_particle: scan.worst_particle,
            particle_worst_phase: phase,
            particle_worst_time: scan.particle_worst_time,
            worst_globe: scan.worst_globe,
            globe_worst_phase: phase,
            globe_worst_time: scan.globe_worst_time,
        });

        if scan.worst_particle.min_distance < r.worst_particle.min_distance {
            r.worst_particle = scan.worst_particle;
            r.particle_worst_phase = phase;
            r.particle_worst_time = scan.particle_worst_time;
        }
        if scan.worst_globe.min_surface_distance < r.worst_globe.min_surface_distance {
            r.worst_globe = scan.worst_globe;
            r.globe_worst_phase = phase;
            r.globe_worst_time = scan.globe_worst_time;
        }
    }

    report.unwrap()
}

/// Compare the swarm's measured average altitude against the breath
/// envelope's design altitude at the given phase.
pub fn surface_distance_report(breath_phase: f32, config: &SwarmConfig) -> SurfaceDistanceReport {
    let n = config.particle_count.max(1);
    let pts = position::positions(breath_phase, 0.0, n, config);

    let avg_surface_distance = pts
        .iter()
        .map(|p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() - config.globe_radius)
        .sum::<f32>()
        / pts.len() as f32;

    let expected_surface_distance =
        radius::orbit_radius(breath_phase, n, config) - config.globe_radius;
    let deviation = (avg_surface_distance - expected_surface_distance).abs();

    SurfaceDistanceReport {
        avg_surface_distance,
        expected_surface_distance,
        deviation,
        within_tolerance: deviation <= SURFACE_TOLERANCE,
    }
}

/// Seeded random (phase, time) samples to supplement the dense grids.
/// Deterministic for a given seed, so CI failures reproduce exactly.
pub fn random_spot_checks(config: &SwarmConfig, samples: usize, seed: u64) -> SpotCheckReport {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut failures = 0;
    let mut worst: Option<(CollisionReport, f32, f32)> = None;

    for _ in 0..samples {
        let phase: f32 = rng.gen_range(0.0..=1.0);
        let t: f32 = rng.gen_range(0.0..config.wobble_period.max(f32::EPSILON));

        let pp = collision::check_particle_collisions(phase, t, config);
        if pp.has_collision {
            failures += 1;
        }
        if worst.is_none_or(|(w, _, _)| pp.min_distance < w.min_distance) {
            worst = Some((pp, phase, t));
        }
    }

    let (worst_particle, worst_phase, worst_time) =
        worst.unwrap_or_else(|| (collision::check_particle_collisions(0.0, 0.0, config), 0.0, 0.0));
    SpotCheckReport {
        samples,
        failures,
        worst_particle,
        worst_phase,
        worst_time,
    }
}
