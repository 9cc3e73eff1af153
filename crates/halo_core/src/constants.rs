// Geometric and safety constants for the orbital swarm.
// All distances are in render units (the globe radius is 1.5 units).

/// Golden angle in radians: pi * (3 - sqrt(5)).
/// Spacing angle of the Fibonacci sphere spiral.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Extra gap required between two shard surfaces, beyond 2x shard radius
pub const PARTICLE_MARGIN: f32 = 0.01;

/// Minimum gap between a shard surface and the globe surface, beyond the
/// shard radius. Also absorbs the render-side breathing pulse of the globe.
pub const GLOBE_CLEARANCE: f32 = 0.25;

/// Conservative lower bound on the normalized nearest-neighbor distance of
/// the midpoint Fibonacci lattice: d_min >= NEIGHBOR_CHORD_COEFF / sqrt(N)
/// on a unit sphere. The true coefficient hovers around 3.1 for N >= 10;
/// 2.8 leaves headroom for lattice irregularity near the poles.
pub const NEIGHBOR_CHORD_COEFF: f32 = 2.8;

/// Floor for the radius argument of the Keplerian velocity relation
pub const MIN_KEPLER_RADIUS: f32 = 1e-4;

/// Time samples per wobble period in the worst-case scanner
pub const TIME_SCAN_SAMPLES: usize = 64;

/// Breath-phase samples across [0, 1] in the comprehensive scanner
/// (21 samples = 0.05 steps, hitting the 0 / 0.25 / 0.5 / 0.75 / 1 key points)
pub const PHASE_SCAN_SAMPLES: usize = 21;

/// Allowed deviation between measured and theoretical surface distance
pub const SURFACE_TOLERANCE: f32 = 0.15;
