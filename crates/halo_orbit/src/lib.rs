//! Collision-free orbital placement and velocity engine.
//!
//! Every function here is pure and stateless: positions and velocities are
//! recomputed each frame from `(index, count, breath_phase, time)` and the
//! immutable [`halo_core::SwarmConfig`]. Out-of-range numeric inputs clamp
//! rather than error; NaN inputs propagate to NaN outputs.

pub mod fibonacci;
pub mod kepler;
pub mod position;
pub mod radius;
pub mod sizing;
pub mod wobble;
