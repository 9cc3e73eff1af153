//! Offline verification tooling for the orbital swarm.
//!
//! Nothing in here runs on the render hot path: the checkers are O(N^2)
//! and the scanners sweep whole breath cycles. A collision report with
//! `has_collision: true` is data flagging a tuning regression, not an error.

pub mod collision;
pub mod scan;

pub use collision::{CollisionReport, GlobeClearanceReport};
pub use scan::{ComprehensiveReport, SpotCheckReport, SurfaceDistanceReport, TimeScanReport};
