pub mod breath;
pub mod globe;
pub mod plugin;
pub mod swarm;
