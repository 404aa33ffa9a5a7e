pub mod aerodynamics;
pub mod aggregated;
pub mod distance;
pub mod dynamics;
pub mod integrator;
