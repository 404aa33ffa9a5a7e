pub mod aerodynamics_data;
pub mod aircraft_data;
pub mod checks;
pub mod state;
