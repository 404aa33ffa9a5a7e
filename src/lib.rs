pub mod aircraft;
pub mod calculation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use aircraft::aerodynamics_data::AerodynamicsData;
pub use aircraft::aircraft_data::AircraftData;
pub use aircraft::state::{AircraftAccelerations, AircraftState};
pub use calculation::balanced_field_length::{
    determine_balanced_field_length, BalancedFieldLengthCalculator, BalancedFieldLengthOutput,
};
pub use calculation::cancellation::CancellationToken;
pub use calculation::settings::CalculationSettings;
pub use config::BalancedFieldLengthInput;
pub use errors::{CalculationError, SimulationError, ValidationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aggregated::{calculate_aggregated_distance, AggregatedDistanceOutput};
pub use trajectory_system::distance::{
    DistanceCalculator, DistanceCalculatorOutput, TakeoffPhase, Termination,
};
pub use trajectory_system::dynamics::{DynamicsCalculator, FlightRegime};
pub use trajectory_system::integrator::{EulerIntegrator, Integrator};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::angle::Angle;
