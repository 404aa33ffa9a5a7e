// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const KILO_NEWTON: f64 = 1_000.0; // N per kN
pub const METERS_PER_SECOND_TO_KNOTS: f64 = 1.943_844_5;

// Certification Constants
pub const SCREEN_HEIGHT: f64 = 10.7; // m (35 ft)

// Ground Contact
pub const LIFT_OFF_HEIGHT: f64 = 0.01; // m, above this there is no normal force

// Dynamics Thresholds
pub const MINIMUM_FLIGHT_PATH_AIRSPEED: f64 = 1.0; // m/s, flight path rate is zero below
pub const ROTATION_STALL_SPEED_FACTOR: f64 = 1.2; // rotation starts at 1.2 * stall speed

// Simulation Parameters
pub const DEFAULT_TIME_STEP: f64 = 0.1; // s
pub const DEFAULT_MAX_NR_OF_TIME_STEPS: u32 = 10_000;
pub const DEFAULT_END_FAILURE_VELOCITY: u32 = 90; // m/s
