use crate::aircraft::state::{AircraftAccelerations, AircraftState};

/// Advances an aircraft state by one time step.
pub trait Integrator {
    fn integrate(
        &self,
        state: &AircraftState,
        accelerations: &AircraftAccelerations,
        time_step: f64,
    ) -> AircraftState;
}

/// Explicit (forward) Euler integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl Integrator for EulerIntegrator {
    fn integrate(
        &self,
        state: &AircraftState,
        accelerations: &AircraftAccelerations,
        time_step: f64,
    ) -> AircraftState {
        AircraftState {
            pitch_angle: state.pitch_angle + accelerations.pitch_rate * time_step,
            flight_path_angle: state.flight_path_angle + accelerations.flight_path_rate * time_step,
            true_airspeed: state.true_airspeed + accelerations.true_airspeed_rate * time_step,
            height: state.height + accelerations.climb_rate * time_step,
            distance: state.distance + state.true_airspeed * time_step,
        }
    }
}
