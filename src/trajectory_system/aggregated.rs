use crate::aircraft::aircraft_data::AircraftData;
use crate::calculation::settings::CalculationSettings;
use crate::errors::SimulationError;

use super::distance::{DistanceCalculator, DistanceCalculatorOutput};
use super::dynamics::{DynamicsCalculator, FlightRegime};
use super::integrator::Integrator;

/// Aborted and continued takeoff distances for one failure speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedDistanceOutput {
    /// m/s
    pub failure_speed: u32,
    /// m
    pub distance_to_stop: f64,
    /// m
    pub distance_to_continue: f64,
    /// Either run reached its terminal condition before the failure speed.
    pub converged_before_failure: bool,
}

impl AggregatedDistanceOutput {
    fn from_outputs(aborted: DistanceCalculatorOutput, continued: DistanceCalculatorOutput) -> Self {
        AggregatedDistanceOutput {
            failure_speed: aborted.failure_speed,
            distance_to_stop: aborted.distance,
            distance_to_continue: continued.distance,
            converged_before_failure: aborted.converged_before_failure
                || continued.converged_before_failure,
        }
    }

    /// Aborted minus continued distance in m.
    pub fn distance_difference(&self) -> f64 {
        self.distance_to_stop - self.distance_to_continue
    }
}

/// Runs the aborted and the continued takeoff for the failure speed in
/// `settings`. The first failing run is returned as the error.
pub fn calculate_aggregated_distance<I: Integrator + ?Sized>(
    aircraft: &AircraftData,
    integrator: &I,
    nr_of_failed_engines: u32,
    density: f64,
    gravitational_acceleration: f64,
    settings: CalculationSettings,
) -> Result<AggregatedDistanceOutput, SimulationError> {
    let create_calculator = |regime| {
        DynamicsCalculator::new(aircraft, regime, density, gravitational_acceleration)
    };

    let normal_calculator = create_calculator(FlightRegime::Normal)?;
    let aborted_calculator = create_calculator(FlightRegime::AbortedAfterFailure)?;
    let continued_calculator = create_calculator(FlightRegime::ContinuedAfterFailure {
        nr_of_failed_engines,
    })?;

    let aborted = DistanceCalculator::new(
        normal_calculator.clone(),
        aborted_calculator,
        integrator,
        settings,
    )
    .calculate()?;
    let continued =
        DistanceCalculator::new(normal_calculator, continued_calculator, integrator, settings)
            .calculate()?;

    Ok(AggregatedDistanceOutput::from_outputs(aborted, continued))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::aerodynamics_data::AerodynamicsData;
    use crate::errors::CalculationError;
    use crate::trajectory_system::integrator::EulerIntegrator;
    use crate::utils::angle::Angle;

    const DENSITY: f64 = 1.225;
    const GRAVITY: f64 = 9.81;

    fn create_aircraft() -> AircraftData {
        let aerodynamics =
            AerodynamicsData::new(8.0, 100.0, Angle::ZERO, 5.5, 2.0, 0.02, 0.025, 0.8).unwrap();
        AircraftData::new(
            2,
            100.0,
            500.0,
            Angle::from_degrees(3.0),
            Angle::from_degrees(15.0),
            0.02,
            0.35,
            aerodynamics,
        )
        .unwrap()
    }

    #[test]
    fn test_failure_at_brake_release_aborts_shorter_than_continues() {
        let aircraft = create_aircraft();
        let settings = CalculationSettings::new(0, 10_000, 0.1).unwrap();

        let output =
            calculate_aggregated_distance(&aircraft, &EulerIntegrator, 1, DENSITY, GRAVITY, settings)
                .unwrap();

        assert_eq!(output.failure_speed, 0);
        assert!(output.distance_to_stop < output.distance_to_continue);
        assert!(output.distance_difference() < 0.0);
        assert!(!output.converged_before_failure);
    }

    #[test]
    fn test_late_failure_aborts_longer_than_continues() {
        let aircraft = create_aircraft();
        let settings = CalculationSettings::new(78, 10_000, 0.1).unwrap();

        let output =
            calculate_aggregated_distance(&aircraft, &EulerIntegrator, 1, DENSITY, GRAVITY, settings)
                .unwrap();

        assert!(output.distance_to_stop > output.distance_to_continue);
    }

    #[test]
    fn test_non_convergence_is_propagated() {
        let aircraft = create_aircraft();
        let settings = CalculationSettings::new(60, 10, 0.1).unwrap();

        let error =
            calculate_aggregated_distance(&aircraft, &EulerIntegrator, 1, DENSITY, GRAVITY, settings)
                .unwrap_err();

        assert!(matches!(
            error,
            SimulationError::Calculation(CalculationError::NotConverged { .. })
        ));
    }

    #[test]
    fn test_invalid_engine_count_is_propagated() {
        let aircraft = create_aircraft();
        let settings = CalculationSettings::new(60, 10_000, 0.1).unwrap();

        let error =
            calculate_aggregated_distance(&aircraft, &EulerIntegrator, 2, DENSITY, GRAVITY, settings)
                .unwrap_err();

        match error {
            SimulationError::Validation(error) => assert_eq!(error.parameter(), "nrOfFailedEngines"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
