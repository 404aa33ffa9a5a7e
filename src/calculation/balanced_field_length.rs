use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aircraft::aircraft_data::AircraftData;
use crate::aircraft::checks;
use crate::errors::{CalculationError, SimulationError, ValidationError};
use crate::trajectory_system::aggregated::{calculate_aggregated_distance, AggregatedDistanceOutput};
use crate::trajectory_system::dynamics::validate_nr_of_failed_engines;
use crate::trajectory_system::integrator::Integrator;

use super::cancellation::CancellationToken;
use super::settings::CalculationSettings;

/// V1 and the runway length needed for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancedFieldLengthOutput {
    /// m/s
    pub velocity: f64,
    /// m
    pub distance: f64,
}

/// Sweeps failure speeds and intersects the aborted and continued takeoff
/// distance curves.
#[derive(Debug, Clone, PartialEq)]
pub struct BalancedFieldLengthCalculator {
    nr_of_failed_engines: u32,
    density: f64,
    gravitational_acceleration: f64,
    end_failure_velocity: u32,
    settings: CalculationSettings,
}

impl BalancedFieldLengthCalculator {
    pub fn new(
        nr_of_failed_engines: u32,
        density: f64,
        gravitational_acceleration: f64,
        end_failure_velocity: u32,
        max_nr_of_time_steps: u32,
        time_step: f64,
    ) -> Result<Self, ValidationError> {
        Ok(BalancedFieldLengthCalculator {
            nr_of_failed_engines: checks::positive_count("nrOfFailedEngines", nr_of_failed_engines)?,
            density: checks::positive("density", density)?,
            gravitational_acceleration: checks::positive(
                "gravitationalAcceleration",
                gravitational_acceleration,
            )?,
            end_failure_velocity: checks::positive_count(
                "endFailureVelocity",
                end_failure_velocity,
            )?,
            settings: CalculationSettings::new(0, max_nr_of_time_steps, time_step)?,
        })
    }

    pub fn end_failure_velocity(&self) -> u32 {
        self.end_failure_velocity
    }

    /// Aggregated distances for every failure speed in `1..=end_failure_velocity`,
    /// ordered by failure speed. Candidates run in parallel.
    pub fn sweep<I: Integrator + Sync + ?Sized>(
        &self,
        aircraft: &AircraftData,
        integrator: &I,
        cancellation: &CancellationToken,
    ) -> Result<Vec<AggregatedDistanceOutput>, SimulationError> {
        validate_nr_of_failed_engines(aircraft, self.nr_of_failed_engines)?;
        info!(
            "Sweeping failure speeds 1..={} m/s with {} failed engine(s)",
            self.end_failure_velocity, self.nr_of_failed_engines
        );

        let outputs = (1..=self.end_failure_velocity)
            .into_par_iter()
            .map(|failure_speed| {
                if cancellation.is_cancelled() {
                    return Err(SimulationError::from(CalculationError::Cancelled));
                }
                calculate_aggregated_distance(
                    aircraft,
                    integrator,
                    self.nr_of_failed_engines,
                    self.density,
                    self.gravitational_acceleration,
                    self.settings.with_failure_speed(failure_speed),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cancellation.is_cancelled() {
            return Err(CalculationError::Cancelled.into());
        }
        Ok(outputs)
    }

    pub fn calculate<I: Integrator + Sync + ?Sized>(
        &self,
        aircraft: &AircraftData,
        integrator: &I,
        cancellation: &CancellationToken,
    ) -> Result<BalancedFieldLengthOutput, SimulationError> {
        let outputs = self.sweep(aircraft, integrator, cancellation)?;
        let output = determine_balanced_field_length(&outputs)?;
        info!(
            "Balanced field length {:.2} m at V1 {:.2} m/s",
            output.distance, output.velocity
        );
        Ok(output)
    }
}

/// Intersects the aborted and continued distance curves, linearly
/// interpolating between neighbouring failure speeds.
///
/// Candidates that converged before the failure occurred are skipped, their
/// aborted and continued runs are the same normal takeoff.
pub fn determine_balanced_field_length(
    outputs: &[AggregatedDistanceOutput],
) -> Result<BalancedFieldLengthOutput, CalculationError> {
    let mut candidates: Vec<&AggregatedDistanceOutput> = outputs
        .iter()
        .filter(|output| !output.converged_before_failure)
        .collect();
    if candidates.len() < outputs.len() {
        warn!(
            "Skipping {} failure speed(s) that converged before the failure occurred",
            outputs.len() - candidates.len()
        );
    }
    if candidates.is_empty() {
        return Err(CalculationError::EmptySweep);
    }
    candidates.sort_by_key(|output| output.failure_speed);

    for pair in candidates.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        let lower_difference = lower.distance_difference();
        let upper_difference = upper.distance_difference();

        if lower_difference == 0.0 {
            return Ok(balanced_at(lower));
        }
        if lower_difference * upper_difference < 0.0 {
            let fraction = lower_difference / (lower_difference - upper_difference);
            let interpolate = |low: f64, high: f64| low + fraction * (high - low);

            let velocity = interpolate(
                f64::from(lower.failure_speed),
                f64::from(upper.failure_speed),
            );
            let distance_to_stop = interpolate(lower.distance_to_stop, upper.distance_to_stop);
            let distance_to_continue =
                interpolate(lower.distance_to_continue, upper.distance_to_continue);

            return Ok(BalancedFieldLengthOutput {
                velocity,
                distance: distance_to_stop.max(distance_to_continue),
            });
        }
    }

    match candidates.last() {
        Some(last) if last.distance_difference() == 0.0 => Ok(balanced_at(last)),
        _ => Err(CalculationError::NoBalancedPoint),
    }
}

fn balanced_at(output: &AggregatedDistanceOutput) -> BalancedFieldLengthOutput {
    BalancedFieldLengthOutput {
        velocity: f64::from(output.failure_speed),
        distance: output.distance_to_stop.max(output.distance_to_continue),
    }
}
