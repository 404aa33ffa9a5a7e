//! Unvalidated input as collected by a front end, with the message list
//! validation the front end displays and the conversion into the core types.

use serde::{Deserialize, Serialize};

use crate::aircraft::aerodynamics_data::AerodynamicsData;
use crate::aircraft::aircraft_data::AircraftData;
use crate::aircraft::checks;
use crate::calculation::balanced_field_length::{
    BalancedFieldLengthCalculator, BalancedFieldLengthOutput,
};
use crate::calculation::cancellation::CancellationToken;
use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, DEFAULT_END_FAILURE_VELOCITY, DEFAULT_MAX_NR_OF_TIME_STEPS,
    DEFAULT_TIME_STEP, GRAVITY,
};
use crate::errors::{SimulationError, ValidationError};
use crate::trajectory_system::integrator::EulerIntegrator;
use crate::utils::angle::Angle;

/// Aircraft parameters. Angles in degrees, weight in kN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftInput {
    pub takeoff_weight: f64,
    /// deg/s
    pub pitch_gradient: f64,
    pub maximum_pitch_angle: f64,
    pub rolling_resistance_coefficient: f64,
    pub braking_resistance_coefficient: f64,
    pub aspect_ratio: f64,
    /// m²
    pub wing_surface_area: f64,
    pub zero_lift_angle_of_attack: f64,
    /// 1/rad
    pub lift_coefficient_gradient: f64,
    pub maximum_lift_coefficient: f64,
    pub rest_drag_coefficient_without_engine_failure: f64,
    pub rest_drag_coefficient_with_engine_failure: f64,
    pub oswald_factor: f64,
}

impl Default for AircraftInput {
    fn default() -> Self {
        AircraftInput {
            takeoff_weight: 500.0,
            pitch_gradient: 3.0,
            maximum_pitch_angle: 15.0,
            rolling_resistance_coefficient: 0.02,
            braking_resistance_coefficient: 0.35,
            aspect_ratio: 8.0,
            wing_surface_area: 100.0,
            zero_lift_angle_of_attack: 0.0,
            lift_coefficient_gradient: 5.5,
            maximum_lift_coefficient: 2.0,
            rest_drag_coefficient_without_engine_failure: 0.02,
            rest_drag_coefficient_with_engine_failure: 0.025,
            oswald_factor: 0.8,
        }
    }
}

/// Engine parameters. Thrust in kN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineInput {
    pub nr_of_engines: u32,
    pub thrust_per_engine: f64,
    pub nr_of_failed_engines: u32,
}

impl Default for EngineInput {
    fn default() -> Self {
        EngineInput {
            nr_of_engines: 2,
            thrust_per_engine: 100.0,
            nr_of_failed_engines: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSimulationSettingsInput {
    /// kg/m³
    pub density: f64,
    /// m/s²
    pub gravitational_acceleration: f64,
    /// s
    pub time_step: f64,
    pub max_nr_of_time_steps: u32,
    /// m/s
    pub end_failure_velocity: u32,
}

impl Default for GeneralSimulationSettingsInput {
    fn default() -> Self {
        GeneralSimulationSettingsInput {
            density: AIR_DENSITY_SEA_LEVEL,
            gravitational_acceleration: GRAVITY,
            time_step: DEFAULT_TIME_STEP,
            max_nr_of_time_steps: DEFAULT_MAX_NR_OF_TIME_STEPS,
            end_failure_velocity: DEFAULT_END_FAILURE_VELOCITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancedFieldLengthInput {
    pub aircraft: AircraftInput,
    pub engine: EngineInput,
    pub simulation: GeneralSimulationSettingsInput,
}

impl BalancedFieldLengthInput {
    /// Every problem with the input as a displayable message. Empty when the
    /// input can be calculated.
    pub fn validate(&self) -> Vec<String> {
        let mut messages = Vec::new();
        let mut collect = |result: Result<(), ValidationError>| {
            if let Err(error) = result {
                messages.push(error.to_string());
            }
        };

        let aircraft = &self.aircraft;
        collect(checks::positive("takeOffWeight", aircraft.takeoff_weight).map(drop));
        collect(checks::positive("pitchGradient", aircraft.pitch_gradient).map(drop));
        collect(checks::positive("maximumPitchAngle", aircraft.maximum_pitch_angle).map(drop));
        collect(
            checks::non_negative(
                "rollingResistanceCoefficient",
                aircraft.rolling_resistance_coefficient,
            )
            .map(drop),
        );
        collect(
            checks::non_negative(
                "brakingResistanceCoefficient",
                aircraft.braking_resistance_coefficient,
            )
            .map(drop),
        );
        collect(checks::positive("aspectRatio", aircraft.aspect_ratio).map(drop));
        collect(checks::positive("wingArea", aircraft.wing_surface_area).map(drop));
        collect(
            checks::finite("zeroLiftAngleOfAttack", aircraft.zero_lift_angle_of_attack).map(drop),
        );
        collect(
            checks::positive("liftCoefficientGradient", aircraft.lift_coefficient_gradient)
                .map(drop),
        );
        collect(
            checks::positive("maximumLiftCoefficient", aircraft.maximum_lift_coefficient)
                .map(drop),
        );
        collect(
            checks::non_negative(
                "restDragCoefficientWithoutEngineFailure",
                aircraft.rest_drag_coefficient_without_engine_failure,
            )
            .map(drop),
        );
        collect(
            checks::non_negative(
                "restDragCoefficientWithEngineFailure",
                aircraft.rest_drag_coefficient_with_engine_failure,
            )
            .map(drop),
        );
        collect(checks::positive("oswaldFactor", aircraft.oswald_factor).map(drop));

        let engine = &self.engine;
        collect(checks::positive_count("numberOfEngines", engine.nr_of_engines).map(drop));
        collect(checks::positive("maximumThrustPerEngine", engine.thrust_per_engine).map(drop));

        let simulation = &self.simulation;
        collect(checks::positive("timeStep", simulation.time_step).map(drop));
        collect(
            checks::positive_count("maximumNrOfTimeSteps", simulation.max_nr_of_time_steps)
                .map(drop),
        );

        if engine.nr_of_failed_engines == 0 || engine.nr_of_failed_engines >= engine.nr_of_engines
        {
            messages.push("Number of failed engines is invalid.".to_string());
        }
        if checks::positive("density", simulation.density).is_err() {
            messages.push("Density is invalid.".to_string());
        }
        if checks::positive(
            "gravitationalAcceleration",
            simulation.gravitational_acceleration,
        )
        .is_err()
        {
            messages.push("Gravitational acceleration is invalid.".to_string());
        }
        if simulation.end_failure_velocity == 0 {
            messages.push("End failure velocity must be larger than 0.".to_string());
        }

        messages
    }

    pub fn to_aircraft_data(&self) -> Result<AircraftData, ValidationError> {
        let aircraft = &self.aircraft;
        let aerodynamics = AerodynamicsData::new(
            aircraft.aspect_ratio,
            aircraft.wing_surface_area,
            Angle::from_degrees(aircraft.zero_lift_angle_of_attack),
            aircraft.lift_coefficient_gradient,
            aircraft.maximum_lift_coefficient,
            aircraft.rest_drag_coefficient_without_engine_failure,
            aircraft.rest_drag_coefficient_with_engine_failure,
            aircraft.oswald_factor,
        )?;

        AircraftData::new(
            self.engine.nr_of_engines,
            self.engine.thrust_per_engine,
            aircraft.takeoff_weight,
            Angle::from_degrees(aircraft.pitch_gradient),
            Angle::from_degrees(aircraft.maximum_pitch_angle),
            aircraft.rolling_resistance_coefficient,
            aircraft.braking_resistance_coefficient,
            aerodynamics,
        )
    }

    pub fn to_calculator(&self) -> Result<BalancedFieldLengthCalculator, ValidationError> {
        let simulation = &self.simulation;
        BalancedFieldLengthCalculator::new(
            self.engine.nr_of_failed_engines,
            simulation.density,
            simulation.gravitational_acceleration,
            simulation.end_failure_velocity,
            simulation.max_nr_of_time_steps,
            simulation.time_step,
        )
    }

    /// Balanced field length with Euler integration.
    pub fn calculate(
        &self,
        cancellation: &CancellationToken,
    ) -> Result<BalancedFieldLengthOutput, SimulationError> {
        let aircraft = self.to_aircraft_data()?;
        let calculator = self.to_calculator()?;
        calculator.calculate(&aircraft, &EulerIntegrator, cancellation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_valid() {
        let input = BalancedFieldLengthInput::default();
        assert!(input.validate().is_empty());
        assert!(input.to_aircraft_data().is_ok());
        assert!(input.to_calculator().is_ok());
    }

    #[test]
    fn test_messages_for_invalid_aircraft() {
        let mut input = BalancedFieldLengthInput::default();
        input.aircraft.aspect_ratio = f64::NAN;
        input.aircraft.wing_surface_area = -1.0;
        input.aircraft.braking_resistance_coefficient = -0.1;

        let messages = input.validate();

        assert_eq!(
            messages,
            vec![
                "brakingResistanceCoefficient must be equal to or larger than 0.".to_string(),
                "aspectRatio must be a concrete number and cannot be NaN or Infinity.".to_string(),
                "wingArea must be larger than 0.".to_string(),
            ]
        );
    }

    #[test]
    fn test_messages_for_invalid_simulation_settings() {
        let mut input = BalancedFieldLengthInput::default();
        input.engine.nr_of_failed_engines = 2;
        input.simulation.density = f64::INFINITY;
        input.simulation.gravitational_acceleration = 0.0;
        input.simulation.end_failure_velocity = 0;

        let messages = input.validate();

        assert_eq!(
            messages,
            vec![
                "Number of failed engines is invalid.".to_string(),
                "Density is invalid.".to_string(),
                "Gravitational acceleration is invalid.".to_string(),
                "End failure velocity must be larger than 0.".to_string(),
            ]
        );
    }

    #[test]
    fn test_conversion_fails_on_first_offending_value() {
        let mut input = BalancedFieldLengthInput::default();
        input.aircraft.oswald_factor = 0.0;
        input.aircraft.takeoff_weight = 0.0;

        // Aerodynamic data is built first.
        assert_eq!(input.to_aircraft_data().unwrap_err().parameter(), "oswaldFactor");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{ "engine": { "nr_of_engines": 4, "nr_of_failed_engines": 1 },
                        "simulation": { "end_failure_velocity": 70 } }"#;

        let input: BalancedFieldLengthInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.engine.nr_of_engines, 4);
        assert_eq!(input.engine.thrust_per_engine, 100.0);
        assert_eq!(input.simulation.end_failure_velocity, 70);
        assert_eq!(input.simulation.time_step, DEFAULT_TIME_STEP);
        assert_eq!(input.aircraft, AircraftInput::default());
    }
}
