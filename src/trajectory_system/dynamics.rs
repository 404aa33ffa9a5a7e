use crate::aircraft::aircraft_data::AircraftData;
use crate::aircraft::checks;
use crate::aircraft::state::{AircraftAccelerations, AircraftState};
use crate::constants::{LIFT_OFF_HEIGHT, MINIMUM_FLIGHT_PATH_AIRSPEED, ROTATION_STALL_SPEED_FACTOR};
use crate::errors::ValidationError;
use crate::utils::angle::Angle;

use super::aerodynamics::{
    calculate_drag_with_engine_failure, calculate_drag_without_engine_failure, calculate_lift,
    calculate_lift_coefficient, calculate_stall_speed,
};

/// Engine and braking configuration the aircraft is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightRegime {
    /// All engines at full thrust, rolling on the wheels.
    Normal,
    /// Takeoff continued on the remaining engines.
    ContinuedAfterFailure { nr_of_failed_engines: u32 },
    /// Thrust cut, brakes applied.
    AbortedAfterFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragCurve {
    WithoutEngineFailure,
    WithEngineFailure,
}

/// The regime dependent inputs of the equations of motion.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RegimeTerms {
    thrust: f64,
    drag_curve: DragCurve,
    friction_coefficient: f64,
}

impl RegimeTerms {
    fn for_regime(aircraft: &AircraftData, regime: FlightRegime) -> Self {
        match regime {
            FlightRegime::Normal => RegimeTerms {
                thrust: aircraft.thrust_newtons(aircraft.nr_of_engines()),
                drag_curve: DragCurve::WithoutEngineFailure,
                friction_coefficient: aircraft.rolling_resistance_coefficient(),
            },
            FlightRegime::ContinuedAfterFailure {
                nr_of_failed_engines,
            } => RegimeTerms {
                thrust: aircraft.thrust_newtons(aircraft.nr_of_engines() - nr_of_failed_engines),
                drag_curve: DragCurve::WithEngineFailure,
                friction_coefficient: aircraft.rolling_resistance_coefficient(),
            },
            FlightRegime::AbortedAfterFailure => RegimeTerms {
                thrust: 0.0,
                drag_curve: DragCurve::WithEngineFailure,
                friction_coefficient: aircraft.braking_resistance_coefficient(),
            },
        }
    }
}

/// Computes the state derivatives of the aircraft for one flight regime.
///
/// Holds no mutable state; one instance can be shared by any number of
/// simulations of the same aircraft.
#[derive(Debug, Clone)]
pub struct DynamicsCalculator<'a> {
    aircraft: &'a AircraftData,
    regime: FlightRegime,
    terms: RegimeTerms,
    density: f64,
    gravitational_acceleration: f64,
    stall_speed: f64,
}

impl<'a> DynamicsCalculator<'a> {
    /// `density` in kg/m³ and `gravitational_acceleration` in m/s².
    pub fn new(
        aircraft: &'a AircraftData,
        regime: FlightRegime,
        density: f64,
        gravitational_acceleration: f64,
    ) -> Result<Self, ValidationError> {
        let density = checks::positive("density", density)?;
        let gravitational_acceleration =
            checks::positive("gravitationalAcceleration", gravitational_acceleration)?;

        if let FlightRegime::ContinuedAfterFailure {
            nr_of_failed_engines,
        } = regime
        {
            validate_nr_of_failed_engines(aircraft, nr_of_failed_engines)?;
        }

        Ok(DynamicsCalculator {
            aircraft,
            regime,
            terms: RegimeTerms::for_regime(aircraft, regime),
            density,
            gravitational_acceleration,
            stall_speed: calculate_stall_speed(
                aircraft.aerodynamics(),
                aircraft.takeoff_weight_newtons(),
                density,
            ),
        })
    }

    pub fn regime(&self) -> FlightRegime {
        self.regime
    }

    /// m/s
    pub fn stall_speed(&self) -> f64 {
        self.stall_speed
    }

    pub fn calculate(&self, state: &AircraftState) -> AircraftAccelerations {
        let weight = self.aircraft.takeoff_weight_newtons();
        let airspeed = state.true_airspeed;
        let flight_path_angle = state.flight_path_angle;

        let lift_coefficient =
            calculate_lift_coefficient(self.aircraft.aerodynamics(), state.angle_of_attack());
        let lift = self.calculate_lift(state);
        let normal_force = normal_force(state.height, lift, weight);
        let ground_friction = self.terms.friction_coefficient * normal_force;
        let drag = self.calculate_drag(lift_coefficient, airspeed);

        let true_airspeed_rate = self.gravitational_acceleration
            * (self.terms.thrust - drag - ground_friction - weight * flight_path_angle.sin())
            / weight;

        let flight_path_rate = if airspeed < MINIMUM_FLIGHT_PATH_AIRSPEED {
            Angle::ZERO
        } else {
            Angle::from_radians(
                self.gravitational_acceleration * (lift - weight + normal_force)
                    / (weight * airspeed),
            )
        };

        AircraftAccelerations {
            pitch_rate: self.calculate_pitch_rate(state),
            climb_rate: airspeed * flight_path_angle.sin(),
            true_airspeed_rate,
            flight_path_rate,
        }
    }

    /// Ground reaction in N for the given state.
    pub fn calculate_normal_force(&self, state: &AircraftState) -> f64 {
        normal_force(
            state.height,
            self.calculate_lift(state),
            self.aircraft.takeoff_weight_newtons(),
        )
    }

    fn calculate_lift(&self, state: &AircraftState) -> f64 {
        calculate_lift(
            self.aircraft.aerodynamics(),
            state.angle_of_attack(),
            self.density,
            state.true_airspeed,
        )
    }

    fn calculate_drag(&self, lift_coefficient: f64, airspeed: f64) -> f64 {
        let aerodynamics = self.aircraft.aerodynamics();
        match self.terms.drag_curve {
            DragCurve::WithoutEngineFailure => calculate_drag_without_engine_failure(
                aerodynamics,
                lift_coefficient,
                self.density,
                airspeed,
            ),
            DragCurve::WithEngineFailure => calculate_drag_with_engine_failure(
                aerodynamics,
                lift_coefficient,
                self.density,
                airspeed,
            ),
        }
    }

    // Constant rate rotation once the aircraft is safely above stall speed.
    fn calculate_pitch_rate(&self, state: &AircraftState) -> Angle {
        let rotation_speed = ROTATION_STALL_SPEED_FACTOR * self.stall_speed;
        if state.true_airspeed >= rotation_speed
            && state.pitch_angle < self.aircraft.maximum_pitch_angle()
        {
            self.aircraft.pitch_angle_gradient()
        } else {
            Angle::ZERO
        }
    }
}

pub fn validate_nr_of_failed_engines(
    aircraft: &AircraftData,
    nr_of_failed_engines: u32,
) -> Result<u32, ValidationError> {
    checks::positive_count("nrOfFailedEngines", nr_of_failed_engines)?;
    if nr_of_failed_engines >= aircraft.nr_of_engines() {
        return Err(ValidationError::NotLessThan {
            parameter: "nrOfFailedEngines",
            limit: f64::from(aircraft.nr_of_engines()),
        });
    }
    Ok(nr_of_failed_engines)
}

fn normal_force(height: f64, lift: f64, weight: f64) -> f64 {
    if height >= LIFT_OFF_HEIGHT {
        0.0
    } else {
        (weight - lift).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::aerodynamics_data::AerodynamicsData;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const DENSITY: f64 = 1.225;
    const GRAVITY: f64 = 9.81;
    const EPSILON: f64 = 1e-9;

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

    fn create_calculator(aircraft: &AircraftData, regime: FlightRegime) -> DynamicsCalculator {
        DynamicsCalculator::new(aircraft, regime, DENSITY, GRAVITY).unwrap()
    }

    fn random_state(rng: &mut StdRng) -> AircraftState {
        AircraftState::new(
            Angle::from_degrees(rng.gen_range(-5.0..20.0)),
            Angle::from_degrees(rng.gen_range(-5.0..10.0)),
            rng.gen_range(0.0..120.0),
            rng.gen_range(-1.0..20.0),
            rng.gen_range(0.0..3000.0),
        )
    }

    #[test]
    fn test_standing_still_accelerates_with_full_thrust() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::Normal);

        let accelerations = calculator.calculate(&AircraftState::default());

        // (200 kN - 0.02 * 500 kN) / 500 kN * g
        assert_relative_eq!(accelerations.true_airspeed_rate, 0.38 * GRAVITY, epsilon = EPSILON);
        assert_eq!(accelerations.flight_path_rate, Angle::ZERO);
        assert_eq!(accelerations.pitch_rate, Angle::ZERO);
        assert_eq!(accelerations.climb_rate, 0.0);
    }

    #[test]
    fn test_regime_terms_at_standstill() {
        let aircraft = create_aircraft();
        let state = AircraftState::default();

        let continued = create_calculator(
            &aircraft,
            FlightRegime::ContinuedAfterFailure {
                nr_of_failed_engines: 1,
            },
        )
        .calculate(&state);
        // (100 kN - 10 kN) / 500 kN * g
        assert_relative_eq!(continued.true_airspeed_rate, 0.18 * GRAVITY, epsilon = EPSILON);

        let aborted = create_calculator(&aircraft, FlightRegime::AbortedAfterFailure)
            .calculate(&state);
        // -0.35 * 500 kN / 500 kN * g
        assert_relative_eq!(aborted.true_airspeed_rate, -0.35 * GRAVITY, epsilon = EPSILON);
    }

    #[test]
    fn test_failure_drag_slows_the_aircraft_more() {
        let aircraft = create_aircraft();
        let state = AircraftState::new(Angle::ZERO, Angle::ZERO, 60.0, 0.0, 500.0);

        let normal = create_calculator(&aircraft, FlightRegime::Normal).calculate(&state);
        let continued = create_calculator(
            &aircraft,
            FlightRegime::ContinuedAfterFailure {
                nr_of_failed_engines: 1,
            },
        )
        .calculate(&state);

        // Half the thrust plus the extra rest drag 0.005 * q * S.
        let extra_drag = 0.5 * DENSITY * 3600.0 * 100.0 * 0.005;
        let expected_difference = GRAVITY * (100_000.0 + extra_drag) / 500_000.0;
        assert_relative_eq!(
            normal.true_airspeed_rate - continued.true_airspeed_rate,
            expected_difference,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_normal_force_is_zero_once_airborne() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::Normal);

        let on_ground = AircraftState::new(Angle::ZERO, Angle::ZERO, 30.0, 0.0, 100.0);
        assert!(calculator.calculate_normal_force(&on_ground) > 0.0);

        let airborne = AircraftState::new(Angle::ZERO, Angle::ZERO, 30.0, LIFT_OFF_HEIGHT, 100.0);
        assert_eq!(calculator.calculate_normal_force(&airborne), 0.0);
    }

    #[test]
    fn test_normal_force_never_negative() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::Normal);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let state = random_state(&mut rng);
            let normal_force = calculator.calculate_normal_force(&state);
            assert!(normal_force >= 0.0);
            if state.height >= LIFT_OFF_HEIGHT {
                assert_eq!(normal_force, 0.0);
            }
        }
    }

    #[test]
    fn test_pitch_rate_gate() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::Normal);
        let rotation_speed = ROTATION_STALL_SPEED_FACTOR * calculator.stall_speed();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let state = random_state(&mut rng);
            let pitch_rate = calculator.calculate(&state).pitch_rate;
            if state.true_airspeed >= rotation_speed
                && state.pitch_angle < aircraft.maximum_pitch_angle()
            {
                assert_eq!(pitch_rate, aircraft.pitch_angle_gradient());
            } else {
                assert_eq!(pitch_rate, Angle::ZERO);
            }
        }
    }

    #[test]
    fn test_pitch_rate_stops_at_maximum_pitch() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::Normal);
        let state = AircraftState::new(Angle::from_degrees(15.0), Angle::ZERO, 90.0, 0.0, 1000.0);

        assert_eq!(calculator.calculate(&state).pitch_rate, Angle::ZERO);
    }

    #[test]
    fn test_flight_path_rate_is_zero_below_minimum_airspeed() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::AbortedAfterFailure);
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..1_000 {
            let mut state = random_state(&mut rng);
            state.true_airspeed = rng.gen_range(-1.0..MINIMUM_FLIGHT_PATH_AIRSPEED);
            assert_eq!(calculator.calculate(&state).flight_path_rate, Angle::ZERO);
        }
    }

    #[test]
    fn test_flight_path_rate_airborne() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::Normal);
        let state = AircraftState::new(
            Angle::from_radians(0.2),
            Angle::from_radians(0.05),
            80.0,
            5.0,
            1500.0,
        );

        let accelerations = calculator.calculate(&state);

        let lift = 0.5 * DENSITY * 6400.0 * 100.0 * (0.15 * 5.5);
        let expected = GRAVITY * (lift - 500_000.0) / (500_000.0 * 80.0);
        assert_relative_eq!(accelerations.flight_path_rate.radians(), expected, epsilon = 1e-12);
        assert_relative_eq!(accelerations.climb_rate, 80.0 * 0.05_f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_flight_path_rate_on_ground_is_zero() {
        let aircraft = create_aircraft();
        let calculator = create_calculator(&aircraft, FlightRegime::Normal);
        let state = AircraftState::new(Angle::from_degrees(5.0), Angle::ZERO, 50.0, 0.0, 400.0);

        // Ground reaction balances the missing lift.
        let rate = calculator.calculate(&state).flight_path_rate;
        assert_relative_eq!(rate.radians(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_environment_is_rejected() {
        let aircraft = create_aircraft();

        let error = DynamicsCalculator::new(&aircraft, FlightRegime::Normal, 0.0, GRAVITY)
            .unwrap_err();
        assert_eq!(error.parameter(), "density");

        let error = DynamicsCalculator::new(&aircraft, FlightRegime::Normal, DENSITY, f64::NAN)
            .unwrap_err();
        assert_eq!(error.parameter(), "gravitationalAcceleration");
    }

    #[test]
    fn test_invalid_nr_of_failed_engines_is_rejected() {
        let aircraft = create_aircraft();

        for nr_of_failed_engines in [0, 2, 3] {
            let error = DynamicsCalculator::new(
                &aircraft,
                FlightRegime::ContinuedAfterFailure {
                    nr_of_failed_engines,
                },
                DENSITY,
                GRAVITY,
            )
            .unwrap_err();
            assert_eq!(error.parameter(), "nrOfFailedEngines");
        }
    }
}
