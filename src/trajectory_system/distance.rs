use log::{debug, warn};

use crate::aircraft::state::AircraftState;
use crate::calculation::settings::CalculationSettings;
use crate::constants::SCREEN_HEIGHT;
use crate::errors::CalculationError;

use super::dynamics::DynamicsCalculator;
use super::integrator::Integrator;

/// Which dynamics drive the aircraft. Once failed, always failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeoffPhase {
    Normal,
    Failed,
}

/// How a converged simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Climbed through the screen height.
    ScreenHeight,
    /// Came to a standstill.
    Standstill,
}

impl Termination {
    fn of(state: &AircraftState) -> Option<Self> {
        if state.height >= SCREEN_HEIGHT {
            Some(Termination::ScreenHeight)
        } else if state.true_airspeed <= 0.0 {
            Some(Termination::Standstill)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCalculatorOutput {
    /// m/s
    pub failure_speed: u32,
    /// m
    pub distance: f64,
    pub termination: Termination,
    /// The terminal condition was reached before the failure speed.
    pub converged_before_failure: bool,
}

/// Simulates one takeoff from brake release up to the screen height or a
/// standstill, switching to the failure dynamics above the failure speed.
pub struct DistanceCalculator<'a, I: Integrator + ?Sized> {
    normal_calculator: DynamicsCalculator<'a>,
    failure_calculator: DynamicsCalculator<'a>,
    integrator: &'a I,
    settings: CalculationSettings,
}

impl<'a, I: Integrator + ?Sized> DistanceCalculator<'a, I> {
    pub fn new(
        normal_calculator: DynamicsCalculator<'a>,
        failure_calculator: DynamicsCalculator<'a>,
        integrator: &'a I,
        settings: CalculationSettings,
    ) -> Self {
        DistanceCalculator {
            normal_calculator,
            failure_calculator,
            integrator,
            settings,
        }
    }

    pub fn settings(&self) -> &CalculationSettings {
        &self.settings
    }

    /// Runs the simulation. Exhausting the time step budget is reported as
    /// [`CalculationError::NotConverged`].
    pub fn calculate(&self) -> Result<DistanceCalculatorOutput, CalculationError> {
        self.calculate_with(|_, _, _| {})
    }

    /// Like [`calculate`](Self::calculate), calling `observer` with the step
    /// index, the new state and the phase after every time step.
    pub fn calculate_with<F>(
        &self,
        mut observer: F,
    ) -> Result<DistanceCalculatorOutput, CalculationError>
    where
        F: FnMut(u32, &AircraftState, TakeoffPhase),
    {
        let failure_speed = self.settings.failure_speed();
        let time_step = self.settings.time_step();

        let mut state = AircraftState::default();
        let mut phase = TakeoffPhase::Normal;

        for step in 0..self.settings.max_nr_of_time_steps() {
            let calculator = match phase {
                TakeoffPhase::Normal => &self.normal_calculator,
                TakeoffPhase::Failed => &self.failure_calculator,
            };
            let accelerations = calculator.calculate(&state);
            state = self.integrator.integrate(&state, &accelerations, time_step);

            if phase == TakeoffPhase::Normal && state.true_airspeed > f64::from(failure_speed) {
                phase = TakeoffPhase::Failed;
                debug!(
                    "Engine failure at step {} ({:.2} m/s, {:.2} m), switching to {:?}",
                    step,
                    state.true_airspeed,
                    state.distance,
                    self.failure_calculator.regime()
                );
            }

            observer(step, &state, phase);

            if let Some(termination) = Termination::of(&state) {
                debug!(
                    "{:?} reached after {} steps at {:.2} m (failure speed {} m/s)",
                    termination,
                    step + 1,
                    state.distance,
                    failure_speed
                );
                return Ok(DistanceCalculatorOutput {
                    failure_speed,
                    distance: state.distance,
                    termination,
                    converged_before_failure: phase == TakeoffPhase::Normal,
                });
            }
        }

        warn!(
            "{:?} did not converge within {} steps (failure speed {} m/s)",
            self.failure_calculator.regime(),
            self.settings.max_nr_of_time_steps(),
            failure_speed
        );
        Err(CalculationError::NotConverged {
            failure_speed,
            max_nr_of_time_steps: self.settings.max_nr_of_time_steps(),
        })
    }
}
