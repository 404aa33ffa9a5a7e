use crate::calculation::balanced_field_length::BalancedFieldLengthOutput;
use crate::constants::METERS_PER_SECOND_TO_KNOTS;
use crate::trajectory_system::aggregated::AggregatedDistanceOutput;

/// Collects the outcome of a failure speed sweep and renders it as text.
#[derive(Debug, Default)]
pub struct Telemetry {
    pub log: Vec<String>,
    outputs: Vec<AggregatedDistanceOutput>,
    shortest_distance: Option<f64>,
    longest_distance: Option<f64>,
    result: Option<BalancedFieldLengthOutput>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    fn format_speed(speed: f64) -> String {
        format!(
            "{:.2} m/s ({:.1} kt)",
            speed,
            speed * METERS_PER_SECOND_TO_KNOTS
        )
    }

    fn format_distance(distance: f64) -> String {
        if distance >= 1000.0 {
            format!("{:.3} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    pub fn collect_data(&mut self, output: &AggregatedDistanceOutput) {
        for distance in [output.distance_to_stop, output.distance_to_continue] {
            self.shortest_distance = Some(self.shortest_distance.map_or(distance, |d| d.min(distance)));
            self.longest_distance = Some(self.longest_distance.map_or(distance, |d| d.max(distance)));
        }

        let data = format!(
            "V1: {:>3} m/s | Stop: {:>10} | Continue: {:>10} | Difference: {:>9.2} m{}",
            output.failure_speed,
            Self::format_distance(output.distance_to_stop),
            Self::format_distance(output.distance_to_continue),
            output.distance_difference(),
            if output.converged_before_failure {
                " | converged before failure"
            } else {
                ""
            }
        );
        self.log.push(data);
        self.outputs.push(*output);
    }

    pub fn collect_sweep(&mut self, outputs: &[AggregatedDistanceOutput]) {
        for output in outputs {
            self.collect_data(output);
        }
    }

    pub fn record_result(&mut self, result: BalancedFieldLengthOutput) {
        self.result = Some(result);
    }

    pub fn outputs(&self) -> &[AggregatedDistanceOutput] {
        &self.outputs
    }

    pub fn result(&self) -> Option<&BalancedFieldLengthOutput> {
        self.result.as_ref()
    }

    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!("Failure speeds evaluated: {}", self.outputs.len())];
        if let (Some(shortest), Some(longest)) = (self.shortest_distance, self.longest_distance) {
            lines.push(format!("Shortest distance: {}", Self::format_distance(shortest)));
            lines.push(format!("Longest distance: {}", Self::format_distance(longest)));
        }
        match &self.result {
            Some(result) => {
                lines.push(format!("V1: {}", Self::format_speed(result.velocity)));
                lines.push(format!(
                    "Balanced field length: {}",
                    Self::format_distance(result.distance)
                ));
            }
            None => lines.push("Balanced field length: not determined".to_string()),
        }
        lines
    }

    pub fn display_data(&self, include_sweep: bool) {
        if include_sweep {
            println!("--- Failure Speed Sweep ---");
            for entry in &self.log {
                println!("{}", entry);
            }
            println!("--- End of Sweep ---\n");
        }

        println!("--- Balanced Field Length ---");
        for line in self.summary() {
            println!("{}", line);
        }
    }
}
