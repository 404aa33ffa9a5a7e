use std::fs;
use std::path::PathBuf;

use balanced_field_length::*;
use clap::Parser;

/// Balanced field length of a multi-engine aircraft.
/// Without `--input` the built-in example aircraft is used:
/// ```bash
/// ./target/release/main --input aircraft.json --print-sweep
/// ```
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file (json)
    #[clap(long, value_parser)]
    input: Option<PathBuf>,
    /// Overrides the highest failure speed of the sweep (m/s)
    #[clap(long, value_parser)]
    end_failure_velocity: Option<u32>,
    /// Overrides the number of failed engines
    #[clap(long, value_parser)]
    failed_engines: Option<u32>,
    /// Print the distances of every failure speed
    #[clap(long, action)]
    print_sweep: bool,
    /// Print the result as json instead of the text report
    #[clap(long, action)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut input = match &args.input {
        Some(path) => serde_json::from_str::<BalancedFieldLengthInput>(&fs::read_to_string(path)?)?,
        None => BalancedFieldLengthInput::default(),
    };
    if let Some(end_failure_velocity) = args.end_failure_velocity {
        input.simulation.end_failure_velocity = end_failure_velocity;
    }
    if let Some(failed_engines) = args.failed_engines {
        input.engine.nr_of_failed_engines = failed_engines;
    }

    let messages = input.validate();
    if !messages.is_empty() {
        for message in &messages {
            eprintln!("{}", message);
        }
        return Err(format!("{} invalid input value(s)", messages.len()).into());
    }

    let aircraft = input.to_aircraft_data()?;
    let calculator = input.to_calculator()?;
    let cancellation = CancellationToken::new();

    let outputs = calculator.sweep(&aircraft, &EulerIntegrator, &cancellation)?;
    let mut telemetry = Telemetry::new();
    telemetry.collect_sweep(&outputs);

    match determine_balanced_field_length(&outputs) {
        Ok(result) => {
            telemetry.record_result(result);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                telemetry.display_data(args.print_sweep);
            }
            Ok(())
        }
        Err(e) => {
            telemetry.display_data(args.print_sweep);
            Err(SimulationError::from(e).into())
        }
    }
}
