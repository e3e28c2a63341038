use mars_lander::config::Constants;
use mars_lander::integrators::IntegrationPolicy;
use mars_lander::physics::energy::{calculate_angular_momentum, calculate_energy};
use mars_lander::physics::orbital::OrbitalMechanics;
use mars_lander::scenarios::{self, initialize_scenario_with};
use mars_lander::simulation::{FlightRunner, RunConfig, Simulator};
use mars_lander::telemetry::TelemetryWriter;
use std::error::Error;
use std::path::PathBuf;
use std::{env, process};

const LOG_ENV: &str = "MARS_LANDER_LOG";

const USAGE: &str = "usage: mars-lander [SCENARIO] [--autopilot] [--parachute] [--euler] \
[--max-time SECONDS] [--sample TICKS] [--output PATH] [--list]";

struct Options {
    scenario: usize,
    autopilot: bool,
    policy: IntegrationPolicy,
    run: RunConfig,
    output: PathBuf,
    list: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options, String> {
    let mut options = Options {
        scenario: 1,
        autopilot: false,
        policy: IntegrationPolicy::default(),
        run: RunConfig::default(),
        output: PathBuf::from("output/telemetry.csv"),
        list: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--autopilot" => options.autopilot = true,
            "--parachute" => options.run.deploy_parachute_when_safe = true,
            "--euler" => options.policy = IntegrationPolicy::Euler,
            "--list" => options.list = true,
            "--max-time" => options.run.max_time = value_of(&arg, args.next())?,
            "--sample" => options.run.sample_interval = value_of(&arg, args.next())?,
            "--output" => {
                options.output = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| format!("{} needs a value", arg))?
            }
            other if !other.starts_with('-') => {
                options.scenario = other
                    .parse()
                    .map_err(|_| format!("invalid scenario index '{}'", other))?
            }
            other => return Err(format!("unknown option '{}'", other)),
        }
    }
    Ok(options)
}

fn value_of<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid value '{}' for {}", value, flag))
}

fn log_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "info"))
}

fn main() -> Result<(), Box<dyn Error>> {
    log_builder().init();

    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(2);
        }
    };

    if options.list {
        for (index, preset) in scenarios::available() {
            println!("{}: {}", index, preset.description);
        }
        return Ok(());
    }

    let constants = Constants::default();
    let mut state = initialize_scenario_with(options.scenario, options.policy)?;
    state.autopilot_enabled |= options.autopilot;

    let initial_energy = calculate_energy(&state, &constants.planet);
    let initial_angular_momentum = calculate_angular_momentum(&state);
    if initial_energy < 0.0 {
        let a = OrbitalMechanics::compute_semi_major_axis(
            &state.position,
            &state.velocity,
            &constants.planet,
        );
        let (apoapsis, periapsis) = OrbitalMechanics::compute_apsides(
            &state.position,
            &state.velocity,
            &constants.planet,
        );
        println!(
            "Bound orbit: a = {:.1} km, period = {:.1} s, periapsis alt = {:.1} km, apoapsis alt = {:.1} km",
            a / 1000.0,
            OrbitalMechanics::compute_orbital_period(a, &constants.planet),
            (periapsis - constants.planet.radius) / 1000.0,
            (apoapsis - constants.planet.radius) / 1000.0
        );
    }

    let mut writer = TelemetryWriter::create(&options.output)?;
    let mut runner = FlightRunner::new(Simulator::new(constants), state, options.run)?;
    let report = runner.run(&mut writer)?;
    writer.flush()?;

    let final_state = runner.state();
    let energy_error = (calculate_energy(final_state, &constants.planet) - initial_energy).abs()
        / initial_energy.abs();
    let angular_momentum_error = (calculate_angular_momentum(final_state)
        - initial_angular_momentum)
        .magnitude()
        / initial_angular_momentum.magnitude();

    println!("Outcome: {} after {:.1} s ({} ticks)", report.status, report.flight_time, report.ticks);
    println!("Maximum altitude: {:.1} m", report.max_altitude);
    if let (Some(time), Some(descent_rate), Some(ground_speed)) = (
        report.touchdown_time,
        report.touchdown_descent_rate,
        report.touchdown_ground_speed,
    ) {
        println!(
            "Touchdown at t={:.1} s: descent rate {:.2} m/s, ground speed {:.2} m/s",
            time, descent_rate, ground_speed
        );
    }
    println!(
        "Fuel remaining: {:.1}%, parachute: {}",
        report.fuel_remaining * 100.0,
        report.parachute_status
    );
    if energy_error.is_finite() && angular_momentum_error.is_finite() {
        println!(
            "Relative drift: energy {:.3e}, angular momentum {:.3e}",
            energy_error, angular_momentum_error
        );
    }
    println!("Telemetry has been written to {}", options.output.display());

    Ok(())
}
