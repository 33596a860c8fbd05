use clap::Parser;
use kosmoss_lander::config::{Scenario, ScenarioConfig};
use kosmoss_lander::integrators::IntegrationScheme;
use kosmoss_lander::output::{NullSink, TrajectoryLog};
use kosmoss_lander::physics::energy::{calculate_angular_momentum, calculate_energy};
use kosmoss_lander::physics::orbital::OrbitalMechanics;
use kosmoss_lander::sim::Simulation;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Mars lander descent simulator.
#[derive(Parser, Debug)]
#[command(name = "kosmoss-lander", version)]
struct Args {
    /// Preset scenario, by menu index (0-5) or name
    #[arg(default_value = "descent-10km")]
    scenario: Scenario,

    /// RON scenario file, replaces the preset
    #[arg(long = "config", value_name = "FILE")]
    config_path: Option<PathBuf>,

    /// Trajectory CSV written while the autopilot is on
    #[arg(long = "output", value_name = "PATH", default_value = "output/trajectory.csv")]
    output_path: PathBuf,

    /// Integrate with explicit Euler instead of Verlet
    #[arg(long)]
    euler: bool,

    /// Enable the descent autopilot
    #[arg(long)]
    autopilot: bool,

    /// Hold the thrust axis radially outward
    #[arg(long)]
    stabilize: bool,

    /// List the preset scenarios and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.list {
        for (index, scenario) in Scenario::ALL.iter().enumerate() {
            println!("{}: {:<20} {}", index, scenario.name(), scenario.description());
        }
        return Ok(());
    }

    let mut config = match &args.config_path {
        Some(path) => ScenarioConfig::load(path)?,
        None => args.scenario.config(),
    };
    if args.euler {
        config.scheme = IntegrationScheme::Euler;
    }
    config.autopilot_enabled |= args.autopilot;
    config.stabilized_attitude |= args.stabilize;

    println!("Scenario: {}", config.description);
    println!(
        "Integrator: {:?}, dt = {} s, duration = {} s, autopilot {}",
        config.scheme,
        config.time_step,
        config.duration,
        if config.autopilot_enabled { "on" } else { "off" }
    );

    let mut sim = Simulation::new(&config)?;
    let initial_energy = calculate_energy(sim.state(), sim.params());
    let initial_momentum = calculate_angular_momentum(sim.state(), sim.params());

    // The trajectory log only carries autopilot samples
    let summary = if config.autopilot_enabled {
        if let Some(dir) = args.output_path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                eprintln!("Warning: could not create {}: {}", dir.display(), e);
            }
        }
        let mut log = TrajectoryLog::create(&args.output_path);
        let summary = sim.run(&mut log)?;
        if let Err(e) = log.flush() {
            eprintln!("Warning: trajectory log incomplete: {}", e);
        }
        if log.is_available() {
            println!(
                "Wrote {} samples to {}",
                log.rows(),
                args.output_path.display()
            );
        }
        summary
    } else {
        sim.run(&mut NullSink)?
    };

    let final_energy = calculate_energy(sim.state(), sim.params());
    let final_momentum = calculate_angular_momentum(sim.state(), sim.params());
    let mu = sim.params().gravitational_parameter;
    let radius = sim.state().position.magnitude();
    let speed = sim.state().velocity.magnitude();

    println!("\nRun summary");
    println!("  Outcome:        {}", summary.outcome);
    println!("  Time:           {:.1} s ({} ticks)", summary.time, summary.ticks);
    println!("  Altitude:       {:.3} m", summary.altitude);
    println!("  Descent rate:   {:.3} m/s", -summary.descent_rate);
    println!("  Ground speed:   {:.3} m/s", summary.ground_speed);
    println!("  Fuel remaining: {:.1} %", 100.0 * summary.fuel_fraction);
    println!("  Parachute:      {}", summary.parachute_status);
    println!(
        "  Energy change:  {:.6e}",
        (final_energy - initial_energy).abs() / initial_energy.abs()
    );
    if initial_momentum.magnitude() > 0.0 {
        println!(
            "  Momentum change: {:.6e}",
            (final_momentum - initial_momentum).magnitude() / initial_momentum.magnitude()
        );
    }
    println!(
        "  Escape speed:   {:.1} m/s (current {:.1} m/s)",
        OrbitalMechanics::compute_escape_velocity(mu, radius),
        speed
    );
    if summary.outcome.is_terminal() {
        return Ok(());
    }
    if speed < OrbitalMechanics::compute_escape_velocity(mu, radius) {
        let (apoapsis, periapsis) =
            OrbitalMechanics::compute_apsides(mu, &sim.state().position, &sim.state().velocity);
        println!(
            "  Apsides:        {:.1} km x {:.1} km altitude",
            sim.params().altitude(periapsis) / 1000.0,
            sim.params().altitude(apoapsis) / 1000.0
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_descent_without_flags() {
        let args = Args::try_parse_from(["kosmoss-lander"]).unwrap();
        assert_eq!(args.scenario, Scenario::DescentFrom10km);
        assert_eq!(args.output_path, PathBuf::from("output/trajectory.csv"));
        assert!(args.config_path.is_none());
        assert!(!args.euler && !args.autopilot && !args.stabilize && !args.list);
    }

    #[test]
    fn parses_scenario_and_flags() {
        let args = Args::try_parse_from([
            "kosmoss-lander",
            "4",
            "--euler",
            "--autopilot",
            "--output",
            "run.csv",
            "--config",
            "hop.ron",
        ])
        .unwrap();
        assert_eq!(args.scenario, Scenario::AtmosphereClipping);
        assert!(args.euler && args.autopilot);
        assert_eq!(args.output_path, PathBuf::from("run.csv"));
        assert_eq!(args.config_path, Some(PathBuf::from("hop.ron")));
    }

    #[test]
    fn rejects_unknown_scenario_and_options() {
        assert!(Args::try_parse_from(["kosmoss-lander", "hover"]).is_err());
        assert!(Args::try_parse_from(["kosmoss-lander", "--warp"]).is_err());
    }
}
