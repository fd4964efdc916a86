mod error;
mod network;
mod report;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use hs_project::Scenario;
use hs_sim::{RunSummary, run_sim};
use report::{CsvWriter, TableReporter};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(about = "HydroSim CLI - pump, pipe and tank filling simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a tank filling simulation
    Run {
        /// Path to a scenario file (YAML or JSON); built-in reference setup if omitted
        scenario_path: Option<PathBuf>,
        /// Override simulated duration in seconds
        #[arg(long)]
        duration: Option<f64>,
        /// Override time step in seconds
        #[arg(long)]
        dt: Option<f64>,
        /// Pace output at wall-clock speed
        #[arg(long)]
        realtime: bool,
        /// Also write every step to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print a summary after the table
        #[arg(long)]
        summary: bool,
    },
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario file
        scenario_path: PathBuf,
    },
    /// Write the reference scenario to a YAML file
    Init {
        /// Output path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario_path,
            duration,
            dt,
            realtime,
            csv,
            summary,
        } => {
            let mut scenario = match &scenario_path {
                Some(path) => hs_project::load(path)?,
                None => Scenario::default(),
            };
            if let Some(duration) = duration {
                scenario.run.duration_s = duration;
            }
            if let Some(dt) = dt {
                scenario.run.time_step_s = dt;
            }
            scenario.run.realtime |= realtime;
            cmd_run(&scenario, csv.as_deref(), summary)
        }
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

fn cmd_run(scenario: &Scenario, csv: Option<&Path>, summary: bool) -> CliResult<()> {
    let net = network::build(scenario)?;
    tracing::info!(scenario = %scenario.name, "scenario loaded");

    let pace = pace_interval(scenario.run.realtime, net.opts.dt)?;

    let run = run_sim(net.pump, net.pipe, net.tank, &net.opts)?;
    let mut csv_out = match csv {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            Some(CsvWriter::new(io::BufWriter::new(file))?)
        }
        None => None,
    };
    let mut table = TableReporter::new(io::stdout().lock());
    let mut totals = RunSummary::default();

    println!("Starting real-time tank filling simulation...");
    table.header()?;
    for record in run {
        let record = record?;
        table.record(&record)?;
        if let Some(out) = csv_out.as_mut() {
            out.record(&record)?;
        }
        totals.record(&record);
        if let Some(pace) = pace {
            std::thread::sleep(pace);
        }
    }
    drop(table);
    println!("Simulation complete.");

    if summary {
        TableReporter::new(io::stdout().lock()).summary(&totals)?;
    }

    if let (Some(out), Some(path)) = (csv_out, csv) {
        let rows = out.finish()?;
        println!("✓ Exported {} steps to {}", rows, path.display());
    }

    Ok(())
}

/// Wall-clock delay between ticks when pacing is on.
fn pace_interval(realtime: bool, dt: f64) -> CliResult<Option<Duration>> {
    if !realtime {
        return Ok(None);
    }
    Ok(Some(Duration::try_from_secs_f64(dt)?))
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = hs_project::load(scenario_path)?;
    network::build(&scenario)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::FileExists {
            path: path.to_path_buf(),
        });
    }
    hs_project::save_yaml(path, &Scenario::default())?;
    println!("✓ Wrote reference scenario to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacing_follows_time_step() {
        assert_eq!(pace_interval(true, 1.0).unwrap(), Some(Duration::from_secs(1)));
        assert_eq!(pace_interval(false, 1.0).unwrap(), None);
    }

    #[test]
    fn unrepresentable_pacing_is_an_error() {
        assert!(matches!(pace_interval(true, 1e20), Err(CliError::Pacing(_))));
        assert!(pace_interval(false, 1e20).unwrap().is_none());
    }
}
