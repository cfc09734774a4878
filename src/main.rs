use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ghg_outlook::{
    area, densest, emissions_per_capita, emissions_per_square_km, population_density,
    EngineBuilder, EngineSettings, RegionCondition, Scenario, ScenarioLoader,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Regional GHG emissions outlook")]
struct Cli {
    /// Path to a scenario YAML file (built-in sample regions when omitted)
    #[arg(long, global = true)]
    scenario: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print area, density and emission rates for every region
    Summary,
    /// Project every region forward and print the final conditions
    Project {
        /// Override the projection horizon in years
        #[arg(long)]
        years: Option<u32>,

        /// Override the snapshot interval in years (0 disables snapshots)
        #[arg(long)]
        snapshot_interval: Option<u32>,

        /// Directory for snapshots
        #[arg(long, default_value = "snapshots")]
        snapshot_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::new(".").load(path)?,
        None => Scenario::from_samples(),
    };
    let conditions = scenario.build_conditions()?;

    match cli.command {
        Command::Summary => print_summary(&conditions),
        Command::Project {
            years,
            snapshot_interval,
            snapshot_dir,
        } => {
            let years = scenario.projection_years(years);
            let settings = EngineSettings {
                scenario_name: scenario.name.clone(),
                snapshot_interval_years: snapshot_interval
                    .unwrap_or(scenario.snapshot_interval_years),
                snapshot_dir,
            };
            let mut engine = EngineBuilder::new(settings).build();
            let projected = engine.run(&conditions, years)?;
            println!("Scenario '{}' projected {} years:", scenario.name, years);
            for cond in &projected {
                println!(
                    "  {:<20} {:>6}  pop {:>16.2}  ghg {:>18.2} t/yr",
                    cond.region.name, cond.year, cond.pop, cond.ghg_rate
                );
            }
        }
    }
    Ok(())
}

fn print_summary(conditions: &[RegionCondition]) {
    for cond in conditions {
        let per_capita = emissions_per_capita(cond)
            .map(|v| format!("{v:.4}"))
            .unwrap_or_else(|err| format!("n/a ({err})"));
        let per_km2 = emissions_per_square_km(cond)
            .map(|v| format!("{v:.4}"))
            .unwrap_or_else(|err| format!("n/a ({err})"));
        println!(
            "{} [{}] {}: area {:.2} km2, density {:.4}/km2, {} t/person, {} t/km2",
            cond.region.name,
            cond.region.terrain,
            cond.year,
            area(&cond.region.rect),
            population_density(cond),
            per_capita,
            per_km2
        );
    }
    match densest(conditions) {
        Ok(name) => println!("Densest region: {name}"),
        Err(err) => println!("Densest region: n/a ({err})"),
    }
}
