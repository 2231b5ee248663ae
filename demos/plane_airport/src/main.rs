//! plane_airport: planes random-walking between capacity-limited airports.
//!
//! Builds a model from defaults, an optional JSON parameter file, and CLI
//! overrides (in that order of precedence, lowest first), runs it for the
//! configured number of days, and prints where every plane ended up.
//!
//! ```text
//! cargo run -p plane_airport -- --planes 20 --airports 6 --days 1 -v
//! cargo run -p plane_airport -- --config params.json --output ./out
//! ```

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use at_core::{ModelParams, Neighborhood};
use at_output::{CsvWriter, SimOutputObserver};
use at_sim::{NoopObserver, Sim, SimBuilder};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum NeighborhoodArg {
    VonNeumann,
    Moore,
}

impl From<NeighborhoodArg> for Neighborhood {
    fn from(arg: NeighborhoodArg) -> Self {
        match arg {
            NeighborhoodArg::VonNeumann => Neighborhood::VonNeumann,
            NeighborhoodArg::Moore      => Neighborhood::Moore,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "plane_airport")]
#[command(about = "Discrete-time plane/airport grid simulation", long_about = None)]
struct Args {
    /// JSON file with model parameters; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for agent_snapshots.csv and tick_summaries.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Simulated days (1440 ticks each)
    #[arg(short, long)]
    days: Option<u32>,

    #[arg(short, long)]
    planes: Option<usize>,

    #[arg(short, long)]
    airports: Option<usize>,

    /// Ticks on the ground before a plane asks for a runway
    #[arg(long)]
    delay: Option<u32>,

    /// Plane speed in km per minute
    #[arg(long)]
    speed: Option<f64>,

    /// Cell side length in km
    #[arg(long)]
    distance: Option<f64>,

    #[arg(long)]
    min_runways: Option<u32>,

    #[arg(long)]
    max_runways: Option<u32>,

    #[arg(long, value_enum)]
    neighborhood: Option<NeighborhoodArg>,

    /// Master seed for determinism
    #[arg(short, long)]
    seed: Option<u64>,

    /// Snapshot every N ticks (0 disables snapshots)
    #[arg(long)]
    interval: Option<u64>,

    /// -v for debug, -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn params(&self) -> Result<ModelParams> {
        let mut p = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => ModelParams::default(),
        };

        if let Some(v) = self.width        { p.width = v; }
        if let Some(v) = self.height       { p.height = v; }
        if let Some(v) = self.days         { p.days = v; }
        if let Some(v) = self.planes       { p.initial_planes = v; }
        if let Some(v) = self.airports     { p.initial_airports = v; }
        if let Some(v) = self.delay        { p.permission_delay = v; }
        if let Some(v) = self.speed        { p.speed = v; }
        if let Some(v) = self.distance     { p.distance = v; }
        if let Some(v) = self.min_runways  { p.min_runways = v; }
        if let Some(v) = self.max_runways  { p.max_runways = v; }
        if let Some(v) = self.neighborhood { p.neighborhood = v.into(); }
        if let Some(v) = self.seed         { p.seed = v; }
        if let Some(v) = self.interval     { p.output_interval_ticks = v; }
        Ok(p)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("installing tracing subscriber")?;

    let params = args.params()?;
    info!(
        grid = %format!("{}x{}", params.width, params.height),
        planes = params.initial_planes,
        airports = params.initial_airports,
        days = params.days,
        seed = params.seed,
        minutes_per_cell = params.ticks_per_cell(),
        "building model"
    );

    let mut sim = SimBuilder::new(params).build()?;
    for a in &sim.world.airports {
        info!(airport = %a.id, cell = %a.cell, runways = a.capacity(), "airport");
    }

    let started = Instant::now();
    match &args.output {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            sim.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                warn!("output error: {e}");
            }
            info!(dir = %dir.display(), "output written");
        }
        None => sim.run(&mut NoopObserver)?,
    }
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "done");

    print_planes(&sim);
    Ok(())
}

fn print_planes(sim: &Sim) {
    println!();
    println!("{:>5}  {:<10}  {:>8}  {:>8}  {:>8}  {:>5}", "plane", "state", "cell", "origin", "dest", "trips");
    for p in &sim.world.planes {
        println!(
            "{:>5}  {:<10}  {:>8}  {:>8}  {:>8}  {:>5}",
            p.id.0,
            p.state.as_str(),
            p.cell.to_string(),
            p.origin.to_string(),
            p.destination.to_string(),
            p.trips,
        );
    }
    let trips: u32 = sim.world.planes.iter().map(|p| p.trips).sum();
    println!();
    println!("{} ticks, {} landings, clock {}", sim.clock().steps.0, trips, sim.clock());
}
