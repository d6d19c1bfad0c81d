use anyhow::Result;
use clap::Parser;
use islandsim_lib::app::settings;
use islandsim_lib::app::{PauseSignal, SimulationRunner};
use islandsim_lib::model::config::{AppConfig, ReportFormat, RunMode, Speed};
use islandsim_lib::model::metrics::init_logging;
use islandsim_lib::model::state::Species;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Island ecosystem simulator", long_about = None)]
struct Args {
    /// Config file path; defaults are used when it does not exist
    #[arg(short, long, default_value = "island.toml")]
    config: PathBuf,

    /// Number of days to simulate
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Island area shared by all plants (at least 10000)
    #[arg(long)]
    capacity: Option<f64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between days
    #[arg(long, value_enum)]
    speed: Option<SpeedArg>,

    /// Report only the final day (auto) or every day (step)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Starting count for one species, e.g. `--population fox=3`; repeatable
    #[arg(short, long = "population", value_parser = parse_population)]
    populations: Vec<(Species, usize)>,

    /// Do not read 'p' from stdin to pause and resume
    #[arg(long)]
    no_pause_listener: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SpeedArg {
    Slow,
    Normal,
    Fast,
    Instant,
}

impl From<SpeedArg> for Speed {
    fn from(arg: SpeedArg) -> Self {
        match arg {
            SpeedArg::Slow => Speed::Slow,
            SpeedArg::Normal => Speed::Normal,
            SpeedArg::Fast => Speed::Fast,
            SpeedArg::Instant => Speed::Instant,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Auto,
    Step,
}

impl From<ModeArg> for RunMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => RunMode::Auto,
            ModeArg::Step => RunMode::Step,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn parse_population(arg: &str) -> std::result::Result<(Species, usize), String> {
    settings::parse_population(arg).map_err(|e| e.to_string())
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(rounds) = self.rounds {
            config.island.rounds = rounds;
        }
        if let Some(capacity) = self.capacity {
            config.island.capacity = capacity;
        }
        if self.seed.is_some() {
            config.island.seed = self.seed;
        }
        if let Some(speed) = self.speed {
            config.run.speed = speed.into();
        }
        if let Some(mode) = self.mode {
            config.run.mode = mode.into();
        }
        if let Some(format) = self.format {
            config.run.format = format.into();
        }
        for &(species, count) in &self.populations {
            config.population.set(species, count);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = settings::load_config(&args.config)?;
    args.apply(&mut config);

    let pause = PauseSignal::new();
    let mut runner = SimulationRunner::new(config, pause.clone(), std::io::stdout())?;
    if !args.no_pause_listener {
        let _listener = pause.spawn_stdin_listener()?;
        eprintln!("Simulation in progress... Press 'p' + Enter at any time to pause/resume.");
    }

    runner.run().await?;
    Ok(())
}
