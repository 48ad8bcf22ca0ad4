use anyhow::Result;
use clap::{Parser, Subcommand};
use jobtrack_core::{JobStatus, NewApplication, TrackerConfig};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(about = "Job application tracker", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Print tracked applications in insertion order
    List {
        /// Only show applications with this status
        #[arg(short, long)]
        status: Option<JobStatus>,
    },
    /// Print application counters
    Stats,
    /// Record a new application (needs a data_file)
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(short, long, default_value = "applied")]
        status: JobStatus,
        /// Defaults to today's date
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = TrackerConfig::resolve_path(args.config.as_deref());
    let config = match TrackerConfig::load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    let mut source = config.job_source();
    info!("Using job source: {}", source.describe());

    let mut out = std::io::stdout().lock();
    match args.command {
        Command::List { status } => commands::list(source.as_ref(), status, &mut out),
        Command::Stats => commands::stats(source.as_ref(), &mut out),
        Command::Add { title, company, status, date } => {
            let date = date.unwrap_or_else(commands::today);
            let application = NewApplication::new(title, company, date).with_status(status);
            commands::add(source.as_mut(), application, &mut out)
        }
    }
}
