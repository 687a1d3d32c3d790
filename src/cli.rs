use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compose-gen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a docker-compose.yml by answering a few questions")]
#[command(long_about = "An interactive generator that scaffolds a docker-compose.yml for your \
project. Answer a short sequence of questions (project name, application framework, optional \
database) and get a ready-to-run compose file.

Supported frameworks:
  - Next.js
  - Golang

Supported databases:
  - MySQL
  - MariaDB
  - PostgreSQL
  - None")]
pub struct Cli {
    /// Where to write the generated file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
