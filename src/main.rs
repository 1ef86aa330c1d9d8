use std::io::{stdout, Write};
use std::path::PathBuf;
use clap::Parser;
use gradelib::checker::ProcessRunner;
use gradelib::config::{load_config, GraderConfig};
use gradelib::grader::Grader;
use tracing::{metadata::LevelFilter, Level};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

#[cfg(debug_assertions)]
const DEBUG_DEFAULT: bool = true;

#[cfg(not(debug_assertions))]
const DEBUG_DEFAULT: bool = false;

#[derive(Parser, Debug)]
#[command(about = String::from("Driver for the cache lab: runs test-csim and test-shift and reports a score"))]
struct Args {
    /// Emit the autoresult string for Autolab
    #[arg(short = 'A', long)]
    autograde: bool,

    /// JSON file overriding the score table, miss curves or checker names
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing test-csim and test-shift
    #[arg(short = 'C', long, default_value = ".")]
    checker_dir: PathBuf,

    /// Print the report as JSON after the summary
    #[arg(short, long)]
    json: bool,

    #[arg(short, long, default_value_t = DEBUG_DEFAULT)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .with(LevelFilter::from_level(level))
        .init();

    let config = match &args.config {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => GraderConfig::default(),
    };
    tracing::debug!("Grading configuration: {config:?}");

    let grader = Grader::new(config, args.checker_dir.clone(), ProcessRunner);
    let mut out = stdout().lock();
    let report = grader.grade(&mut out, args.autograde).map_err(|e| e.to_string())?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| format!("Couldn't serialise the report {e}"))?;
        writeln!(out, "{json}").map_err(|e| e.to_string())?;
    }
    Ok(())
}
