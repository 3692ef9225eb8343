// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! StarClock command-line interface.
//!
//! `run` drives the console clock at a fixed frame rate, `config` shows and
//! updates the persisted observer longitude, and `info` describes the
//! displayed quantities.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use starclock::{
    animate, calc, config::DEFAULT_PATH, console, Longitude, ObserverConfig, SystemClock, Tick,
    DEFAULT_FPS,
};

/// Real-time astronomical clock for an observer's longitude.
#[derive(Parser)]
#[command(
    name = "starclock",
    version,
    about = "Local time, UTC, Julian Date and Local Sidereal Time, updated in real time"
)]
struct Cli {
    /// Path to the observer configuration file.
    #[arg(short, long, global = true, default_value = DEFAULT_PATH)]
    config: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Command {
    /// Run the console clock.
    Run(RunArgs),
    /// Show the configured longitude and prompt for a replacement.
    Config,
    /// Print program information.
    Info,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
struct RunArgs {
    /// Target display refresh rate in frames per second.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: f64,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run(args) => run_clock(&cli.config, args.fps),
        Command::Config => edit_longitude(&cli.config),
        Command::Info => print_info(),
    }
}

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("starclock={level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Drive the console clock until the process is interrupted.
fn run_clock(path: &Path, fps: f64) -> Result<()> {
    anyhow::ensure!(fps.is_finite() && fps > 0.0, "fps must be a positive number");

    let config = ObserverConfig::load_or_default(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    let longitude = config.longitude;

    let mut out = io::stdout().lock();
    console::initialize(&mut out).context("preparing the terminal")?;
    animate(
        || {
            let readings = calc(&SystemClock, longitude);
            console::update(&mut out, &readings).context("updating the display")?;
            Ok(Tick::Continue)
        },
        fps,
    )
}

/// Show the current longitude and store a replacement read from stdin.
fn edit_longitude(path: &Path) -> Result<()> {
    let config = ObserverConfig::load_or_default(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    println!("Current longitude setting: {}", config.longitude);

    print!("Enter new longitude: ");
    io::stdout().flush().context("flushing the prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading the new longitude")?;
    let longitude: Longitude = line.parse()?;

    ObserverConfig { longitude }
        .store(path)
        .with_context(|| format!("storing configuration to {}", path.display()))?;
    println!("Longitude was updated to {longitude}.");
    Ok(())
}

/// Print the program name, version and a description of the readings.
fn print_info() -> Result<()> {
    println!(
        "\
{name} {version}

A simple application for observational astronomy that displays:

 - current local time
 - current Coordinated Universal Time
 - current Julian Date
 - current Local Sidereal Time

All values are recalculated and updated in real time.

Julian Date is computed with the Fliegel & Van Flandern calendar
algorithm. Local Sidereal Time uses the USNO approximation for
Greenwich Apparent Sidereal Time, shifted by the observer's east
longitude.

Accurate LST requires the observer's longitude; review and change
it with `{name} config`.",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
    Ok(())
}
