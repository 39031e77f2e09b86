//! ZMK Lens - headless compiler and inspector for ZMK keyboard layout files.
//!
//! Parses a physical layout (`.dtsi`) and a keymap (`.keymap`), resolves
//! every binding to a display legend, and reports or exports the compiled
//! model.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zmklens::cli::{ConfigArgs, ExportArgs, InspectArgs, LegendArgs, ValidateArgs};
use zmklens::constants::APP_BINARY_NAME;

/// ZMK Lens - compile and inspect ZMK keyboard layout files
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect a compiled keyboard layout model
    Inspect(InspectArgs),
    /// Resolve binding expressions to legends and key codes
    Legend(LegendArgs),
    /// Validate a layout/keymap source pair
    Validate(ValidateArgs),
    /// Export the compiled model as JSON
    Export(ExportArgs),
    /// Manage the default source pair configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so JSON output stays parseable.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Inspect(args) => args.execute(),
        Commands::Legend(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code().code());
    }
}
