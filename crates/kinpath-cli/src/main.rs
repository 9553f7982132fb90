//! Kinpath CLI - Command-line interface for Kinpath
//!
//! This is the main entry point for users interacting with Kinpath.
//! It provides commands for exploring how you are related to the people
//! in a family dataset, and for serving those answers to a renderer.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "kinpath")]
#[command(author = "Kinpath Contributors")]
#[command(version)]
#[command(about = "Find and draw how you are related to anyone in your family", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Family dataset to use instead of the configured one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Kinpath in a directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List everyone you can look up
    People,

    /// Describe how you are related to someone
    Path {
        /// Person ID or exact name
        target: String,

        /// Output the full render frame as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the drawable layout for the path to someone
    Layout {
        /// Person ID or exact name
        target: String,

        /// Surface width in pixels (defaults to the configured width)
        #[arg(short, long)]
        width: Option<f64>,
    },

    /// Show dataset status and statistics
    Status,

    /// Export the whole family graph
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve JSON-RPC requests over stdin/stdout
    Serve,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Dot,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let data = cli.data.as_deref();
    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::People => commands::people(data),
        Commands::Path { target, json } => commands::path(data, &target, json),
        Commands::Layout { target, width } => commands::layout(data, &target, width),
        Commands::Status => commands::status(data),
        Commands::Export { format, output } => commands::export(data, format, output.as_deref()),
        Commands::Serve => commands::serve(data),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
