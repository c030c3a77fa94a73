//! CLI application for invoice filename pattern analysis.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{analyze, config, parse};

/// Invoice filename analyzer - Summarize invoice PDF batches from their filenames
///
/// Without a subcommand, analyzes the `emails-project` directory and writes
/// `pdf_pattern_analysis.md` next to the PDFs.
#[derive(Parser)]
#[command(name = "invname")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a directory of invoice PDFs and write the report
    Analyze(analyze::AnalyzeArgs),

    /// Parse individual filenames and show their fields
    Parse(parse::ParseArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so the report on stdout can be piped
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None => analyze::run(analyze::AnalyzeArgs::default(), cli.config.as_deref()),
        Some(Commands::Analyze(args)) => analyze::run(args, cli.config.as_deref()),
        Some(Commands::Parse(args)) => parse::run(args),
        Some(Commands::Config(args)) => config::run(args, cli.config.as_deref()),
    }
}
