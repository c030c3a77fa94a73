//! Analyze command - summarize a directory of invoice PDFs.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{info, warn};

use invname_core::{analyze, list_pdf_filenames, render_report, write_report};

use super::load_config;

/// Arguments for the analyze command.
#[derive(Args, Default)]
pub struct AnalyzeArgs {
    /// Directory containing the invoice PDFs (default: emails-project)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Print the report without saving it
    #[arg(long)]
    no_write: bool,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(dir) = args.dir {
        config.input.directory = dir;
    }

    let dir = &config.input.directory;

    // A missing directory is reported, not treated as a failure
    if !dir.is_dir() {
        println!(
            "{} Directory not found: {}",
            style("Error:").red(),
            dir.display()
        );
        warn!("Input directory missing: {}", dir.display());
        return Ok(());
    }

    println!("Analyzing PDF files in: {}\n", dir.display());

    let filenames = list_pdf_filenames(dir)?;
    let analysis = analyze(&filenames);
    let report = render_report(&analysis);

    if config.report.print_to_stdout {
        println!("{}", report);
    }

    info!(
        "Analyzed {} files in {:?}",
        analysis.total_pdfs,
        start.elapsed()
    );

    if args.no_write {
        return Ok(());
    }

    let report_path = config.report_path();
    write_report(&report_path, &report)?;

    println!(
        "\n{} Report saved to: {}",
        style("✓").green(),
        report_path.display()
    );

    Ok(())
}
