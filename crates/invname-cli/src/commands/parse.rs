//! Parse command - show the fields of individual filenames.

use std::path::Path;

use clap::Args;
use console::style;
use serde::Serialize;

use invname_core::{parse_filename, ParsedFilename};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Filenames (or paths) to parse
    #[arg(required = true)]
    filenames: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// One line per filename
    Text,
    /// JSON array
    Json,
}

/// Parse outcome for one argument.
#[derive(Serialize)]
struct ParseOutcome<'a> {
    filename: &'a str,
    matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sortable_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ParsedFilename>,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let outcomes: Vec<ParseOutcome> = args
        .filenames
        .iter()
        .map(|arg| {
            let filename = bare_name(arg);
            let fields = parse_filename(filename);
            ParseOutcome {
                filename,
                matched: fields.is_some(),
                sortable_date: fields.as_ref().map(|p| p.to_sortable_date()),
                fields,
            }
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
        OutputFormat::Text => {
            for outcome in &outcomes {
                match &outcome.fields {
                    Some(parsed) => {
                        println!("{} {}", style("✓").green(), outcome.filename);
                        println!("   {}", parsed);
                    }
                    None => {
                        println!(
                            "{} {}: does not match the expected pattern",
                            style("✗").red(),
                            outcome.filename
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

/// Strip any directory part so shell globs like `scans/*.pdf` work.
fn bare_name(arg: &str) -> &str {
    Path::new(arg)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(arg)
}
