//! Markdown rendering of an analysis result.

use crate::models::analysis::{AnalysisResult, Statistics};
use crate::models::filename::ParsedFilename;

/// Header of the section listing unmatched files.
pub const FAILED_SECTION_HEADER: &str = "## Files That Failed to Parse";

const GRAMMAR_LINE: &str = "DD.MM.YY - DR - PROJECT_NUMBER - INVOICE_ID - LINE_ITEM - VENDOR.pdf";

const GRAMMAR_COMPONENTS: [&str; 6] = [
    "**Date (DD.MM.YY)**: Day, month and 2-digit year",
    "**DR**: Document-type marker, always the literal `DR`",
    "**Project Number**: Project or order number, optionally with a `-NN` sub-order",
    "**Invoice ID**: Invoice identifier, digits with an optional uppercase prefix",
    "**Line Item**: Line item code, same shape as the invoice ID",
    "**Vendor**: Vendor or supplier name, letters only",
];

/// Render the full report.
///
/// Output depends only on `result`; the same input always yields the same
/// text.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str("# PDF Filename Pattern Analysis Report\n\n");

    render_summary(&mut output, result);
    render_grammar(&mut output);
    render_statistics(&mut output, &result.statistics);

    output.push_str("## Detailed File Breakdown\n\n");
    for pattern in &result.patterns {
        render_file(&mut output, pattern);
    }

    if !result.failed_filenames.is_empty() {
        output.push_str(&format!("{}\n\n", FAILED_SECTION_HEADER));
        output.push_str("The following files did not match the expected pattern:\n\n");
        for filename in &result.failed_filenames {
            output.push_str(&format!("- `{}`\n", filename));
        }
    }

    output
}

fn render_summary(output: &mut String, result: &AnalysisResult) {
    output.push_str("## Summary\n\n");
    output.push_str(&format!("- **Total PDF files:** {}\n", result.total_pdfs));
    output.push_str(&format!("- **Successfully parsed:** {}\n", result.successfully_parsed));
    output.push_str(&format!("- **Failed to parse:** {}\n", result.failed_parses));
    output.push('\n');
}

fn render_grammar(output: &mut String) {
    output.push_str("## Pattern Structure\n\n");
    output.push_str("The PDF filenames follow this pattern:\n");
    output.push_str("```\n");
    output.push_str(GRAMMAR_LINE);
    output.push_str("\n```\n\n");

    output.push_str("### Pattern Components:\n");
    for (i, component) in GRAMMAR_COMPONENTS.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, component));
    }
    output.push('\n');
}

fn render_statistics(output: &mut String, stats: &Statistics) {
    output.push_str("## Statistics\n\n");

    output.push_str("### Vendors\n");
    output.push_str(&format!("- **Unique vendors:** {}\n", stats.unique_vendors.len()));
    output.push_str(&format!("- **Vendor list:** {}\n", join(&stats.unique_vendors)));
    output.push_str("\n**Vendor distribution:**\n");
    for entry in stats.vendor_counts.iter() {
        output.push_str(&format!("- {}: {} file(s)\n", entry.vendor, entry.count));
    }
    output.push('\n');

    let range = match stats.date_range() {
        Some((min, max)) => format!("{} to {}", min, max),
        None => "n/a".to_string(),
    };
    output.push_str("### Dates\n");
    output.push_str(&format!("- **Unique dates:** {}\n", stats.unique_dates.len()));
    output.push_str(&format!("- **Date range:** {}\n", range));
    output.push_str(&format!("- **Dates:** {}\n", join(&stats.unique_dates)));
    output.push('\n');

    output.push_str("### Projects\n");
    output.push_str(&format!("- **Unique projects:** {}\n", stats.unique_projects.len()));
    output.push_str(&format!("- **Projects:** {}\n", join(&stats.unique_projects)));
    output.push('\n');

    output.push_str("### Invoice IDs\n");
    output.push_str(&format!("- **Unique invoice IDs:** {}\n", stats.unique_invoice_ids.len()));
    output.push_str(&format!("- **Invoice IDs:** {}\n", join(&stats.unique_invoice_ids)));
    output.push('\n');
}

fn render_file(output: &mut String, pattern: &ParsedFilename) {
    output.push_str(&format!("### {}\n", pattern.original_filename));
    output.push_str(&format!("- Date: `{}`\n", pattern.date_raw));
    output.push_str(&format!("- Sortable date: `{}`\n", pattern.to_sortable_date()));
    output.push_str(&format!("- Marker: `{}`\n", pattern.type_marker));
    output.push_str(&format!("- Project: `{}`\n", pattern.project_number));
    output.push_str(&format!("- Invoice ID: `{}`\n", pattern.invoice_id));
    output.push_str(&format!("- Line Item: `{}`\n", pattern.line_item));
    output.push_str(&format!("- Vendor: `{}`\n", pattern.vendor));
    output.push('\n');
}

fn join<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
