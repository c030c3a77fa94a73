//! Batch analysis of invoice filenames.

mod statistics;

pub use statistics::compute_statistics;

use tracing::{debug, info};

use crate::filename::parse_filename;
use crate::models::analysis::AnalysisResult;

/// Parse every filename and aggregate the matches.
///
/// Input order is preserved in both the parsed and the failed lists. No
/// filesystem access happens here; callers supply the names.
pub fn analyze<I, S>(filenames: I) -> AnalysisResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut patterns = Vec::new();
    let mut failed_filenames = Vec::new();

    for name in filenames {
        let name = name.as_ref();
        match parse_filename(name) {
            Some(parsed) => patterns.push(parsed),
            None => {
                debug!("Filename does not match the grammar: {}", name);
                failed_filenames.push(name.to_string());
            }
        }
    }

    let statistics = compute_statistics(&patterns);
    let result = AnalysisResult {
        total_pdfs: patterns.len() + failed_filenames.len(),
        successfully_parsed: patterns.len(),
        failed_parses: failed_filenames.len(),
        failed_filenames,
        patterns,
        statistics,
    };

    info!(
        "Analyzed {} files: {} parsed, {} failed",
        result.total_pdfs, result.successfully_parsed, result.failed_parses
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FRANKLIN: &str = "25.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.pdf";
    const GUILLEVIN: &str = "26.01.02 - DR - 18999 - 8522940 - 7078 - Guillevin.pdf";
    const WESCO: &str = "25.12.19 - DR - 68209 - 021336 - BM14278 - Wesco.pdf";

    fn assert_invariants(result: &AnalysisResult, input_len: usize) {
        assert_eq!(result.total_pdfs, input_len);
        assert_eq!(result.successfully_parsed + result.failed_parses, result.total_pdfs);
        assert_eq!(result.patterns.len(), result.successfully_parsed);
        assert_eq!(result.failed_filenames.len(), result.failed_parses);
        assert_eq!(result.statistics.vendor_counts.total(), result.successfully_parsed);

        let counted: Vec<&str> = result
            .statistics
            .vendor_counts
            .iter()
            .map(|c| c.vendor.as_str())
            .collect();
        assert_eq!(counted.len(), result.statistics.unique_vendors.len());
        for vendor in &counted {
            assert!(result.statistics.unique_vendors.contains(*vendor));
        }
    }

    #[test]
    fn test_analyze_mixed_batch() {
        let result = analyze([FRANKLIN, "invalid.pdf"]);

        assert_eq!(result.total_pdfs, 2);
        assert_eq!(result.successfully_parsed, 1);
        assert_eq!(result.failed_parses, 1);
        assert_eq!(result.patterns[0].vendor, "Franklin");
        assert_eq!(result.patterns[0].project_number, "418500-10");
        assert_eq!(result.failed_filenames, vec!["invalid.pdf".to_string()]);
        assert_invariants(&result, 2);
    }

    #[test]
    fn test_analyze_preserves_input_order() {
        let input = vec![
            WESCO.to_string(),
            "b.pdf".to_string(),
            FRANKLIN.to_string(),
            "a.pdf".to_string(),
            GUILLEVIN.to_string(),
        ];
        let result = analyze(&input);

        let originals: Vec<_> = result.patterns.iter().map(|p| p.original_filename.as_str()).collect();
        assert_eq!(originals, vec![WESCO, FRANKLIN, GUILLEVIN]);
        assert_eq!(result.failed_filenames, vec!["b.pdf", "a.pdf"]);
        assert_invariants(&result, input.len());
    }

    #[test]
    fn test_analyze_empty_batch() {
        let result = analyze(Vec::<String>::new());

        assert_eq!(result, AnalysisResult::default());
        assert_invariants(&result, 0);
    }

    #[test]
    fn test_analyze_all_failures() {
        let input = ["notes.pdf", "scan 001.pdf", "25.12.18 - DR - 1 - 2 - 3 - Acme.PDF"];
        let result = analyze(input);

        assert_eq!(result.successfully_parsed, 0);
        assert_eq!(result.failed_filenames, input.to_vec());
        assert!(result.statistics.unique_vendors.is_empty());
        assert_invariants(&result, input.len());
    }

    #[test]
    fn test_analyze_duplicate_names_counted_twice() {
        let result = analyze([FRANKLIN, FRANKLIN, "x.pdf", "x.pdf"]);

        assert_eq!(result.successfully_parsed, 2);
        assert_eq!(result.failed_parses, 2);
        assert_eq!(result.statistics.vendor_counts.get("Franklin"), Some(2));
        assert_eq!(result.statistics.unique_vendors.len(), 1);
        assert_invariants(&result, 4);
    }
}
