//! Filename grammar parser.

use tracing::trace;

use crate::models::filename::ParsedFilename;

use super::patterns::{FILENAME_PATTERN, TYPE_MARKER};

/// Parse an invoice filename into its fields.
///
/// Returns `None` when the name does not match the grammar. That is an
/// expected outcome for stray files, not an error.
pub fn parse_filename(filename: &str) -> Option<ParsedFilename> {
    let Some(caps) = FILENAME_PATTERN.captures(filename) else {
        trace!("no grammar match for {:?}", filename);
        return None;
    };

    Some(ParsedFilename {
        date_raw: caps["date"].to_string(),
        type_marker: TYPE_MARKER.to_string(),
        project_number: caps["project"].to_string(),
        invoice_id: caps["invoice"].to_string(),
        line_item: caps["line"].to_string(),
        vendor: caps["vendor"].to_string(),
        original_filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(
        date: &str,
        project: &str,
        invoice: &str,
        line: &str,
        vendor: &str,
        filename: &str,
    ) -> ParsedFilename {
        ParsedFilename {
            date_raw: date.to_string(),
            type_marker: "DR".to_string(),
            project_number: project.to_string(),
            invoice_id: invoice.to_string(),
            line_item: line.to_string(),
            vendor: vendor.to_string(),
            original_filename: filename.to_string(),
        }
    }

    #[test]
    fn test_parse_hyphenated_project_and_prefixed_invoice() {
        let name = "25.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.pdf";

        assert_eq!(
            parse_filename(name),
            Some(parsed("25.12.18", "418500-10", "I7495694", "7063", "Franklin", name))
        );
    }

    #[test]
    fn test_parse_numeric_invoice() {
        let name = "26.01.02 - DR - 18999 - 8522940 - 7078 - Guillevin.pdf";

        assert_eq!(
            parse_filename(name),
            Some(parsed("26.01.02", "18999", "8522940", "7078", "Guillevin", name))
        );
    }

    #[test]
    fn test_parse_keeps_leading_zeros_and_alpha_line_item() {
        let name = "25.12.19 - DR - 68209 - 021336 - BM14278 - Wesco.pdf";
        let result = parse_filename(name).unwrap();

        assert_eq!(result.invoice_id, "021336");
        assert_eq!(result.line_item, "BM14278");
        assert_eq!(result.vendor, "Wesco");
        assert_eq!(result.to_sortable_date(), "19-12-25");
    }

    #[test]
    fn test_parse_tolerates_separator_spacing() {
        let tight = "25.12.18-DR-418500-10-I7495694-7063-Franklin.pdf";
        let result = parse_filename(tight).unwrap();
        assert_eq!(result.project_number, "418500-10");
        assert_eq!(result.invoice_id, "I7495694");

        let loose = "25.12.18  --  DR -- 18999 - 8522940 -  7078 - Guillevin.pdf";
        let result = parse_filename(loose).unwrap();
        assert_eq!(result.project_number, "18999");
        assert_eq!(result.line_item, "7078");
        assert_eq!(result.original_filename, loose);
    }

    #[test]
    fn test_parse_accepts_out_of_range_date() {
        let result = parse_filename("45.13.99 - DR - 1 - 2 - 3 - Acme.pdf").unwrap();

        assert_eq!(result.date_raw, "45.13.99");
        assert_eq!(result.to_sortable_date(), "99-13-45");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        let rejected = [
            "invalid_filename.pdf",
            "invalid.pdf",
            "",
            // wrong extension
            "25.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.txt",
            // missing marker
            "25.12.18 - 418500-10 - I7495694 - 7063 - Franklin.pdf",
            // wrong marker
            "25.12.18 - DX - 418500-10 - I7495694 - 7063 - Franklin.pdf",
            // four digit year
            "25.12.2018 - DR - 418500-10 - I7495694 - 7063 - Franklin.pdf",
            // single digit day
            "5.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.pdf",
            // digits-only vendor
            "25.12.18 - DR - 418500-10 - I7495694 - 7063 - 12345.pdf",
            // vendor with a space
            "25.12.18 - DR - 418500-10 - I7495694 - 7063 - Home Depot.pdf",
            // lowercase invoice prefix
            "25.12.18 - DR - 418500-10 - i7495694 - 7063 - Franklin.pdf",
            // missing line item
            "25.12.18 - DR - 18999 - I7495694 - Franklin.pdf",
            // trailing text after the suffix
            "25.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.pdf.bak",
            // leading text before the date
            "copy of 25.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.pdf",
        ];

        for name in rejected {
            assert_eq!(parse_filename(name), None, "expected no match for {:?}", name);
        }
    }

    #[test]
    fn test_hyphenated_project_can_absorb_missing_field() {
        // Without a line item the sub-order digits are read as the invoice id.
        let result = parse_filename("25.12.18 - DR - 418500-10 - I7495694 - Franklin.pdf").unwrap();

        assert_eq!(result.project_number, "418500");
        assert_eq!(result.invoice_id, "10");
        assert_eq!(result.line_item, "I7495694");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(parse_filename("25.12.18 - dr - 418500-10 - I7495694 - 7063 - Franklin.pdf").is_none());
        assert!(parse_filename("25.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.PDF").is_none());
        assert!(parse_filename("25.12.18 - dr - 418500-10 - I7495694 - 7063 - Franklin.PDF").is_none());
    }

    #[test]
    fn test_parse_accepts_only_ascii_digits() {
        // Arabic-Indic digits in the date
        assert_eq!(
            parse_filename("\u{0662}\u{0665}.\u{0661}\u{0662}.\u{0661}\u{0668} - DR - 18999 - 8522940 - 7078 - Guillevin.pdf"),
            None
        );
        // Fullwidth digits in the project number
        assert_eq!(
            parse_filename("26.01.02 - DR - \u{FF11}\u{FF18}\u{FF19}\u{FF19}\u{FF19} - 8522940 - 7078 - Guillevin.pdf"),
            None
        );
    }

    #[test]
    fn test_parse_fields_reassemble_original() {
        let names = [
            "25.12.18 - DR - 418500-10 - I7495694 - 7063 - Franklin.pdf",
            "26.01.02 - DR - 18999 - 8522940 - 7078 - Guillevin.pdf",
            "25.12.19 - DR - 68209 - 021336 - BM14278 - Wesco.pdf",
        ];

        for name in names {
            let p = parse_filename(name).unwrap();
            let rebuilt = format!(
                "{} - {} - {} - {} - {} - {}.pdf",
                p.date_raw, p.type_marker, p.project_number, p.invoice_id, p.line_item, p.vendor
            );
            assert_eq!(rebuilt, name);
        }
    }
}
