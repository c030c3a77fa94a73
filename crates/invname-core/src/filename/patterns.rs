//! Regex fragments for the invoice filename grammar.
//!
//! Each field shape is kept as its own fragment so it can be checked in
//! isolation; [`FILENAME_PATTERN`] stitches them together in field order.

use lazy_static::lazy_static;
use regex::Regex;

/// Document-type marker expected between the date and the project number.
pub const TYPE_MARKER: &str = "DR";

/// Required file suffix, lowercase only.
pub const PDF_SUFFIX: &str = ".pdf";

// DD.MM.YY, no range checks
pub const DATE_FRAGMENT: &str = r"[0-9]{2}\.[0-9]{2}\.[0-9]{2}";

// Order number with an optional sub-order: 18999 or 418500-10
pub const PROJECT_FRAGMENT: &str = r"[0-9]+(?:-[0-9]+)?";

// Invoice id and line item share this shape: 8522940, I7495694, BM14278
pub const IDENTIFIER_FRAGMENT: &str = r"[A-Z]*[0-9]+";

pub const VENDOR_FRAGMENT: &str = r"[A-Za-z]+";

// One or more dashes, whitespace allowed on either side
pub const SEPARATOR_FRAGMENT: &str = r"\s*-+\s*";

lazy_static! {
    /// Full filename grammar, anchored at both ends.
    ///
    /// `DD.MM.YY - DR - PROJECT - INVOICE_ID - LINE_ITEM - VENDOR.pdf`
    pub static ref FILENAME_PATTERN: Regex = Regex::new(&format!(
        concat!(
            r"^(?P<date>{date}){sep}",
            r"{marker}{sep}",
            r"(?P<project>{project}){sep}",
            r"(?P<invoice>{ident}){sep}",
            r"(?P<line>{ident}){sep}",
            r"(?P<vendor>{vendor}){suffix}$",
        ),
        date = DATE_FRAGMENT,
        sep = SEPARATOR_FRAGMENT,
        marker = TYPE_MARKER,
        project = PROJECT_FRAGMENT,
        ident = IDENTIFIER_FRAGMENT,
        vendor = VENDOR_FRAGMENT,
        suffix = regex::escape(PDF_SUFFIX),
    ))
    .unwrap();
}
