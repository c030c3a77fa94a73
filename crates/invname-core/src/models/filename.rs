//! Parsed invoice filename.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filename::sortable_date;

/// Fields extracted from one filename that matched the grammar.
///
/// Values are kept as text exactly as they appeared, so leading zeros in
/// invoice ids and the raw `DD.MM.YY` date survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilename {
    /// Date in `DD.MM.YY` form, as found.
    pub date_raw: String,

    /// Document-type marker, always `DR`.
    pub type_marker: String,

    /// Project or order number, optionally with a `-NN` sub-order.
    pub project_number: String,

    /// Invoice identifier (optional uppercase prefix, then digits).
    pub invoice_id: String,

    /// Line item code, same shape as the invoice id.
    pub line_item: String,

    /// Vendor name, letters only.
    pub vendor: String,

    /// The unmodified source filename.
    pub original_filename: String,
}

impl ParsedFilename {
    /// Date reordered to `YY-MM-DD`.
    pub fn to_sortable_date(&self) -> String {
        sortable_date(&self.date_raw)
    }
}

impl fmt::Display for ParsedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} | Project: {} | Invoice: {} | Line: {} | Vendor: {}",
            self.to_sortable_date(),
            self.project_number,
            self.invoice_id,
            self.line_item,
            self.vendor
        )
    }
}
