//! Invoice filename grammar.

mod dates;
mod parser;
pub mod patterns;

pub use dates::sortable_date;
pub use parser::parse_filename;
pub use patterns::{PDF_SUFFIX, TYPE_MARKER};
