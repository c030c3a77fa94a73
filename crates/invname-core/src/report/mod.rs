//! Report rendering.

mod markdown;

pub use markdown::{render_report, FAILED_SECTION_HEADER};
