//! Core library for invoice filename analysis.
//!
//! This crate provides:
//! - The invoice filename grammar (`DD.MM.YY - DR - PROJECT - INVOICE - LINE - VENDOR.pdf`)
//! - Batch analysis with per-vendor, date, project and invoice statistics
//! - Markdown report rendering
//! - Filesystem helpers for listing PDFs and writing the report

pub mod analysis;
pub mod error;
pub mod filename;
pub mod models;
pub mod report;
pub mod source;

pub use analysis::analyze;
pub use error::{InvnameError, Result};
pub use filename::{parse_filename, sortable_date};
pub use models::analysis::{AnalysisResult, Statistics, VendorCount, VendorCounts};
pub use models::config::InvnameConfig;
pub use models::filename::ParsedFilename;
pub use report::render_report;
pub use source::{list_pdf_filenames, write_report};
