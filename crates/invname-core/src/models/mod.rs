//! Data models for parsed filenames, analysis results, and configuration.

pub mod analysis;
pub mod config;
pub mod filename;
