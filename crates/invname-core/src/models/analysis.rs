//! Batch analysis results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::filename::ParsedFilename;

/// Outcome of analyzing one batch of filenames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of candidate files.
    pub total_pdfs: usize,

    /// Files that matched the grammar.
    pub successfully_parsed: usize,

    /// Files that did not match.
    pub failed_parses: usize,

    /// Non-matching filenames, in input order.
    pub failed_filenames: Vec<String>,

    /// Parsed filenames, in input order.
    pub patterns: Vec<ParsedFilename>,

    /// Aggregates over `patterns`.
    pub statistics: Statistics,
}

/// Aggregate statistics over parsed filenames.
///
/// The `unique_*` sets iterate in lexicographic order. Dates sort on the raw
/// `DD.MM.YY` text, which is not chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub unique_vendors: BTreeSet<String>,
    pub unique_dates: BTreeSet<String>,
    pub unique_projects: BTreeSet<String>,
    pub unique_invoice_ids: BTreeSet<String>,
    pub vendor_counts: VendorCounts,
}

impl Statistics {
    /// Lexicographically smallest and largest raw date, if any.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        let first = self.unique_dates.first()?;
        let last = self.unique_dates.last()?;
        Some((first.as_str(), last.as_str()))
    }
}

/// Occurrences of a single vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorCount {
    pub vendor: String,
    pub count: usize,
}

/// Per-vendor tally that iterates in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorCounts(Vec<VendorCount>);

impl VendorCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `vendor`.
    pub fn record(&mut self, vendor: &str) {
        match self.0.iter_mut().find(|entry| entry.vendor == vendor) {
            Some(entry) => entry.count += 1,
            None => self.0.push(VendorCount {
                vendor: vendor.to_string(),
                count: 1,
            }),
        }
    }

    pub fn get(&self, vendor: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|entry| entry.vendor == vendor)
            .map(|entry| entry.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VendorCount> {
        self.0.iter()
    }

    /// Number of distinct vendors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|entry| entry.count).sum()
    }
}
