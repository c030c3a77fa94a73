//! Aggregation over parsed filenames.

use crate::models::analysis::Statistics;
use crate::models::filename::ParsedFilename;

/// Collect distinct values and the per-vendor tally.
pub fn compute_statistics(patterns: &[ParsedFilename]) -> Statistics {
    let mut stats = Statistics::default();

    for p in patterns {
        stats.unique_vendors.insert(p.vendor.clone());
        stats.unique_dates.insert(p.date_raw.clone());
        stats.unique_projects.insert(p.project_number.clone());
        stats.unique_invoice_ids.insert(p.invoice_id.clone());
        stats.vendor_counts.record(&p.vendor);
    }

    stats
}
