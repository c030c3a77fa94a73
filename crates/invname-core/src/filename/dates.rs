//! Date reordering for filename dates.

/// Reorder a raw `DD.MM.YY` date into `YY-MM-DD`.
///
/// Pure string shuffling: no calendar checks and no century inference, so
/// `31.12.99` becomes `99-12-31`. Components are zero-padded to two
/// characters.
pub fn sortable_date(date_raw: &str) -> String {
    let mut parts = date_raw.splitn(3, '.');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();

    format!("{:0>2}-{:0>2}-{:0>2}", year, month, day)
}
