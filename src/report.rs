use std::io::Write;

use crate::error::Result;
use crate::record::EdgeRecord;

/// Sort records by sensitivity, most sensitive first.
///
/// The sort is stable, so records with equal sensitivity keep their input
/// order and reports are deterministic.
pub fn sort_by_sensitivity(records: &mut [EdgeRecord]) {
    records.sort_by(|a, b| {
        b.sensitivity
            .partial_cmp(&a.sensitivity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Write the first `number` records to `out`, one report line each, and
/// return how many were written.
///
/// `number` is what the user asked for: zero or negative writes nothing,
/// more than available writes every record.
pub fn write_top<W: Write>(out: &mut W, records: &[EdgeRecord], number: i64) -> Result<usize> {
    // Negative asks for nothing; a count usize cannot hold means everything
    let limit = usize::try_from(number.max(0)).unwrap_or(usize::MAX);
    let mut written = 0;
    for record in records.iter().take(limit) {
        writeln!(out, "{}", record)?;
        written += 1;
    }
    Ok(written)
}
