use std::fmt;
use std::io::BufRead;

use crate::error::{Error, Result};

/// Marker osmABTS puts in front of every edge sensitivity line.
pub const SA_PREFIX: &str = "SA: ";

/// One edge sensitivity measurement from an osmABTS report.
///
/// The simulation removes one street (edge) from the network at a time and
/// re-runs the travel time computation. `new_time` is the mean travel time
/// without the edge; `sensitivity` is the relative change against the
/// baseline and is the ranking key.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    /// Street name of the removed edge
    pub street: String,
    /// First end of the edge, as a junction description
    pub end1: String,
    /// Second end of the edge, as a junction description
    pub end2: String,
    /// Mean travel time with the edge removed
    pub new_time: f64,
    /// Relative travel time change, highest ranks first
    pub sensitivity: f64,
}

impl EdgeRecord {
    #[inline]
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        end1: impl Into<String>,
        end2: impl Into<String>,
        new_time: f64,
        sensitivity: f64,
    ) -> Self {
        Self {
            street: street.into(),
            end1: end1.into(),
            end2: end2.into(),
            new_time,
            sensitivity,
        }
    }

    /// Parse one report line.
    ///
    /// Lines without the `SA: ` marker are not sensitivity records and yield
    /// `Ok(None)`. A marked line must split on `/` into exactly five fields,
    /// the last two numeric; anything else fails the whole run with an error
    /// naming `line_no` (1-based).
    pub fn parse_line(raw: &str, line_no: usize) -> Result<Option<Self>> {
        let rest = match raw.strip_prefix(SA_PREFIX) {
            Some(rest) => rest,
            None => return Ok(None),
        };

        let fields: Vec<&str> = rest.split('/').collect();
        if fields.len() != 5 {
            return Err(Error::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        Ok(Some(Self {
            street: fields[0].trim().to_string(),
            end1: fields[1].trim().to_string(),
            end2: fields[2].trim().to_string(),
            new_time: parse_float(fields[3], line_no)?,
            sensitivity: parse_float(fields[4], line_no)?,
        }))
    }
}

/// Renders the record as one report line, the sensitivity with six
/// fractional digits, a single space padding both ends.
impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " {} / {} / {} / {:.6} ",
            self.street, self.end1, self.end2, self.sensitivity
        )
    }
}

fn parse_float(field: &str, line_no: usize) -> Result<f64> {
    field.trim().parse().map_err(|source| Error::Float {
        line: line_no,
        field: field.trim().to_string(),
        source,
    })
}

/// Read a whole report, keeping every sensitivity record in input order.
///
/// Non-record lines are skipped silently. The first malformed record aborts
/// the read; nothing parsed so far is returned in that case.
pub fn collect_records<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = EdgeRecord::parse_line(&line, idx + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}
