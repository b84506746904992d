//! # sarank
//!
//! Ranks the edge sensitivity analysis in an osmABTS report.
//!
//! The osmABTS traffic simulator can remove network edges one at a time and
//! re-run its travel time computation, printing one marked line per edge:
//!
//! ```text
//! SA: <street>/<end 1>/<end 2>/<new time>/<sensitivity>
//! ```
//!
//! sarank extracts those lines from a report, sorts them by sensitivity
//! (most sensitive first, ties keeping input order) and prints the top N,
//! one line per edge:
//!
//! ```text
//! <space><street> / <end 1> / <end 2> / <sensitivity with 6 decimals><space>
//! ```
//!
//! ## As a Command
//!
//! ```bash
//! sarank report.txt --number 10
//! osmabts map.osm --sensitivity | sarank -
//! ```
//!
//! ## As a Library
//!
//! ```rust
//! use sarank::{collect_records, sort_by_sensitivity, write_top};
//!
//! let report = "\
//! SA: High Street/junction of High Street and Mill Lane/end point of High Street/12.25/0.034
//! SA: Mill Lane/junction of High Street and Mill Lane/end point of Mill Lane/11.90/0.005
//! ";
//! let mut records = collect_records(report.as_bytes()).unwrap();
//! sort_by_sensitivity(&mut records);
//!
//! let mut out = Vec::new();
//! write_top(&mut out, &records, 15).unwrap();
//! let rendered = String::from_utf8(out).unwrap();
//! assert!(rendered.starts_with(" High Street / "));
//! ```

pub mod error;
pub mod input;
pub mod record;
pub mod report;

pub use error::{Error, Result};
pub use record::{collect_records, EdgeRecord, SA_PREFIX};
pub use report::{sort_by_sensitivity, write_top};
