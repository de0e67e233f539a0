//! Reader for plain-text delivery manifests.
//!
//! A manifest starts with a header line, which is ignored. Every following
//! non-empty line describes one delivery:
//!
//! ```text
//! <id> (<pickup x>,<pickup y>) (<dropoff x>,<dropoff y>)
//! ```
//!
//! Coordinates are decimals with at least one digit on each side of the
//! point and an optional leading minus sign. Blank lines are skipped; any
//! other line that does not match aborts the whole read.

#![forbid(unsafe_code)]

mod error;
mod line;
mod reader;

pub use error::ManifestError;
pub use reader::{parse_manifest, read_manifest};
