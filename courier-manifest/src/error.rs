//! Errors raised while reading a delivery manifest.

use camino::Utf8PathBuf;
use courier_core::DeliveryId;
use thiserror::Error;

/// Errors raised by [`crate::read_manifest`] and [`crate::parse_manifest`].
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be opened.
    #[error("failed to open manifest at {path}: {source}")]
    Open {
        /// Requested manifest path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The manifest file could not be read as UTF-8 text.
    #[error("failed to read manifest at {path}: {source}")]
    Read {
        /// Requested manifest path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A non-empty line is not a delivery record.
    #[error("line {line} is not a valid delivery record: {content:?}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// Two records share an identifier.
    #[error("delivery id {id} on line {line} was already used on line {first_line}")]
    DuplicateId {
        /// The repeated identifier.
        id: DeliveryId,
        /// One-based line number of the repeat.
        line: usize,
        /// One-based line number of the first use.
        first_line: usize,
    },
}
