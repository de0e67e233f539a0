//! Whole-manifest parsing and file loading.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::Read;

use camino::Utf8Path;
use courier_core::{Delivery, DeliveryId};
use courier_fs::open_utf8_file;

use crate::ManifestError;
use crate::line::parse_record;

/// Parse manifest text into deliveries, in file order.
///
/// The first line is a header and is discarded whatever it contains. Empty
/// lines are skipped; a trailing carriage return is ignored.
///
/// # Examples
/// ```
/// use courier_manifest::parse_manifest;
///
/// let manifest = "loadNumber pickup dropoff\n1 (0.0,0.0) (1.0,1.0)\n\n2 (5.0,5.0) (6.0,6.0)\n";
/// let deliveries = parse_manifest(manifest)?;
/// assert_eq!(deliveries.len(), 2);
/// assert_eq!(deliveries[1].id(), 2);
/// # Ok::<(), courier_manifest::ManifestError>(())
/// ```
///
/// # Errors
///
/// Returns [`ManifestError::MalformedLine`] for the first non-empty line that
/// is not a record and [`ManifestError::DuplicateId`] when an id repeats.
pub fn parse_manifest(contents: &str) -> Result<Vec<Delivery>, ManifestError> {
    let mut deliveries = Vec::new();
    let mut first_seen: HashMap<DeliveryId, usize> = HashMap::new();
    for (index, raw) in contents.split('\n').enumerate().skip(1) {
        let line_number = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }
        let delivery = parse_record(line).ok_or_else(|| ManifestError::MalformedLine {
            line: line_number,
            content: line.to_owned(),
        })?;
        match first_seen.entry(delivery.id()) {
            Entry::Occupied(entry) => {
                return Err(ManifestError::DuplicateId {
                    id: delivery.id(),
                    line: line_number,
                    first_line: *entry.get(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(line_number);
            }
        }
        deliveries.push(delivery);
    }
    Ok(deliveries)
}

/// Read and parse the manifest at `path`.
///
/// Relative paths resolve against the current working directory.
///
/// # Errors
///
/// Returns [`ManifestError::Open`] when the file cannot be opened,
/// [`ManifestError::Read`] when it is not readable UTF-8 text, and the errors
/// of [`parse_manifest`] for invalid contents.
pub fn read_manifest(path: &Utf8Path) -> Result<Vec<Delivery>, ManifestError> {
    let mut file = open_utf8_file(path).map_err(|source| ManifestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let deliveries = parse_manifest(&contents)?;
    log::debug!("read {} deliveries from {path}", deliveries.len());
    Ok(deliveries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ids(deliveries: &[Delivery]) -> Vec<DeliveryId> {
        deliveries.iter().map(Delivery::id).collect()
    }

    #[rstest]
    fn discards_header_and_blank_lines() {
        let contents = "loadNumber pickup dropoff\n\n3 (1.0,2.0) (3.0,4.0)\n\n1 (5.0,6.0) (7.0,8.0)\n";
        let deliveries = parse_manifest(contents).expect("valid manifest");
        assert_eq!(ids(&deliveries), vec![3, 1]);
    }

    #[rstest]
    fn header_is_discarded_even_when_it_looks_like_a_record() {
        let contents = "1 (0.0,0.0) (1.0,1.0)\n2 (0.0,0.0) (1.0,1.0)";
        let deliveries = parse_manifest(contents).expect("valid manifest");
        assert_eq!(ids(&deliveries), vec![2]);
    }

    #[rstest]
    #[case::empty("")]
    #[case::header_only("loadNumber pickup dropoff")]
    #[case::header_and_newline("loadNumber pickup dropoff\n")]
    #[case::blank_lines("loadNumber pickup dropoff\n\n\n")]
    fn empty_manifests_yield_no_deliveries(#[case] contents: &str) {
        assert!(parse_manifest(contents).expect("valid manifest").is_empty());
    }

    #[rstest]
    fn accepts_crlf_line_endings() {
        let contents = "loadNumber pickup dropoff\r\n1 (0.0,0.0) (1.0,1.0)\r\n\r\n";
        let deliveries = parse_manifest(contents).expect("valid manifest");
        assert_eq!(ids(&deliveries), vec![1]);
    }

    #[rstest]
    fn reports_the_malformed_line_number() {
        let contents = "header\n1 (0.0,0.0) (1.0,1.0)\n2 (0.0,0.0 (1.0,1.0)\n";
        let err = parse_manifest(contents).expect_err("malformed line");
        match err {
            ManifestError::MalformedLine { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "2 (0.0,0.0 (1.0,1.0)");
            }
            other => panic!("expected MalformedLine, found {other:?}"),
        }
    }

    #[rstest]
    fn whitespace_only_lines_are_malformed() {
        let err = parse_manifest("header\n   \n").expect_err("whitespace line");
        assert!(matches!(err, ManifestError::MalformedLine { line: 2, .. }));
    }

    #[rstest]
    fn rejects_repeated_ids() {
        let contents = "header\n4 (0.0,0.0) (1.0,1.0)\n5 (1.0,0.0) (1.0,1.0)\n4 (2.0,0.0) (1.0,1.0)\n";
        let err = parse_manifest(contents).expect_err("duplicate id");
        match err {
            ManifestError::DuplicateId {
                id,
                line,
                first_line,
            } => {
                assert_eq!(id, 4);
                assert_eq!(line, 4);
                assert_eq!(first_line, 2);
            }
            other => panic!("expected DuplicateId, found {other:?}"),
        }
    }
}
