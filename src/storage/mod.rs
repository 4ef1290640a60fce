//! Flat-file persistence for the graph index
//!
//! The persisted form is UTF-8 text: a header line, then one line per
//! directed typed edge as `source,target,bits` where `bits` is the raw
//! [`RelMask`](crate::RelMask) representation. Comma is the field
//! separator in both directions — ids may be negative, so `-` would be
//! ambiguous. Edges are written in store iteration order, which the
//! insertion-ordered index keeps deterministic. No checksum or versioning.

use crate::graph::{GraphIndex, RelMask};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const HEADER: &str = "source,target,relation";

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed edge list at line {line}: {message}")]
    MalformedLine { line: usize, message: String },
}

/// Result type for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Write the full edge set of `index` to `path`, overwriting any existing
/// file.
pub fn save(index: &GraphIndex, path: impl AsRef<Path>) -> StorageResult<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writeln!(writer, "{HEADER}")?;

    let mut written = 0usize;
    for (source, target, mask) in index.edges() {
        writeln!(writer, "{source},{target},{}", mask.bits())?;
        written += 1;
    }
    writer.flush()?;

    debug!(path = %path.as_ref().display(), edges = written, "edge list saved");
    Ok(())
}

/// Reconstruct an index from an edge list written by [`save`].
///
/// The first line is skipped as a header. Every subsequent line must hold
/// exactly three comma-separated fields — source id, target id, relation
/// bits — or the whole load fails; a partially-parsed file never leaks out
/// as a half-built index.
pub fn load(path: impl AsRef<Path>) -> StorageResult<GraphIndex> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut index = GraphIndex::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line_no == 0 {
            continue;
        }
        let (source, target, mask) = parse_edge_line(&line, line_no + 1)?;
        if !index.add_edge(source, target, mask) {
            return Err(StorageError::MalformedLine {
                line: line_no + 1,
                message: format!("self-loop edge on node {source}"),
            });
        }
    }

    debug!(
        path = %path.as_ref().display(),
        nodes = index.node_count(),
        edges = index.edge_count(),
        "edge list loaded"
    );
    Ok(index)
}

fn parse_edge_line(line: &str, line_no: usize) -> StorageResult<(i32, i32, RelMask)> {
    let malformed = |message: String| StorageError::MalformedLine {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "expected 3 fields, found {}",
            fields.len()
        )));
    }

    let source: i32 = fields[0]
        .parse()
        .map_err(|_| malformed(format!("invalid source id {:?}", fields[0])))?;
    let target: i32 = fields[1]
        .parse()
        .map_err(|_| malformed(format!("invalid target id {:?}", fields[1])))?;
    let bits: u8 = fields[2]
        .parse()
        .map_err(|_| malformed(format!("invalid relation bits {:?}", fields[2])))?;
    let mask = RelMask::from_bits(bits)
        .ok_or_else(|| malformed(format!("unknown relation bits {bits:#b}")))?;

    Ok((source, target, mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RelKind;
    use std::collections::HashSet;
    use std::io::Write as _;

    fn sample_index() -> GraphIndex {
        let mut index = GraphIndex::new();
        index.add_edge(0, 1, RelKind::Schema.into());
        index.add_edge(1, 2, RelKind::SchemaSim.into());
        index.add_edge(2, 3, RelKind::ContentSim.into());
        index.add_edge(3, 4, RelKind::EntitySim.into());
        index.add_edge(4, 5, RelKind::Pkfk.into());
        index.add_edge(5, 6, RelKind::Inclusion.into());
        index.add_undirected_edge(-7, 0, RelKind::Pkfk.into());
        // A merged multi-kind edge survives the round trip too.
        index.add_edge(0, 1, RelKind::Pkfk.into());
        index
    }

    #[test]
    fn test_round_trip_reproduces_edge_set() {
        let index = sample_index();
        let file = tempfile::NamedTempFile::new().unwrap();

        save(&index, file.path()).unwrap();
        let loaded = load(file.path()).unwrap();

        let before: HashSet<_> = index.edges().collect();
        let after: HashSet<_> = loaded.edges().collect();
        assert_eq!(before, after);
        assert_eq!(loaded.node_count(), index.node_count());
        // The merged 0->1 edge reloads as one two-kind line; a state-derived
        // counter lands on the same value either way.
        assert_eq!(loaded.edge_count(), index.edge_count());
    }

    #[test]
    fn test_save_writes_header_and_comma_fields() {
        let mut index = GraphIndex::new();
        index.add_edge(10, 20, RelKind::Schema.into());

        let file = tempfile::NamedTempFile::new().unwrap();
        save(&index, file.path()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["source,target,relation", "10,20,1"]);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("no_such_file.csv"));
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    fn write_lines(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_rejects_wrong_field_count() {
        let file = write_lines(&[HEADER, "1,2"]);
        let err = load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            StorageError::MalformedLine { line: 2, .. }
        ));
    }

    #[test]
    fn test_load_rejects_non_numeric_field() {
        let file = write_lines(&[HEADER, "1,x,1"]);
        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid target id"));
    }

    #[test]
    fn test_load_rejects_unknown_relation_bits() {
        let file = write_lines(&[HEADER, "1,2,255"]);
        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("unknown relation bits"));
    }

    #[test]
    fn test_load_rejects_self_loop() {
        let file = write_lines(&[HEADER, "3,3,1"]);
        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("self-loop"));
    }

    #[test]
    fn test_load_uses_parsed_relation_bits() {
        let bits = RelKind::Pkfk.bit();
        let file = write_lines(&[HEADER, &format!("1,2,{bits}")]);
        let loaded = load(file.path()).unwrap();
        assert_eq!(
            loaded.edge_mask(1, 2),
            Some(RelMask::from(RelKind::Pkfk))
        );
    }

    #[test]
    fn test_load_skips_first_line_unconditionally() {
        // The first line is a header even when it happens to parse.
        let file = write_lines(&["9,9,9", "1,2,1"]);
        let loaded = load(file.path()).unwrap();
        assert_eq!(loaded.edge_count(), 1);
        assert_eq!(loaded.node_count(), 2);
    }
}
