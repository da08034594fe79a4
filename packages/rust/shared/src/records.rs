//! Persistence for the intermediate records file.
//!
//! The scrape stage writes the full record sequence here; the merge stage
//! reads it back. The file is a pretty-printed UTF-8 JSON array and is
//! rewritten whole on every run.

use std::path::Path;

use crate::error::{ProfileKitError, Result};
use crate::types::ScrapedRecord;

/// Write the record sequence to `path`, replacing any previous content.
pub fn write_records(path: &Path, records: &[ScrapedRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| ProfileKitError::parse(format!("serialize records: {e}")))?;
    std::fs::write(path, json).map_err(|e| ProfileKitError::io(path, e))?;

    tracing::info!(?path, count = records.len(), "records written");
    Ok(())
}

/// Read the record sequence from `path`.
///
/// A missing or malformed file is an error — the merge stage has a hard
/// dependency on the scrape stage having completed first.
pub fn read_records(path: &Path) -> Result<Vec<ScrapedRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileKitError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ProfileKitError::file_parse(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ScrapedRecord> {
        vec![
            ScrapedRecord {
                url: "https://jmellolicsw.com/".into(),
                domain: "jmellolicsw.com".into(),
                title: "Jennifer Mello, LICSW".into(),
                description: "Trauma therapy in Plymouth, MA".into(),
                content_sample: "Welcome.".into(),
            },
            ScrapedRecord {
                url: "https://www.slip14.com/".into(),
                domain: "www.slip14.com".into(),
                title: "Slip 14".into(),
                description: String::new(),
                content_sample: String::new(),
            },
        ]
    }

    #[test]
    fn write_then_read_preserves_order() {
        let path = std::env::temp_dir().join(format!("pk-records-{}.json", std::process::id()));
        let records = sample_records();

        write_records(&path, &records).expect("write");
        let loaded = read_records(&path).expect("read");
        assert_eq!(loaded, records);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/nonexistent/pk-records.json");
        let err = read_records(path).unwrap_err();
        assert!(matches!(err, ProfileKitError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("pk-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json at all").expect("write garbage");

        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, ProfileKitError::FileParse { .. }));

        let _ = std::fs::remove_file(&path);
    }
}
