//! Profile merge: layer scraped records onto the static profile and
//! persist the combined document.
//!
//! The static profile is the source of truth for every section. Scraped
//! records only fill project fields the profile left empty, and back the
//! join-validation pass that keeps `demoLink`s and scraped URLs from
//! silently drifting apart.

use std::path::Path;

use tracing::{info, warn};

use profilekit_shared::{
    ProfileDocument, ProfileKitError, Result, ScrapedRecord, read_records,
};

/// Summary of a completed merge.
#[derive(Debug, Clone)]
pub struct MergeSummary {
    /// Number of scraped records consumed.
    pub records: usize,
    /// Number of project entries in the document.
    pub projects: usize,
    /// `demoLink`s with no matching scraped record (warned, non-fatal).
    pub unmatched: Vec<String>,
}

/// Assemble the combined document from the static profile and the
/// scraped records.
///
/// Pure in-memory construction: the static sections pass through
/// untouched; project entries with an empty hand-authored `title` or
/// `description` default to the matching record's value.
pub fn build_document(profile: &ProfileDocument, records: &[ScrapedRecord]) -> ProfileDocument {
    let mut doc = profile.clone();

    for project in &mut doc.projects {
        if let Some(record) = records.iter().find(|r| r.url == project.demo_link) {
            if project.title.is_empty() {
                project.title = record.title.clone();
            }
            if project.description.is_empty() {
                project.description = record.description.clone();
            }
        }
    }

    doc
}

/// Every project `demoLink` that references no scraped record URL.
///
/// A non-empty result means the hand-authored projects and the scrape
/// input list have drifted apart.
pub fn unmatched_demo_links(profile: &ProfileDocument, records: &[ScrapedRecord]) -> Vec<String> {
    profile
        .projects
        .iter()
        .filter(|p| !records.iter().any(|r| r.url == p.demo_link))
        .map(|p| p.demo_link.clone())
        .collect()
}

/// Run the full merge: read the intermediate records file, assemble the
/// document, and write it to `out_path`.
///
/// A missing or malformed records file is fatal, and nothing is written
/// in that case — a previous output file is left untouched. The document
/// is serialized in full before the output file is opened, so a failed
/// run cannot leave a half-written document behind.
pub fn merge_to_file(
    records_path: &Path,
    profile: &ProfileDocument,
    out_path: &Path,
) -> Result<MergeSummary> {
    let records = read_records(records_path)?;

    let unmatched = unmatched_demo_links(profile, &records);
    for link in &unmatched {
        warn!(demo_link = %link, "project demoLink has no matching scraped record");
    }

    let doc = build_document(profile, &records);

    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| ProfileKitError::parse(format!("serialize document: {e}")))?;
    std::fs::write(out_path, json).map_err(|e| ProfileKitError::io(out_path, e))?;

    let summary = MergeSummary {
        records: records.len(),
        projects: doc.projects.len(),
        unmatched,
    };

    info!(
        path = ?out_path,
        records = summary.records,
        projects = summary.projects,
        unmatched = summary.unmatched.len(),
        "profile document written"
    );

    Ok(summary)
}
