//! Core domain logic for ProfileKit: document assembly, the
//! project/record join validation, and merge-to-file persistence.

pub mod merge;

pub use merge::{MergeSummary, build_document, merge_to_file, unmatched_demo_links};
