//! Page fetching and field extraction for ProfileKit.
//!
//! This crate provides:
//! - [`extract`] — pure HTML field extraction (title, description, sample)
//! - [`engine`] — the sequential, failure-isolating fetch loop
//!
//! The HTTP boundary is exercised in tests through `wiremock` mock servers;
//! extraction itself is testable with canned HTML and no network at all.

pub mod engine;
pub mod extract;

pub use engine::{ScrapeObserver, ScrapeResult, Scraper, SilentObserver};
pub use extract::{CONTENT_SAMPLE_LIMIT, domain_of, extract_record};
