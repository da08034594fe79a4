//! Shared types, error model, and configuration for ProfileKit.
//!
//! This crate is the foundation depended on by the scraper, core, and CLI
//! crates. It provides:
//! - [`ProfileKitError`] — the unified error type
//! - Domain types ([`ScrapedRecord`], [`ProfileDocument`] and its sections)
//! - Configuration ([`AppConfig`], config loading)
//! - Intermediate record file I/O ([`records`])

pub mod config;
pub mod error;
pub mod records;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, PathsConfig, ScrapeConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from, validate_scrape_config,
};
pub use error::{ProfileKitError, Result};
pub use records::{read_records, write_records};
pub use types::{
    BlogPost, Experience, PersonalInfo, ProfessionalInfo, ProfileDocument, Project, ScrapedRecord,
    Skill, SocialLink, Testimonial, Tool, UNKNOWN_TITLE,
};
