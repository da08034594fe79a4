//! Core domain types for ProfileKit: scraped page records and the
//! combined profile document.

use serde::{Deserialize, Serialize};

/// Title fallback when a page carries no `<title>` element.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

// ---------------------------------------------------------------------------
// ScrapedRecord
// ---------------------------------------------------------------------------

/// One extracted summary of a single fetched page.
///
/// Serialized as an ordered array into the intermediate records file;
/// the file is fully regenerated on every scrape run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedRecord {
    /// Source URL, exactly as listed in the scrape configuration.
    pub url: String,
    /// Authority component of the URL (host, plus `:port` when explicit).
    pub domain: String,
    /// Trimmed text of the first title element, or [`UNKNOWN_TITLE`].
    pub title: String,
    /// `content` of the first `<meta name="description">`, or empty.
    pub description: String,
    /// First 5 non-empty paragraph texts, space-joined, capped at 500
    /// characters with a trailing `...` marker when cut short.
    pub content_sample: String,
}

// ---------------------------------------------------------------------------
// ProfileDocument
// ---------------------------------------------------------------------------

/// The final combined JSON output consumed by the portfolio front end.
///
/// Static sections come straight from configuration; `projects` may be
/// enriched against the scraped records at merge time. Field casing in
/// JSON mirrors what the front end expects: top-level keys are
/// snake_case, nested link/image keys camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Home base, e.g. "Durham, NH".
    #[serde(default)]
    pub location: String,
    /// Social media profiles.
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    /// Professional title, bio, experience, skills, tools.
    #[serde(default)]
    pub professional_info: ProfessionalInfo,
    /// Contact details, hobbies, about-me blurb.
    #[serde(default)]
    pub personal_info: PersonalInfo,
    /// Portfolio projects, each hand-correlated to a scraped URL
    /// through its `demoLink`.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Client testimonials.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    /// Blog post summaries.
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
}

/// A single social media profile link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// Professional identity and history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// One position in the experience timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// A named skill with a proficiency percentage (0–100).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

/// A tool badge (name + icon slug).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub icon: String,
}

/// Contact and personal details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub about_me: String,
}

/// A portfolio project entry.
///
/// `demo_link` should reference a URL present in the scrape input list;
/// the merger warns when it does not. Empty `title`/`description` are
/// filled from the matching scraped record at merge time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "demoLink")]
    pub demo_link: String,
    #[serde(rename = "codeLink", default)]
    pub code_link: String,
}

/// A client testimonial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub content: String,
    pub avatar: String,
}

/// A blog post summary card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    #[serde(rename = "coverImage")]
    pub cover_image: String,
    pub category: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_roundtrip() {
        let record = ScrapedRecord {
            url: "https://example.com".into(),
            domain: "example.com".into(),
            title: "Example".into(),
            description: "Demo site".into(),
            content_sample: "A. B. C.".into(),
        };

        let json = serde_json::to_string_pretty(&record).expect("serialize");
        let parsed: ScrapedRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, record);
    }

    #[test]
    fn project_uses_front_end_casing() {
        let project = Project {
            title: "Slip 14".into(),
            demo_link: "https://www.slip14.com/".into(),
            code_link: "https://github.com/example".into(),
            ..Default::default()
        };

        let json = serde_json::to_string(&project).expect("serialize");
        assert!(json.contains("\"demoLink\""));
        assert!(json.contains("\"codeLink\""));
        assert!(!json.contains("demo_link"));
    }

    #[test]
    fn blog_post_uses_front_end_casing() {
        let post = BlogPost {
            id: 1,
            title: "Post".into(),
            cover_image: "https://images.example.com/cover.jpg".into(),
            read_time: "5 min read".into(),
            ..Default::default()
        };

        let json = serde_json::to_string(&post).expect("serialize");
        assert!(json.contains("\"coverImage\""));
        assert!(json.contains("\"readTime\""));
    }

    #[test]
    fn document_tolerates_sparse_input() {
        // A profile section with only a name must still deserialize.
        let doc: ProfileDocument =
            serde_json::from_str(r#"{"name": "Chris"}"#).expect("deserialize");
        assert_eq!(doc.name, "Chris");
        assert!(doc.projects.is_empty());
        assert!(doc.professional_info.skills.is_empty());
    }
}
