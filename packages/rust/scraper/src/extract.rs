//! HTML field extraction for project pages.
//!
//! Pure functions over an already-fetched document: no network access,
//! so tests can feed canned HTML directly.

use scraper::{Html, Selector};
use url::Url;

use profilekit_shared::{ScrapedRecord, UNKNOWN_TITLE};

/// Maximum length of `content_sample` before truncation, in characters.
pub const CONTENT_SAMPLE_LIMIT: usize = 500;

/// Number of leading non-empty paragraphs sampled from a page.
const PARAGRAPH_LIMIT: usize = 5;

/// Truncation suffix appended when the sample is cut short.
const ELLIPSIS: &str = "...";

/// Build a [`ScrapedRecord`] from a fetched page body.
///
/// `url` is the exact input string and is carried through unchanged;
/// `parsed` is its parsed form, used only for the domain.
pub fn extract_record(url: &str, parsed: &Url, html: &str) -> ScrapedRecord {
    let doc = Html::parse_document(html);

    ScrapedRecord {
        url: url.to_string(),
        domain: domain_of(parsed),
        title: extract_title(&doc),
        description: extract_description(&doc),
        content_sample: extract_content_sample(&doc),
    }
}

/// Trimmed text of the first title element, or the fallback.
fn extract_title(doc: &Html) -> String {
    let sel = Selector::parse("title").unwrap();
    doc.select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// `content` attribute of the first `<meta name="description">`, or empty.
fn extract_description(doc: &Html) -> String {
    let sel = Selector::parse(r#"meta[name="description"]"#).unwrap();
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// First 5 non-empty paragraph texts in document order, space-joined and
/// capped at [`CONTENT_SAMPLE_LIMIT`] characters.
fn extract_content_sample(doc: &Html) -> String {
    let sel = Selector::parse("p").unwrap();
    let paragraphs: Vec<String> = doc
        .select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|p| !p.is_empty())
        .take(PARAGRAPH_LIMIT)
        .collect();

    truncate_sample(&paragraphs.join(" "))
}

/// Cap at the character limit, appending the ellipsis marker when cut.
fn truncate_sample(joined: &str) -> String {
    if joined.chars().count() <= CONTENT_SAMPLE_LIMIT {
        joined.to_string()
    } else {
        let cut: String = joined.chars().take(CONTENT_SAMPLE_LIMIT).collect();
        format!("{cut}{ELLIPSIS}")
    }
}

/// Authority component of a URL: host, plus `:port` when explicit.
pub fn domain_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
