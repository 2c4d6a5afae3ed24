use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted mapping from file name to file, in document order.
/// New files go to the end; removals keep the order of the rest.
pub type Files = IndexMap<String, QuoteFile>;

/// A saved selection from a web page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// ISO-8601 text as stored. Kept verbatim so malformed values survive a
    /// load/save cycle.
    pub saved_at: String,
}

impl Quote {
    pub fn new(text: String, url: String, title: String) -> Self {
        Self {
            id: generate_id(),
            text,
            url,
            title,
            saved_at: now_timestamp(),
        }
    }

    pub fn saved_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.saved_at)
    }
}

/// A named collection of quotes, in append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFile {
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

impl QuoteFile {
    pub fn new(name: String) -> Self {
        Self {
            name,
            created_at: now_timestamp(),
            quotes: Vec::new(),
        }
    }
}

/// The whole persisted state, stored under the fixed `files` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub files: Files,
}

impl Document {
    pub fn new(files: Files) -> Self {
        Self { files }
    }
}

/// A quote tagged with the name of the file that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedQuote {
    pub file_name: String,
    pub quote: Quote,
}

/// Per-file line of the file manager view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub quote_count: usize,
    pub created_at: String,
}

/// Quotes sharing a source page (origin + path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    pub source_key: String,
    pub quotes: Vec<ListedQuote>,
}

impl SourceGroup {
    /// Title shown for the group: the first quote's title, falling back to the key.
    pub fn display_title(&self) -> &str {
        self.quotes
            .first()
            .map(|lq| lq.quote.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.source_key)
    }
}

/// Time-ordered id: UUID v7 carries a millisecond timestamp followed by random bits.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// Current time in the `2024-01-15T10:30:00.000Z` shape.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp. Accepts RFC 3339, a zone-less date-time (read as
/// UTC) or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_uses_extension_field_names() {
        let raw = r#"{
            "files": {
                "Reading": {
                    "name": "Reading",
                    "createdAt": "2024-03-01T08:00:00.000Z",
                    "quotes": [{
                        "id": "lt3k9x0a4f2",
                        "text": "Hello",
                        "url": "https://a.com/p",
                        "title": "Page A",
                        "savedAt": "2024-03-01T08:00:00.000Z"
                    }]
                }
            }
        }"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        let file = &doc.files["Reading"];
        assert_eq!(file.quotes[0].id, "lt3k9x0a4f2");
        assert_eq!(file.quotes[0].saved_at, "2024-03-01T08:00:00.000Z");

        let out = serde_json::to_value(&doc).unwrap();
        assert!(out["files"]["Reading"]["createdAt"].is_string());
        assert!(out["files"]["Reading"]["quotes"][0]["savedAt"].is_string());
    }

    #[test]
    fn missing_files_key_is_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.files.is_empty());
    }

    #[test]
    fn generated_timestamps_parse() {
        let quote = Quote::new("t".into(), "".into(), "".into());
        assert!(quote.saved_at.ends_with('Z'));
        assert!(quote.saved_at_time().is_some());
    }

    #[test]
    fn generated_ids_differ() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn parses_loose_timestamps() {
        assert!(parse_timestamp("2024-01-15T10:30:00").is_some());
        assert!(parse_timestamp("2024-01-15").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
