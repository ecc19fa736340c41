use serde::Serialize;
use serde_json::Value;

/// One normalized song/track entry. `title` and `subtitle` drive deduplication.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    #[serde(rename = "_source")]
    pub source: &'static str,
    /// The unnormalized item, when the record came from an embedded data block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

/// Decodes the handful of HTML entities that leak into embedded JSON strings
/// and trims the result.
pub fn clean_text(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
