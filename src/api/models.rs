use serde::Serialize;
use serde_json::Value;

use crate::extract::ExtractedRecord;

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<ExtractedRecord>,
}

/// Song details: the page's own embedded object when one exists, otherwise
/// what could be read off the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SongMetadata {
    Embedded(Value),
    Page(PageMetadata),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub id: String,
    pub title: String,
    pub image: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SongResponse {
    pub id: String,
    pub metadata: SongMetadata,
    pub stream_candidates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub id: String,
    pub title: String,
}

impl From<ExtractedRecord> for TrackSummary {
    fn from(record: ExtractedRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
        }
    }
}

/// Album or playlist page.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionResponse {
    pub id: String,
    pub title: String,
    pub image: String,
    pub tracks: Vec<TrackSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub count: usize,
    pub results: Vec<ExtractedRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub cache_entries: usize,
    pub uptime_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_metadata_serializes_flat() {
        let metadata = SongMetadata::Page(PageMetadata {
            id: "abc".into(),
            title: "Kesariya".into(),
            image: String::new(),
            artist: "Arijit Singh".into(),
        });
        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            serde_json::json!({"id": "abc", "title": "Kesariya", "image": "", "artist": "Arijit Singh"})
        );
    }

    #[test]
    fn embedded_metadata_serializes_as_is() {
        let raw = serde_json::json!({"id": "abc", "more_info": {"album": "Brahmastra"}});
        let metadata = SongMetadata::Embedded(raw.clone());
        assert_eq!(serde_json::to_value(&metadata).unwrap(), raw);
    }
}
