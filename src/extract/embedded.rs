//! Extraction from JSON state blobs that pages embed in their scripts,
//! e.g. `window.__PRELOADED_STATE__ = {...};`.

use serde_json::Value;
use tracing::debug;

use super::record::{ExtractedRecord, clean_text};
use crate::common::errors::ExtractionError;

/// Candidate JSON pointers for each record field, tried in order.
#[derive(Debug, Clone, Copy)]
pub struct FieldCandidates {
    pub id: &'static [&'static str],
    pub title: &'static [&'static str],
    pub subtitle: &'static [&'static str],
    pub image: &'static [&'static str],
}

/// Maps items found under a resource-specific path of an embedded block to records.
#[derive(Debug, Clone)]
pub struct EmbeddedRecords {
    pub marker: &'static str,
    /// JSON pointers to the item list; the first one present is used.
    pub list_paths: &'static [&'static str],
    pub fields: FieldCandidates,
    pub source: &'static str,
}

impl EmbeddedRecords {
    /// Walks every marked block in the payload. Blocks that fail to parse are
    /// skipped; records from all usable blocks are returned in payload order.
    pub fn extract(&self, raw: &str) -> Vec<ExtractedRecord> {
        let mut records = Vec::new();

        for block in data_blocks(raw, self.marker) {
            let doc = match block {
                Ok(doc) => doc,
                Err(e) => {
                    debug!("Skipping embedded data block: {}", e);
                    continue;
                }
            };

            let Some(found) = first_present(&doc, self.list_paths) else {
                continue;
            };

            match found {
                Value::Array(items) => {
                    records.extend(items.iter().filter_map(|item| self.map_item(item)))
                }
                item @ Value::Object(_) => records.extend(self.map_item(item)),
                _ => debug!("Embedded list path holds neither a list nor an object"),
            }
        }

        records
    }

    fn map_item(&self, item: &Value) -> Option<ExtractedRecord> {
        if !item.is_object() {
            debug!("Skipping non-object embedded item");
            return None;
        }

        Some(ExtractedRecord {
            id: text_field(item, self.fields.id),
            title: clean_text(&text_field(item, self.fields.title)),
            subtitle: clean_text(&text_field(item, self.fields.subtitle)),
            image: text_field(item, self.fields.image),
            source: self.source,
            raw: Some(item.clone()),
        })
    }
}

/// Parses each block introduced by `marker`. Occurrences of the marker that
/// are not assignments (e.g. `if (window.__PRELOADED_STATE__)`) surface as
/// `MissingBlock` errors for the caller to skip.
pub fn data_blocks<'a>(
    raw: &'a str,
    marker: &'static str,
) -> impl Iterator<Item = Result<Value, ExtractionError>> + 'a {
    raw.match_indices(marker)
        .map(move |(at, _)| parse_block(marker, &raw[at + marker.len()..]))
}

fn parse_block(marker: &'static str, after_marker: &str) -> Result<Value, ExtractionError> {
    let body = after_marker
        .trim_start()
        .strip_prefix('=')
        .map(str::trim_start)
        .filter(|rest| rest.starts_with('{'))
        .ok_or(ExtractionError::MissingBlock(marker))?;

    // Only the leading object is consumed; whatever script follows it is ignored.
    let mut values = serde_json::Deserializer::from_str(body).into_iter::<Value>();
    match values.next() {
        Some(Ok(doc @ Value::Object(_))) => Ok(doc),
        Some(Ok(_)) => Err(ExtractionError::NotAnObject),
        Some(Err(e)) => Err(e.into()),
        None => Err(ExtractionError::MissingBlock(marker)),
    }
}

/// The first pointer that resolves to a meaningful value. `null`, `false`,
/// empty strings and empty containers count as absent.
pub fn first_present<'v>(doc: &'v Value, pointers: &[&str]) -> Option<&'v Value> {
    pointers
        .iter()
        .filter_map(|p| doc.pointer(p))
        .find(|v| is_present(v))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        _ => true,
    }
}

/// The first candidate that holds a non-empty string or a number, as text.
pub fn text_field(item: &Value, pointers: &[&str]) -> String {
    pointers
        .iter()
        .filter_map(|p| item.pointer(p))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Finds the first block holding one of `paths`, or failing that the first
/// block whose serialized form mentions `id`.
pub fn find_document(
    raw: &str,
    marker: &'static str,
    paths: &[&str],
    id: &str,
) -> Option<Value> {
    let mut mentioning = None;

    for block in data_blocks(raw, marker) {
        let doc = match block {
            Ok(doc) => doc,
            Err(e) => {
                debug!("Skipping embedded data block: {}", e);
                continue;
            }
        };

        if let Some(found) = first_present(&doc, paths) {
            return Some(found.clone());
        }

        if mentioning.is_none() && !id.is_empty() && doc.to_string().contains(id) {
            mentioning = Some(doc);
        }
    }

    mentioning
}
