use std::collections::HashSet;

use crate::extract::ExtractedRecord;

/// Lower-cased `title` + `subtitle` with everything but letters and digits removed.
pub fn dedup_key(title: &str, subtitle: &str) -> String {
    title
        .chars()
        .chain(subtitle.chars())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Keeps the first record per dedup key, in input order, and stops reading
/// input as soon as `cap` records have been kept.
pub fn merge<I>(records: I, cap: usize) -> Vec<ExtractedRecord>
where
    I: IntoIterator<Item = ExtractedRecord>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for record in records {
        if merged.len() >= cap {
            break;
        }
        if seen.insert(dedup_key(&record.title, &record.subtitle)) {
            merged.push(record);
        }
    }

    merged
}
