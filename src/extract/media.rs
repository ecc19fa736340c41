//! Free-text scan for direct media file URLs anywhere in a payload.

use std::collections::HashSet;

use regex::Regex;
use url::Url;

pub const MEDIA_EXTENSIONS: &[&str] = &["mp3", "m4a", "aac", "opus", "mp4"];

pub struct MediaUrlScanner {
    url_pattern: Regex,
}

impl MediaUrlScanner {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            url_pattern: Regex::new(r#"https?://[^"'<>\s]+"#)?,
        })
    }

    /// Unique media URLs in first-seen order, at most `cap` of them.
    pub fn scan(&self, payload: &str, cap: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for candidate in self.url_pattern.find_iter(payload).map(|m| m.as_str()) {
            if found.len() >= cap {
                break;
            }
            if has_media_extension(candidate) && seen.insert(candidate) {
                found.push(candidate.to_string());
            }
        }

        found
    }
}

/// Whether the URL path (query and fragment excluded) ends in a known media
/// extension, compared case-insensitively.
pub fn has_media_extension(candidate: &str) -> bool {
    let Ok(url) = Url::parse(candidate) else {
        return false;
    };
    let last_segment = url.path().rsplit('/').next().unwrap_or_default();
    last_segment
        .rsplit_once('.')
        .is_some_and(|(_, ext)| MEDIA_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}
