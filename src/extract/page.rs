//! Page-level fields: heading text with `og:` metadata as fallback.

use scraper::{Html, Selector};
use serde::Serialize;

use super::structural::{compile, first_text};
use crate::common::errors::ExtractionError;

/// Title, image and artist as presented by a page itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageSummary {
    pub title: String,
    pub image: String,
    pub artist: String,
}

#[derive(Debug, Clone)]
pub struct PageSelectors {
    heading: Vec<Selector>,
    og_title: Selector,
    og_image: Selector,
    artist: Vec<Selector>,
}

impl PageSelectors {
    pub fn new(artist: &[&str]) -> Result<Self, ExtractionError> {
        Ok(Self {
            heading: vec![compile("h1")?],
            og_title: compile(r#"meta[property="og:title"]"#)?,
            og_image: compile(r#"meta[property="og:image"]"#)?,
            artist: artist.iter().map(|s| compile(s)).collect::<Result<_, _>>()?,
        })
    }

    pub fn summarize(&self, document: &Html) -> PageSummary {
        let root = document.root_element();

        let title = first_text(root, &self.heading)
            .or_else(|| meta_content(document, &self.og_title))
            .unwrap_or_default();

        PageSummary {
            title,
            image: meta_content(document, &self.og_image).unwrap_or_default(),
            artist: first_text(root, &self.artist).unwrap_or_default(),
        }
    }
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .filter_map(|m| m.value().attr("content"))
        .map(str::trim)
        .find(|c| !c.is_empty())
        .map(str::to_string)
}
