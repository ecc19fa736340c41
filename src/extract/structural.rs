//! Extraction from listing markup: one record per matched container element,
//! with ordered selector fallbacks per field.

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use super::record::ExtractedRecord;
use crate::common::errors::ExtractionError;

/// Selector strings for a listing layout. Several alternatives exist per field
/// because the catalog markup has been renamed over time.
#[derive(Debug, Clone, Copy)]
pub struct ListingSelectors {
    /// Container alternatives, matched together in document order.
    pub containers: &'static [&'static str],
    pub title: &'static [&'static str],
    pub subtitle: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
    /// Path fragment that precedes the id inside a link, e.g. `/song/`.
    pub id_marker: &'static str,
    /// Use the element's position as id when the link yields none.
    pub index_fallback: bool,
}

/// A compiled [`ListingSelectors`].
#[derive(Debug, Clone)]
pub struct StructuralProfile {
    containers: Selector,
    title: Vec<Selector>,
    subtitle: Vec<Selector>,
    image: Selector,
    link: Selector,
    id_marker: &'static str,
    index_fallback: bool,
    source: &'static str,
}

pub fn compile(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn compile_all(selectors: &[&str]) -> Result<Vec<Selector>, ExtractionError> {
    selectors.iter().map(|s| compile(s)).collect()
}

impl StructuralProfile {
    pub fn new(listing: &ListingSelectors, source: &'static str) -> Result<Self, ExtractionError> {
        Ok(Self {
            containers: compile(&listing.containers.join(", "))?,
            title: compile_all(listing.title)?,
            subtitle: compile_all(listing.subtitle)?,
            image: compile(listing.image)?,
            link: compile(listing.link)?,
            id_marker: listing.id_marker,
            index_fallback: listing.index_fallback,
            source,
        })
    }

    pub fn extract(&self, document: &Html) -> Vec<ExtractedRecord> {
        document
            .select(&self.containers)
            .enumerate()
            .filter_map(|(index, element)| self.parse_element(index, element))
            .collect()
    }

    /// Elements without a title produce nothing.
    fn parse_element(&self, index: usize, element: ElementRef<'_>) -> Option<ExtractedRecord> {
        let Some(title) = first_text(element, &self.title) else {
            trace!("Skipping listing element {} without a title", index);
            return None;
        };

        let id = element
            .select(&self.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| id_from_link(href, self.id_marker));

        let id = match id {
            Some(id) => id,
            None if self.index_fallback => index.to_string(),
            None => String::new(),
        };

        Some(ExtractedRecord {
            id,
            title,
            subtitle: first_text(element, &self.subtitle).unwrap_or_default(),
            image: image_source(element, &self.image).unwrap_or_default(),
            source: self.source,
            raw: None,
        })
    }
}

/// Whitespace-collapsed text of the first element matched by the first
/// selector (in order) whose match has any text.
pub fn first_text(scope: ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|s| scope.select(s).next())
        .map(element_text)
        .find(|t| !t.is_empty())
}

pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn image_source(scope: ElementRef<'_>, image: &Selector) -> Option<String> {
    let img = scope.select(image).next()?;
    ["src", "data-src"]
        .into_iter()
        .filter_map(|attr| img.value().attr(attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// The trailing path segment after `marker`, ignoring query and fragment:
/// `/song/tum-hi-ho/OQMaey5hbVc?x=1` with `/song/` gives `OQMaey5hbVc`.
pub fn id_from_link(href: &str, marker: &str) -> Option<String> {
    let (_, rest) = href.split_once(marker)?;
    let path = rest.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
}
