//! Turning raw catalog payloads into records.
//!
//! A [`Cascade`] is an ordered list of [`Strategy`] values. Strategies run in
//! order and the first one that yields at least one record decides the result;
//! later strategies are never consulted. A cascade where every strategy comes
//! up empty is a normal, empty outcome.

pub mod embedded;
pub mod media;
pub mod page;
pub mod record;
pub mod structural;

use std::cell::OnceCell;

use scraper::Html;
use tracing::trace;

pub use embedded::{EmbeddedRecords, FieldCandidates};
pub use media::MediaUrlScanner;
pub use page::{PageSelectors, PageSummary};
pub use record::ExtractedRecord;
pub use structural::{ListingSelectors, StructuralProfile};

/// A payload with its HTML document parsed on first use, so strategies that
/// only need the raw text never pay for DOM construction.
pub struct Page<'a> {
    raw: &'a str,
    document: OnceCell<Html>,
}

impl<'a> Page<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            document: OnceCell::new(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn document(&self) -> &Html {
        self.document.get_or_init(|| Html::parse_document(self.raw))
    }

    pub fn is_parsed(&self) -> bool {
        self.document.get().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    EmbeddedData,
    Structural,
}

pub enum Strategy {
    EmbeddedData(EmbeddedRecords),
    Structural(StructuralProfile),
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::EmbeddedData(_) => StrategyKind::EmbeddedData,
            Self::Structural(_) => StrategyKind::Structural,
        }
    }

    pub fn extract(&self, page: &Page<'_>) -> Vec<ExtractedRecord> {
        match self {
            Self::EmbeddedData(embedded) => embedded.extract(page.raw()),
            Self::Structural(profile) => profile.extract(page.document()),
        }
    }
}

#[derive(Debug, Default)]
pub struct CascadeOutcome {
    /// The strategy that produced `records`, if any did.
    pub matched: Option<StrategyKind>,
    pub records: Vec<ExtractedRecord>,
}

pub struct Cascade {
    strategies: Vec<Strategy>,
}

impl Cascade {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn run(&self, page: &Page<'_>) -> CascadeOutcome {
        for strategy in &self.strategies {
            let records = strategy.extract(page);
            if !records.is_empty() {
                trace!("{:?} produced {} records", strategy.kind(), records.len());
                return CascadeOutcome {
                    matched: Some(strategy.kind()),
                    records,
                };
            }
            trace!("{:?} produced nothing, falling back", strategy.kind());
        }

        CascadeOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "window.__PRELOADED_STATE__";

    fn cascade() -> Cascade {
        Cascade::new(vec![
            Strategy::EmbeddedData(EmbeddedRecords {
                marker: MARKER,
                list_paths: &["/search/songs/list"],
                fields: FieldCandidates {
                    id: &["/id"],
                    title: &["/title"],
                    subtitle: &["/subtitle"],
                    image: &["/image"],
                },
                source: "jiosaavn",
            }),
            Strategy::Structural(
                StructuralProfile::new(
                    &ListingSelectors {
                        containers: &[".song"],
                        title: &[".song-title"],
                        subtitle: &[".song-subtitle"],
                        image: "img",
                        link: "a",
                        id_marker: "/song/",
                        index_fallback: true,
                    },
                    "jiosaavn",
                )
                .unwrap(),
            ),
        ])
    }

    const MARKUP: &str = r#"<div class="song"><span class="song-title">From Markup</span></div>"#;

    #[test]
    fn embedded_success_short_circuits() {
        let raw = format!(
            r#"<html><script>{} = {{"search":{{"songs":{{"list":[{{"id":"e1","title":"From Blob"}}]}}}}}};</script>{}</html>"#,
            MARKER, MARKUP
        );
        let page = Page::new(&raw);
        let outcome = cascade().run(&page);

        assert_eq!(outcome.matched, Some(StrategyKind::EmbeddedData));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].title, "From Blob");
        assert!(!page.is_parsed(), "structural strategy must not run");
    }

    #[test]
    fn malformed_block_falls_back_to_markup() {
        let raw = format!(
            "<html><script>{} = {{\"search\": oops}};</script>{}</html>",
            MARKER, MARKUP
        );
        let outcome = cascade().run(&Page::new(&raw));

        assert_eq!(outcome.matched, Some(StrategyKind::Structural));
        assert_eq!(outcome.records[0].title, "From Markup");
        assert_eq!(outcome.records[0].id, "0");
    }

    #[test]
    fn empty_block_falls_back_to_markup() {
        let raw = format!(
            "<script>{} = {{\"search\":{{\"songs\":{{\"list\":[]}}}}}};</script>{}",
            MARKER, MARKUP
        );
        let outcome = cascade().run(&Page::new(&raw));
        assert_eq!(outcome.matched, Some(StrategyKind::Structural));
    }

    #[test]
    fn exhausted_cascade_is_empty_not_an_error() {
        let outcome = cascade().run(&Page::new("<html><body></body></html>"));
        assert_eq!(outcome.matched, None);
        assert!(outcome.records.is_empty());
    }
}
