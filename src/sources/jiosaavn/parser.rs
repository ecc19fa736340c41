//! Where JioSaavn pages keep their data, and how to read it back out.

use super::helpers::SOURCE_NAME;
use crate::{
    api::models::{PageMetadata, SongMetadata},
    common::types::AnyResult,
    extract::{
        Cascade, CascadeOutcome, EmbeddedRecords, ExtractedRecord, FieldCandidates,
        ListingSelectors, MediaUrlScanner, Page, PageSelectors, PageSummary, Strategy,
        StructuralProfile, embedded,
    },
};

pub const PRELOADED_STATE_MARKER: &str = "window.__PRELOADED_STATE__";

const SEARCH_LIST_PATHS: &[&str] = &["/search/songs/list"];

const SONG_PATHS: &[&str] = &["/song", "/songs", "/entities/songs"];

const SONG_FIELDS: FieldCandidates = FieldCandidates {
    id: &["/id"],
    title: &["/title", "/name"],
    subtitle: &["/more_info/singers", "/subtitle"],
    image: &["/image", "/more_info/image"],
};

/// Search result listings. Older and newer layouts are both matched.
const SEARCH_LISTING: ListingSelectors = ListingSelectors {
    containers: &[".song", ".listSong", ".song-list li"],
    title: &[".song-title", ".u-color-txt_primary", ".song-name"],
    subtitle: &[".song-subtitle", ".u-color-txt_secondary"],
    image: "img",
    link: r#"a[href*="/song/"]"#,
    id_marker: "/song/",
    index_fallback: true,
};

/// Track rows on album, playlist and trending pages.
const TRACK_LISTING: ListingSelectors = ListingSelectors {
    title: &[".song-title", ".u-color-txt_primary"],
    index_fallback: false,
    ..SEARCH_LISTING
};

const SONG_ARTIST: &[&str] = &["h2", ".song-artist", ".u-color-txt_secondary"];

pub struct JioSaavnParser {
    search: Cascade,
    trending: Cascade,
    tracks: StructuralProfile,
    page: PageSelectors,
    media: MediaUrlScanner,
}

impl JioSaavnParser {
    pub fn new() -> AnyResult<Self> {
        Ok(Self {
            search: Cascade::new(vec![
                Strategy::EmbeddedData(EmbeddedRecords {
                    marker: PRELOADED_STATE_MARKER,
                    list_paths: SEARCH_LIST_PATHS,
                    fields: SONG_FIELDS,
                    source: SOURCE_NAME,
                }),
                Strategy::Structural(StructuralProfile::new(&SEARCH_LISTING, SOURCE_NAME)?),
            ]),
            trending: Cascade::new(vec![Strategy::Structural(StructuralProfile::new(
                &TRACK_LISTING,
                SOURCE_NAME,
            )?)]),
            tracks: StructuralProfile::new(&TRACK_LISTING, SOURCE_NAME)?,
            page: PageSelectors::new(SONG_ARTIST)?,
            media: MediaUrlScanner::new()?,
        })
    }

    pub fn search_results(&self, raw: &str) -> CascadeOutcome {
        self.search.run(&Page::new(raw))
    }

    pub fn trending(&self, raw: &str) -> CascadeOutcome {
        self.trending.run(&Page::new(raw))
    }

    /// Song metadata from the embedded state, else from the rendered page.
    pub fn song_metadata(&self, raw: &str, id: &str) -> SongMetadata {
        if let Some(doc) = embedded::find_document(raw, PRELOADED_STATE_MARKER, SONG_PATHS, id) {
            return SongMetadata::Embedded(doc);
        }

        let page = Page::new(raw);
        let summary = self.page.summarize(page.document());
        SongMetadata::Page(PageMetadata {
            id: id.to_string(),
            title: summary.title,
            image: summary.image,
            artist: summary.artist,
        })
    }

    pub fn stream_candidates(&self, raw: &str, cap: usize) -> Vec<String> {
        self.media.scan(raw, cap)
    }

    /// Page heading/cover plus the track rows of an album or playlist page.
    pub fn collection(&self, raw: &str) -> (PageSummary, Vec<ExtractedRecord>) {
        let page = Page::new(raw);
        let document = page.document();
        (self.page.summarize(document), self.tracks.extract(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::StrategyKind;

    fn parser() -> JioSaavnParser {
        JioSaavnParser::new().unwrap()
    }

    const SEARCH_MARKUP: &str = r#"
        <ul class="song-list">
          <li><a href="/song/old-song/OLD1">Old Song</a><span class="song-name">Old Song</span></li>
        </ul>"#;

    #[test]
    fn search_prefers_preloaded_state() {
        let raw = format!(
            r#"<html><head><script>window.__PRELOADED_STATE__ = {{"search":{{"songs":{{"list":[
                {{"id":"n1","title":"New &amp; Improved","more_info":{{"singers":"A"}}}}
            ]}}}}}};</script></head><body>{}</body></html>"#,
            SEARCH_MARKUP
        );
        let outcome = parser().search_results(&raw);
        assert_eq!(outcome.matched, Some(StrategyKind::EmbeddedData));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].title, "New & Improved");
        assert_eq!(outcome.records[0].subtitle, "A");
    }

    #[test]
    fn search_falls_back_to_listing_markup() {
        let outcome = parser().search_results(SEARCH_MARKUP);
        assert_eq!(outcome.matched, Some(StrategyKind::Structural));
        assert_eq!(outcome.records[0].id, "OLD1");
        assert_eq!(outcome.records[0].title, "Old Song");
    }

    #[test]
    fn song_metadata_reads_entities() {
        let raw = r#"<script>window.__PRELOADED_STATE__ = {"entities":{"songs":{"s1":{"title":"X"}}}};</script>"#;
        let metadata = parser().song_metadata(raw, "s1");
        assert_eq!(
            metadata,
            SongMetadata::Embedded(serde_json::json!({"s1": {"title": "X"}}))
        );
    }

    #[test]
    fn song_metadata_falls_back_to_page() {
        let raw = r#"<html><head><meta property="og:image" content="https://c/i.jpg"></head>
            <body><h1>Heading</h1><p class="song-artist">Singer</p></body></html>"#;
        let metadata = parser().song_metadata(raw, "s1");
        assert_eq!(
            metadata,
            SongMetadata::Page(PageMetadata {
                id: "s1".into(),
                title: "Heading".into(),
                image: "https://c/i.jpg".into(),
                artist: "Singer".into(),
            })
        );
    }

    #[test]
    fn collection_tracks_keep_empty_ids() {
        let raw = r#"<html><head><meta property="og:title" content="Album"></head><body>
            <div class="song"><a href="/song/a/ID1"></a><span class="song-title">One</span></div>
            <div class="song"><span class="u-color-txt_primary">Two</span></div>
            <div class="song"><span class="song-name">Ignored here</span></div>
        </body></html>"#;
        let (summary, tracks) = parser().collection(raw);
        assert_eq!(summary.title, "Album");
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, "ID1");
        assert_eq!(tracks[1].id, "");
        assert_eq!(tracks[1].title, "Two");
    }
}
