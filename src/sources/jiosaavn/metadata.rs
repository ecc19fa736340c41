use tracing::debug;

use super::{JioSaavnSource, manager::required};
use crate::{
    api::models::{CollectionResponse, SongResponse, TrackSummary},
    common::errors::ApiError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Album,
    Playlist,
}

impl CollectionKind {
    fn failure(self) -> &'static str {
        match self {
            Self::Album => "Album fetch failed",
            Self::Playlist => "Playlist fetch failed",
        }
    }
}

impl JioSaavnSource {
    /// Song metadata plus direct media URLs scraped from the same page.
    pub async fn song(&self, id: &str) -> Result<SongResponse, ApiError> {
        let id = required(id, "id required")?;

        let raw = self
            .fetcher
            .fetch(&self.locators.song(id))
            .await
            .map_err(ApiError::upstream("Song fetch failed"))?;

        let metadata = self.parser.song_metadata(&raw, id);
        let stream_candidates = self
            .parser
            .stream_candidates(&raw, self.stream_candidate_limit);
        debug!(
            "JioSaavn song {} resolved with {} stream candidates",
            id,
            stream_candidates.len()
        );

        Ok(SongResponse {
            id: id.to_string(),
            metadata,
            stream_candidates,
        })
    }

    pub async fn album(&self, id: &str) -> Result<CollectionResponse, ApiError> {
        self.collection(CollectionKind::Album, id).await
    }

    pub async fn playlist(&self, id: &str) -> Result<CollectionResponse, ApiError> {
        self.collection(CollectionKind::Playlist, id).await
    }

    pub async fn collection(
        &self,
        kind: CollectionKind,
        id: &str,
    ) -> Result<CollectionResponse, ApiError> {
        let id = required(id, "id required")?;
        let locator = match kind {
            CollectionKind::Album => self.locators.album(id),
            CollectionKind::Playlist => self.locators.playlist(id),
        };

        let raw = self
            .fetcher
            .fetch(&locator)
            .await
            .map_err(ApiError::upstream(kind.failure()))?;

        let (summary, records) = self.parser.collection(&raw);
        let tracks: Vec<TrackSummary> = records.into_iter().map(TrackSummary::from).collect();
        debug!("JioSaavn {:?} {} has {} tracks", kind, id, tracks.len());

        Ok(CollectionResponse {
            id: id.to_string(),
            title: summary.title,
            image: summary.image,
            tracks,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::manager::test_source::{BASE, source};
    use crate::{
        api::models::{PageMetadata, SongMetadata, TrackSummary},
        common::errors::ApiError,
        test_support::ScriptedUpstream,
    };

    #[tokio::test]
    async fn song_without_blocks_uses_page_fallback() {
        let page = r#"<html><head>
              <meta property="og:title" content="Meta Title">
              <meta property="og:image" content="https://c/cover.jpg">
            </head><body><h1>Kesariya</h1><h2>Arijit Singh</h2></body></html>"#;
        let upstream =
            Arc::new(ScriptedUpstream::new().with_page(&format!("{}/song/k1", BASE), page));
        let response = source(upstream).song("k1").await.unwrap();

        assert_eq!(response.id, "k1");
        assert_eq!(
            response.metadata,
            SongMetadata::Page(PageMetadata {
                id: "k1".into(),
                title: "Kesariya".into(),
                image: "https://c/cover.jpg".into(),
                artist: "Arijit Singh".into(),
            })
        );
        assert!(response.stream_candidates.is_empty());
    }

    #[tokio::test]
    async fn song_collects_stream_candidates_independently() {
        let page = r#"<script>window.__PRELOADED_STATE__ = {"song":{"id":"k1","media":"https://aac.cdn/k1_160.mp4"}};</script>
            <audio src="https://aac.cdn/k1_96.MP4"></audio>
            <a href="https://aac.cdn/k1_96.MP4">again</a>
            <img src="https://c/cover.jpg">"#;
        let upstream =
            Arc::new(ScriptedUpstream::new().with_page(&format!("{}/song/k1", BASE), page));
        let response = source(upstream).song("k1").await.unwrap();

        assert_eq!(
            response.metadata,
            SongMetadata::Embedded(
                serde_json::json!({"id": "k1", "media": "https://aac.cdn/k1_160.mp4"})
            )
        );
        assert_eq!(
            response.stream_candidates,
            vec!["https://aac.cdn/k1_160.mp4", "https://aac.cdn/k1_96.MP4"]
        );
    }

    #[tokio::test]
    async fn album_reads_heading_and_tracks() {
        let page = r#"<html><head><meta property="og:image" content="https://c/a.jpg"></head><body>
            <h1>Brahmastra</h1>
            <ol class="song-list">
              <li><a href="/song/kesariya/K1"></a><span class="song-title">Kesariya</span></li>
              <li><span class="u-color-txt_primary">Deva Deva</span></li>
              <li><a href="/song/kesariya-2/K9"></a><span class="song-title">kesariya</span></li>
            </ol></body></html>"#;
        let upstream =
            Arc::new(ScriptedUpstream::new().with_page(&format!("{}/album/b1", BASE), page));
        let response = source(upstream).album("b1").await.unwrap();

        assert_eq!(response.title, "Brahmastra");
        assert_eq!(response.image, "https://c/a.jpg");
        assert_eq!(
            response.tracks,
            vec![
                TrackSummary {
                    id: "K1".into(),
                    title: "Kesariya".into()
                },
                TrackSummary {
                    id: String::new(),
                    title: "Deva Deva".into()
                },
                TrackSummary {
                    id: "K9".into(),
                    title: "kesariya".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn playlist_keeps_tracks_sharing_a_title() {
        let page = r#"<html><body><h1>Lofi</h1><ul class="song-list">
              <li><a href="/song/intro/I1"></a><span class="song-title">Intro</span></li>
              <li><a href="/song/intro/I2"></a><span class="song-title">Intro</span></li>
              <li><span class="song-title">Intro</span></li>
            </ul></body></html>"#;
        let upstream =
            Arc::new(ScriptedUpstream::new().with_page(&format!("{}/playlist/p9", BASE), page));
        let response = source(upstream).playlist("p9").await.unwrap();

        let ids: Vec<&str> = response.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["I1", "I2", ""]);
        assert!(response.tracks.iter().all(|t| t.title == "Intro"));
    }

    #[tokio::test]
    async fn playlist_failures_name_the_resource() {
        let upstream = Arc::new(ScriptedUpstream::new());
        let err = source(upstream.clone()).playlist("p1").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Upstream {
                context: "Playlist fetch failed",
                ..
            }
        ));
        assert_eq!(upstream.calls(&format!("{}/playlist/p1", BASE)), 1);
    }

    #[tokio::test]
    async fn blank_ids_are_rejected() {
        let upstream = Arc::new(ScriptedUpstream::new());
        let source = source(upstream.clone());
        assert!(matches!(
            source.song(" ").await,
            Err(ApiError::Validation("id required"))
        ));
        assert!(matches!(
            source.album("").await,
            Err(ApiError::Validation("id required"))
        ));
        assert_eq!(upstream.total_calls(), 0);
    }
}
