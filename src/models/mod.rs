use serde::Deserialize;

/// Every Genius API payload is wrapped in `{"meta": ..., "response": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub result: SearchResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub api_path: String, // e.g. "/songs/378195"
    pub primary_artist: ArtistInfo,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistInfo {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongResponse {
    pub song: SongMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongMetadata {
    pub path: String, // public page path, e.g. "/Fall-out-boy-sugar-were-goin-down-lyrics"
    pub title: Option<String>,
}

impl SearchResponse {
    /// First hit whose primary artist is exactly `artist` (case-sensitive).
    pub fn first_by_artist(&self, artist: &str) -> Option<&SearchResult> {
        self.hits
            .iter()
            .map(|hit| &hit.result)
            .find(|result| result.primary_artist.name == artist)
    }
}
