use std::cell::RefCell;
use std::collections::HashMap;

use reqwest::StatusCode;

use super::GeniusApi;
use crate::error::{LyricsError, Result};
use crate::models::{ArtistInfo, SearchHit, SearchResponse, SearchResult, SongMetadata};

pub const API_BASE: &str = "https://api.test";
pub const WEB_BASE: &str = "https://web.test";

/// In-memory Genius that records every request it serves.
#[derive(Default)]
pub struct FakeGenius {
    searches: HashMap<String, Vec<(String, String)>>,
    songs: HashMap<String, String>,
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeGenius {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search results for `query`, as `(artist, api_path)` pairs in rank order.
    pub fn with_search(mut self, query: &str, hits: &[(&str, &str)]) -> Self {
        let hits = hits
            .iter()
            .map(|(artist, path)| (artist.to_string(), path.to_string()))
            .collect();
        self.searches.insert(query.to_string(), hits);
        self
    }

    /// Song metadata at `{API_BASE}{api_path}` plus the HTML of its public page.
    pub fn with_song(mut self, api_path: &str, page_path: &str, html: &str) -> Self {
        self.songs
            .insert(format!("{API_BASE}{api_path}"), page_path.to_string());
        self.pages
            .insert(format!("{WEB_BASE}{page_path}"), html.to_string());
        self
    }

    pub fn search_queries(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|r| r.strip_prefix("search:").map(str::to_string))
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl GeniusApi for FakeGenius {
    fn api_base(&self) -> &str {
        API_BASE
    }

    fn web_base(&self) -> &str {
        WEB_BASE
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.requests.borrow_mut().push(format!("search:{query}"));

        let hits = self
            .searches
            .get(query)
            .map(|hits| {
                hits.iter()
                    .map(|(artist, path)| SearchHit {
                        result: SearchResult {
                            api_path: path.clone(),
                            primary_artist: ArtistInfo {
                                name: artist.clone(),
                            },
                            title: None,
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(SearchResponse { hits })
    }

    async fn song(&self, api_url: &str) -> Result<SongMetadata> {
        self.requests.borrow_mut().push(format!("song:{api_url}"));

        self.songs
            .get(api_url)
            .map(|path| SongMetadata {
                path: path.clone(),
                title: None,
            })
            .ok_or_else(|| LyricsError::status(api_url, StatusCode::NOT_FOUND, "{}"))
    }

    async fn page(&self, page_url: &str) -> Result<String> {
        self.requests.borrow_mut().push(format!("page:{page_url}"));

        self.pages
            .get(page_url)
            .cloned()
            .ok_or_else(|| LyricsError::status(page_url, StatusCode::NOT_FOUND, ""))
    }
}
