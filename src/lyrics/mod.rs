pub mod extractor;
pub mod parser;
pub mod resolver;

use log::debug;

use crate::error::Result;
use crate::genius::GeniusApi;

/// Fetches lyrics for songs by a single artist.
pub struct LyricsFetcher<A> {
    api: A,
    artist: String,
}

impl<A: GeniusApi> LyricsFetcher<A> {
    pub fn new(api: A, artist: impl Into<String>) -> Self {
        Self {
            api,
            artist: artist.into(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Download the song page for `title`, or `None` if no search hit
    /// belongs to the artist.
    pub async fn fetch_page(&self, title: &str) -> Result<Option<FetchedPage>> {
        let Some(api_url) = resolver::resolve_song_api_url(&self.api, title, &self.artist).await?
        else {
            return Ok(None);
        };

        let song = self.api.song(&api_url).await?;
        let url = format!("{}{}", self.api.web_base(), song.path);
        debug!(
            "Lyrics page for {:?} is {url}",
            song.title.as_deref().unwrap_or(title)
        );

        let html = self.api.page(&url).await?;
        Ok(Some(FetchedPage { url, html }))
    }

    /// Lyrics as printed on the page, section headers included.
    pub async fn get_lyrics(&self, title: &str) -> Result<Option<String>> {
        match self.fetch_page(title).await? {
            Some(page) => extractor::extract_lyrics(&page.html, &page.url).map(Some),
            None => Ok(None),
        }
    }

    /// Lyrics with blank lines and section annotations removed.
    pub async fn get_clean_lyrics(&self, title: &str) -> Result<Option<String>> {
        let lyrics = self.get_lyrics(title).await?;
        Ok(lyrics.map(|text| parser::strip_lyrics(&text)))
    }
}

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub html: String,
}
