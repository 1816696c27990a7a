use log::debug;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use super::GeniusApi;
use crate::config::Config;
use crate::error::{LyricsError, Result};
use crate::models::{ApiEnvelope, SearchResponse, SongMetadata, SongResponse};

const USER_AGENT: &str = concat!("lyricfetch/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GeniusClient {
    client: reqwest::Client,
    token: Option<String>,
    api_base: String,
    web_base: String,
}

impl GeniusClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| LyricsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: config.access_token.clone(),
            api_base: config.api_base.clone(),
            web_base: config.web_base.clone(),
        })
    }

    // Checked per request; page downloads never need it
    fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| LyricsError::Config("GENIUS_ACCESS_TOKEN is not set".to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let token = self.token()?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| network(url, source))?;

        let body = read_body(url, response).await?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|source| LyricsError::Parse {
                url: url.to_string(),
                source,
            })?;

        Ok(envelope.response)
    }
}

impl GeniusApi for GeniusClient {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn web_base(&self) -> &str {
        &self.web_base
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = format!("{}/search?q={}", self.api_base, encode(query));
        self.get_json(&url).await
    }

    async fn song(&self, api_url: &str) -> Result<SongMetadata> {
        let response: SongResponse = self.get_json(api_url).await?;
        Ok(response.song)
    }

    async fn page(&self, page_url: &str) -> Result<String> {
        debug!("GET {page_url}");

        // The public page takes no credentials
        let response = self
            .client
            .get(page_url)
            .send()
            .await
            .map_err(|source| network(page_url, source))?;

        read_body(page_url, response).await
    }
}

fn network(url: &str, source: reqwest::Error) -> LyricsError {
    LyricsError::Network {
        url: url.to_string(),
        source,
    }
}

async fn read_body(url: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(|source| network(url, source))?;

    if !status.is_success() {
        return Err(LyricsError::status(url, status, &body));
    }

    Ok(body)
}
