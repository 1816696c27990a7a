use std::time::Duration;

pub const DEFAULT_ARTIST: &str = "Fall Out Boy";
pub const DEFAULT_API_BASE: &str = "https://api.genius.com";
pub const DEFAULT_WEB_BASE: &str = "https://genius.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: Option<String>,
    pub artist: String,
    pub api_base: String,
    pub web_base: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: None,
            artist: DEFAULT_ARTIST.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            web_base: DEFAULT_WEB_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let access_token = std::env::var("GENIUS_ACCESS_TOKEN")
            .ok()
            .map(|token| normalize_token(&token))
            .filter(|token| !token.is_empty());

        let artist = std::env::var("LYRICS_ARTIST")
            .ok()
            .filter(|artist| !artist.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ARTIST.to_string());

        let api_base = std::env::var("GENIUS_API_BASE")
            .map(|base| normalize_base(&base))
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let web_base = std::env::var("GENIUS_WEB_BASE")
            .map(|base| normalize_base(&base))
            .unwrap_or_else(|_| DEFAULT_WEB_BASE.to_string());

        let timeout_secs = std::env::var("GENIUS_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            access_token,
            artist,
            api_base,
            web_base,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.access_token.is_some()
    }
}

// Accept the token with or without the "Bearer " prefix the API docs show
fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("Bearer ")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
