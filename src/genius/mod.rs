mod api;
#[cfg(test)]
pub(crate) mod fake;

pub use self::api::GeniusClient;

use crate::error::Result;
use crate::models::{SearchResponse, SongMetadata};

/// The three requests the lyrics pipeline makes against Genius.
///
/// `search` and `song` hit the authenticated JSON API; `page` downloads the
/// public HTML song page.
#[allow(async_fn_in_trait)]
pub trait GeniusApi {
    fn api_base(&self) -> &str;
    fn web_base(&self) -> &str;

    async fn search(&self, query: &str) -> Result<SearchResponse>;
    async fn song(&self, api_url: &str) -> Result<SongMetadata>;
    async fn page(&self, page_url: &str) -> Result<String>;
}
