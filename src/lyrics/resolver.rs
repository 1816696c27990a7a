use log::{debug, info};

use crate::error::Result;
use crate::genius::GeniusApi;

/// The plain title, then the title with the artist appended.
pub const MAX_SEARCH_ATTEMPTS: usize = 2;

/// Resolve `title` to the absolute API URL of the first search hit whose
/// primary artist is exactly `artist`.
///
/// A miss on the first page of results is reported on stderr and retried
/// once with the artist name appended, unless the query already contains it.
/// Returns `Ok(None)` when neither attempt matches.
pub async fn resolve_song_api_url<A: GeniusApi>(
    api: &A,
    title: &str,
    artist: &str,
) -> Result<Option<String>> {
    let mut query = title.to_string();

    for attempt in 1..=MAX_SEARCH_ATTEMPTS {
        debug!("Searching for {query:?} (attempt {attempt}/{MAX_SEARCH_ATTEMPTS})");
        let results = api.search(&query).await?;

        if let Some(hit) = results.first_by_artist(artist) {
            let url = format!("{}{}", api.api_base(), hit.api_path);
            info!(
                "Resolved {title:?} to {:?} at {url}",
                hit.title.as_deref().unwrap_or(&hit.api_path)
            );
            return Ok(Some(url));
        }

        eprintln!("Song {query} not found on first page of results.");

        if query.contains(artist) {
            break;
        }
        query = format!("{query} {artist}");
    }

    Ok(None)
}
