use std::io::Write;
use std::path::Path;

use log::{debug, info};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::{LyricsError, Result};
use crate::genius::GeniusApi;
use crate::lyrics::LyricsFetcher;

/// Counts for one pass over an input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub printed: usize,
    pub not_found: usize,
    pub blank: usize,
}

/// Runs the lyrics pipeline over a file of song titles, one per line,
/// writing each song's cleaned lyrics to `out`.
pub struct BatchDriver<A, W> {
    fetcher: LyricsFetcher<A>,
    out: W,
}

impl<A: GeniusApi, W: Write> BatchDriver<A, W> {
    pub fn new(fetcher: LyricsFetcher<A>, out: W) -> Self {
        Self { fetcher, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Process every title in `path` in order.
    ///
    /// Titles with no match are skipped. Any other failure stops the batch.
    pub async fn run(&mut self, path: &Path) -> Result<BatchSummary> {
        let file = File::open(path).await.map_err(|source| LyricsError::Io {
            context: format!("Failed to open {}", path.display()),
            source,
        })?;

        let mut lines = BufReader::new(file).lines();
        let mut summary = BatchSummary::default();

        while let Some(line) = lines.next_line().await.map_err(|source| LyricsError::Io {
            context: format!("Failed to read {}", path.display()),
            source,
        })? {
            let title = line.trim_end_matches('\r');
            if title.is_empty() {
                summary.blank += 1;
                continue;
            }

            debug!("Fetching lyrics for {title:?}");
            match self.fetcher.get_clean_lyrics(title).await? {
                Some(lyrics) => {
                    self.print(&lyrics)?;
                    summary.printed += 1;
                }
                None => summary.not_found += 1,
            }
        }

        info!(
            "Batch finished: {} printed, {} not found, {} blank lines",
            summary.printed, summary.not_found, summary.blank
        );
        Ok(summary)
    }

    fn print(&mut self, lyrics: &str) -> Result<()> {
        writeln!(self.out, "{lyrics}")
            .and_then(|()| self.out.flush())
            .map_err(|source| LyricsError::Io {
                context: "Failed to write lyrics".to_string(),
                source,
            })
    }
}
