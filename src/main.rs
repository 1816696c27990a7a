use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use lyricfetch::{
    batch::BatchDriver, config::Config, genius::GeniusClient, lyrics::LyricsFetcher,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().collect();
    let Some(input) = args.get(1).map(PathBuf::from) else {
        let program = args.first().map(String::as_str).unwrap_or("lyricfetch");
        println!("Usage: {program} <input file>");
        return Ok(ExitCode::FAILURE);
    };

    // Load .env file if it exists
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let client = GeniusClient::new(&config)?;
    let fetcher = LyricsFetcher::new(client, config.artist.clone());
    let mut driver = BatchDriver::new(fetcher, std::io::stdout());

    // Titles run one at a time; Ctrl-C drops whatever request is in flight
    tokio::select! {
        summary = driver.run(&input) => {
            let summary = summary?;
            info!("Printed lyrics for {} of {} titles", summary.printed, summary.printed + summary.not_found);
        }
        interrupted = tokio::signal::ctrl_c() => {
            interrupted.context("failed to listen for Ctrl-C")?;
            eprintln!("\rQuitting...");
        }
    }

    Ok(ExitCode::SUCCESS)
}
