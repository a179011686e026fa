//! CLI for imgfetch: one URL in, one file in `Fetched_Images/` out.

mod prompt;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::{download_image, FetchConfig, FetchError};

pub use prompt::read_url;

/// Exit status when no URL was given.
pub const EXIT_NO_URL: i32 = 1;
/// Exit status when the fetch failed for a reported reason.
pub const EXIT_FETCH_FAILED: i32 = 2;

/// Fetch a single image URL and save it under ./Fetched_Images.
#[derive(Debug, Parser)]
#[command(name = "imgfetch", version)]
#[command(about = "Fetch one image by URL into ./Fetched_Images without overwriting", long_about = None)]
pub struct Cli {
    /// Image URL (http or https). Prompted for on stdin when omitted.
    pub url: Option<String>,

    /// Increase log verbosity (-v, -vv). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Saved(PathBuf),
    NoUrl,
    Failed(FetchError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Saved(_) => 0,
            Outcome::NoUrl => EXIT_NO_URL,
            Outcome::Failed(_) => EXIT_FETCH_FAILED,
        }
    }
}

impl Cli {
    /// Obtain the URL (argument or prompt), fetch it, and print the result.
    pub fn run(&self) -> Result<Outcome> {
        let url = match &self.url {
            Some(u) => u.trim().to_string(),
            None => read_url(io::stdin().lock(), io::stdout().lock())?,
        };

        if url.is_empty() {
            println!("No URL provided. Exiting.");
            return Ok(Outcome::NoUrl);
        }

        let outcome = fetch(&url, &FetchConfig::default());
        match &outcome {
            Outcome::Saved(path) => println!("Success! Image saved to: {}", path.display()),
            Outcome::Failed(err) => println!("Respectful notice: {}", err),
            Outcome::NoUrl => {}
        }
        Ok(outcome)
    }
}

/// Run the download and fold the result into an `Outcome`.
pub fn fetch(url: &str, config: &FetchConfig) -> Outcome {
    match download_image(url, config) {
        Ok(path) => Outcome::Saved(path),
        Err(err) => {
            match std::error::Error::source(&err) {
                Some(cause) => tracing::debug!(kind = ?err.kind(), "fetch failed: {}", cause),
                None => tracing::debug!(kind = ?err.kind(), "fetch failed"),
            }
            Outcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests;
