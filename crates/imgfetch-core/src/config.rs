//! Fixed pipeline settings.
//!
//! Nothing here is read from disk or the environment; `FetchConfig::default()`
//! is what the CLI uses. Library callers (and tests) may point `output_dir`
//! elsewhere.

use std::path::PathBuf;
use std::time::Duration;

/// Directory (relative to the working directory) that receives all images.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Body chunk size handed to the write callback.
pub const CHUNK_SIZE: usize = 8192;

/// Timeout for the whole request, connect included.
pub const TIMEOUT: Duration = Duration::from_secs(15);

/// Redirects followed before the transfer fails.
pub const MAX_REDIRECTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Directory that receives the saved file, created on demand.
    pub output_dir: PathBuf,
    /// Applies to the whole request (connect, headers and body).
    pub timeout: Duration,
    /// Receive buffer size; body chunks are at most this large.
    pub chunk_size: usize,
    pub max_redirects: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: TIMEOUT,
            chunk_size: CHUNK_SIZE,
            max_redirects: MAX_REDIRECTS,
        }
    }
}

impl FetchConfig {
    /// Default settings writing into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}
