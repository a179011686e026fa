//! Single image GET.
//!
//! Uses the curl crate (libcurl `Easy2`) with a streaming body. Headers are
//! collected as they arrive; the status and Content-Type gate runs before the
//! first byte is written, so rejected responses leave no trace on disk.

mod head;
mod sink;

pub use head::{is_image_content_type, ResponseHead};
pub use sink::{ImageSink, Stage};

use std::path::PathBuf;

use curl::easy::Easy2;

use crate::config::FetchConfig;
use crate::error::{ErrorKind, FetchError};

/// Checks that `url` is an absolute `http`/`https` URL before it reaches curl
/// (which would otherwise guess a scheme for `example.com/a.png`).
pub fn parse_request_url(url: &str) -> Result<url::Url, FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase => FetchError::missing_scheme(e),
        other => FetchError::with_source(ErrorKind::InvalidUrl, other),
    })?;
    let supported = matches!(parsed.scheme(), "http" | "https") && parsed.has_host();
    if !supported {
        tracing::debug!(scheme = parsed.scheme(), "rejecting URL");
        return Err(FetchError::invalid_url());
    }
    Ok(parsed)
}

/// Downloads the image at `url` into `config.output_dir`.
///
/// Returns the path of the newly created file. Never overwrites an existing
/// file; a failed transfer leaves no partial file behind.
pub fn download_image(url: &str, config: &FetchConfig) -> Result<PathBuf, FetchError> {
    let parsed = parse_request_url(url)?;
    tracing::info!(url = %parsed, "fetching image");

    let mut easy = Easy2::new(ImageSink::new(url, config.output_dir.clone()));
    configure(&mut easy, parsed.as_str(), config).map_err(FetchError::from_curl)?;

    easy.get_mut().request_sent();
    let result = easy.perform();
    if let Ok(code) = easy.response_code() {
        tracing::debug!(status = code, "response received");
    }
    easy.get_mut().finish(result)
}

fn configure(
    easy: &mut Easy2<ImageSink>,
    url: &str,
    config: &FetchConfig,
) -> Result<(), curl::Error> {
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(config.max_redirects)?;
    easy.connect_timeout(config.timeout)?;
    easy.timeout(config.timeout)?;
    easy.buffer_size(config.chunk_size)?;
    Ok(())
}
