//! Fetch error type: one reportable error carrying a discriminated kind.
//!
//! Every lower-level failure (URL parse, curl, HTTP status, content type,
//! filesystem) is mapped into a `FetchError` at the orchestration boundary.
//! `Display` is the user-facing message; the low-level cause, if any, is kept
//! as `source()` for logging.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// What went wrong, independent of the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// URL has no scheme (e.g. `example.com/a.png`).
    MissingScheme,
    /// URL could not be parsed or uses an unsupported scheme.
    InvalidUrl,
    /// Transport-level timeout.
    Timeout,
    /// Host could not be resolved or connection was refused.
    Connection,
    /// Server answered with a non-2xx status.
    HttpStatus(u32),
    /// Declared `Content-Type` is not `image/*`.
    NotAnImage,
    /// Creating the directory or writing the file failed.
    Write,
    /// Every `-N` suffix up to the cap is already taken.
    TooManyCollisions,
    /// Any other transport failure.
    Network,
}

/// Error returned by the fetch pipeline.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl FetchError {
    /// Build an error of `kind` with its standard message and no cause.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.to_string(),
            source: None,
        }
    }

    /// Build an error of `kind` with its standard message and a low-level cause.
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            kind,
            message: kind.to_string(),
            source: Some(Box::new(source)),
        }
    }

    pub fn missing_scheme(source: url::ParseError) -> Self {
        Self::with_source(ErrorKind::MissingScheme, source)
    }

    pub fn invalid_url() -> Self {
        Self::new(ErrorKind::InvalidUrl)
    }

    pub fn http_status(code: u32) -> Self {
        Self::new(ErrorKind::HttpStatus(code))
    }

    pub fn not_an_image() -> Self {
        Self::new(ErrorKind::NotAnImage)
    }

    pub fn write(source: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Write, source)
    }

    /// Collision cap exhausted for `name` inside `dir`.
    pub fn too_many_collisions(dir: &Path, name: &str) -> Self {
        Self {
            kind: ErrorKind::TooManyCollisions,
            message: format!(
                "Too many files named like {} already exist in {}.",
                name,
                dir.display()
            ),
            source: None,
        }
    }

    /// Map a libcurl failure to the matching kind.
    pub fn from_curl(e: curl::Error) -> Self {
        Self::with_source(classify_curl_error(&e), e)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingScheme => write!(
                f,
                "Invalid URL. Please include the scheme (e.g., https://example.com/image.jpg)."
            ),
            ErrorKind::InvalidUrl => write!(
                f,
                "That doesn't look like a valid URL. Please check and try again."
            ),
            ErrorKind::Timeout => write!(
                f,
                "The request timed out. Your connection may be slow or the server is busy."
            ),
            ErrorKind::Connection => write!(
                f,
                "Could not connect to the server. Please check your internet connection or the URL."
            ),
            ErrorKind::HttpStatus(code) => write!(
                f,
                "HTTP error {}. The resource may be unavailable or restricted.",
                code
            ),
            ErrorKind::NotAnImage => write!(
                f,
                "The provided URL did not return an image (Content-Type is not image/*)."
            ),
            ErrorKind::Write => write!(
                f,
                "Could not write the file to disk. Check permissions or available space."
            ),
            ErrorKind::TooManyCollisions => {
                write!(f, "Too many files with the same name already exist.")
            }
            ErrorKind::Network => write!(
                f,
                "An unexpected network error occurred while fetching the image."
            ),
        }
    }
}

/// Classify a curl error into an `ErrorKind`.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
    {
        return ErrorKind::Connection;
    }
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return ErrorKind::InvalidUrl;
    }
    ErrorKind::Network
}
