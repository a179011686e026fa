//! Response status/header tracking and the image Content-Type gate.

use crate::error::{ErrorKind, FetchError};

/// Status and Content-Type of the response currently being received.
///
/// A new status line (redirect hop, `100 Continue`) resets the state so only
/// the final response is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: Option<u32>,
    pub content_type: Option<String>,
}

impl ResponseHead {
    /// Feed one raw header line as delivered by libcurl (CRLF included).
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim_end();
        if line.starts_with("HTTP/") {
            *self = ResponseHead {
                status: parse_status_line(line),
                content_type: None,
            };
            return;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                self.content_type = Some(value.trim().to_string());
            }
        }
    }

    /// Content-Type value, or `""` when the header is absent.
    pub fn content_type_or_empty(&self) -> &str {
        self.content_type.as_deref().unwrap_or("")
    }

    /// Status must be 2xx, then Content-Type must be `image/*`.
    pub fn validate(&self) -> Result<(), FetchError> {
        match self.status {
            Some(code) if (200..300).contains(&code) => {}
            Some(code) => return Err(FetchError::http_status(code)),
            None => return Err(FetchError::new(ErrorKind::Network)),
        }
        if !is_image_content_type(self.content_type.as_deref()) {
            return Err(FetchError::not_an_image());
        }
        Ok(())
    }
}

/// `"HTTP/1.1 404 Not Found"` → `Some(404)`.
fn parse_status_line(line: &str) -> Option<u32> {
    line.split_whitespace().nth(1)?.parse().ok()
}

/// True when the declared Content-Type is `image/*` (case-insensitive).
/// A missing header is treated as empty and rejected.
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type
        .unwrap_or("")
        .to_ascii_lowercase()
        .starts_with("image/")
}
