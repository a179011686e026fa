//! Filename extraction from URL path.

use percent_encoding::percent_decode_str;

/// Extracts the final path segment from a URL for use as a filename hint.
///
/// Query string and fragment are ignored. The segment is percent-decoded
/// (invalid UTF-8 is replaced, not rejected). Returns `None` if the URL cannot
/// be parsed or the segment is empty, `.`, `..` or `/`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    if decoded.is_empty() || decoded == "." || decoded == ".." || decoded == "/" {
        return None;
    }
    Some(decoded.into_owned())
}
