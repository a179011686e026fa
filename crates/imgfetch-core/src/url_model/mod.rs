//! URL modeling and filename derivation.
//!
//! Derives a local filename from the last URL path segment, then makes sure
//! it carries an extension consistent with the declared Content-Type.

mod extension;
mod media_type;
mod path;

pub use extension::{ensure_extension, split_extension};
pub use media_type::{essence, extension_for_media_type};
pub use path::filename_from_url_path;

/// Base name used when the URL path yields nothing usable.
pub const DEFAULT_BASENAME: &str = "image";

/// Derives the filename for saving an image fetched from `url`.
///
/// The URL path segment is preferred; its extension is kept verbatim. Without
/// one, the extension is guessed from `content_type`.
///
/// # Examples
///
/// - `derive_filename("https://example.com/photos/cat.JPG?size=large", "image/jpeg")` → `"cat.JPG"`
/// - `derive_filename("https://example.com/img", "image/png")` → `"img.png"`
/// - `derive_filename("https://example.com/", "image/gif")` → `"image.gif"`
pub fn derive_filename(url: &str, content_type: &str) -> String {
    let candidate = filename_from_url_path(url).unwrap_or_default();
    ensure_extension(&candidate, content_type)
}
