//! Built-in media type to file extension table.

/// Canonical extension (without dot) for each known image media type.
const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/pjpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/png", "png"),
    ("image/apng", "apng"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/bmp", "bmp"),
    ("image/x-ms-bmp", "bmp"),
    ("image/svg+xml", "svg"),
    ("image/tiff", "tiff"),
    ("image/x-icon", "ico"),
    ("image/vnd.microsoft.icon", "ico"),
    ("image/avif", "avif"),
    ("image/heic", "heic"),
    ("image/heif", "heif"),
    ("image/jxl", "jxl"),
];

/// Strips parameters (`; charset=...`), surrounding whitespace and case from a
/// Content-Type value, e.g. `"Image/PNG; q=1"` → `"image/png"`.
pub fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Looks up the canonical extension for a Content-Type value.
pub fn extension_for_media_type(content_type: &str) -> Option<&'static str> {
    let essence = essence(content_type);
    IMAGE_EXTENSIONS
        .iter()
        .find(|(media_type, _)| *media_type == essence)
        .map(|(_, ext)| *ext)
}
