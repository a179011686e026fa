//! Extension splitting and content-type based extension fallback.

use super::media_type::extension_for_media_type;
use super::DEFAULT_BASENAME;

/// Splits `name` into base and extension at the last `.`.
///
/// Leading dots belong to the base, so `.hidden` has no extension. A trailing
/// dot yields `Some("")`, which callers treat as "no extension" but keep when
/// rebuilding the name.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(i) => {
            let dot = leading + i;
            (&name[..dot], Some(&name[dot + 1..]))
        }
        None => (name, None),
    }
}

/// Returns `name` with an extension when one can be determined.
///
/// - A non-empty extension already on `name` wins and is returned verbatim.
/// - Otherwise the extension is guessed from `content_type`.
/// - An empty `name` falls back to `image` (with the guessed extension, if any).
pub fn ensure_extension(name: &str, content_type: &str) -> String {
    let (base, ext) = split_extension(name);
    if matches!(ext, Some(e) if !e.is_empty()) {
        return name.to_string();
    }
    let base = if base.is_empty() { DEFAULT_BASENAME } else { base };
    match extension_for_media_type(content_type) {
        Some(guessed) => format!("{}.{}", base, guessed),
        None if name.is_empty() => DEFAULT_BASENAME.to_string(),
        None => name.to_string(),
    }
}
