//! Output directory and file lifecycle.
//!
//! Creates the output directory on demand, picks a collision-free path
//! (`name`, `name-1`, `name-2`, ...) and opens it with exclusive create so an
//! existing file is never overwritten.

mod writer;

pub use writer::ImageWriter;

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::FetchError;
use crate::url_model::{split_extension, DEFAULT_BASENAME};

/// Highest `-N` suffix tried before giving up.
pub const MAX_COLLISION_SUFFIX: u32 = 10_000;

/// Create `dir` (and parents) if absent. An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    fs::create_dir_all(dir).map_err(FetchError::write)?;
    Ok(())
}

/// Returns a path inside `dir` for `filename` that does not currently exist.
///
/// Tries `dir/base.ext`, then `dir/base-1.ext`, `dir/base-2.ext`, ... up to
/// [`MAX_COLLISION_SUFFIX`]. The check is advisory; use
/// [`ImageWriter::create_unique`] to also claim the path.
pub fn unique_path(dir: &Path, filename: &str) -> Result<PathBuf, FetchError> {
    let filename = if filename.is_empty() { DEFAULT_BASENAME } else { filename };
    let (base, ext) = split_extension(filename);
    let base = if base.is_empty() { DEFAULT_BASENAME } else { base };

    let first = candidate_name(base, ext, None);
    ensure_single_component(&first)?;
    let path = dir.join(&first);
    if !is_taken(&path) {
        return Ok(path);
    }

    for i in 1..=MAX_COLLISION_SUFFIX {
        let path = dir.join(candidate_name(base, ext, Some(i)));
        if !is_taken(&path) {
            return Ok(path);
        }
    }
    Err(FetchError::too_many_collisions(dir, filename))
}

fn candidate_name(base: &str, ext: Option<&str>, suffix: Option<u32>) -> String {
    let mut name = base.to_string();
    if let Some(i) = suffix {
        name.push('-');
        name.push_str(&i.to_string());
    }
    if let Some(ext) = ext {
        name.push('.');
        name.push_str(ext);
    }
    name
}

/// Dangling symlinks count as taken: exclusive create would fail on them.
fn is_taken(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Rejects names that would resolve outside the output directory (or into a
/// subdirectory), e.g. a decoded `..%2Fx.png`.
fn ensure_single_component(name: &str) -> Result<(), FetchError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => {
            tracing::warn!(name, "filename is not a plain file name, refusing to write");
            Err(FetchError::write(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a plain file name: {}", name),
            )))
        }
    }
}
