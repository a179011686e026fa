//! Fetch a single image URL into a collision-safe local file.
//!
//! The pipeline is linear: parse the URL, GET it, check the status and that
//! the declared Content-Type is `image/*`, derive a filename from the URL path
//! (guessing an extension from the Content-Type when needed), pick a path in
//! the output directory that does not exist yet, and stream the body into it.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod storage;
pub mod url_model;

pub use config::FetchConfig;
pub use error::{ErrorKind, FetchError};
pub use fetch::download_image;
