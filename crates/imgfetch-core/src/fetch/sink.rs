//! Transfer state machine: validates the response, then streams the body to
//! a collision-free file. Implements curl's `Handler` for `Easy2`.

use std::path::PathBuf;
use std::str;

use crate::error::FetchError;
use crate::storage::{self, ImageWriter};
use crate::url_model;

use super::head::ResponseHead;

/// Position in the linear fetch pipeline. `Failed` is reachable from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Requested,
    Validated,
    DirectoryReady,
    PathResolved,
    Writing,
    Done,
    Failed,
}

/// Receives headers and body chunks for one image transfer.
///
/// Nothing touches the filesystem until the final response has a 2xx status
/// and an `image/*` Content-Type.
#[derive(Debug)]
pub struct ImageSink {
    url: String,
    output_dir: PathBuf,
    head: ResponseHead,
    stage: Stage,
    writer: Option<ImageWriter>,
    error: Option<FetchError>,
}

impl ImageSink {
    pub fn new(url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output_dir: output_dir.into(),
            head: ResponseHead::default(),
            stage: Stage::Start,
            writer: None,
            error: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn head(&self) -> &ResponseHead {
        &self.head
    }

    /// Marks the request as sent.
    pub fn request_sent(&mut self) {
        self.advance(Stage::Requested);
    }

    /// Feed one raw header line.
    pub fn header_line(&mut self, data: &[u8]) {
        if let Ok(line) = str::from_utf8(data) {
            self.head.push_line(line);
        }
    }

    /// Feed one body chunk. Returns false when the transfer must be aborted;
    /// the reason is kept and reported by [`finish`](Self::finish).
    pub fn body_chunk(&mut self, data: &[u8]) -> bool {
        if self.stage == Stage::Failed {
            return false;
        }
        if data.is_empty() {
            return true;
        }
        if self.writer.is_none() {
            if let Err(e) = self.open_output() {
                self.fail(e);
                return false;
            }
        }
        let Some(writer) = self.writer.as_mut() else {
            return false;
        };
        match writer.write_chunk(data) {
            Ok(()) => {
                if self.stage != Stage::Writing {
                    self.advance(Stage::Writing);
                }
                true
            }
            Err(e) => {
                tracing::debug!("write to {} failed: {}", writer.path().display(), e);
                self.fail(FetchError::write(e));
                false
            }
        }
    }

    /// Conclude the transfer given libcurl's result. Returns the saved path.
    ///
    /// An empty body still produces an (empty) file once validation passes.
    /// Any failure after the file was created removes it again.
    pub fn finish(&mut self, transfer: Result<(), curl::Error>) -> Result<PathBuf, FetchError> {
        if let Err(e) = transfer {
            let err = match self.error.take() {
                Some(recorded) => recorded,
                None => {
                    tracing::debug!("transfer failed: {}", e);
                    FetchError::from_curl(e)
                }
            };
            return Err(self.abort(err));
        }
        if let Some(recorded) = self.error.take() {
            return Err(self.abort(recorded));
        }
        if self.writer.is_none() {
            if let Err(e) = self.open_output() {
                return Err(self.abort(e));
            }
        }
        let Some(writer) = self.writer.take() else {
            return Err(self.abort(FetchError::write(std::io::Error::other(
                "output file was not created",
            ))));
        };
        let bytes = writer.bytes_written();
        match writer.finish() {
            Ok(path) => {
                self.advance(Stage::Done);
                tracing::info!(bytes, path = %path.display(), "image saved");
                Ok(path)
            }
            Err(e) => {
                self.stage = Stage::Failed;
                Err(e)
            }
        }
    }

    /// Validated → DirectoryReady → PathResolved.
    fn open_output(&mut self) -> Result<(), FetchError> {
        self.head.validate()?;
        self.advance(Stage::Validated);

        storage::ensure_dir(&self.output_dir)?;
        self.advance(Stage::DirectoryReady);

        let filename = url_model::derive_filename(&self.url, self.head.content_type_or_empty());
        let writer = ImageWriter::create_unique(&self.output_dir, &filename)?;
        tracing::debug!(filename, path = %writer.path().display(), "resolved save path");
        self.writer = Some(writer);
        self.advance(Stage::PathResolved);
        Ok(())
    }

    fn fail(&mut self, e: FetchError) {
        self.stage = Stage::Failed;
        self.error = Some(e);
    }

    fn abort(&mut self, e: FetchError) -> FetchError {
        tracing::debug!(from = ?self.stage, kind = ?e.kind(), "transfer failed");
        self.stage = Stage::Failed;
        if let Some(writer) = self.writer.take() {
            writer.discard();
        }
        e
    }

    fn advance(&mut self, next: Stage) {
        tracing::debug!(from = ?self.stage, to = ?next, "stage");
        self.stage = next;
    }
}

impl curl::easy::Handler for ImageSink {
    fn header(&mut self, data: &[u8]) -> bool {
        self.header_line(data);
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, curl::easy::WriteError> {
        if self.body_chunk(data) {
            Ok(data.len())
        } else {
            Ok(0) // abort transfer
        }
    }
}
