use common::types::VideoFileId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Job payload did not parse as a descriptor.
    #[error("Malformed job descriptor: {0}")]
    MalformedJob(String),

    /// The referenced video blob does not exist.
    #[error("Video blob not found: {0}")]
    VideoNotFound(VideoFileId),

    /// Blob store failure.
    #[error("Blob store error: {0}")]
    Store(String),

    /// The external extraction tool failed or produced no audio.
    #[error("Audio extraction failed: {0}")]
    Extraction(String),

    /// Filesystem or process plumbing around the extraction tool.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
