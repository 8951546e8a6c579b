//! Conversion job descriptor.

use crate::errors::ConvertError;
use common::types::VideoFileId;
use serde::{Deserialize, Serialize};

/// One queued unit of work: which stored video to extract audio from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub video_fid: VideoFileId,
}

impl JobDescriptor {
    /// Parse a raw message payload into a descriptor.
    pub fn from_json(raw: &[u8]) -> Result<Self, ConvertError> {
        serde_json::from_slice(raw).map_err(|e| ConvertError::MalformedJob(e.to_string()))
    }
}
