//! Audio extraction behind a trait.
//!
//! The codec pipeline itself is not this crate's business: the production
//! backend hands the video to ffmpeg through temp files and takes the mp3
//! back the same way. Tests substitute a stub.

use crate::errors::ConvertError;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::instrument;

#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Produce the audio track of the given video as encoded bytes.
    async fn extract_audio(&self, video: &[u8]) -> Result<Bytes, ConvertError>;
}

/// Extracts audio by shelling out to ffmpeg.
pub struct FfmpegExtractor {
    binary: String,
}

impl FfmpegExtractor {
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl AudioExtractor for FfmpegExtractor {
    #[instrument(skip_all)]
    async fn extract_audio(&self, video: &[u8]) -> Result<Bytes, ConvertError> {
        // ffmpeg wants files, not pipes, for container probing; the tempdir
        // cleans both up on drop.
        let workdir = tempfile::tempdir()?;
        let video_path = workdir.path().join("input.video");
        let audio_path = workdir.path().join("output.mp3");

        tokio::fs::write(&video_path, video).await?;

        let output = tokio::process::Command::new(&self.binary)
            .arg("-i")
            .arg(&video_path)
            // Drop the video stream, keep the audio track as mp3.
            .arg("-vn")
            .arg("-f")
            .arg("mp3")
            .arg("-y")
            .arg(&audio_path)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(target: "extract", status = %output.status, "ffmpeg failed");
            return Err(ConvertError::Extraction(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.lines().last().unwrap_or_default()
            )));
        }

        let audio = tokio::fs::read(&audio_path).await?;
        if audio.is_empty() {
            return Err(ConvertError::Extraction(
                "ffmpeg produced no audio output".to_string(),
            ));
        }

        Ok(Bytes::from(audio))
    }
}
