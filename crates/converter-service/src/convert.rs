//! The worker operation: one job descriptor in, one audio blob id out.

use crate::errors::ConvertError;
use crate::extract::AudioExtractor;
use crate::job::JobDescriptor;
use crate::store::BlobStore;
use common::types::AudioFileId;
use tracing::{info, instrument};

/// Run one conversion job.
///
/// Fetches the referenced video blob, extracts its audio track, and
/// persists the result in the audio store tagged with the source
/// `video_fid`. Nothing is written if fetch or extraction fails.
#[instrument(skip(video_store, audio_store, extractor), fields(video_fid = %job.video_fid))]
pub async fn process_job(
    job: &JobDescriptor,
    video_store: &dyn BlobStore,
    audio_store: &dyn BlobStore,
    extractor: &dyn AudioExtractor,
) -> Result<AudioFileId, ConvertError> {
    let video = video_store
        .get(job.video_fid.0)
        .await?
        .ok_or(ConvertError::VideoNotFound(job.video_fid))?;

    let audio = extractor.extract_audio(&video).await?;

    let blob_id = audio_store.put(audio, Some(job.video_fid)).await?;

    info!(audio_fid = %blob_id, "Conversion complete");

    Ok(AudioFileId(blob_id))
}
