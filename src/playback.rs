// Playback resolution - fetch a video and choose its streams
//
// One metadata fetch, then both selector passes. A selector miss is a
// normal outcome carried in the Playback, not an error.

use crate::api::{ApiError, VideoApi};
use crate::models::Playback;
use crate::selector::{best_audio_format, best_video_format};

/// Resolve a video id into playable streams.
pub async fn load_playback(api: &dyn VideoApi, id: &str) -> Result<Playback, ApiError> {
    let video = api.get_video(id).await?;

    let video_format = best_video_format(&video.formats).cloned();
    let audio_format = best_audio_format(&video.formats).cloned();

    Ok(Playback {
        video,
        video_format,
        audio_format,
    })
}
