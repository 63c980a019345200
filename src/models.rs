// Data model for the video-lookup API
//
// Mirrors the JSON returned by the playback backend: a video record with a
// `formats` array of encoded renditions. Only `format_id`, `ext`, `vcodec`
// and `acodec` are guaranteed populated; everything else degrades gracefully.

use serde::{Deserialize, Serialize};

/// One encoded rendition of a video (container + codec + resolution/bitrate)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    /// Format ID (e.g., "137", or "140-drc" for a variant)
    pub format_id: String,
    /// Free-text annotation, sometimes carrying a language marker
    #[serde(default)]
    pub format_note: String,
    /// Container extension (mp4, webm, m4a)
    pub ext: String,
    /// Video codec (avc1, vp9, av01), or "none" for audio-only streams
    pub vcodec: String,
    /// Audio codec (mp4a, opus), or "none" for video-only streams
    pub acodec: String,
    /// Direct playback URL
    pub url: String,
    /// Video width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Video height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Frames per second
    #[serde(default)]
    pub fps: Option<f32>,
    /// Resolution string (e.g., "1920x1080")
    #[serde(default)]
    pub resolution: Option<String>,
    /// File size in bytes, when the backend knows it
    #[serde(default)]
    pub filesize_in_bytes: Option<u64>,
}

impl Format {
    /// Check if this stream carries no audio track
    pub fn is_video_only(&self) -> bool {
        self.acodec == "none"
    }

    /// Check if this stream carries no video track
    pub fn is_audio_only(&self) -> bool {
        self.vcodec == "none"
    }
}

/// A video as returned by the lookup and search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    pub thumbnail: String,
    pub duration_in_seconds: u64,
    #[serde(default)]
    pub view_count: u64,
    pub formats: Vec<Format>,
}

/// Result of a search query: videos in backend ranking order
pub type SearchResult = Vec<Video>;

/// A video resolved for playback: the metadata plus the chosen streams.
/// Either stream may be absent when no suitable format exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playback {
    pub video: Video,
    pub video_format: Option<Format>,
    pub audio_format: Option<Format>,
}
