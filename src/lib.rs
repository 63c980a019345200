// format-picker - client library for a video playback backend
//
// api/      fetches video/search metadata (JSON over HTTP)
// selector/ picks the video-only and audio-only streams to play
// playback  ties the two together for one video id

pub mod api;
pub mod models;
pub mod playback;
pub mod selector;

pub use api::{ApiConfig, ApiError, HttpVideoApi, VideoApi};
pub use models::{Format, Playback, SearchResult, Video};
pub use playback::load_playback;
pub use selector::{best_audio_format, best_video_format};
