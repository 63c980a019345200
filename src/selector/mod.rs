// Format selector - chooses which streams to play
//
// Pure and stateless: one call per video lookup, no I/O, safe to run
// concurrently. tables.rs holds the tag preference order; picker.rs holds
// the selection logic.

mod picker;
mod tables;

pub use picker::{base_tag, best_audio_format, best_video_format, pick_by_priority};
pub use tables::{PREFERRED_AUDIO_TAGS, PREFERRED_VIDEO_TAGS};
