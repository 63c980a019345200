// Static priority tables for stream selection
//
// Ordered most-preferred first. These are configuration data, not logic:
// the selection functions in picker.rs take tables as plain slices, so
// tests (or a future config layer) can substitute alternates.

/// Video-only tags: AVC over AV1 over VP9, higher resolution first
/// within a codec family.
pub const PREFERRED_VIDEO_TAGS: &[&str] = &[
    "264", // 1440p MP4 AVC
    "137", // 1080p MP4 AVC
    "136", // 720p MP4 AVC
    "135", // 480p MP4 AVC
    "400", // 1440p MP4 AV1
    "399", // 1080p MP4 AV1
    "398", // 720p MP4 AV1
    "397", // 480p MP4 AV1
    "271", // 1440p webm VP9
    "248", // 1080p webm VP9
    "247", // 720p webm VP9
    "246", // 480p webm VP9
];

/// Audio-only tags: m4a tiers before webm tiers, low bitrate first
/// within a container.
pub const PREFERRED_AUDIO_TAGS: &[&str] = &[
    "139", // m4a 48kbps
    "140", // m4a 128kbps
    "141", // m4a 256kbps
    "249", // webm 50kbps
    "250", // webm 70kbps
    "251", // webm 160kbps
];
