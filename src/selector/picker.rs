// Stream selection over a video's format list
//
// Pure functions: given the `formats` array from one video lookup, choose
// at most one video-only and one audio-only stream. Priority tables carry
// the known-good tags (tables.rs); when a catalog serves tags the tables
// do not know, the video path falls back to a resolution-maximizing scan.

use crate::models::Format;
use crate::selector::tables::{PREFERRED_AUDIO_TAGS, PREFERRED_VIDEO_TAGS};

/// Canonical tag of a format id: the part before the first `-`.
/// Split/variant renditions ("140-drc") collapse onto their base tag.
pub fn base_tag(format_id: &str) -> &str {
    match format_id.find('-') {
        Some(dash) => &format_id[..dash],
        None => format_id,
    }
}

/// Scan `priority` most-preferred first and return the first format whose
/// base tag matches the current entry. Ties among formats sharing a tag go
/// to the earliest element in input order.
pub fn pick_by_priority<'a>(formats: &[&'a Format], priority: &[&str]) -> Option<&'a Format> {
    for tag in priority {
        let found = formats
            .iter()
            .copied()
            .find(|f| base_tag(&f.format_id) == *tag);
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Pick the video-only stream to play.
///
/// Priority-table hit wins, but only when the stream is genuinely
/// video-only; a combined stream squatting on a video tag is rejected.
/// On a miss, fall back to the highest-resolution mp4 "av"-codec stream
/// with no audio track, since tags are catalog-specific and not stable.
pub fn best_video_format(formats: &[Format]) -> Option<&Format> {
    let all: Vec<&Format> = formats.iter().collect();
    if let Some(candidate) = pick_by_priority(&all, PREFERRED_VIDEO_TAGS) {
        if candidate.is_video_only() {
            return Some(candidate);
        }
    }

    let mut best: Option<&Format> = None;
    for f in formats {
        if f.ext != "mp4" || !f.vcodec.starts_with("av") || !f.acodec.is_empty() {
            continue;
        }
        if best.map_or(true, |b| pixel_area(f) > pixel_area(b)) {
            best = Some(f);
        }
    }
    best
}

/// Pick the audio-only stream to play.
///
/// An English marker in `format_note` dominates bitrate preference: when
/// any format carries one, the priority table is consulted only within
/// that subset, and a miss there is final (no retry against the full
/// list). Without a language signal the table governs the whole list.
pub fn best_audio_format(formats: &[Format]) -> Option<&Format> {
    let english: Vec<&Format> = formats
        .iter()
        .filter(|f| {
            let note = f.format_note.to_lowercase();
            note.contains("english") || note.contains("eng")
        })
        .collect();

    if !english.is_empty() {
        return pick_by_priority(&english, PREFERRED_AUDIO_TAGS);
    }

    let all: Vec<&Format> = formats.iter().collect();
    pick_by_priority(&all, PREFERRED_AUDIO_TAGS)
}

// Missing width scores 0 and missing height scores 1, so an incomplete
// descriptor never wins a tie against a fully-specified one.
fn pixel_area(f: &Format) -> u64 {
    u64::from(f.width.unwrap_or(0)) * u64::from(f.height.unwrap_or(1))
}
