//! SRT serialization.

use crate::srt::cue::Cue;

/// Seconds to `HH:MM:SS,mmm`. Milliseconds are rounded, with carry into the
/// seconds field so the millisecond group is always three digits.
pub fn format_srt_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, ms)
}

/// Render the cue sequence in the numbered-cue SRT format: index line,
/// timecode line, text lines, blank separator.
pub fn render(cues: &[Cue]) -> String {
    let mut out = String::new();
    for cue in cues {
        out.push_str(&cue.index.to_string());
        out.push('\n');
        out.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(cue.start),
            format_srt_time(cue.end)
        ));
        out.push_str(&cue.text);
        out.push_str("\n\n");
    }
    out
}
