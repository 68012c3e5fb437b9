//! Human-readable day summaries for the year view.

use crate::libs::calendar::DayKey;
use crate::libs::coverage::YearOverview;

/// Multi-line description of one day's segments.
///
/// The first line is the day key itself; each segment follows as
/// `HH:MM–HH:MM <label>`. Days without segments produce a single
/// "no entry" line naming the day, never an empty string.
pub fn day_tooltip(overview: &YearOverview, key: &DayKey) -> String {
    let segments = overview.segments_for(key);
    if segments.is_empty() {
        return format!("{} — no entry", key);
    }
    let lines: Vec<String> = segments
        .iter()
        .map(|s| {
            format!(
                "{}–{} {}",
                s.start.format("%H:%M"),
                s.end.format("%H:%M"),
                s.kind.label()
            )
        })
        .collect();
    format!("{}\n{}", key, lines.join("\n"))
}
