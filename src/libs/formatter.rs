//! Time formatting utilities for tables and export.
//!
//! All durations render as "HH:MM": hours and minutes zero-padded, seconds
//! dropped, negative values clamped to "00:00". Coverage totals arrive as
//! milliseconds and go through the same path so every surface reads the same.

use crate::libs::splitter::DaySegment;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A day segment pre-formatted for display and export.
///
/// String fields feed directly into table rendering and CSV/Excel rows
/// without repeated formatting at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedSegment {
    /// Sequential number within the day, starting at 1.
    pub id: i32,
    /// Formatted start time, "HH:MM".
    pub start: String,
    /// Formatted end time, "HH:MM".
    pub end: String,
    /// Kind label, "available" or "unavailable".
    pub kind: String,
}

/// A trait for formatting a day's segment list.
pub trait SegmentGroup {
    /// Formats segments into [`FormattedSegment`] rows for display.
    fn format(&self) -> Vec<FormattedSegment>;
}

impl SegmentGroup for [DaySegment] {
    fn format(&self) -> Vec<FormattedSegment> {
        self.iter()
            .enumerate()
            .map(|(index, s)| FormattedSegment {
                id: (index + 1) as i32,
                start: s.start.format("%H:%M").to_string(),
                end: s.end.format("%H:%M").to_string(),
                kind: s.kind.label().to_string(),
            })
            .collect()
    }
}

/// Formats a duration as "HH:MM".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Clamp so calculation slack never renders as a negative time
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a millisecond total as "HH:MM".
pub fn format_ms(ms: i64) -> String {
    format_duration(&Duration::milliseconds(ms.max(0)))
}
