//! Shift-window generation and overlap classification.

use crate::libs::interval::{Interval, IntervalKind};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Organization-wide shift policy: where the first shift starts, how long a
/// shift runs and how many follow back to back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShiftPolicy {
    /// First shift start as `HH:MM`, e.g. `"08:00"`.
    pub shift_start: String,
    /// Shift length in hours.
    pub shift_length_hours: f64,
    /// Number of consecutive shifts per day, 1 to 3.
    pub shifts_per_day: u8,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        ShiftPolicy {
            shift_start: "08:00".to_string(),
            shift_length_hours: 8.0,
            shifts_per_day: 1,
        }
    }
}

impl ShiftPolicy {
    /// Parses `shift_start`; malformed values fall back to midnight.
    fn start_time(&self) -> NaiveTime {
        NaiveTime::parse_from_str(&self.shift_start, "%H:%M").unwrap_or(NaiveTime::MIN)
    }

    /// Shift length in milliseconds.
    pub fn length_ms(&self) -> i64 {
        (self.shift_length_hours * 3_600_000.0) as i64
    }
}

/// One generated shift window for a specific date. Late windows of long
/// policies may run past midnight into the next day.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftWindow {
    pub label: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Classification of a shift window against a day's intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftState {
    None,
    Available,
    Unavailable,
}

impl ShiftState {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftState::None => "-",
            ShiftState::Available => "available",
            ShiftState::Unavailable => "unavailable",
        }
    }
}

/// Generates the day's shift windows: window `i` starts at
/// `date @ shift_start + i * length` and ends one length later.
pub fn build_shift_windows(date: NaiveDate, policy: &ShiftPolicy) -> Vec<ShiftWindow> {
    let length = Duration::milliseconds(policy.length_ms());
    let base = date.and_time(policy.start_time());
    (0..policy.shifts_per_day as usize)
        .map(|i| {
            let start = base + length * (i as i32);
            ShiftWindow {
                label: shift_label(policy.shifts_per_day, i),
                start,
                end: start + length,
            }
        })
        .collect()
}

/// Labels follow the product: a single shift is just "Shift"; two- and
/// three-shift schedules use Early/Late/Night. Indices past the named set
/// degrade to a numbered label.
fn shift_label(shifts_per_day: u8, index: usize) -> String {
    if shifts_per_day == 1 {
        return "Shift".to_string();
    }
    match index {
        0 => "Early".to_string(),
        1 => "Late".to_string(),
        2 => "Night".to_string(),
        n => format!("Shift {}", n + 1),
    }
}

/// Classifies one window by scanning the day's intervals in the given order.
///
/// The overlap test is strict (`end > window.start && start < window.end`);
/// touching endpoints do not count. The first unavailable overlap vetoes the
/// window immediately, while available overlaps only upgrade the state and
/// scanning continues, so a later unavailable entry still downgrades the
/// result. Intervals are not sorted before the scan.
pub fn classify_window(window: &ShiftWindow, intervals: &[Interval]) -> ShiftState {
    let mut state = ShiftState::None;
    for b in intervals {
        let overlaps = b.end > window.start && b.start < window.end;
        if overlaps {
            if b.kind == IntervalKind::Unavailable {
                return ShiftState::Unavailable;
            }
            state = ShiftState::Available;
        }
    }
    state
}
