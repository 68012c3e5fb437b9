//! Raw availability interval model shared by every view surface.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Classification tag carried by every availability interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    Available,
    Unavailable,
}

impl IntervalKind {
    /// Label used in listings, tooltips and the database.
    pub fn label(&self) -> &'static str {
        match self {
            IntervalKind::Available => "available",
            IntervalKind::Unavailable => "unavailable",
        }
    }

    /// Maps a stored label back to the kind. Unknown values read as available,
    /// matching how the product treats untagged entries.
    pub fn parse(s: &str) -> IntervalKind {
        if s == "unavailable" {
            IntervalKind::Unavailable
        } else {
            IntervalKind::Available
        }
    }
}

/// A single availability interval as authored in the mobile app.
///
/// Timestamps are local wall-clock values; the employee's calendar, not UTC,
/// is authoritative. `NaiveDateTime` keeps that semantic intact where an
/// instant-based type would shift entries near midnight. `end >= start` is
/// trusted upstream; violations degrade to zero segments downstream instead
/// of raising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: IntervalKind,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, kind: IntervalKind) -> Self {
        Interval { start, end, kind }
    }

    /// Millisecond length, clamped at zero for malformed input.
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds().max(0)
    }
}
