//! Splits availability intervals at local midnight boundaries.
//!
//! Every view goes through the same split: the month listing groups the
//! resulting segments per day, the year overview accumulates their clipped
//! durations. Keeping the primitive in one place is deliberate; the product
//! used to carry several drifting copies of it.

use crate::libs::calendar::{day_key, end_of_day, start_of_day, DayKey};
use crate::libs::interval::{Interval, IntervalKind};
use chrono::{Duration, NaiveDateTime};

/// An interval clipped to lie within a single calendar day.
///
/// Only the splitter builds these; consumers may assume
/// `day_key(start) == day_key(end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySegment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: IntervalKind,
}

impl DaySegment {
    /// The calendar day this segment belongs to.
    pub fn day(&self) -> DayKey {
        day_key(self.start)
    }

    /// Millisecond length, clamped at zero.
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds().max(0)
    }

    /// Widens the segment back into a plain interval, for callers that only
    /// check overlap and accept either representation.
    pub fn as_interval(&self) -> Interval {
        Interval::new(self.start, self.end, self.kind)
    }
}

/// Decomposes one interval into per-day segments clipped to day boundaries.
///
/// Walks midnight to midnight from `start`, emitting one segment per touched
/// day: `[max(start, day start), min(end, day end)]` with the kind preserved.
/// `end < start` yields no segments, and the iteration count is capped at the
/// interval's day span so malformed input can never loop.
pub fn split_by_day(interval: &Interval) -> Vec<DaySegment> {
    let mut segments = Vec::new();
    let end = interval.end;
    if end < interval.start {
        return segments;
    }

    let max_days = (end.date() - interval.start.date()).num_days() + 1;
    let mut cur = interval.start;
    while start_of_day(cur) <= end && (segments.len() as i64) < max_days {
        let seg_end = end.min(end_of_day(cur));
        segments.push(DaySegment {
            start: cur,
            end: seg_end,
            kind: interval.kind,
        });
        cur = start_of_day(cur) + Duration::days(1);
    }
    segments
}
