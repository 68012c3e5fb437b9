//! Month listing projection and the per-day rendering decision.

use crate::libs::calendar::{end_of_day, DayKey};
use crate::libs::interval::{Interval, IntervalKind};
use crate::libs::splitter::{split_by_day, DaySegment};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;

/// Projects the raw interval list onto one month.
///
/// Intervals overlapping the month are split at midnight and the resulting
/// segments grouped per day. Days come back sorted by key (lexicographic,
/// which is chronological) with each day's segments sorted by start time.
/// Days without segments are omitted rather than zero-filled; the year
/// overview is the surface that answers absent days with zeroes.
pub fn project_month(intervals: &[Interval], year: i32, month: u32) -> Vec<(DayKey, Vec<DaySegment>)> {
    let (first, last) = match month_bounds(year, month) {
        Some(bounds) => bounds,
        None => return Vec::new(),
    };

    let mut by_day: BTreeMap<DayKey, Vec<DaySegment>> = BTreeMap::new();
    for interval in intervals {
        if interval.end < first || interval.start > last {
            continue;
        }
        for seg in split_by_day(interval) {
            by_day.entry(seg.day()).or_default().push(seg);
        }
    }

    for segments in by_day.values_mut() {
        segments.sort_by_key(|s| s.start);
    }
    by_day.into_iter().collect()
}

/// `[first 00:00:00.000, last 23:59:59.999]` of the month (1-12).
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next - Duration::days(1);
    Some((
        first.and_time(NaiveTime::MIN),
        last.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?),
    ))
}

/// Full-day heuristic taken from the product: min start and max end across
/// the day's segments, full when the max end reaches the last instant of the
/// min start's day. Interior gaps are intentionally not detected; rendering
/// depends on this exact behavior.
pub fn covers_full_day(segments: &[DaySegment]) -> bool {
    let min_start = match segments.iter().map(|s| s.start).min() {
        Some(t) => t,
        None => return false,
    };
    let max_end = match segments.iter().map(|s| s.end).max() {
        Some(t) => t,
        None => return false,
    };
    max_end >= end_of_day(min_start)
}

/// How a day renders in the month listing.
#[derive(Debug, Clone, PartialEq)]
pub enum DayRendering {
    /// Whole day covered; any unavailable segment makes the day unavailable.
    FullDay { unavailable: bool },
    /// Partial coverage; segments listed individually, sorted by start.
    Segments(Vec<DaySegment>),
}

/// Decides how to render one day's segment list.
pub fn day_rendering(segments: &[DaySegment]) -> DayRendering {
    if covers_full_day(segments) {
        let unavailable = segments.iter().any(|s| s.kind == IntervalKind::Unavailable);
        return DayRendering::FullDay { unavailable };
    }
    let mut sorted = segments.to_vec();
    sorted.sort_by_key(|s| s.start);
    DayRendering::Segments(sorted)
}
