//! Year-level aggregation: per-day coverage totals and clipped segments.

use crate::libs::calendar::DayKey;
use crate::libs::interval::{Interval, IntervalKind};
use crate::libs::splitter::{split_by_day, DaySegment};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Millisecond totals for one day, split by interval kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoverageEntry {
    pub available_ms: i64,
    pub unavailable_ms: i64,
}

/// Aggregated year view: per-day totals plus the segments backing tooltips
/// and drill-down. Both maps share the same keys; days without entries are
/// simply absent and read as zero through [`YearOverview::coverage_for`].
#[derive(Debug, Default)]
pub struct YearOverview {
    pub coverage: BTreeMap<DayKey, CoverageEntry>,
    pub segments: BTreeMap<DayKey, Vec<DaySegment>>,
}

impl YearOverview {
    /// Coverage for a day, zero when the day has no entries.
    pub fn coverage_for(&self, key: &DayKey) -> CoverageEntry {
        self.coverage.get(key).copied().unwrap_or_default()
    }

    /// Segments for a day, sorted by start time; empty when absent.
    pub fn segments_for(&self, key: &DayKey) -> &[DaySegment] {
        self.segments.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Builds the year overview from the raw interval list.
///
/// Intervals touching the year are split at midnight; each segment's clipped
/// duration lands in its day's totals. Overlapping intervals of the same kind
/// are summed as-is, so a day can report more than 24h when the raw data
/// overlaps; the authoring surface is responsible for keeping entries
/// disjoint. Pure function of its inputs; re-running yields identical output.
pub fn aggregate_year(intervals: &[Interval], year: i32) -> YearOverview {
    let mut overview = YearOverview::default();
    let (first, last) = match year_bounds(year) {
        Some(bounds) => bounds,
        None => return overview,
    };

    for interval in intervals {
        if interval.end < first || interval.start > last {
            continue;
        }
        for seg in split_by_day(interval) {
            let key = seg.day();
            let entry = overview.coverage.entry(key.clone()).or_default();
            match seg.kind {
                IntervalKind::Available => entry.available_ms += seg.duration_ms(),
                IntervalKind::Unavailable => entry.unavailable_ms += seg.duration_ms(),
            }
            overview.segments.entry(key).or_default().push(seg);
        }
    }

    for segments in overview.segments.values_mut() {
        segments.sort_by_key(|s| s.start);
    }
    overview
}

/// `[Jan 1 00:00:00.000, Dec 31 23:59:59.999]` of the target year.
fn year_bounds(year: i32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?.and_time(NaiveTime::MIN);
    let last = NaiveDate::from_ymd_opt(year, 12, 31)?.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?);
    Some((first, last))
}
