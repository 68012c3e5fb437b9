//! Local calendar primitives: day keys, day boundaries and the canonical
//! wall-clock serialization.
//!
//! Availability is authored relative to the employee's local calendar, so
//! everything here works on `NaiveDateTime` values with no UTC offset. The
//! serialization format below must round-trip to the identical wall-clock
//! value; routing it through an instant-based type would silently shift
//! entries near midnight and near daylight-saving transitions.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One calendar day in milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Canonical local-time serialization, `YYYY-MM-DDTHH:MM:SS.sss`, no offset.
pub const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Calendar-day identifier in `YYYY-MM-DD` form.
///
/// Zero-padding makes lexicographic order match chronological order, so the
/// newtype can key ordered maps directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey(String);

impl DayKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey(date.format("%Y-%m-%d").to_string())
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(DayKey::from)
    }
}

/// Derives the day key from a timestamp's local date components. Two
/// timestamps differing only in time of day yield the same key.
pub fn day_key(t: NaiveDateTime) -> DayKey {
    DayKey::from(t.date())
}

/// Same date at `00:00:00.000`.
pub fn start_of_day(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

/// Same date at `23:59:59.999`, the day's last representable instant at
/// millisecond resolution.
pub fn end_of_day(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(last_tick())
}

fn last_tick() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid time of day")
}

/// Serializes a timestamp in the canonical local format.
pub fn to_local_string(t: NaiveDateTime) -> String {
    t.format(LOCAL_FORMAT).to_string()
}

/// Parses a local wall-clock timestamp. Accepts the canonical `T` separator
/// and the space separator used by the database, with or without fractional
/// seconds.
pub fn parse_local(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}
