//! Terminal rendering of employees and availability views.

use crate::db::employees::Employee;
use crate::libs::calendar::{DayKey, DAY_MS};
use crate::libs::config::Granularity;
use crate::libs::coverage::YearOverview;
use crate::libs::formatter::{format_ms, SegmentGroup};
use crate::libs::month::{day_rendering, DayRendering};
use crate::libs::shift::{build_shift_windows, classify_window, ShiftPolicy, ShiftState, ShiftWindow};
use crate::libs::splitter::DaySegment;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use prettytable::{row, Table};

/// Characters for the year bars, indexed by available fraction of the day.
const BAR_LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ROLE", "STATUS"]);
        for employee in employees {
            table.add_row(row![employee.id, employee.name, employee.role, employee.status]);
        }
        table.printstd();

        Ok(())
    }

    /// Month listing: one block per day with at least one segment.
    pub fn month(days: &[(DayKey, Vec<DaySegment>)], granularity: Granularity, policy: &ShiftPolicy) -> Result<()> {
        for (key, segments) in days {
            match key.date() {
                Some(date) => println!("\n{} ({})", key, date.format("%a")),
                None => println!("\n{}", key),
            }
            match granularity {
                Granularity::Day => Self::day_row(segments),
                Granularity::Hour => Self::segment_table(segments),
                Granularity::Shift => {
                    if let Some(date) = key.date() {
                        let blocks: Vec<_> = segments.iter().map(|s| s.as_interval()).collect();
                        let windows = build_shift_windows(date, policy);
                        let states: Vec<ShiftState> = windows.iter().map(|w| classify_window(w, &blocks)).collect();
                        Self::shift_table(&windows, &states);
                    }
                }
            }
        }
        Ok(())
    }

    /// Shift windows of a single day with their classification.
    pub fn shifts(windows: &[ShiftWindow], states: &[ShiftState]) -> Result<()> {
        Self::shift_table(windows, states);
        Ok(())
    }

    /// Year overview: one row per month, one bar cell per day, plus totals.
    pub fn year(overview: &YearOverview, year: i32) -> Result<()> {
        for month in 1..=12u32 {
            let first = match NaiveDate::from_ymd_opt(year, month, 1) {
                Some(d) => d,
                None => continue,
            };
            let mut cells = String::new();
            let mut date = first;
            while date.month() == month {
                let key = DayKey::from(date);
                cells.push(Self::day_cell(overview, &key));
                date = match date.succ_opt() {
                    Some(d) => d,
                    None => break,
                };
            }
            println!("{}  {}", first.format("%b"), cells);
        }

        let (avail, unavail) = overview
            .coverage
            .values()
            .fold((0i64, 0i64), |(a, u), e| (a + e.available_ms, u + e.unavailable_ms));
        println!("\navailable {}  unavailable {}", format_ms(avail), format_ms(unavail));
        println!("cells: bar height = available share of the day, x = unavailable only, · = no entry");
        println!("days with both kinds show their available share; list the day for details");
        Ok(())
    }

    /// One bar cell for a day of the year view.
    ///
    /// The product's year view stacks both shares per day; a single terminal
    /// cell cannot, so mixed days show only the available share and the
    /// legend points to the per-day listing for the rest.
    pub fn day_cell(overview: &YearOverview, key: &DayKey) -> char {
        let entry = overview.coverage_for(key);
        if entry.available_ms == 0 && entry.unavailable_ms == 0 {
            return '·';
        }
        if entry.available_ms == 0 {
            return 'x';
        }
        let fraction = clamp01(entry.available_ms as f64 / DAY_MS as f64);
        let index = (fraction * (BAR_LEVELS.len() - 1) as f64).round() as usize;
        BAR_LEVELS[index.min(BAR_LEVELS.len() - 1)]
    }

    /// Day-granularity row: full-day collapse or individual segments.
    fn day_row(segments: &[DaySegment]) {
        match day_rendering(segments) {
            DayRendering::FullDay { unavailable: true } => println!("  Unavailable (full day)"),
            DayRendering::FullDay { unavailable: false } => println!("  Available (full day)"),
            DayRendering::Segments(sorted) => Self::segment_table(&sorted),
        }
    }

    fn segment_table(segments: &[DaySegment]) {
        let mut table = Table::new();
        table.add_row(row!["#", "FROM", "TO", "KIND"]);
        for event in segments.format() {
            table.add_row(row![event.id, event.start, event.end, event.kind]);
        }
        table.printstd();
    }

    fn shift_table(windows: &[ShiftWindow], states: &[ShiftState]) {
        let mut table = Table::new();
        table.add_row(row!["SHIFT", "FROM", "TO", "STATE"]);
        for (window, state) in windows.iter().zip(states) {
            table.add_row(row![
                window.label,
                window.start.format("%H:%M"),
                window.end.format("%H:%M"),
                state.label()
            ]);
        }
        table.printstd();
    }
}

/// Clamps a fraction into `[0, 1]` for bar rendering.
fn clamp01(n: f64) -> f64 {
    n.clamp(0.0, 1.0)
}
