//! Data export functionality for external analysis and backup.
//!
//! Exports the same projections the viewing commands render: the year
//! coverage table and the month segment listing, in CSV, JSON or Excel.
//! String fields are pre-formatted so every format presents identically.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrix::db::employees::Employee;
//! use shiftrix::libs::export::{ExportData, ExportFormat, Exporter};
//! use shiftrix::libs::interval::Interval;
//!
//! # fn main() -> anyhow::Result<()> {
//! # let (employee, intervals): (Employee, Vec<Interval>) = unimplemented!();
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(ExportData::Coverage, &employee, &intervals, 2025, 1)?;
//! # Ok(())
//! # }
//! ```

use crate::db::employees::Employee;
use crate::libs::calendar::to_local_string;
use crate::libs::coverage::aggregate_year;
use crate::libs::formatter::format_ms;
use crate::libs::interval::Interval;
use crate::libs::messages::Message;
use crate::libs::month::project_month;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON preserving structure and types.
    Json,
    /// Excel workbook with formatted headers.
    Excel,
}

/// Data projections available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Per-day coverage totals for a year.
    Coverage,
    /// Per-day segment listing for a month.
    Month,
}

/// One day of the year coverage export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCoverageRow {
    /// Day in YYYY-MM-DD format
    pub day: String,
    /// Available time formatted as HH:MM
    pub available: String,
    /// Unavailable time formatted as HH:MM
    pub unavailable: String,
}

/// One segment of the month listing export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSegmentRow {
    /// Day in YYYY-MM-DD format
    pub day: String,
    /// Segment start in canonical local format
    pub start: String,
    /// Segment end in canonical local format
    pub end: String,
    /// Kind label, "available" or "unavailable"
    pub kind: String,
}

/// Year coverage export with context and totals.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCoverage {
    pub employee: String,
    pub year: i32,
    pub days: Vec<ExportCoverageRow>,
    pub total_available: String,
    pub total_unavailable: String,
}

/// Month listing export with context.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMonth {
    pub employee: String,
    /// Month and year in "Month YYYY" format
    pub month: String,
    pub segments: Vec<ExportSegmentRow>,
}

/// Export handler tying a format to an output path.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped file name
    /// with the format's extension is generated in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("shiftrix_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Dispatches to the projection-specific export.
    ///
    /// `year` selects the coverage year; `year`/`month` select the listing
    /// month. The interval list is the employee's raw availability.
    pub fn export(&self, data: ExportData, employee: &Employee, intervals: &[Interval], year: i32, month: u32) -> Result<()> {
        match data {
            ExportData::Coverage => self.export_coverage(employee, intervals, year),
            ExportData::Month => self.export_month(employee, intervals, year, month),
        }
    }

    fn export_coverage(&self, employee: &Employee, intervals: &[Interval], year: i32) -> Result<()> {
        let overview = aggregate_year(intervals, year);
        if overview.coverage.is_empty() {
            msg_info!(Message::ExportNothingToExport);
            return Ok(());
        }

        let (total_available, total_unavailable) = overview
            .coverage
            .values()
            .fold((0i64, 0i64), |(a, u), e| (a + e.available_ms, u + e.unavailable_ms));

        let data = ExportCoverage {
            employee: employee.name.clone(),
            year,
            days: overview
                .coverage
                .iter()
                .map(|(key, entry)| ExportCoverageRow {
                    day: key.to_string(),
                    available: format_ms(entry.available_ms),
                    unavailable: format_ms(entry.unavailable_ms),
                })
                .collect(),
            total_available: format_ms(total_available),
            total_unavailable: format_ms(total_unavailable),
        };

        match self.format {
            ExportFormat::Csv => self.export_coverage_csv(&data)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&data)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_coverage_excel(&data)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_month(&self, employee: &Employee, intervals: &[Interval], year: i32, month: u32) -> Result<()> {
        let days = project_month(intervals, year, month);
        if days.is_empty() {
            msg_info!(Message::ExportNothingToExport);
            return Ok(());
        }

        let month_name = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", year, month));

        let data = ExportMonth {
            employee: employee.name.clone(),
            month: month_name,
            segments: days
                .iter()
                .flat_map(|(key, segments)| {
                    segments.iter().map(move |s| ExportSegmentRow {
                        day: key.to_string(),
                        start: to_local_string(s.start),
                        end: to_local_string(s.end),
                        kind: s.kind.label().to_string(),
                    })
                })
                .collect(),
        };

        match self.format {
            ExportFormat::Csv => self.export_month_csv(&data)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&data)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_month_excel(&data)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_coverage_csv(&self, data: &ExportCoverage) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Day", "Available", "Unavailable"])?;
        for row in &data.days {
            wtr.write_record([row.day.as_str(), row.available.as_str(), row.unavailable.as_str()])?;
        }

        wtr.write_record(["", "", ""])?;
        wtr.write_record(["Total", data.total_available.as_str(), data.total_unavailable.as_str()])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_month_csv(&self, data: &ExportMonth) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Day", "Start", "End", "Kind"])?;
        for row in &data.segments {
            wtr.write_record([row.day.as_str(), row.start.as_str(), row.end.as_str(), row.kind.as_str()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_coverage_excel(&self, data: &ExportCoverage) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, format!("COVERAGE {} — {}", data.year, data.employee), &header_format)?;
        worksheet.write_string_with_format(1, 0, "Day", &header_format)?;
        worksheet.write_string_with_format(1, 1, "Available", &header_format)?;
        worksheet.write_string_with_format(1, 2, "Unavailable", &header_format)?;

        let mut row = 2;
        for day in &data.days {
            worksheet.write_string(row, 0, &day.day)?;
            worksheet.write_string(row, 1, &day.available)?;
            worksheet.write_string(row, 2, &day.unavailable)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "Total", &header_format)?;
        worksheet.write_string(row, 1, &data.total_available)?;
        worksheet.write_string(row, 2, &data.total_unavailable)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_month_excel(&self, data: &ExportMonth) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, format!("{} — {}", data.month, data.employee), &header_format)?;
        worksheet.write_string_with_format(1, 0, "Day", &header_format)?;
        worksheet.write_string_with_format(1, 1, "Start", &header_format)?;
        worksheet.write_string_with_format(1, 2, "End", &header_format)?;
        worksheet.write_string_with_format(1, 3, "Kind", &header_format)?;

        let mut row = 2;
        for segment in &data.segments {
            worksheet.write_string(row, 0, &segment.day)?;
            worksheet.write_string(row, 1, &segment.start)?;
            worksheet.write_string(row, 2, &segment.end)?;
            worksheet.write_string(row, 3, &segment.kind)?;
            row += 1;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
