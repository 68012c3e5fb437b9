//! Availability export command.

use crate::db::availability::Availability;
use crate::db::employees::Employees;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, help = "Employee id")]
    employee: i64,
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv, help = "Output format")]
    format: ExportFormat,
    #[arg(long, value_enum, default_value_t = ExportData::Coverage, help = "Data projection to export")]
    data: ExportData,
    #[arg(long, help = "Year, defaults to the current year")]
    year: Option<i32>,
    #[arg(long, help = "Month 1-12 for the month projection, defaults to the current month")]
    month: Option<u32>,
    #[arg(long, help = "Output file path")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let now = Local::now();
    let year = args.year.unwrap_or_else(|| now.year());
    let month = args.month.unwrap_or_else(|| now.month());

    let employee = match Employees::new()?.fetch(args.employee)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::EmployeeNotFound(args.employee)),
    };
    let intervals = Availability::new()?.fetch(employee.id)?;

    Exporter::new(args.format, args.output).export(args.data, &employee, &intervals, year, month)
}
