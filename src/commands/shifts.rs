//! Shift-window classification command.
//!
//! Generates the day's shift windows from the configured policy and
//! classifies each against the employee's raw intervals. Classification only
//! checks overlap, so the raw list is used as-is without day splitting.

use crate::db::availability::Availability;
use crate::db::employees::Employees;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::shift::{build_shift_windows, classify_window, ShiftState};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ShiftsArgs {
    #[arg(long, help = "Employee id")]
    employee: i64,
    #[arg(long, help = "Date (YYYY-MM-DD), defaults to today")]
    date: Option<String>,
}

pub fn cmd(args: ShiftsArgs) -> Result<()> {
    let date = match args.date {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => msg_bail_anyhow!(Message::InvalidDate(raw)),
        },
        None => Local::now().date_naive(),
    };

    let employee = match Employees::new()?.fetch(args.employee)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::EmployeeNotFound(args.employee)),
    };
    let intervals = Availability::new()?.fetch(employee.id)?;

    let policy = Config::read()?.policy();
    let windows = build_shift_windows(date, &policy);
    let states: Vec<ShiftState> = windows.iter().map(|w| classify_window(w, &intervals)).collect();

    msg_print!(
        Message::ShiftViewHeader(date.format("%Y-%m-%d").to_string(), employee.name.clone()),
        true
    );
    View::shifts(&windows, &states)
}
