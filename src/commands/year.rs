//! Year coverage overview command.
//!
//! Aggregates an employee's availability over one year and renders per-day
//! coverage bars. `--day` prints the segment summary of a single day, the
//! CLI analogue of the year view's tooltips.

use crate::db::availability::Availability;
use crate::db::employees::Employees;
use crate::libs::calendar::DayKey;
use crate::libs::coverage::aggregate_year;
use crate::libs::messages::Message;
use crate::libs::tooltip::day_tooltip;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct YearArgs {
    #[arg(long, help = "Employee id")]
    employee: i64,
    #[arg(long, help = "Year, defaults to the current year")]
    year: Option<i32>,
    #[arg(long, help = "Print the segment summary for one day (YYYY-MM-DD)")]
    day: Option<String>,
}

pub fn cmd(args: YearArgs) -> Result<()> {
    let year = args.year.unwrap_or_else(|| Local::now().year());

    let employee = match Employees::new()?.fetch(args.employee)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::EmployeeNotFound(args.employee)),
    };
    let intervals = Availability::new()?.fetch(employee.id)?;
    let overview = aggregate_year(&intervals, year);

    if let Some(raw) = args.day {
        let key: DayKey = match raw.parse() {
            Ok(key) => key,
            Err(_) => msg_bail_anyhow!(Message::InvalidDate(raw)),
        };
        println!("{}", day_tooltip(&overview, &key));
        return Ok(());
    }

    msg_print!(Message::YearViewHeader(year, employee.name.clone()), true);
    View::year(&overview, year)
}
