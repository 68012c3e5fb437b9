//! Month listing command.
//!
//! Projects an employee's availability onto one month and renders each day
//! at the selected granularity. The chosen granularity is remembered through
//! the preferences repository so the next invocation reuses it.

use crate::db::availability::Availability;
use crate::db::employees::Employees;
use crate::db::prefs::Prefs;
use crate::libs::config::{Config, Granularity};
use crate::libs::messages::Message;
use crate::libs::month::project_month;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

/// Preference key for the last used month granularity.
const PREF_GRANULARITY: &str = "month.granularity";

#[derive(Debug, Args)]
pub struct MonthArgs {
    #[arg(long, help = "Employee id")]
    employee: i64,
    #[arg(long, help = "Month 1-12, defaults to the current month")]
    month: Option<u32>,
    #[arg(long, help = "Year, defaults to the current year")]
    year: Option<i32>,
    #[arg(long, value_enum, help = "Day rendering granularity")]
    granularity: Option<Granularity>,
}

pub fn cmd(args: MonthArgs) -> Result<()> {
    let config = Config::read()?;
    let mut prefs = Prefs::new()?;

    // Explicit flag wins and is remembered; otherwise the stored preference,
    // then the configured default.
    let granularity = match args.granularity {
        Some(g) => {
            prefs.set(PREF_GRANULARITY, &g)?;
            g
        }
        None => prefs
            .get::<Granularity>(PREF_GRANULARITY)?
            .unwrap_or_else(|| config.default_granularity()),
    };

    let now = Local::now();
    let month = args.month.unwrap_or_else(|| now.month());
    let year = args.year.unwrap_or_else(|| now.year());

    let employee = match Employees::new()?.fetch(args.employee)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::EmployeeNotFound(args.employee)),
    };
    let intervals = Availability::new()?.fetch(employee.id)?;
    let days = project_month(&intervals, year, month);

    let month_name = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", year, month));
    msg_print!(Message::MonthViewHeader(month_name, employee.name.clone()), true);

    if days.is_empty() {
        msg_info!(Message::NoEntriesInMonth);
        return Ok(());
    }

    View::month(&days, granularity, &config.policy())
}
