//! Availability recording and import command.
//!
//! Entries normally arrive as a JSON export from the mobile app where they
//! are authored; single entries can also be recorded by hand for testing.
//! Timestamps are local wall-clock values without an offset.

use crate::db::availability::Availability;
use crate::db::employees::Employees;
use crate::libs::calendar::{parse_local, to_local_string};
use crate::libs::interval::{Interval, IntervalKind};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};
use prettytable::{row, Table};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AvailArgs {
    #[command(subcommand)]
    command: AvailCommand,
}

#[derive(Debug, Subcommand)]
enum AvailCommand {
    #[command(about = "Record a single availability interval")]
    Add {
        #[arg(long, help = "Employee id")]
        employee: i64,
        #[arg(long, help = "Local start, YYYY-MM-DDTHH:MM:SS[.sss]")]
        start: String,
        #[arg(long, help = "Local end, YYYY-MM-DDTHH:MM:SS[.sss]")]
        end: String,
        #[arg(long, value_enum, default_value_t = IntervalKind::Available)]
        kind: IntervalKind,
    },
    #[command(about = "List recorded intervals of an employee")]
    List {
        #[arg(long, help = "Employee id")]
        employee: i64,
    },
    #[command(about = "Import intervals from a mobile-app JSON export")]
    Import {
        #[arg(long, help = "Employee id")]
        employee: i64,
        path: PathBuf,
    },
}

pub fn cmd(args: AvailArgs) -> Result<()> {
    match args.command {
        AvailCommand::Add { employee, start, end, kind } => {
            let name = employee_name(employee)?;
            let interval = Interval::new(parse_timestamp(&start)?, parse_timestamp(&end)?, kind);
            Availability::new()?.insert(employee, &interval)?;
            msg_success!(Message::AvailabilityAdded(name));
            Ok(())
        }
        AvailCommand::List { employee } => {
            let name = employee_name(employee)?;
            let intervals = Availability::new()?.fetch(employee)?;
            if intervals.is_empty() {
                msg_info!(Message::AvailabilityEmpty(name));
                return Ok(());
            }
            let mut table = Table::new();
            table.add_row(row!["#", "START", "END", "KIND"]);
            for (index, interval) in intervals.iter().enumerate() {
                table.add_row(row![
                    index + 1,
                    to_local_string(interval.start),
                    to_local_string(interval.end),
                    interval.kind.label()
                ]);
            }
            table.printstd();
            Ok(())
        }
        AvailCommand::Import { employee, path } => {
            let name = employee_name(employee)?;
            let raw = fs::read_to_string(&path)?;
            let intervals: Vec<Interval> = serde_json::from_str(&raw)?;
            let count = Availability::new()?.import(employee, &intervals)?;
            msg_success!(Message::AvailabilityImported(count, name));
            Ok(())
        }
    }
}

fn employee_name(id: i64) -> Result<String> {
    match Employees::new()?.fetch(id)? {
        Some(employee) => Ok(employee.name),
        None => msg_bail_anyhow!(Message::EmployeeNotFound(id)),
    }
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    match parse_local(raw) {
        Some(t) => Ok(t),
        None => msg_bail_anyhow!(Message::InvalidTimestamp(raw.to_string())),
    }
}
