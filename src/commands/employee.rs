//! Employee record management command.
//!
//! Employees are mirrored locally so availability can be keyed to them; the
//! authoritative records live in the hosted backend.

use crate::db::availability::Availability;
use crate::db::employees::Employees;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    #[command(about = "Add an employee")]
    Add {
        name: String,
        #[arg(long, default_value = "", help = "Role shown in listings")]
        role: String,
        #[arg(long, default_value = "active", help = "Employment status")]
        status: String,
    },
    #[command(about = "List employees")]
    List,
    #[command(about = "Remove an employee and their availability")]
    Remove { id: i64 },
}

pub fn cmd(args: EmployeeArgs) -> Result<()> {
    match args.command {
        EmployeeCommand::Add { name, role, status } => {
            Employees::new()?.insert(&name, &role, &status)?;
            msg_success!(Message::EmployeeAdded(name));
            Ok(())
        }
        EmployeeCommand::List => {
            let employees = Employees::new()?.fetch_all()?;
            if employees.is_empty() {
                msg_info!(Message::EmployeesEmpty);
                return Ok(());
            }
            View::employees(&employees)
        }
        EmployeeCommand::Remove { id } => {
            Availability::new()?.delete_for(id)?;
            Employees::new()?.delete(id)?;
            msg_success!(Message::EmployeeRemoved(id));
            Ok(())
        }
    }
}
