pub mod avail;
pub mod employee;
pub mod export;
pub mod init;
pub mod month;
pub mod shifts;
pub mod year;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage employee records")]
    Employee(employee::EmployeeArgs),
    #[command(about = "Record or import availability intervals")]
    Avail(avail::AvailArgs),
    #[command(about = "Month listing of availability")]
    Month(month::MonthArgs),
    #[command(about = "Year coverage overview")]
    Year(year::YearArgs),
    #[command(about = "Classify shift windows for a day")]
    Shifts(shifts::ShiftsArgs),
    #[command(about = "Export availability data")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        crate::libs::messages::macros::init_tracing();
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Avail(args) => avail::cmd(args),
            Commands::Month(args) => month::cmd(args),
            Commands::Year(args) => year::cmd(args),
            Commands::Shifts(args) => shifts::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
