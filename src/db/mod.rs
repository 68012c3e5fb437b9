//! Database layer for the shiftrix CLI.
//!
//! A small persistence layer built on SQLite: local employee records, their
//! availability intervals and per-view user preferences. Availability is
//! authored in the mobile app and only mirrored here; the viewing surfaces
//! treat it as a read-only snapshot.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrix::db::{availability::Availability, employees::Employees};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut employees = Employees::new()?;
//! let id = employees.insert("Jane Doe", "dispatcher", "active")?;
//! let intervals = Availability::new()?.fetch(id)?;
//! # Ok(())
//! # }
//! ```

pub mod availability;
pub mod db;
pub mod employees;
pub mod prefs;
