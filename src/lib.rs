//! # Shiftrix CLI
//!
//! A command-line companion for the Shiftrix workforce-scheduling product.
//! Employee availability is authored in the mobile app; this tool keeps a
//! local copy and renders it from every angle the admin surfaces use.
//!
//! ## Features
//!
//! - **Month Listing**: Per-day availability segments with day, shift and hour granularity
//! - **Year Overview**: Per-day millisecond coverage totals with day tooltips
//! - **Shift Classification**: Shift windows classified against a configurable policy
//! - **Employee Management**: Local employee records keyed to availability data
//! - **Data Export**: Export coverage and listings to CSV, JSON and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrix::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
