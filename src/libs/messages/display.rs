//! Display implementation for shiftrix application messages.
//!
//! All user-facing text lives in this one place, keeping wording consistent
//! across commands and ready for future localization. Parameters are
//! interpolated type-safely from the `Message` variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSectionPolicy => "Shift policy settings".to_string(),
            Message::ConfigSectionDisplay => "Display settings".to_string(),
            Message::PromptSelectSections => "Select sections to configure".to_string(),
            Message::PromptShiftStart => "First shift start (HH:MM)".to_string(),
            Message::PromptShiftLength => "Shift length in hours".to_string(),
            Message::PromptShiftsPerDay => "Shifts per day (1-3)".to_string(),
            Message::PromptDefaultGranularity => "Default granularity for the month listing".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeAdded(name) => format!("Employee '{}' added", name),
            Message::EmployeeRemoved(id) => format!("Employee {} removed together with their availability", id),
            Message::EmployeeNotFound(id) => format!("Employee {} not found", id),
            Message::EmployeesEmpty => "No employees recorded yet".to_string(),

            // === AVAILABILITY MESSAGES ===
            Message::AvailabilityAdded(name) => format!("Availability entry recorded for {}", name),
            Message::AvailabilityImported(count, name) => format!("Imported {} availability entries for {}", count, name),
            Message::AvailabilityEmpty(name) => format!("No availability recorded for {}", name),
            Message::InvalidTimestamp(raw) => format!("'{}' is not a local timestamp (expected YYYY-MM-DDTHH:MM:SS[.sss])", raw),
            Message::InvalidDate(raw) => format!("'{}' is not a date (expected YYYY-MM-DD)", raw),

            // === VIEW MESSAGES ===
            Message::MonthViewHeader(month, name) => format!("Availability of {} — {}", name, month),
            Message::YearViewHeader(year, name) => format!("Coverage of {} — {}", name, year),
            Message::ShiftViewHeader(date, name) => format!("Shift windows of {} — {}", name, date),
            Message::NoEntriesInMonth => "No entries in this month".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNothingToExport => "Nothing to export for the selected period".to_string(),
        };
        write!(f, "{}", message)
    }
}
