#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigSectionPolicy,
    ConfigSectionDisplay,
    PromptSelectSections,
    PromptShiftStart,
    PromptShiftLength,
    PromptShiftsPerDay,
    PromptDefaultGranularity,

    // === EMPLOYEE MESSAGES ===
    EmployeeAdded(String),        // name
    EmployeeRemoved(i64),         // id
    EmployeeNotFound(i64),        // id
    EmployeesEmpty,

    // === AVAILABILITY MESSAGES ===
    AvailabilityAdded(String),           // employee name
    AvailabilityImported(usize, String), // count, employee name
    AvailabilityEmpty(String),           // employee name
    InvalidTimestamp(String),            // raw input
    InvalidDate(String),                 // raw input

    // === VIEW MESSAGES ===
    MonthViewHeader(String, String), // month/year, employee name
    YearViewHeader(i32, String),     // year, employee name
    ShiftViewHeader(String, String), // date, employee name
    NoEntriesInMonth,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportNothingToExport,
}
