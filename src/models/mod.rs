pub mod approval;
pub mod identity;
pub mod location;
pub mod patch;
pub mod timesheet_entry;
