pub mod calculator;
pub mod collection;
pub mod config;
pub mod location;
pub mod timesheet;
pub mod user;
