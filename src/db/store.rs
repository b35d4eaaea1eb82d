//! Persistence seam used by the timesheet lifecycle.
//!
//! Each call is a single-record operation. Two writers updating the same
//! entry race at the database and the last write wins; nothing here
//! serializes them.

use crate::db::pool::DbPool;
use crate::db::{locations, queries};
use crate::errors::AppResult;
use crate::models::approval::ApprovalState;
use crate::models::timesheet_entry::TimesheetEntry;
use chrono::{NaiveDate, NaiveTime};

/// New session values of an edited entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionChange {
    pub date_tracked: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub lunch_break_minutes: u32,
    pub hours_worked: f64,
    pub location: String,
}

/// A partial update of one `timesheets` row.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryChange {
    /// approval_status + approved_by
    Review(ApprovalState),
    /// date, times, lunch, hours and location
    Session(SessionChange),
}

impl EntryChange {
    pub fn apply_to(&self, entry: &mut TimesheetEntry) {
        match self {
            EntryChange::Review(state) => entry.approval = state.clone(),
            EntryChange::Session(s) => {
                entry.date_tracked = s.date_tracked;
                entry.start_time = s.start_time;
                entry.end_time = s.end_time;
                entry.lunch_break_minutes = s.lunch_break_minutes;
                entry.hours_worked = s.hours_worked;
                entry.location = s.location.clone();
            }
        }
    }
}

pub trait TimesheetStore {
    /// Insert a new entry and return its id.
    fn create(&mut self, entry: &TimesheetEntry) -> AppResult<i64>;

    /// Fails with `NotFound` when no row has `id`.
    fn update(&mut self, id: i64, change: &EntryChange) -> AppResult<()>;

    /// Fails with `NotFound` when no row has `id`.
    fn delete(&mut self, id: i64) -> AppResult<()>;

    fn find(&self, id: i64) -> AppResult<Option<TimesheetEntry>>;

    /// All entries, newest `date_tracked` first.
    fn query(&self) -> AppResult<Vec<TimesheetEntry>>;

    /// Names of the registered work sites.
    fn known_locations(&self) -> AppResult<Vec<String>>;
}

impl TimesheetStore for DbPool {
    fn create(&mut self, entry: &TimesheetEntry) -> AppResult<i64> {
        queries::insert_entry(&self.conn, entry)
    }

    fn update(&mut self, id: i64, change: &EntryChange) -> AppResult<()> {
        match change {
            EntryChange::Review(state) => queries::update_review(&self.conn, id, state),
            EntryChange::Session(s) => queries::update_session(&self.conn, id, s),
        }
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        queries::delete_entry(&self.conn, id)
    }

    fn find(&self, id: i64) -> AppResult<Option<TimesheetEntry>> {
        queries::find_entry(&self.conn, id)
    }

    fn query(&self) -> AppResult<Vec<TimesheetEntry>> {
        queries::load_entries(&self.conn)
    }

    fn known_locations(&self) -> AppResult<Vec<String>> {
        locations::location_names(&self.conn)
    }
}
