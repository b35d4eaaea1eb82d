//! In-memory store for tests and dry runs.

use crate::db::store::{EntryChange, TimesheetStore};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet_entry::TimesheetEntry;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<TimesheetEntry>,
    locations: Vec<String>,
    next_id: i64,
    /// When set, every write fails with a persistence error.
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locations(names: &[&str]) -> Self {
        Self {
            locations: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Persistence("store is not accepting writes".into()));
        }
        Ok(())
    }

    fn position(&self, id: i64) -> AppResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == Some(id))
            .ok_or(AppError::NotFound(id))
    }
}

impl TimesheetStore for MemoryStore {
    fn create(&mut self, entry: &TimesheetEntry) -> AppResult<i64> {
        self.check_writable()?;
        self.next_id += 1;
        let mut stored = entry.clone();
        stored.id = Some(self.next_id);
        self.entries.push(stored);
        Ok(self.next_id)
    }

    fn update(&mut self, id: i64, change: &EntryChange) -> AppResult<()> {
        self.check_writable()?;
        let idx = self.position(id)?;
        change.apply_to(&mut self.entries[idx]);
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        self.check_writable()?;
        let idx = self.position(id)?;
        self.entries.remove(idx);
        Ok(())
    }

    fn find(&self, id: i64) -> AppResult<Option<TimesheetEntry>> {
        Ok(self.entries.iter().find(|e| e.id == Some(id)).cloned())
    }

    fn query(&self) -> AppResult<Vec<TimesheetEntry>> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| {
            b.date_tracked
                .cmp(&a.date_tracked)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(out)
    }

    fn known_locations(&self) -> AppResult<Vec<String>> {
        Ok(self.locations.clone())
    }
}
