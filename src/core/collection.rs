//! Filtered and paginated views over a loaded timesheet collection.
//! Everything here is pure: the input slice is never modified and the
//! relative order of entries is preserved.

use crate::models::approval::ApprovalStatus;
use crate::models::timesheet_entry::TimesheetEntry;
use chrono::{DateTime, NaiveDate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    Named(String),
}

impl LocationFilter {
    /// `None`, `""` and `"all"` (any case) mean no location filter.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => LocationFilter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => LocationFilter::All,
            Some(v) => LocationFilter::Named(v.to_string()),
        }
    }

    fn matches(&self, location: &str) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Named(name) => name == location,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-insensitive substring of `"First Last"`.
    pub employee_name: Option<String>,
    pub location: LocationFilter,
    /// Inclusive lower bound on `date_tracked`.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on `date_tracked`.
    pub to: Option<NaiveDate>,
    /// Exact owner username (an employee's own timesheets).
    pub username: Option<String>,
    pub status: Option<ApprovalStatus>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &TimesheetEntry) -> bool {
        if let Some(needle) = &self.employee_name {
            let haystack = entry.display_name().to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if !self.location.matches(&entry.location) {
            return false;
        }

        if self.from.is_some_and(|from| entry.date_tracked < from) {
            return false;
        }
        if self.to.is_some_and(|to| entry.date_tracked > to) {
            return false;
        }

        if let Some(username) = &self.username
            && &entry.username != username
        {
            return false;
        }

        if let Some(status) = self.status
            && entry.status() != status
        {
            return false;
        }

        true
    }
}

pub fn filter_entries(entries: &[TimesheetEntry], filter: &EntryFilter) -> Vec<TimesheetEntry> {
    entries
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}

/// 1-based page of `page_size` items. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Entries ordered by submission, newest first (`created_at`, then id).
/// Unparsable stamps sort last.
pub fn latest_submitted(entries: &[TimesheetEntry]) -> Vec<TimesheetEntry> {
    let mut out = entries.to_vec();
    out.sort_by(|a, b| {
        let at = |e: &TimesheetEntry| DateTime::parse_from_rfc3339(&e.created_at).ok();
        at(b).cmp(&at(a)).then_with(|| b.id.cmp(&a.id))
    });
    out
}
