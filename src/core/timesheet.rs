use crate::core::calculator::hours::compute_hours_worked;
use crate::db::store::{EntryChange, SessionChange, TimesheetStore};
use crate::errors::{AppError, AppResult};
use crate::models::approval::{ApprovalState, Decision};
use crate::models::identity::Identity;
use crate::models::patch::TimesheetPatch;
use crate::models::timesheet_entry::{SessionInput, TimesheetEntry, now_iso};

/// Business rules of a timesheet entry, from submission to review.
///
/// Every operation validates first and writes last, so a failed validation
/// or a failed write never leaves a half-applied entry behind. Callers get
/// the resulting entry back only when the store accepted the write.
pub struct TimesheetLogic;

impl TimesheetLogic {
    /// Record a new session (or day off) for `owner`. Starts out Pending.
    pub fn submit<S: TimesheetStore>(
        store: &mut S,
        owner: &Identity,
        input: &SessionInput,
        location: &str,
    ) -> AppResult<TimesheetEntry> {
        let worked = compute_hours_worked(input)?;
        let location = ensure_known_location(store, location)?;

        let mut entry = TimesheetEntry {
            id: None,
            username: owner.username.clone(),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            date_tracked: worked.date,
            start_time: worked.start_time,
            end_time: worked.end_time,
            lunch_break_minutes: worked.lunch_break_minutes,
            hours_worked: worked.hours_worked,
            location,
            approval: ApprovalState::Pending,
            created_at: now_iso(),
        };

        let id = store.create(&entry)?;
        entry.id = Some(id);
        Ok(entry)
    }

    /// Approve or reject an entry, whatever its current status.
    /// Only an approval records the reviewer in `approved_by`.
    pub fn review<S: TimesheetStore>(
        store: &mut S,
        id: i64,
        decision: Decision,
        reviewer: &Identity,
    ) -> AppResult<TimesheetEntry> {
        let mut entry = store.find(id)?.ok_or(AppError::NotFound(id))?;

        let next = entry.approval.transition(decision, &reviewer.username);
        let change = EntryChange::Review(next);
        store.update(id, &change)?;

        change.apply_to(&mut entry);
        Ok(entry)
    }

    /// Change the session values of an entry and recompute its hours.
    ///
    /// Employees may only touch their own Pending entries; admins may edit
    /// any entry in any state. The approval state is left as it is.
    pub fn edit<S: TimesheetStore>(
        store: &mut S,
        id: i64,
        patch: &TimesheetPatch,
        actor: &Identity,
    ) -> AppResult<TimesheetEntry> {
        if patch.is_empty() {
            return Err(AppError::Validation("Nothing to change.".into()));
        }

        let mut entry = store.find(id)?.ok_or(AppError::NotFound(id))?;
        ensure_editable(&entry, id, actor)?;

        let input = patch.apply_to(&SessionInput::from_entry(&entry));
        let worked = compute_hours_worked(&input)?;

        let location = match &patch.location {
            Some(name) => ensure_known_location(store, name)?,
            None => entry.location.clone(),
        };

        let change = EntryChange::Session(SessionChange {
            date_tracked: worked.date,
            start_time: worked.start_time,
            end_time: worked.end_time,
            lunch_break_minutes: worked.lunch_break_minutes,
            hours_worked: worked.hours_worked,
            location,
        });
        store.update(id, &change)?;

        change.apply_to(&mut entry);
        Ok(entry)
    }

    /// Remove an entry. Who may do this is decided by the caller.
    pub fn delete<S: TimesheetStore>(store: &mut S, id: i64) -> AppResult<TimesheetEntry> {
        let entry = store.find(id)?.ok_or(AppError::NotFound(id))?;
        store.delete(id)?;
        Ok(entry)
    }
}

/// Employee edit path: own entries only, and only while Pending.
pub fn ensure_editable(entry: &TimesheetEntry, id: i64, actor: &Identity) -> AppResult<()> {
    if actor.is_admin() {
        return Ok(());
    }

    if entry.username != actor.username {
        return Err(AppError::NotOwner(id));
    }

    if !entry.approval.is_pending() {
        return Err(AppError::EditLocked {
            id,
            status: entry.status(),
        });
    }

    Ok(())
}

fn ensure_known_location<S: TimesheetStore>(store: &S, location: &str) -> AppResult<String> {
    let name = location.trim();
    if name.is_empty() {
        return Err(AppError::Validation("A location is required.".into()));
    }

    let known = store.known_locations()?;
    if !known.iter().any(|k| k == name) {
        return Err(AppError::UnknownLocation(name.to_string()));
    }

    Ok(name.to_string())
}
