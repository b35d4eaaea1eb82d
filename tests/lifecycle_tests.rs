use farmsheets::core::timesheet::TimesheetLogic;
use farmsheets::db::memory::MemoryStore;
use farmsheets::db::store::TimesheetStore;
use farmsheets::errors::AppError;
use farmsheets::models::approval::{ApprovalState, ApprovalStatus, Decision};
use farmsheets::models::identity::{Identity, Role};
use farmsheets::models::patch::TimesheetPatch;
use farmsheets::models::timesheet_entry::SessionInput;
use rstest::{fixture, rstest};

mod common;
use common::{admin, employee};

#[fixture]
fn store() -> MemoryStore {
    MemoryStore::with_locations(&["North Field", "Orchard"])
}

fn submit_one(store: &mut MemoryStore, owner: &Identity) -> i64 {
    let entry = TimesheetLogic::submit(
        store,
        owner,
        &SessionInput::worked("2025-03-10", "08:00", "16:30", 30),
        "North Field",
    )
    .expect("submit");
    entry.id.expect("stored entry has an id")
}

#[rstest]
fn submitted_entry_starts_pending(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let entry = TimesheetLogic::submit(
        &mut store,
        &john,
        &SessionInput::worked("2025-03-10", "08:00", "16:30", 30),
        "North Field",
    )
    .expect("submit");

    assert_eq!(entry.status(), ApprovalStatus::Pending);
    assert_eq!(entry.approved_by(), None);
    assert_eq!(entry.hours_worked, 8.0);
    assert_eq!(entry.display_name(), "John Doe");
    assert_eq!(store.len(), 1);
}

#[rstest]
fn unknown_or_missing_location_is_rejected(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let input = SessionInput::day_off("2025-03-11");

    let err = TimesheetLogic::submit(&mut store, &john, &input, "Back Forty")
        .expect_err("unknown site");
    assert!(matches!(err, AppError::UnknownLocation(_)));

    let err = TimesheetLogic::submit(&mut store, &john, &input, "  ").expect_err("no site");
    assert!(matches!(err, AppError::Validation(_)));

    assert!(store.is_empty());
}

#[rstest]
fn approve_then_reject_clears_reviewer(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let id = submit_one(&mut store, &john);

    let admin_a = Identity::new("alice", Role::Admin, "Alice", "Admin");
    let admin_b = Identity::new("bob", Role::Admin, "Bob", "Admin");

    let approved = TimesheetLogic::review(&mut store, id, Decision::Approve, &admin_a).unwrap();
    assert_eq!(
        approved.approval,
        ApprovalState::Approved { by: "alice".into() }
    );

    let rejected = TimesheetLogic::review(&mut store, id, Decision::Reject, &admin_b).unwrap();
    assert_eq!(rejected.status(), ApprovalStatus::Rejected);
    assert_eq!(rejected.approved_by(), None);

    let stored = store.find(id).unwrap().unwrap();
    assert_eq!(stored.approval, ApprovalState::Rejected);
}

#[rstest]
fn review_of_missing_entry_is_not_found(mut store: MemoryStore) {
    let err = TimesheetLogic::review(&mut store, 42, Decision::Approve, &admin())
        .expect_err("no entry 42");
    assert!(matches!(err, AppError::NotFound(42)));
}

#[rstest]
#[case(Decision::Approve)]
#[case(Decision::Reject)]
fn employee_cannot_edit_reviewed_entry(mut store: MemoryStore, #[case] decision: Decision) {
    let john = employee("jdoe", "John", "Doe");
    let id = submit_one(&mut store, &john);
    TimesheetLogic::review(&mut store, id, decision, &admin()).unwrap();

    let patch = TimesheetPatch {
        end_time: Some("17:30".into()),
        ..TimesheetPatch::default()
    };
    let err = TimesheetLogic::edit(&mut store, id, &patch, &john).expect_err("locked");
    assert!(matches!(err, AppError::EditLocked { .. }));

    // the stored entry is untouched
    assert_eq!(store.find(id).unwrap().unwrap().hours_worked, 8.0);
}

#[rstest]
fn employee_cannot_edit_someone_elses_entry(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let mary = employee("msmith", "Mary", "Smith");
    let id = submit_one(&mut store, &john);

    let patch = TimesheetPatch {
        lunch_break_minutes: Some(0),
        ..TimesheetPatch::default()
    };
    let err = TimesheetLogic::edit(&mut store, id, &patch, &mary).expect_err("not owner");
    assert!(matches!(err, AppError::NotOwner(_)));
}

#[rstest]
fn employee_edit_of_pending_entry_recomputes_hours(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let id = submit_one(&mut store, &john);

    let patch = TimesheetPatch {
        end_time: Some("17:30".into()),
        location: Some("Orchard".into()),
        ..TimesheetPatch::default()
    };
    let edited = TimesheetLogic::edit(&mut store, id, &patch, &john).unwrap();

    assert_eq!(edited.hours_worked, 9.0);
    assert_eq!(edited.location, "Orchard");
    assert_eq!(edited.status(), ApprovalStatus::Pending);
}

#[rstest]
fn admin_may_edit_approved_entry_and_keeps_approval(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let id = submit_one(&mut store, &john);
    TimesheetLogic::review(&mut store, id, Decision::Approve, &admin()).unwrap();

    let patch = TimesheetPatch {
        day_off: Some(true),
        ..TimesheetPatch::default()
    };
    let edited = TimesheetLogic::edit(&mut store, id, &patch, &admin()).unwrap();

    assert!(edited.is_day_off());
    assert_eq!(edited.hours_worked, 0.0);
    assert_eq!(edited.approved_by(), Some("boss"));
}

#[rstest]
fn invalid_edit_leaves_entry_unchanged(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let id = submit_one(&mut store, &john);
    let before = store.find(id).unwrap().unwrap();

    let patch = TimesheetPatch {
        end_time: Some("07:00".into()),
        ..TimesheetPatch::default()
    };
    let err = TimesheetLogic::edit(&mut store, id, &patch, &john).expect_err("end before start");
    assert!(err.is_validation());
    assert_eq!(store.find(id).unwrap().unwrap(), before);

    let err = TimesheetLogic::edit(&mut store, id, &TimesheetPatch::default(), &john)
        .expect_err("empty patch");
    assert!(err.is_validation());
}

#[rstest]
fn failed_write_returns_error_and_no_entry(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let id = submit_one(&mut store, &john);
    let before = store.find(id).unwrap().unwrap();

    store.fail_writes = true;

    let err = TimesheetLogic::review(&mut store, id, Decision::Approve, &admin())
        .expect_err("store refuses writes");
    assert!(matches!(err, AppError::Persistence(_)));

    let err = TimesheetLogic::submit(
        &mut store,
        &john,
        &SessionInput::day_off("2025-03-12"),
        "Orchard",
    )
    .expect_err("store refuses writes");
    assert!(matches!(err, AppError::Persistence(_)));

    assert!(TimesheetLogic::delete(&mut store, id).is_err());

    store.fail_writes = false;
    assert_eq!(store.len(), 1);
    assert_eq!(store.find(id).unwrap().unwrap(), before);
}

#[rstest]
fn delete_returns_removed_entry(mut store: MemoryStore) {
    let john = employee("jdoe", "John", "Doe");
    let id = submit_one(&mut store, &john);

    let removed = TimesheetLogic::delete(&mut store, id).unwrap();
    assert_eq!(removed.id, Some(id));
    assert!(store.is_empty());
    assert!(matches!(
        TimesheetLogic::delete(&mut store, id),
        Err(AppError::NotFound(_))
    ));
}
