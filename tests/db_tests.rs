use farmsheets::core::location::LocationLogic;
use farmsheets::core::timesheet::TimesheetLogic;
use farmsheets::core::user::UserLogic;
use farmsheets::db::initialize::{init_db, seed_locations};
use farmsheets::db::locations::location_names;
use farmsheets::db::log::{audit, load_log};
use farmsheets::db::migrate::applied_versions;
use farmsheets::db::pool::DbPool;
use farmsheets::db::store::TimesheetStore;
use farmsheets::db::users::{last_login, load_users};
use farmsheets::errors::AppError;
use farmsheets::models::approval::{ApprovalState, Decision};
use farmsheets::models::identity::Role;
use farmsheets::models::location::SiteLocation;
use farmsheets::models::patch::LocationPatch;
use farmsheets::models::timesheet_entry::SessionInput;

mod common;
use common::{admin, employee};

fn farm() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    seed_locations(&pool.conn, &["North Field".into(), "Orchard".into()]).unwrap();
    UserLogic::add(&pool, &admin()).unwrap();
    UserLogic::add(&pool, &employee("jdoe", "John", "Doe")).unwrap();
    pool
}

#[test]
fn migrations_are_recorded_once() {
    let pool = DbPool::in_memory().unwrap();
    let first = applied_versions(&pool.conn).unwrap();
    assert_eq!(first.len(), 4);

    // running again applies nothing new
    init_db(&pool.conn).unwrap();
    assert_eq!(applied_versions(&pool.conn).unwrap(), first);

    // migration markers stay out of the audit view
    assert!(load_log(&pool.conn).unwrap().is_empty());
}

#[test]
fn entry_round_trips_through_sqlite() {
    let mut pool = farm();
    let john = UserLogic::lookup(&pool, "jdoe").unwrap();

    let worked = TimesheetLogic::submit(
        &mut pool,
        &john,
        &SessionInput::worked("2025-03-10", "08:00", "16:30", 30),
        "North Field",
    )
    .unwrap();
    let day_off = TimesheetLogic::submit(
        &mut pool,
        &john,
        &SessionInput::day_off("2025-03-11"),
        "Orchard",
    )
    .unwrap();

    let stored = pool.find(worked.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored, worked);

    let stored_off = pool.find(day_off.id.unwrap()).unwrap().unwrap();
    assert!(stored_off.is_day_off());
    assert_eq!(stored_off.hours_worked, 0.0);

    // newest date first
    let all = pool.query().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, day_off.id);
}

#[test]
fn review_persists_state_and_reviewer() {
    let mut pool = farm();
    let john = UserLogic::lookup(&pool, "jdoe").unwrap();
    let id = TimesheetLogic::submit(
        &mut pool,
        &john,
        &SessionInput::worked("2025-03-10", "08:00", "12:00", 0),
        "Orchard",
    )
    .unwrap()
    .id
    .unwrap();

    TimesheetLogic::review(&mut pool, id, Decision::Approve, &admin()).unwrap();
    assert_eq!(
        pool.find(id).unwrap().unwrap().approval,
        ApprovalState::Approved { by: "boss".into() }
    );

    TimesheetLogic::review(&mut pool, id, Decision::Reject, &admin()).unwrap();
    let stored = pool.find(id).unwrap().unwrap();
    assert_eq!(stored.approval, ApprovalState::Rejected);
    assert_eq!(stored.approved_by(), None);
}

#[test]
fn missing_rows_are_not_found() {
    let mut pool = farm();
    assert!(pool.find(99).unwrap().is_none());
    assert!(matches!(
        TimesheetLogic::delete(&mut pool, 99),
        Err(AppError::NotFound(99))
    ));
}

#[test]
fn users_are_unique_and_filterable() {
    let pool = farm();

    let err = UserLogic::add(&pool, &employee("jdoe", "Jane", "Doe")).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let employees = load_users(&pool.conn, Some(Role::Employee)).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].display_name(), "John Doe");

    assert!(matches!(
        UserLogic::resolve(&pool, "ghost"),
        Err(AppError::UnknownUser(_))
    ));
}

#[test]
fn locations_are_managed_by_name() {
    let pool = farm();

    let site = SiteLocation {
        lat: Some(-33.86),
        long: Some(151.2),
        ..SiteLocation::new("Vineyard")
    };
    LocationLogic::add(&pool, &site).unwrap();
    assert!(LocationLogic::add(&pool, &SiteLocation::new("Vineyard")).is_err());

    let bad = SiteLocation {
        lat: Some(120.0),
        ..SiteLocation::new("Nowhere")
    };
    assert!(LocationLogic::add(&pool, &bad).unwrap_err().is_validation());

    let patch = LocationPatch {
        size: Some("12 acres".into()),
        ..LocationPatch::default()
    };
    let edited = LocationLogic::edit(&pool, "Vineyard", &patch).unwrap();
    assert_eq!(edited.size.as_deref(), Some("12 acres"));
    assert_eq!(edited.lat, Some(-33.86));

    assert_eq!(
        location_names(&pool.conn).unwrap(),
        vec!["North Field", "Orchard", "Vineyard"]
    );

    assert_eq!(LocationLogic::remove(&pool, "Vineyard").unwrap(), 0);
    assert_eq!(seed_locations(&pool.conn, &["Orchard".into()]).unwrap(), 0);
}

#[test]
fn audit_rows_are_listed_newest_first() {
    let pool = farm();
    audit(&pool.conn, "submit", "1", "first").unwrap();
    audit(&pool.conn, "review", "1", "second").unwrap();

    let rows = load_log(&pool.conn).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].operation, "review");
    assert_eq!(rows[1].message, "first");
}

#[test]
fn only_resolve_stamps_the_login() {
    let pool = farm();

    UserLogic::lookup(&pool, "jdoe").unwrap();
    assert_eq!(last_login(&pool.conn, "jdoe").unwrap(), None);

    UserLogic::resolve(&pool, "jdoe").unwrap();
    assert!(last_login(&pool.conn, "jdoe").unwrap().is_some());

    assert!(matches!(
        last_login(&pool.conn, "ghost"),
        Err(AppError::UnknownUser(_))
    ));
}
