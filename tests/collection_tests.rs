use chrono::NaiveDate;
use farmsheets::core::calculator::totals::{summarize_hours_by_employee, total_hours};
use farmsheets::core::collection::{
    EntryFilter, LocationFilter, filter_entries, latest_submitted, page_count, paginate,
};
use farmsheets::models::approval::{ApprovalState, ApprovalStatus};
use farmsheets::models::timesheet_entry::TimesheetEntry;
use rstest::{fixture, rstest};

mod common;
use common::entry;

#[fixture]
fn entries() -> Vec<TimesheetEntry> {
    let approved = || ApprovalState::Approved { by: "boss".into() };
    vec![
        entry(7, "John", "Doe", "2025-03-14", Some(("08:00", "16:00")), 8.0, "North Field", approved()),
        entry(6, "Mary", "Smith", "2025-03-13", Some(("07:00", "15:30")), 8.0, "Orchard", ApprovalState::Pending),
        entry(5, "John", "Doe", "2025-03-12", None, 0.0, "North Field", ApprovalState::Pending),
        entry(4, "José", "Núñez", "2025-03-11", Some(("06:00", "12:15")), 6.25, "Orchard", approved()),
        entry(3, "Mary", "Smith", "2025-03-10", Some(("08:00", "12:00")), 4.0, "North Field", ApprovalState::Rejected),
        entry(2, "John", "Doe", "2025-03-09", Some(("08:00", "17:00")), 8.5, "Orchard", approved()),
        entry(1, "Mary", "Smith", "2025-03-08", Some(("09:00", "13:20")), 4.33, "North Field", ApprovalState::Pending),
    ]
}

fn ids(entries: &[TimesheetEntry]) -> Vec<i64> {
    entries.iter().filter_map(|e| e.id).collect()
}

#[rstest]
fn empty_filter_is_identity(entries: Vec<TimesheetEntry>) {
    assert_eq!(filter_entries(&entries, &EntryFilter::default()), entries);

    let all_sites = EntryFilter {
        location: LocationFilter::parse(Some("all")),
        ..EntryFilter::default()
    };
    assert_eq!(filter_entries(&entries, &all_sites), entries);
}

#[rstest]
#[case(Some("john"), None, vec![7, 5, 2])]
#[case(Some("SMITH"), Some("North Field"), vec![3, 1])]
#[case(Some("y s"), None, vec![6, 3, 1])]
#[case(Some("núñez"), None, vec![4])]
#[case(None, Some("Orchard"), vec![6, 4, 2])]
#[case(Some("nobody"), None, vec![])]
fn name_and_location_filters(
    entries: Vec<TimesheetEntry>,
    #[case] name: Option<&str>,
    #[case] location: Option<&str>,
    #[case] expected: Vec<i64>,
) {
    let filter = EntryFilter {
        employee_name: name.map(str::to_string),
        location: LocationFilter::parse(location),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&filter_entries(&entries, &filter)), expected);
}

#[rstest]
fn date_bounds_are_inclusive(entries: Vec<TimesheetEntry>) {
    let filter = EntryFilter {
        from: NaiveDate::from_ymd_opt(2025, 3, 10),
        to: NaiveDate::from_ymd_opt(2025, 3, 12),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&filter_entries(&entries, &filter)), vec![5, 4, 3]);
}

#[rstest]
fn status_and_owner_filters(entries: Vec<TimesheetEntry>) {
    let pending = EntryFilter {
        status: Some(ApprovalStatus::Pending),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&filter_entries(&entries, &pending)), vec![6, 5, 1]);

    let own = EntryFilter {
        username: Some("mary".into()),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&filter_entries(&entries, &own)), vec![6, 3, 1]);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(10)]
fn pages_rebuild_the_collection(entries: Vec<TimesheetEntry>, #[case] size: usize) {
    let pages = page_count(entries.len(), size);
    let mut rebuilt = Vec::new();
    for page in 1..=pages {
        let chunk = paginate(&entries, page, size);
        assert!(!chunk.is_empty() && chunk.len() <= size);
        rebuilt.extend_from_slice(chunk);
    }
    assert_eq!(rebuilt, entries);
    assert!(paginate(&entries, pages + 1, size).is_empty());
}

#[rstest]
fn degenerate_pages_are_empty(entries: Vec<TimesheetEntry>) {
    assert!(paginate(&entries, 0, 10).is_empty());
    assert!(paginate(&entries, 1, 0).is_empty());
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(11, 10), 2);
}

#[rstest]
fn summary_keeps_first_seen_order(entries: Vec<TimesheetEntry>) {
    let totals = summarize_hours_by_employee(&entries);
    let names: Vec<&str> = totals.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Mary Smith", "José Núñez"]);

    let hours: Vec<f64> = totals.iter().map(|t| t.hours).collect();
    assert_eq!(hours, vec![16.5, 16.33, 6.25]);

    assert_eq!(total_hours(&entries), 39.08);
}

#[test]
fn summary_of_nothing_is_empty() {
    assert!(summarize_hours_by_employee(&[]).is_empty());
    assert_eq!(total_hours(&[]), 0.0);
}

#[rstest]
fn latest_submitted_orders_by_submission_not_work_date(entries: Vec<TimesheetEntry>) {
    let mut entries = entries;
    // entry 1 has the oldest work date but was submitted last
    for e in entries.iter_mut() {
        let id = e.id.unwrap_or_default();
        e.created_at = format!("2025-03-{:02}T08:00:00+01:00", 14 + id);
    }
    entries[6].created_at = "2025-03-30T08:00:00+02:00".into();

    let ordered = latest_submitted(&entries);
    assert_eq!(ids(&ordered), vec![1, 7, 6, 5, 4, 3, 2]);
    assert_eq!(ids(&paginate(&ordered, 1, 2)), vec![1, 7]);
}

#[rstest]
fn latest_submitted_breaks_ties_by_id(entries: Vec<TimesheetEntry>) {
    // the fixture gives every entry the same stamp
    assert_eq!(ids(&latest_submitted(&entries)), vec![7, 6, 5, 4, 3, 2, 1]);
}
