use farmsheets::errors::AppError;
use farmsheets::export::ExportFormat;
use farmsheets::export::build_payroll_report;
use farmsheets::export::logic::ExportLogic;
use farmsheets::models::approval::ApprovalState;
use farmsheets::models::timesheet_entry::TimesheetEntry;

mod common;
use common::entry;

fn sample() -> Vec<TimesheetEntry> {
    vec![
        entry(
            3,
            "John",
            "Doe",
            "2025-03-12",
            Some(("08:00", "16:30")),
            8.0,
            "North Field",
            ApprovalState::Approved { by: "boss".into() },
        ),
        entry(
            2,
            "Mary",
            "Smith",
            "2025-03-11",
            None,
            0.0,
            "Orchard",
            ApprovalState::Pending,
        ),
        entry(
            1,
            "John",
            "Doe",
            "2025-03-10",
            Some(("07:00", "11:20")),
            4.33,
            "North Field",
            ApprovalState::Rejected,
        ),
    ]
}

#[test]
fn empty_selection_produces_no_report() {
    let err = build_payroll_report(&[]).expect_err("nothing to export");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "No timesheets available in the selected range."
    );

    assert!(ExportLogic::render(ExportFormat::Json, &[]).is_err());
}

#[test]
fn report_layout_is_exact() {
    let csv = build_payroll_report(&sample()).unwrap();

    let expected = "\
First Name,Last Name,Date,Start Time,End Time,Hours Worked,Location,Approved By,Status
John,Doe,2025-03-12,08:00,16:30,8.00,North Field,boss,Approved
Mary,Smith,2025-03-11,,,0.00,Orchard,N/A,Pending
John,Doe,2025-03-10,07:00,11:20,4.33,North Field,N/A,Rejected

Employee Name,Total Hours
John Doe,12.33
Mary Smith,0.00
";
    assert_eq!(csv, expected);
}

#[test]
fn report_is_deterministic() {
    let entries = sample();
    let first = build_payroll_report(&entries).unwrap();
    let second = build_payroll_report(&entries).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn commas_and_quotes_are_escaped() {
    let mut entries = sample();
    entries[0].location = "Field 3, East".into();
    entries[1].last_name = "O\"Brien".into();

    let csv = build_payroll_report(&entries).unwrap();

    assert!(csv.contains(",\"Field 3, East\","));
    assert!(csv.contains("Mary,\"O\"\"Brien\","));
    assert!(csv.contains("\"Mary O\"\"Brien\",0.00"));

    // every detail row still parses back into nine fields
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv.split("\n\n").next().unwrap_or_default().as_bytes());
    for record in reader.records() {
        assert_eq!(record.unwrap().len(), 9);
    }
}

#[test]
fn json_export_carries_flat_entries() {
    let json = ExportLogic::render(ExportFormat::Json, &sample()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let rows = parsed.as_array().expect("array of entries");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["approved_by"], "boss");
    assert_eq!(rows[1]["start_time"], serde_json::Value::Null);
    assert_eq!(rows[2]["approval_status"], "Rejected");
}
