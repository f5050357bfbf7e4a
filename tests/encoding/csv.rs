//! Bulk-export CSV encoding

use chrono::{FixedOffset, TimeZone, Utc};
use forcewire::prelude::*;

use crate::{isolated_encoder, Account, Broken};

fn full_account() -> Account {
    let mut account = Account::new(OperationKind::Insert);
    account.id = Some("001A".into());
    account.name = Some(r#"say "hi""#.into());
    account.lead_source = Some("Web".into());
    account.description = Some(String::new());
    account.annual_revenue = Some(1250000.5);
    account.employees = Some(0);
    account.active = Some(false);
    account.last_activity = Some(
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
            .unwrap(),
    );
    account.created_date = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    account.logo = Some(vec![0x00, 0xFF]);
    account
}

#[test]
fn test_full_row() {
    let encoder = isolated_encoder();
    let row = encoder.to_csv_row(&full_account()).unwrap();
    assert_eq!(
        row,
        r#""001A","say ""hi""",,"Web",,1250000.5,0,false,"2024-05-06T05:08:09Z",AP8="#
    );
}

#[test]
fn test_absent_fields_render_empty() {
    let encoder = isolated_encoder();
    let row = encoder.to_csv_row(&Account::new(OperationKind::Update)).unwrap();
    assert_eq!(row, ",,,,,,,,,");
}

#[test]
fn test_readonly_and_ignored_fields_are_excluded() {
    let encoder = isolated_encoder();
    let account = full_account();

    let row = encoder.to_csv_row(&account).unwrap();
    assert_eq!(row.split(',').count(), 10);
    assert!(!row.contains("2020-01-01"));
    assert!(!row.contains("insert"));

    // The same readonly value is sent in XML
    let xml = encoder.to_xml(&account).unwrap();
    assert!(xml.contains("2020-01-01T00:00:00Z"));
}

#[test]
fn test_operation_does_not_change_columns() {
    let encoder = isolated_encoder();
    let mut account = full_account();
    let insert_row = encoder.to_csv_row(&account).unwrap();

    account.operation = OperationKind::Update;
    assert_eq!(encoder.to_csv_row(&account).unwrap(), insert_row);
}

#[test]
fn test_epoch_datetime_renders_empty() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Insert);
    account.name = Some("Acme".into());
    account.last_activity = Some(Utc.timestamp_opt(0, 0).unwrap().into());

    let row = encoder.to_csv_row(&account).unwrap();
    assert_eq!(row, r#","Acme",,,,,,,,"#);
}

#[test]
fn test_rows_are_newline_separated() {
    let encoder = isolated_encoder();
    let mut first = Account::new(OperationKind::Insert);
    first.name = Some("One".into());
    let mut second = Account::new(OperationKind::Insert);
    second.name = Some("Two".into());

    let csv = encoder.to_csv_rows([&first, &second]).unwrap();
    assert_eq!(csv, ",\"One\",,,,,,,,\n,\"Two\",,,,,,,,");
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_no_rows_is_empty() {
    let encoder = isolated_encoder();
    let records: Vec<Account> = Vec::new();
    assert_eq!(encoder.to_csv_rows(&records).unwrap(), "");
}

#[test]
fn test_broken_metadata_fails_fast() {
    let encoder = isolated_encoder();
    let err = encoder.to_csv_row(&Broken).unwrap_err();
    assert!(err.is_metadata());
    assert!(err.to_string().contains("`Broken`"));
}
