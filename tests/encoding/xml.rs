//! XML envelope encoding

use base64::Engine;
use chrono::{FixedOffset, TimeZone, Utc};
use forcewire::prelude::*;

use crate::{field, isolated_encoder, null_marker, Account, Address, Broken};

#[test]
fn test_insert_with_every_field_absent_is_type_only() {
    let encoder = isolated_encoder();
    let xml = encoder.to_xml(&Account::new(OperationKind::Insert)).unwrap();
    assert_eq!(xml, "<type>Account</type>");
}

#[test]
fn test_update_with_every_field_absent_lists_clearable_fields() {
    let encoder = isolated_encoder();
    let xml = encoder.to_xml(&Account::new(OperationKind::Update)).unwrap();

    let expected = [
        "<type>Account</type>".to_string(),
        null_marker("Id"),
        null_marker("Name"),
        null_marker("AnnualRevenue"),
        null_marker("Active__c"),
        null_marker("CreatedDate"),
    ]
    .concat();
    assert_eq!(xml, expected);
}

#[test]
fn test_delete_and_upsert_emit_null_markers() {
    let encoder = isolated_encoder();
    for op in [OperationKind::Delete, OperationKind::Upsert] {
        let mut account = Account::new(op);
        account.id = Some("001xx000003DGb2AAG".into());
        let xml = encoder.to_xml(&account).unwrap();
        assert!(xml.contains(&null_marker("Name")), "{op}: {xml}");
        assert!(!xml.contains(&null_marker("Id")), "{op}: {xml}");
    }
}

#[test]
fn test_full_update_in_declaration_order() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Update);
    account.id = Some("001A".into());
    account.name = Some("Acme".into());
    account.annual_revenue = Some(1250000.5);
    account.employees = Some(0);
    account.active = Some(false);
    account.last_activity = Some(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap().into());
    account.logo = Some(vec![0x00, 0xFF]);

    let xml = encoder.to_xml(&account).unwrap();
    let expected = [
        "<type>Account</type>".to_string(),
        field("Id", "001A"),
        field("Name", "Acme"),
        field("AnnualRevenue", "1250000.5"),
        field("NumberOfEmployees", "0"),
        field("Active__c", "false"),
        field("LastActivityDate", "2024-05-06T07:08:09Z"),
        "<Logo__c>AP8=</Logo__c>".to_string(),
        null_marker("CreatedDate"),
    ]
    .concat();
    assert_eq!(xml, expected);
}

#[test]
fn test_ignore_if_null_field_is_silent_on_update() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Update);
    account.name = Some("Acme".into());

    let xml = encoder.to_xml(&account).unwrap();
    assert!(!xml.contains("Phone"));
    assert!(!xml.contains("NumberOfEmployees"));
    assert!(!xml.contains("LastActivityDate"));
    assert!(!xml.contains("Logo__c"));
}

#[test]
fn test_insert_only_field_is_sent_on_insert() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Insert);
    account.lead_source = Some("Web".into());
    account.description = Some("Imported".into());

    let xml = encoder.to_xml(&account).unwrap();
    assert!(xml.contains(&field("LeadSource", "Web")));
    assert!(xml.contains(&field("Description", "Imported")));
}

#[test]
fn test_insert_only_field_is_invisible_outside_insert() {
    let encoder = isolated_encoder();
    for op in [OperationKind::Update, OperationKind::Upsert, OperationKind::Delete] {
        let mut account = Account::new(op);
        account.lead_source = Some("Web".into());

        let xml = encoder.to_xml(&account).unwrap();
        assert!(!xml.contains("LeadSource"), "{op}: {xml}");
        assert!(!xml.contains("Description"), "{op}: {xml}");
    }
}

#[test]
fn test_insert_only_ignore_if_null_absent_on_insert_is_dropped() {
    // Queued for clearing, then suppressed because the record is an insert.
    let encoder = isolated_encoder();
    let account = Account::new(OperationKind::Insert);

    let xml = encoder.to_xml(&account).unwrap();
    assert!(!xml.contains("LeadSource"));
    assert!(!xml.contains("fieldsToNull"));
}

#[test]
fn test_empty_string_is_a_value() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Update);
    account.id = Some("001A".into());
    account.name = Some(String::new());

    let xml = encoder.to_xml(&account).unwrap();
    assert!(xml.contains(&field("Name", "")));
    assert!(!xml.contains(&null_marker("Name")));
}

#[test]
fn test_readonly_field_is_sent_in_xml() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Update);
    account.created_date = Some(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());

    let xml = encoder.to_xml(&account).unwrap();
    assert!(xml.contains(&field("CreatedDate", "2020-01-02T03:04:05Z")));
}

#[test]
fn test_ignored_field_never_appears() {
    let encoder = isolated_encoder();
    for op in OperationKind::ALL {
        let xml = encoder.to_xml(&Account::new(op)).unwrap();
        assert!(!xml.contains("operation"), "{op}: {xml}");
    }
}

#[test]
fn test_datetime_is_converted_to_utc() {
    let encoder = isolated_encoder();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let mut account = Account::new(OperationKind::Insert);
    account.last_activity = Some(tokyo.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());

    let xml = encoder.to_xml(&account).unwrap();
    assert!(xml.contains(&field("LastActivityDate", "2023-12-31T23:00:00Z")));
}

#[test]
fn test_binary_field_is_single_base64_element() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Update);
    account.logo = Some(vec![0x00, 0xFF]);

    let xml = encoder.to_xml(&account).unwrap();
    assert_eq!(xml.matches("<Logo__c>").count(), 1);

    let start = xml.find("<Logo__c>").unwrap() + "<Logo__c>".len();
    let end = xml.find("</Logo__c>").unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&xml[start..end])
        .unwrap();
    assert_eq!(decoded, vec![0x00, 0xFF]);
}

#[test]
fn test_shared_wire_name_is_cleared_once() {
    let encoder = isolated_encoder();
    let address = Address {
        billing_city: None,
        shipping_city: None,
        operation: OperationKind::Update,
    };

    let xml = encoder.to_xml(&address).unwrap();
    assert_eq!(xml, format!("<type>Address</type>{}", null_marker("City")));
}

#[test]
fn test_text_content_is_escaped() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Insert);
    account.name = Some("Smith & Sons <Ltd>".into());

    let xml = encoder.to_xml(&account).unwrap();
    assert!(xml.contains(&field("Name", "Smith &amp; Sons &lt;Ltd&gt;")));
}

#[test]
fn test_write_xml_streams_same_bytes() {
    let encoder = isolated_encoder();
    let mut account = Account::new(OperationKind::Update);
    account.name = Some("Acme".into());

    let mut sink = Vec::new();
    encoder.write_xml(&account, &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), encoder.to_xml(&account).unwrap());
}

#[test]
fn test_configured_namespace_is_used() {
    let encoder = Encoder::builder()
        .registry(std::sync::Arc::new(DescriptorRegistry::new()))
        .namespace("urn:enterprise.soap.sforce.com")
        .build();
    let mut account = Account::new(OperationKind::Update);
    account.id = Some("001A".into());

    let xml = encoder.to_xml(&account).unwrap();
    assert!(xml.contains("<Id xmlns=\"urn:enterprise.soap.sforce.com\">001A</Id>"));
    assert!(xml.contains("<fieldsToNull xmlns=\"urn:enterprise.soap.sforce.com\">Name</fieldsToNull>"));
}

#[test]
fn test_broken_metadata_fails_fast() {
    let encoder = isolated_encoder();
    let err = encoder.to_xml(&Broken).unwrap_err();
    assert!(err.is_metadata());
    assert!(matches!(err, Error::Metadata { type_name: "Broken", .. }));
}
