use super::*;

fn notice(data: Value) -> Record {
    Record { id: "42".to_owned(), kind: RecordKind::Notice, data }
}

#[test]
fn fields_default_to_empty() {
    assert_eq!(notice_fields(&notice(json!({}))), (String::new(), String::new()));
    assert_eq!(
        notice_fields(&notice(json!({ "title": "Holiday", "body": "School closed." }))),
        ("Holiday".to_owned(), "School closed.".to_owned())
    );
}

#[test]
fn update_keeps_unrelated_fields() {
    let record = notice(json!({ "title": "Old", "body": "x", "pinned": true }));
    assert_eq!(
        updated_data(&record, " New ", "Body "),
        json!({ "title": "New", "body": "Body", "pinned": true })
    );
}

#[test]
fn missing_notice_has_friendly_text() {
    let err = ContentError::NotFound { kind: RecordKind::Notice, id: "42".to_owned() };
    assert_eq!(load_error_text(&err), "This notice no longer exists.");
}
