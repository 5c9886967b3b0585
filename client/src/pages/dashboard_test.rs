use super::*;

#[test]
fn notice_payload_trims_fields() {
    assert_eq!(
        notice_payload("  Exam week ", " Bring pencils.\n"),
        Ok(json!({ "title": "Exam week", "body": "Bring pencils." }))
    );
}

#[test]
fn notice_payload_requires_title() {
    assert_eq!(notice_payload("   ", "text"), Err("Enter a title for the notice."));
}

#[test]
fn edit_href_encodes_id() {
    assert_eq!(notice_edit_href("42"), "/admin/notices/edit/42");
    assert_eq!(notice_edit_href("a b"), "/admin/notices/edit/a%20b");
}

#[test]
fn image_count_reads_images_array() {
    let album = Record { id: "a".to_owned(), kind: RecordKind::Album, data: json!({ "images": ["1.jpg", "2.jpg"] }) };
    assert_eq!(image_count(&album), 2);
    let empty = Record { id: "b".to_owned(), kind: RecordKind::Album, data: json!({}) };
    assert_eq!(image_count(&empty), 0);
}
