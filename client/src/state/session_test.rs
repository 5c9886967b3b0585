use super::*;

#[test]
fn status_label_while_loading() {
    assert_eq!(status_label(&SessionSnapshot::unknown()), "Checking sign-in...");
}

#[test]
fn status_label_signed_out() {
    assert_eq!(status_label(&SessionSnapshot::resolved(None)), "Not signed in");
}

#[test]
fn status_label_prefers_display_name() {
    let identity = Identity::with_email("sahin401099@gmail.com").display_name("Principal");
    assert_eq!(status_label(&SessionSnapshot::resolved(Some(identity))), "Signed in as Principal");
}

#[test]
fn status_label_falls_back_to_email() {
    let identity = Identity::with_email("office@school.edu");
    assert_eq!(status_label(&SessionSnapshot::resolved(Some(identity))), "Signed in as office@school.edu");
}
