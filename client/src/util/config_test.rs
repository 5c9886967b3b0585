use super::*;

#[test]
fn missing_values_give_defaults() {
    assert_eq!(config_from(None, None), Ok(GateConfig::default()));
}

#[test]
fn admin_list_and_revocation_flag_are_read() {
    let config = config_from(Some("head@school.edu, office@school.edu"), Some("off")).unwrap();
    assert_eq!(config.admin_emails, vec!["head@school.edu".to_owned(), "office@school.edu".to_owned()]);
    assert!(!config.revoke_non_admin_sessions);
    assert_eq!(config.sign_in_path, GateConfig::default().sign_in_path);
}

#[test]
fn blank_admin_list_is_rejected() {
    assert_eq!(config_from(Some(" , "), None), Err(ConfigError::NoAdmins { var: "ADMIN_EMAILS" }));
}
