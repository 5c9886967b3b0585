use school_portal::guard::Redirect;

use super::*;

fn unauthorized() -> Decision {
    Decision::Redirect(Redirect {
        target: "/unauthorized".to_owned(),
        reason: DenyReason::Unauthorized,
        return_to: None,
    })
}

#[test]
fn redirect_target_overrides_unauthorized_denials() {
    let decision = with_redirect_target(unauthorized(), Some("/"));
    assert_eq!(decision.redirect().map(|r| r.target.as_str()), Some("/"));
}

#[test]
fn redirect_target_keeps_sign_in_redirects() {
    let sign_in = Decision::Redirect(Redirect {
        target: "/admin/login?next=%2Fadmin%2Fdashboard".to_owned(),
        reason: DenyReason::SignInRequired,
        return_to: Some("/admin/dashboard".to_owned()),
    });
    assert_eq!(with_redirect_target(sign_in.clone(), Some("/")), sign_in);
}

#[test]
fn missing_redirect_target_changes_nothing() {
    assert_eq!(with_redirect_target(unauthorized(), None), unauthorized());
    assert_eq!(with_redirect_target(Decision::Pending, Some("/")), Decision::Pending);
    assert_eq!(with_redirect_target(Decision::Allow, Some("/")), Decision::Allow);
}
