//! Route guard component for admin views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin route renders its page inside `<RequireAuth>`. The decision is
//! recomputed from the latest session snapshot and the latest router location
//! whenever either changes; the protected children are built only for an
//! allow decision, so no admin markup flashes before a redirect.
//!
//! DESIGN
//! ======
//! Decision computation (`Memo`) is separate from execution (`Effect`). The
//! effect owns one redirector per mounted guard, which turns repeated
//! identical decisions into a single history-replacing navigation.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use school_portal::guard::{DenyReason, Rendered, render_guarded};
use school_portal::policy::Requirement;
use school_portal::redirect::Redirector;
use school_portal::route::Location;
use school_portal::Decision;

use crate::state::session::use_session;
use crate::util::navigation::router_navigator;

/// Render `children` only when the current session may see this route.
#[component]
pub fn RequireAuth(
    /// Requirement for this view. Defaults to the route table's entry.
    #[prop(optional)]
    requirement: Option<Requirement>,
    /// Where unauthorized identities are sent instead of the configured page.
    #[prop(optional, into)]
    redirect_target: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    let guard = session.guard.clone();
    let snapshot = session.snapshot;
    let decision = Memo::new(move |_| {
        let current = Location::from_parts(&pathname.get(), &search.get());
        let snapshot = snapshot.get();
        let decision = match requirement {
            Some(requirement) => guard.evaluate(&snapshot, &current, Some(requirement)),
            None => guard.evaluate_route(&snapshot, &current),
        };
        with_redirect_target(decision, redirect_target.as_deref())
    });

    let redirector = Rc::new(RefCell::new(Redirector::new(
        router_navigator(use_navigate()),
        session.guard.clone(),
    )));
    Effect::new(move |_| {
        let decision = decision.get();
        let outcome = redirector.borrow_mut().apply(&decision);
        if outcome.revoke_session {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = session.sign_out().await {
                    log::warn!("revoking non-admin session failed: {err}");
                }
            });
        }
    });

    move || match render_guarded(&decision.get(), || children()) {
        Rendered::Protected(view) => view,
        Rendered::Pending => view! {
            <div class="auth-gate auth-gate--pending" aria-busy="true">
                <span class="auth-gate__spinner"></span>
                "Checking access..."
            </div>
        }
        .into_any(),
        Rendered::Redirecting(_) => view! { <div class="auth-gate auth-gate--redirecting"></div> }.into_any(),
    }
}

/// Point unauthorized denials at `target` when one is given. Sign-in
/// redirects keep their target so the return-to survives.
fn with_redirect_target(decision: Decision, target: Option<&str>) -> Decision {
    match (decision, target) {
        (Decision::Redirect(mut redirect), Some(target)) if redirect.reason == DenyReason::Unauthorized => {
            target.clone_into(&mut redirect.target);
            Decision::Redirect(redirect)
        }
        (decision, _) => decision,
    }
}
