//! Destination for signed-in identities that fail the admin policy.

use leptos::prelude::*;

use crate::components::sign_out_button::SignOutButton;
use crate::state::session::use_session;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = use_session();
    let snapshot = session.snapshot;
    let sign_in = session.guard.config().sign_in_path.clone();
    let home = session.guard.config().public_home_path.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Access denied"</h1>
                <p class="login-card__subtitle">
                    "This area is reserved for the school's administrators."
                </p>
                <Show
                    when=move || snapshot.get().known_identity().is_some()
                    fallback=move || {
                        let sign_in = sign_in.clone();
                        view! { <a class="login-button" href=sign_in>"Sign in with another account"</a> }
                    }
                >
                    <SignOutButton />
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href=home>"Back to the school website"</a>
            </div>
        </div>
    }
}
