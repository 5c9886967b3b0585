//! Admin sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every sign-in redirect lands here with the original path in `?next=`. The
//! page always renders. Once a session is known, the redirector leaves for
//! the return-to target, or keeps the user here and signs a non-admin
//! identity back out.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use school_portal::AuthError;
use school_portal::error::ErrorTone;
use school_portal::policy::Requirement;
use school_portal::redirect::Redirector;
use school_portal::route::Location;
use school_portal::scope::mount_scope;

use crate::components::sign_out_button::SignOutButton;
use crate::state::session::use_session;
use crate::util::navigation::router_navigator;

/// Text and styling for the message under the sign-in button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineMessage {
    pub text: String,
    pub class: &'static str,
}

impl InlineMessage {
    pub fn from_error(err: &AuthError) -> Self {
        Self { text: err.user_message(), class: message_class(err.tone()) }
    }
}

fn message_class(tone: ErrorTone) -> &'static str {
    match tone {
        ErrorTone::Neutral => "login-message",
        ErrorTone::Retryable => "login-message login-message--error",
        ErrorTone::Failure => "login-message login-message--error login-message--fatal",
    }
}

/// Hint naming the page the user returns to after signing in.
fn continue_hint(location: &Location) -> Option<String> {
    location.return_to().map(|to| format!("Sign in to continue to {to}."))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let current = move || Location::from_parts(&pathname.get(), &search.get());

    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<InlineMessage>);

    let (mount_guard, token) = mount_scope();
    on_cleanup(move || drop(mount_guard));

    let redirector = Rc::new(RefCell::new(Redirector::new(
        router_navigator(use_navigate()),
        session.guard.clone(),
    )));
    let snapshot = session.snapshot;
    let revoker = session.clone();
    Effect::new(move |_| {
        let latest = snapshot.get();
        let outcome = redirector.borrow_mut().after_sign_in(&latest, &current());
        if outcome.revoke_session {
            message.set(Some(InlineMessage::from_error(&AuthError::UnauthorizedIdentity)));
            let revoker = revoker.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = revoker.sign_out().await {
                    log::warn!("revoking non-admin session failed: {err}");
                }
            });
        }
    });

    let handle = session.clone();
    let on_sign_in = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        message.set(None);
        let handle = handle.clone();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = handle.sign_in().await;
            token.run(|| {
                busy.set(false);
                if let Err(err) = result {
                    message.set(Some(InlineMessage::from_error(&err)));
                }
            });
        });
    };

    let lacks_access = {
        let session = session.clone();
        move || session.snapshot.get().known_identity().is_some() && !session.is_authorized(Requirement::Admin)
    };
    let home = session.guard.config().public_home_path.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"School Admin"</h1>
                <p class="login-card__subtitle">"Sign in with the school's Google account"</p>
                {move || continue_hint(&current()).map(|hint| view! { <p class="login-hint">{hint}</p> })}
                <button class="login-button" type="button" on:click=on_sign_in disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in with Google" }}
                </button>
                {move || message.get().map(|m| view! { <p class=m.class>{m.text}</p> })}
                <Show when=lacks_access>
                    <p class="login-message login-message--error">
                        "This account is not an administrator."
                    </p>
                    <SignOutButton />
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href=home>"Back to the school website"</a>
            </div>
        </div>
    }
}
