//! Sign-out control: ends the session and returns to the public home page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use school_portal::redirect::Redirector;

use crate::state::session::use_session;
use crate::util::navigation::router_navigator;

#[component]
pub fn SignOutButton() -> impl IntoView {
    let session = use_session();
    let navigator = router_navigator(use_navigate());
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let store = session.store.clone();
        let mut redirector = Redirector::new(navigator.clone(), session.guard.clone());
        leptos::task::spawn_local(async move {
            if let Err(err) = redirector.sign_out(&store).await {
                log::warn!("provider sign-out failed: {err}");
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <button class="btn btn--ghost" type="button" on:click=on_click disabled=move || busy.get()>
            "Sign out"
        </button>
    }
}
