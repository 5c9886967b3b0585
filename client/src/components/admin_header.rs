//! Header bar shown on every admin page.

use leptos::prelude::*;

use crate::components::sign_out_button::SignOutButton;
use crate::state::session::{status_label, use_session};

#[component]
pub fn AdminHeader() -> impl IntoView {
    let session = use_session();
    let snapshot = session.snapshot;
    let landing = session.guard.config().landing_path.clone();
    let home = session.guard.config().public_home_path.clone();

    view! {
        <header class="admin-header">
            <a class="admin-header__brand" href=landing>"School Admin"</a>
            <span class="admin-header__status">{move || status_label(&snapshot.get())}</span>
            <a class="admin-header__link" href=home>"View site"</a>
            <SignOutButton />
        </header>
    }
}
