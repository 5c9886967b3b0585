//! Public landing page with the latest notices.

use leptos::prelude::*;
use school_portal::content::{AdminContent, RecordKind};

use crate::state::content::{RecordsState, load_records};
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let content = expect_context::<AdminContent>();
    let notices = RwSignal::new(RecordsState::default());
    load_records(content, RecordKind::Notice, notices);

    let sign_in = session.guard.config().sign_in_path.clone();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Welcome to our school"</h1>
                <a class="home-page__staff-link" href=sign_in>"Staff sign-in"</a>
            </header>
            <section class="home-page__notices">
                <h2>"Notices"</h2>
                <Show
                    when=move || !notices.get().loading
                    fallback=move || view! { <p>"Loading notices..."</p> }
                >
                    <ul class="notice-list">
                        {move || {
                            notices
                                .get()
                                .items
                                .into_iter()
                                .map(|record| {
                                    let title = record.title().unwrap_or("Untitled").to_owned();
                                    view! { <li class="notice-list__item">{title}</li> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </section>
        </div>
    }
}
