//! Admin dashboard: notices and albums with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after sign-in. Mounted inside `RequireAuth`, so it renders
//! only for admins; mutations still go through `AdminContent`, which checks
//! the session again before touching the backend.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use school_portal::content::{AdminContent, Record, RecordKind};
use serde_json::{Value, json};

use crate::components::admin_header::AdminHeader;
use crate::state::content::{RecordsState, load_records};

/// JSON body for a new notice. Title is required.
fn notice_payload(title: &str, body: &str) -> Result<Value, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title for the notice.");
    }
    Ok(json!({ "title": title, "body": body.trim() }))
}

/// Edit page for a notice.
pub fn notice_edit_href(id: &str) -> String {
    format!("/admin/notices/edit/{}", urlencoding::encode(id))
}

fn image_count(record: &Record) -> usize {
    record.data.get("images").and_then(Value::as_array).map_or(0, Vec::len)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let content = expect_context::<AdminContent>();
    let notices = RwSignal::new(RecordsState::default());
    let albums = RwSignal::new(RecordsState::default());
    load_records(content.clone(), RecordKind::Notice, notices);
    load_records(content.clone(), RecordKind::Album, albums);

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let create_content = content.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let data = match notice_payload(&title.get_untracked(), &body.get_untracked()) {
            Ok(data) => data,
            Err(msg) => {
                status.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        let content = create_content.clone();
        leptos::task::spawn_local(async move {
            match content.create(RecordKind::Notice, data).await {
                Ok(record) => {
                    let _ = notices.try_update(|s| s.items.push(record));
                    let _ = title.try_set(String::new());
                    let _ = body.try_set(String::new());
                    let _ = status.try_set(Some("Notice published.".to_owned()));
                }
                Err(err) => {
                    let _ = status.try_set(Some(format!("Could not publish: {err}")));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_delete = Callback::new(move |id: String| {
        let content = content.clone();
        leptos::task::spawn_local(async move {
            match content.delete(RecordKind::Notice, &id).await {
                Ok(()) => {
                    let _ = notices.try_update(|s| s.remove(&id));
                }
                Err(err) => {
                    let _ = status.try_set(Some(format!("Could not delete: {err}")));
                }
            }
        });
    });

    view! {
        <div class="admin-page">
            <AdminHeader />
            <main class="admin-page__body">
                <section class="admin-section">
                    <h2>"Notices"</h2>
                    <form class="notice-form" on:submit=on_create>
                        <input
                            class="notice-form__title"
                            type="text"
                            placeholder="Title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <textarea
                            class="notice-form__body"
                            placeholder="Notice text"
                            prop:value=move || body.get()
                            on:input=move |ev| body.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn" type="submit" disabled=move || busy.get()>
                            "Publish notice"
                        </button>
                    </form>
                    <Show when=move || status.get().is_some()>
                        <p class="admin-section__status">{move || status.get().unwrap_or_default()}</p>
                    </Show>
                    <RecordList state=notices on_delete=on_delete />
                </section>
                <section class="admin-section">
                    <h2>"Photo albums"</h2>
                    <Show
                        when=move || !albums.get().loading
                        fallback=move || view! { <p>"Loading albums..."</p> }
                    >
                        <ul class="record-list">
                            {move || {
                                albums
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|record| {
                                        let title = record.title().unwrap_or("Untitled").to_owned();
                                        let count = image_count(&record);
                                        view! {
                                            <li class="record-list__item">
                                                <span>{title}</span>
                                                <span class="record-list__meta">{format!("{count} photos")}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </section>
            </main>
        </div>
    }
}

/// Notice list with edit links and delete buttons.
#[component]
fn RecordList(state: RwSignal<RecordsState>, on_delete: Callback<String>) -> impl IntoView {
    view! {
        <Show when=move || state.get().error.is_some()>
            <p class="admin-section__error">{move || state.get().error.unwrap_or_default()}</p>
        </Show>
        <Show when=move || !state.get().loading fallback=move || view! { <p>"Loading notices..."</p> }>
            <ul class="record-list">
                {move || {
                    state
                        .get()
                        .items
                        .into_iter()
                        .map(|record| {
                            let title = record.title().unwrap_or("Untitled").to_owned();
                            let href = notice_edit_href(&record.id);
                            let id = record.id.clone();
                            view! {
                                <li class="record-list__item">
                                    <a href=href>{title}</a>
                                    <button
                                        class="btn btn--danger"
                                        type="button"
                                        on:click=move |_| on_delete.run(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
