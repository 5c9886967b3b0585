//! Notice editor at `/admin/notices/edit/:id`.

#[cfg(test)]
#[path = "notice_edit_test.rs"]
mod notice_edit_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use school_portal::content::{AdminContent, ContentError, Record, RecordKind};
use serde_json::{Value, json};

use crate::components::admin_header::AdminHeader;
use crate::state::session::use_session;

/// Title and body of a notice record, empty when absent.
fn notice_fields(record: &Record) -> (String, String) {
    let field = |name: &str| record.data.get(name).and_then(Value::as_str).unwrap_or_default().to_owned();
    (field("title"), field("body"))
}

/// Replace title and body, keeping any other fields of the record.
fn updated_data(record: &Record, title: &str, body: &str) -> Value {
    let mut data = match &record.data {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    data.insert("title".to_owned(), json!(title.trim()));
    data.insert("body".to_owned(), json!(body.trim()));
    Value::Object(data)
}

fn load_error_text(err: &ContentError) -> String {
    match err {
        ContentError::NotFound { .. } => "This notice no longer exists.".to_owned(),
        other => format!("Could not load the notice: {other}"),
    }
}

#[component]
pub fn NoticeEditPage() -> impl IntoView {
    let content = expect_context::<AdminContent>();
    let landing = use_session().guard.config().landing_path.clone();
    let params = use_params_map();
    let notice_id = move || params.read().get("id").unwrap_or_default();

    let record = RwSignal::new(None::<Record>);
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let content = StoredValue::new(content);
    Effect::new(move |_| {
        let id = notice_id();
        let content = content.get_value();
        leptos::task::spawn_local(async move {
            match content.get(RecordKind::Notice, &id).await {
                Ok(loaded) => {
                    let (loaded_title, loaded_body) = notice_fields(&loaded);
                    let _ = title.try_set(loaded_title);
                    let _ = body.try_set(loaded_body);
                    let _ = record.try_set(Some(loaded));
                }
                Err(err) => {
                    log::warn!("loading notice {id} failed: {err}");
                    let _ = status.try_set(Some(load_error_text(&err)));
                }
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = record.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let data = updated_data(&current, &title.get_untracked(), &body.get_untracked());
        let content = content.get_value();
        leptos::task::spawn_local(async move {
            match content.update(RecordKind::Notice, &current.id, data).await {
                Ok(saved) => {
                    let _ = record.try_set(Some(saved));
                    let _ = status.try_set(Some("Saved.".to_owned()));
                }
                Err(err) => {
                    let _ = status.try_set(Some(format!("Could not save: {err}")));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="admin-page">
            <AdminHeader />
            <main class="admin-page__body">
                <section class="admin-section">
                    <h2>"Edit notice"</h2>
                    <Show when=move || record.get().is_some() fallback=move || view! { <p>"Loading notice..."</p> }>
                        <form class="notice-form" on:submit=on_save>
                            <input
                                class="notice-form__title"
                                type="text"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                            <textarea
                                class="notice-form__body"
                                prop:value=move || body.get()
                                on:input=move |ev| body.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn" type="submit" disabled=move || busy.get()>
                                "Save"
                            </button>
                        </form>
                    </Show>
                    <Show when=move || status.get().is_some()>
                        <p class="admin-section__status">{move || status.get().unwrap_or_default()}</p>
                    </Show>
                    <a class="admin-section__back" href=landing>"Back to dashboard"</a>
                </section>
            </main>
        </div>
    }
}
