//! List state for notice and album collections shown on admin pages.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;
use school_portal::content::{AdminContent, ContentError, Record, RecordKind};

/// Records of one kind plus load status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordsState {
    pub items: Vec<Record>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RecordsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list result. A failure keeps the previous items.
    pub fn finish_load(&mut self, result: Result<Vec<Record>, ContentError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|record| record.id != id);
    }
}

/// Fetch `kind` into `state` in the background.
pub fn load_records(content: AdminContent, kind: RecordKind, state: RwSignal<RecordsState>) {
    state.update(RecordsState::begin_load);
    leptos::task::spawn_local(async move {
        let result = content.list(kind).await;
        if let Err(err) = &result {
            log::warn!("loading {} failed: {err}", kind.collection());
        }
        let _ = state.try_update(|s| s.finish_load(result));
    });
}
