//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component creates one [`SessionHandle`] and provides it via
//! context. Route guards, the sign-in page and the admin pages read the
//! session through the reactive `snapshot` signal and trigger sign-in and
//! sign-out through the shared store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use school_portal::policy::Requirement;
use school_portal::session::SessionStatus;
use school_portal::{AuthError, Identity, RouteGuard, SessionSnapshot, SessionStore};

/// Session store, its reactive mirror and the route guard.
#[derive(Clone)]
pub struct SessionHandle {
    pub store: SessionStore,
    /// Latest store snapshot, updated by a store subscription.
    pub snapshot: RwSignal<SessionSnapshot>,
    pub guard: RouteGuard,
}

impl SessionHandle {
    /// Mirror `store` into a signal and place the handle in context. The
    /// store is shut down when the calling owner is cleaned up.
    pub fn provide(store: SessionStore, guard: RouteGuard) -> Self {
        let snapshot = RwSignal::new(store.snapshot());
        let subscription = store.subscribe(move |latest: &SessionSnapshot| {
            let _ = snapshot.try_set(latest.clone());
        });

        let store_cleanup = store.clone();
        on_cleanup(move || {
            drop(subscription);
            store_cleanup.shutdown();
        });

        let handle = Self { store, snapshot, guard };
        provide_context(handle.clone());
        handle
    }

    /// `true` when the current identity satisfies `requirement`. Tracks `snapshot`.
    pub fn is_authorized(&self, requirement: Requirement) -> bool {
        let snapshot = self.snapshot.get();
        self.guard.policy().is_authorized(snapshot.known_identity(), requirement)
    }

    /// # Errors
    ///
    /// See [`SessionStore::sign_in_interactive`].
    pub async fn sign_in(&self) -> Result<Identity, AuthError> {
        self.store.sign_in_interactive().await
    }

    /// # Errors
    ///
    /// See [`SessionStore::sign_out`].
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.store.sign_out().await
    }
}

/// The session handle provided by the root component.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// Short status line for the admin header.
pub fn status_label(snapshot: &SessionSnapshot) -> String {
    match snapshot.status() {
        SessionStatus::Unknown => "Checking sign-in...".to_owned(),
        SessionStatus::Unauthenticated => "Not signed in".to_owned(),
        SessionStatus::Authenticated => {
            let label = snapshot.identity.as_ref().map_or("", Identity::label);
            format!("Signed in as {label}")
        }
    }
}
