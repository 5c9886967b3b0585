//! Identity provider backed by the site's session endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, a popup window for the
//! interactive flow and a periodic session refresh. Native builds resolve to
//! signed-out immediately so the app renders without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to [`AuthError::ProviderUnavailable`], non-success
//! statuses to [`AuthError::Provider`]. If the very first session check fails
//! the provider reports signed-out instead of leaving the app loading forever.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

#[cfg(feature = "csr")]
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use school_portal::provider::{IdentityListener, IdentityProvider, ListenerSet, ProviderSubscription};
use school_portal::{AuthError, Identity};

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const SIGN_IN_POPUP_URL: &str = "/auth/google";

#[cfg(feature = "csr")]
const POPUP_NAME: &str = "school-portal-sign-in";
#[cfg(feature = "csr")]
const POPUP_POLL: std::time::Duration = std::time::Duration::from_millis(500);
#[cfg(feature = "csr")]
const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

/// Browser identity provider. Clones share state.
#[derive(Clone, Default)]
pub struct HttpIdentityProvider {
    shared: Arc<Shared>,
}

#[derive(Default)]
struct Shared {
    /// Outer `None` until the first session check answers.
    current: Mutex<Option<Option<Identity>>>,
    listeners: ListenerSet,
    #[cfg(feature = "csr")]
    refreshing: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Shared {
    fn resolved(&self) -> Option<Option<Identity>> {
        lock(&self.current).clone()
    }

    /// Record `identity`; listeners hear about it only when it changed.
    fn publish(&self, identity: Option<Identity>) {
        let changed = {
            let mut current = lock(&self.current);
            let changed = current.as_ref() != Some(&identity);
            *current = Some(identity.clone());
            changed
        };
        if changed {
            log::debug!("session identity changed: signed_in={}", identity.is_some());
            self.listeners.emit(identity.as_ref());
        }
    }
}

impl HttpIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the session from the server and publish any change.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure. The first failure before any
    /// successful check is also published as signed-out.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        refresh_shared(&self.shared).await
    }

    fn start_refresh(&self) {
        #[cfg(feature = "csr")]
        {
            if self.shared.refreshing.swap(true, Ordering::SeqCst) {
                return;
            }
            let shared = Arc::clone(&self.shared);
            leptos::task::spawn_local(async move {
                loop {
                    if let Err(err) = refresh_shared(&shared).await {
                        log::warn!("session refresh failed: {err}");
                    }
                    gloo_timers::future::sleep(REFRESH_INTERVAL).await;
                    if shared.listeners.is_empty() {
                        break;
                    }
                }
                shared.refreshing.store(false, Ordering::SeqCst);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            if self.shared.resolved().is_none() {
                self.shared.publish(None);
            }
        }
    }
}

async fn refresh_shared(shared: &Shared) -> Result<(), AuthError> {
    match fetch_session().await {
        Ok(identity) => {
            shared.publish(identity);
            Ok(())
        }
        Err(err) => {
            if shared.resolved().is_none() {
                shared.publish(None);
            }
            Err(err)
        }
    }
}

async fn fetch_session() -> Result<Option<Identity>, AuthError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;
        identity_from_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(None)
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for HttpIdentityProvider {
    fn name(&self) -> &str {
        "http"
    }

    fn current_identity(&self) -> Option<Identity> {
        self.shared.resolved().flatten()
    }

    fn on_identity_changed(&self, listener: IdentityListener) -> ProviderSubscription {
        if let Some(identity) = self.shared.resolved() {
            listener(identity);
        }
        let subscription = self.shared.listeners.add(listener);
        self.start_refresh();
        subscription
    }

    async fn sign_in_interactive(&self) -> Result<Identity, AuthError> {
        #[cfg(feature = "csr")]
        {
            let window =
                web_sys::window().ok_or_else(|| AuthError::ProviderUnavailable("no browser window".to_owned()))?;
            let popup = window
                .open_with_url_and_target(SIGN_IN_POPUP_URL, POPUP_NAME)
                .map_err(|_| AuthError::ProviderUnavailable("could not open the sign-in window".to_owned()))?
                .ok_or_else(|| AuthError::ProviderUnavailable("the sign-in popup was blocked".to_owned()))?;
            loop {
                gloo_timers::future::sleep(POPUP_POLL).await;
                if popup.closed().unwrap_or(true) {
                    break;
                }
            }
            let identity = fetch_session().await?;
            self.shared.publish(identity.clone());
            identity.ok_or(AuthError::UserCancelled)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(AuthError::ProviderUnavailable("interactive sign-in needs a browser".to_owned()))
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;
            sign_out_result(resp.status())?;
        }
        self.shared.publish(None);
        Ok(())
    }
}

/// Interpret a `/api/auth/me` response. 401 and 204 mean no session.
#[cfg(any(test, feature = "csr"))]
fn identity_from_response(status: u16, body: &str) -> Result<Option<Identity>, AuthError> {
    match status {
        200 => serde_json::from_str::<Identity>(body).map(Some).map_err(|e| AuthError::Provider {
            code: "invalid_response".to_owned(),
            message: e.to_string(),
        }),
        204 | 401 => Ok(None),
        _ => Err(status_error(status, "session check failed")),
    }
}

/// Interpret a `/api/auth/logout` status. 401 means already signed out.
#[cfg(any(test, feature = "csr"))]
fn sign_out_result(status: u16) -> Result<(), AuthError> {
    if (200..300).contains(&status) || status == 401 {
        Ok(())
    } else {
        Err(status_error(status, "sign-out failed"))
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, what: &str) -> AuthError {
    AuthError::Provider { code: format!("http_{status}"), message: format!("{what}: {status}") }
}
