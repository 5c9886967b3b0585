//! Root component: session, guard and content wiring plus the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is created exactly once here, before the router, so
//! every route shares one identity subscription. It is shut down when the
//! root owner is cleaned up. Admin routes render their page inside
//! `RequireAuth`; the sign-in, unauthorized and home routes are public.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use school_portal::content::AdminContent;
use school_portal::provider::IdentityProvider;
use school_portal::{RouteGuard, SessionStore};

use crate::components::require_auth::RequireAuth;
use crate::net::content::HttpContentStore;
use crate::net::provider::HttpIdentityProvider;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::notice_edit::NoticeEditPage;
use crate::pages::sign_in::SignInPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::state::session::SessionHandle;
use crate::util::config::gate_config;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let guard = RouteGuard::from_config(gate_config());
    let provider: Arc<dyn IdentityProvider> = Arc::new(HttpIdentityProvider::new());
    let store = SessionStore::new(provider);
    provide_context(AdminContent::new(
        Arc::new(HttpContentStore::new()),
        store.clone(),
        Arc::clone(guard.policy()),
    ));
    SessionHandle::provide(store, guard);

    view! {
        <Title text="School Admin" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/admin/login") view=SignInPage />
                <Route path=path!("/unauthorized") view=UnauthorizedPage />
                <Route
                    path=path!("/admin")
                    view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
                />
                <Route
                    path=path!("/admin/dashboard")
                    view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
                />
                <Route
                    path=path!("/admin/notices/edit/:id")
                    view=|| view! { <RequireAuth><NoticeEditPage /></RequireAuth> }
                />
                <Route
                    path=path!("/admin/*any")
                    view=|| view! { <RequireAuth><NotFound /></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Page not found"</h1>
                <a class="login-link" href="/">"Back to the school website"</a>
            </div>
        </div>
    }
}
