//! Router adapter for the core redirector.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded views and the sign-in page share identical navigation behavior:
//! every redirect goes through `use_navigate` with the history mode chosen by
//! the redirector.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;
use school_portal::redirect::NavigateMode;

/// Router options for a redirector navigation.
pub fn navigate_options(mode: NavigateMode) -> NavigateOptions {
    NavigateOptions { replace: mode.replace, ..NavigateOptions::default() }
}

/// Wrap a router `navigate` function as a redirector navigator.
pub fn router_navigator<F>(navigate: F) -> impl Fn(&str, NavigateMode) + Clone + 'static
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    move |to: &str, mode: NavigateMode| {
        log::debug!("navigate to={to} replace={}", mode.replace);
        navigate(to, navigate_options(mode));
    }
}
