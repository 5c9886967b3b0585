//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session from Leptos context and never talk to
//! the identity provider directly.

pub mod admin_header;
pub mod require_auth;
pub mod sign_out_button;
