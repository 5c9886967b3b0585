//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Admin pages are mounted inside `RequireAuth` by the app
//! router and may assume an authorized session.

pub mod dashboard;
pub mod home;
pub mod notice_edit;
pub mod sign_in;
pub mod unauthorized;
