//! Networking modules for the site's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` implements the identity provider over the session endpoints and
//! `content` implements the notice/album store over the REST collections.

pub mod content;
pub mod provider;
