//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate build and browser concerns from page and component
//! logic to improve reuse and testability.

pub mod config;
pub mod navigation;
