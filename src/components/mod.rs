//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the greeting panel surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod connection_panel;
pub mod notification_log;
pub mod status_bar;
