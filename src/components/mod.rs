//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome and shared dialogs while reading
//! session state from Leptos context providers.

pub mod layout;
pub mod modal;
