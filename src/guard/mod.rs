//! Authorization guards for pages and actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route_guard` gates whole pages by path, `action_guard` gates
//! individual event handlers, and `prompt` holds the re-entrancy state
//! both share. Both consult the same session check, so a path and an
//! action can never disagree about who is signed in.

pub mod action_guard;
pub mod prompt;
pub mod route_guard;
