//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: local form signals, small
//! pure validators, and guarded mutations. Shared chrome and dialogs live
//! in `components`.

pub(crate) mod board_form;

pub mod board_detail;
pub mod board_edit;
pub mod board_new;
pub mod boards;
pub mod login;
pub mod signup;
