//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page, guard,
//! and state logic to improve reuse and testability.

pub mod navigation;
pub mod storage;
pub mod test_bypass;
