//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `boards`) so individual
//! components can depend on small focused models.

pub mod boards;
pub mod session;
