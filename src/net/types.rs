//! Shared wire DTOs for the board API boundary.
//!
//! DESIGN
//! ======
//! The GraphQL API names its identifier field `_id`. The serde rename
//! keeps the persisted `user` record byte-compatible with the fetched
//! one, so session revalidation can parse either.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated member as returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique member identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Account email. Records persisted by older builds may omit it.
    #[serde(default)]
    pub email: String,
    /// Display name.
    pub name: String,
}
