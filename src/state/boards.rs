//! Board-list state for the post list page.
//!
//! DESIGN
//! ======
//! Pure view state, empty by default. Listing is filled in by whatever
//! data source the deployment wires up; the session subsystem only needs
//! the page and its guarded actions to exist.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

/// A post summary for the board list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoardListItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "writer")]
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub contents: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Shared board-list state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardsState {
    pub items: Vec<BoardListItem>,
}
