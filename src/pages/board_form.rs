//! Field validation shared by the new-post and edit-post forms.

#[cfg(test)]
#[path = "board_form_test.rs"]
mod board_form_test;

/// Validated post fields, ready to store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BoardInput {
    pub author: String,
    pub title: String,
    pub contents: String,
}

/// Checks the post form field by field, reporting the first problem.
pub(crate) fn validate_board_input(
    author: &str,
    title: &str,
    contents: &str,
) -> Result<BoardInput, &'static str> {
    let author = author.trim();
    if author.is_empty() {
        return Err("Enter an author name.");
    }
    if author.chars().count() > 20 {
        return Err("Author name must be 20 characters or fewer.");
    }
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    if title.chars().count() > 100 {
        return Err("Title must be 100 characters or fewer.");
    }
    if contents.trim().is_empty() {
        return Err("Enter some content.");
    }
    Ok(BoardInput {
        author: author.to_owned(),
        title: title.to_owned(),
        contents: contents.to_owned(),
    })
}
