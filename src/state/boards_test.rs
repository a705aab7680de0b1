use super::*;

// =============================================================
// BoardsState defaults
// =============================================================

#[test]
fn boards_state_defaults_to_empty_list() {
    let state = BoardsState::default();
    assert!(state.items.is_empty());
}

#[test]
fn board_list_item_uses_wire_field_names() {
    let raw = r#"{"_id":"b1","writer":"tester","title":"hello","createdAt":"2024-01-01"}"#;
    let item: BoardListItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.id, "b1");
    assert_eq!(item.author, "tester");
    assert_eq!(item.title, "hello");
    assert_eq!(item.contents, "");
    assert_eq!(item.created_at, "2024-01-01");
}
