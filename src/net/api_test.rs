use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_body_carries_operation_and_variables() {
    let body = login_request_body("a@b.c", "hunter42");
    let query = body["query"].as_str().unwrap();
    assert!(query.contains("mutation LoginUser"));
    assert!(query.contains("accessToken"));
    assert_eq!(body["variables"]["email"], "a@b.c");
    assert_eq!(body["variables"]["password"], "hunter42");
}

#[test]
fn fetch_user_request_body_selects_identity_fields() {
    let body = fetch_user_request_body();
    let query = body["query"].as_str().unwrap();
    assert!(query.contains("fetchUserLoggedIn"));
    assert!(query.contains("_id"));
    assert!(query.contains("name"));
    assert!(body.get("variables").is_none());
}

#[test]
fn create_user_request_body_nests_the_input_object() {
    let body = create_user_request_body("a@b.c", "tester", "hunter42");
    let query = body["query"].as_str().unwrap();
    assert!(query.contains("mutation CreateUser"));
    let input = &body["variables"]["createUserInput"];
    assert_eq!(input["email"], "a@b.c");
    assert_eq!(input["name"], "tester");
    assert_eq!(input["password"], "hunter42");
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn auth_request_failed_message_formats_status() {
    assert_eq!(auth_request_failed_message(401), "auth request failed: 401");
    assert_eq!(auth_request_failed_message(500), "auth request failed: 500");
}
