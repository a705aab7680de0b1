use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter your email."));
}

#[test]
fn validate_login_input_rejects_email_without_at_sign() {
    assert_eq!(
        validate_login_input("user.example.com", "hunter2"),
        Err("Email must contain @.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter your password.")
    );
}

#[test]
fn validate_login_input_password_is_not_trimmed() {
    assert_eq!(
        validate_login_input("user@example.com", "  "),
        Ok(("user@example.com".to_owned(), "  ".to_owned()))
    );
}
