use super::*;

// =============================================================
// Flag pair semantics
// =============================================================

#[test]
fn bypass_inactive_by_default() {
    set_test_environment(false);
    set_auth_bypass(false);
    assert!(!auth_bypass_active());
}

#[test]
fn bypass_alone_is_not_enough() {
    set_test_environment(false);
    set_auth_bypass(true);
    assert!(!auth_bypass_active());
}

#[test]
fn test_environment_alone_is_not_enough() {
    set_test_environment(true);
    set_auth_bypass(false);
    assert!(!auth_bypass_active());
}

#[test]
fn both_flags_enable_bypass() {
    set_test_environment(true);
    set_auth_bypass(true);
    assert!(auth_bypass_active());
}

#[test]
fn clearing_either_flag_disables_bypass() {
    set_test_environment(true);
    set_auth_bypass(true);
    assert!(auth_bypass_active());

    set_auth_bypass(false);
    assert!(!auth_bypass_active());

    set_auth_bypass(true);
    set_test_environment(false);
    assert!(!auth_bypass_active());
}
