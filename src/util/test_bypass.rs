//! Test-harness override for the authorization guards.
//!
//! End-to-end runs need to exercise member-only pages without a live
//! login flow. The harness sets two window globals before the app boots;
//! both must be present for the guards to skip their session check, so a
//! stray flag in a production profile cannot open anything by itself.

use std::cell::Cell;

#[cfg(feature = "hydrate")]
const TEST_ENV_GLOBAL: &str = "__TEST_ENV__";
#[cfg(feature = "hydrate")]
const TEST_BYPASS_GLOBAL: &str = "__TEST_BYPASS__";

thread_local! {
    static TEST_ENV: Cell<bool> = const { Cell::new(false) };
    static BYPASS: Cell<bool> = const { Cell::new(false) };
}

/// Mark the process as running under a test harness.
pub fn set_test_environment(active: bool) {
    TEST_ENV.with(|flag| flag.set(active));
}

/// Request that the guards skip their session check.
///
/// Has no effect unless the test environment flag is also set.
pub fn set_auth_bypass(active: bool) {
    BYPASS.with(|flag| flag.set(active));
}

/// True only when both the test environment and bypass flags are set.
pub fn auth_bypass_active() -> bool {
    TEST_ENV.with(Cell::get) && BYPASS.with(Cell::get)
}

/// Seed the flag pair from the harness-injected window globals.
///
/// Called once at hydration start, before the app mounts. Harnesses set
/// `__TEST_ENV__` either to `true` or to the string `"test"`; anything
/// else leaves the flags off.
pub fn sync_from_window() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let read = |name: &str| {
            js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name)).ok()
        };
        let env_set = read(TEST_ENV_GLOBAL).is_some_and(|v| {
            v.as_bool() == Some(true) || v.as_string().as_deref() == Some("test")
        });
        let bypass_set = read(TEST_BYPASS_GLOBAL).is_some_and(|v| v.as_bool() == Some(true));
        set_test_environment(env_set);
        set_auth_bypass(bypass_set);
    }
}

#[cfg(test)]
#[path = "test_bypass_test.rs"]
mod test_bypass_test;
