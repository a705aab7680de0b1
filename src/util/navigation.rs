//! Client-side navigation with a hard-redirect safety net.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards and pages navigate through whichever SPA router the app root
//! registered at mount. Router pushes can silently fail while the app is
//! mid-hydration, so every `goto` schedules a zero-delay check: if the
//! pathname has not moved off the origin, the browser is sent to the
//! target with a full `Location` assignment instead.
//!
//! ERROR HANDLING
//! ==============
//! Navigation is best-effort. A missing window or location leaves the
//! current page in place rather than panicking.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
thread_local! {
    static NAVIGATOR: RefCell<Option<Box<dyn Fn(&str)>>> = const { RefCell::new(None) };
}

/// Register the SPA navigator for this window.
///
/// The app root calls this once with the router's navigate handle. Later
/// registrations replace earlier ones, which matters only in tests.
pub fn register_navigator<F>(navigate: F)
where
    F: Fn(&str) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        NAVIGATOR.with(|slot| {
            *slot.borrow_mut() = Some(Box::new(navigate));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = navigate;
    }
}

/// Current `window.location.pathname`, if a browser is attached.
pub fn current_pathname() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Navigate to `path`, falling back to a full page load if the SPA
/// router does not move the browser.
pub fn goto(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let origin = current_pathname();
        let routed = NAVIGATOR.with(|slot| {
            if let Some(navigate) = slot.borrow().as_ref() {
                navigate(path);
                true
            } else {
                false
            }
        });
        if !routed {
            hard_redirect(path);
            return;
        }

        // Zero-delay verification: if the router push did not change the
        // pathname, assign the location directly. Skipped when the origin
        // already was the target.
        let target = path.to_string();
        gloo_timers::callback::Timeout::new(0, move || {
            let now = current_pathname();
            if now == origin && now.as_deref() != Some(target.as_str()) {
                hard_redirect(&target);
            }
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Replace the document with `path` via `window.location`.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
