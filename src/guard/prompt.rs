//! Prompt re-entrancy state shared by both guards.
//!
//! DESIGN
//! ======
//! Two flags, two jobs: `open` says a login prompt is currently
//! rendered, `shown` is the latch that makes repeated show requests
//! idempotent. Keeping them distinct lets a path change re-arm the latch
//! while an already-open prompt stays up.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

/// Login-prompt state for one guard instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardPromptState {
    /// Re-entrancy latch; set once per arming window.
    pub shown: bool,
    /// Whether the prompt is currently rendered.
    pub open: bool,
}

impl GuardPromptState {
    /// Request the prompt. Returns `false` when the latch suppressed it.
    pub fn request_show(&mut self) -> bool {
        if self.shown {
            return false;
        }
        self.shown = true;
        self.open = true;
        true
    }

    /// Clear the latch so the next denial can prompt again. An open
    /// prompt stays open.
    pub fn rearm(&mut self) {
        self.shown = false;
    }

    /// Close the prompt and clear the latch.
    pub fn dismiss(&mut self) {
        self.shown = false;
        self.open = false;
    }
}
