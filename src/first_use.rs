//! One-shot "first use" flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shown the first time a message is copied for Word.
pub const WORD_PASTE_HINT: &str = "Copied as MathML. In Word, paste with \"Keep Text Only\" \
so the equations are converted into native Word equations.";

/// A flag that reports `true` from [`FirstUseFlag::check_and_set`] exactly once.
#[derive(Debug, Default)]
pub struct FirstUseFlag {
    used: AtomicBool,
}

impl FirstUseFlag {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            used: AtomicBool::new(false),
        }
    }

    /// Mark the flag used; `true` only for the call that set it.
    pub fn check_and_set(&self) -> bool {
        !self.used.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.used.load(Ordering::Acquire)
    }
}
