//! Failure deduplication.
//!
//! A failing status API usually fails the same way for many cycles in a row.
//! Only the first occurrence of each distinct failure text is reported to the
//! chat; repeats are logged locally and suppressed.

/// Remembers the last failure text that was reported.
#[derive(Debug, Default)]
pub struct FailureDedup {
    last_reported: Option<String>,
}

impl FailureDedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `message` should be reported, and if so remember it.
    ///
    /// Returns `true` if `message` differs from the last reported failure.
    /// Returns `false` if it is an exact repeat (report should be suppressed).
    pub fn check_and_set(&mut self, message: &str) -> bool {
        if self.last_reported.as_deref() == Some(message) {
            tracing::debug!(failure = message, "Failure already reported, suppressing");
            return false;
        }
        self.last_reported = Some(message.to_string());
        true
    }

    /// Forget the last reported failure, e.g. after a successful cycle.
    pub fn clear(&mut self) {
        if self.last_reported.take().is_some() {
            tracing::info!("Status API recovered, failure signature cleared");
        }
    }

    pub fn last_reported(&self) -> Option<&str> {
        self.last_reported.as_deref()
    }
}
