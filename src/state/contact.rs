//! Contact-form status-message lifecycle.
//!
//! DESIGN
//! ======
//! Every status transition bumps an epoch counter and hands the new value
//! back to the caller. The scheduled clear runs 5 s after the request
//! settles and carries the epoch it was scheduled under; if a newer
//! submission has replaced the status in the meantime, the stale clear is
//! a no-op instead of wiping the newer message early.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::SubmitOutcome;

pub const SENDING_TEXT: &str = "Sending...";
pub const SUCCESS_TEXT: &str = "\u{2705} Thanks! Your message has been sent.";
pub const GENERIC_ERROR_TEXT: &str = "\u{26a0}\u{fe0f} Oops! Something went wrong.";
pub const NETWORK_ERROR_TEXT: &str = "\u{274c} Network error. Please try again.";

/// Delay between a settled request and the status message being cleared.
pub const STATUS_CLEAR_DELAY_MS: u64 = 5000;

/// Transient status message shown below the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: Option<StatusKind>,
    pub visible: bool,
}

/// Outcome-dependent styling marker for the status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Sending,
    Success,
    Error,
}

impl StatusKind {
    /// CSS class fragment appended to the status element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Sending => "sending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Contact-form state: the current status message plus the timer epoch.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub status: StatusMessage,
    pub epoch: u64,
}

impl ContactState {
    /// Mark a submission as started. Returns the new epoch.
    pub fn begin_sending(&mut self) -> u64 {
        self.replace(SENDING_TEXT.to_owned(), StatusKind::Sending)
    }

    /// Apply a settled submission outcome. Returns the new epoch, which
    /// the caller passes back to [`ContactState::clear_if_current`] once
    /// the clear delay elapses.
    pub fn resolve(&mut self, outcome: &SubmitOutcome) -> u64 {
        let (text, kind) = match outcome {
            SubmitOutcome::Accepted => (SUCCESS_TEXT.to_owned(), StatusKind::Success),
            SubmitOutcome::Rejected(Some(messages)) => (messages.clone(), StatusKind::Error),
            SubmitOutcome::Rejected(None) => (GENERIC_ERROR_TEXT.to_owned(), StatusKind::Error),
            SubmitOutcome::Failed => (NETWORK_ERROR_TEXT.to_owned(), StatusKind::Error),
        };
        self.replace(text, kind)
    }

    /// Clear the status message, but only if `token` is still the current
    /// epoch. Stale timers from superseded submissions land here and do
    /// nothing.
    pub fn clear_if_current(&mut self, token: u64) {
        if token == self.epoch {
            self.status = StatusMessage::default();
        }
    }

    fn replace(&mut self, text: String, kind: StatusKind) -> u64 {
        self.status = StatusMessage { text, kind: Some(kind), visible: true };
        self.epoch += 1;
        self.epoch
    }
}
