//! Typing-loop state machine for the hero subtitle.
//!
//! Pure stepper: each tick yields the next visible text plus the delay
//! before the following tick. The component driving it owns the actual
//! timer.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay before the loop starts after mount.
pub const START_DELAY_MS: u32 = 1000;
/// Per-character delay while typing forward.
pub const TYPE_DELAY_MS: u32 = 100;
/// Per-character delay while deleting.
pub const DELETE_DELAY_MS: u32 = 50;
/// Pause once a role is fully typed.
pub const WORD_PAUSE_MS: u32 = 2000;
/// Pause after a role is fully deleted, before the next one starts.
pub const ROLE_PAUSE_MS: u32 = 500;

/// One step of the loop: the text to display and how long to wait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Cycles through a role list: type forward, pause, delete, pause, next
/// role, wrapping around forever.
#[derive(Clone, Debug)]
pub struct TypingLoop {
    roles: Vec<String>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl TypingLoop {
    /// Returns `None` for an empty role list.
    #[must_use]
    pub fn new(roles: Vec<String>) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self { roles, role: 0, chars: 0, deleting: false })
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TypingFrame {
        let role = &self.roles[self.role];
        let role_len = role.chars().count();

        let mut delay_ms = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.chars = (self.chars + 1).min(role_len);
            TYPE_DELAY_MS
        };

        let text: String = role.chars().take(self.chars).collect();

        if !self.deleting && self.chars == role_len {
            delay_ms = WORD_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            delay_ms = ROLE_PAUSE_MS;
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
        }

        TypingFrame { text, delay_ms }
    }
}
