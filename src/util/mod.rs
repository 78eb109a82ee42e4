//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic; the animation steppers and threshold math are pure so
//! they stay natively testable.

pub mod counter;
pub mod scroll;
pub mod theme;
pub mod typing;
