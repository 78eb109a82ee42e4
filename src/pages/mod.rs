//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The portfolio is a single page; `home` owns section composition and
//! the global scroll wiring, and delegates rendering details to
//! `components`.

pub mod home;
