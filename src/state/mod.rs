//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `contact`, `projects`, `config`) so
//! individual components can depend on small focused models provided via
//! Leptos context.

pub mod config;
pub mod contact;
pub mod projects;
pub mod ui;
