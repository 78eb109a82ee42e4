//! Networking modules for the outbound contact-form request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` performs the HTTP submit and classifies the response;
//! `types` defines the submission value object and outcome.

pub mod contact;
pub mod types;
