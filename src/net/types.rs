//! Value objects for the contact-form submission flow.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// One submit attempt: endpoint, method, and field values captured at
/// submit time. Built when the submit event fires, dropped once the
/// request resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub action: String,
    pub method: String,
    /// Field name/value pairs in form order; names are unique.
    pub fields: Vec<(String, String)>,
}

/// Terminal outcome of one submission attempt. Server rejection and
/// transport failure differ only in the message shown, not in recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response; the body is ignored.
    Accepted,
    /// Non-2xx response, carrying the joined server error messages when
    /// the body had the expected shape.
    Rejected(Option<String>),
    /// The request never completed.
    Failed,
}

/// Error body the form processor returns on rejection.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}
