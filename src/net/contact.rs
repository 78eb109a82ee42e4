//! Contact-form submission over HTTP.
//!
//! Client-side (hydrate): one multipart request via `gloo-net`.
//! Server-side (SSR): a stub returning the transport-failure outcome
//! since the form only submits in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both failure modes are terminal for the attempt and surface as a
//! [`SubmitOutcome`] variant; a malformed error body degrades to the
//! generic rejection rather than propagating a parse failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use super::types::{ContactSubmission, SubmitOutcome};

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

/// Map a settled HTTP response to its outcome. 2xx ignores the body;
/// anything else tries to extract server error messages from it.
#[cfg(any(test, feature = "hydrate"))]
fn classify_response(ok: bool, body: &str) -> SubmitOutcome {
    if ok {
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected(joined_error_messages(body))
    }
}

/// The server's error messages joined with `", "`, or `None` when the
/// body does not carry a non-empty `errors` list.
#[cfg(any(test, feature = "hydrate"))]
fn joined_error_messages(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if parsed.errors.is_empty() {
        return None;
    }
    Some(
        parsed
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Uppercased HTTP method from the form attribute, defaulting to POST.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_method(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "POST".to_owned()
    } else {
        trimmed.to_ascii_uppercase()
    }
}

/// Submit the form values to the configured endpoint as
/// multipart/form-data with an `Accept: application/json` header.
///
/// No retry: server rejection and transport failure are both terminal
/// for this attempt.
pub async fn submit(submission: &ContactSubmission) -> SubmitOutcome {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method, RequestBuilder};

        let Ok(form) = web_sys::FormData::new() else {
            return SubmitOutcome::Failed;
        };
        for (name, value) in &submission.fields {
            let _ = form.append_with_str(name, value);
        }

        let method = match normalize_method(&submission.method).as_str() {
            "GET" => Method::GET,
            "PUT" => Method::PUT,
            "PATCH" => Method::PATCH,
            "DELETE" => Method::DELETE,
            _ => Method::POST,
        };

        let request = match RequestBuilder::new(&submission.action)
            .method(method)
            .header("Accept", "application/json")
            .body(form)
        {
            Ok(request) => request,
            Err(_) => return SubmitOutcome::Failed,
        };

        match request.send().await {
            Ok(response) => {
                let ok = response.ok();
                let body = if ok {
                    String::new()
                } else {
                    response.text().await.unwrap_or_default()
                };
                classify_response(ok, &body)
            }
            Err(e) => {
                leptos::logging::warn!("contact submit failed: {e}");
                SubmitOutcome::Failed
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        SubmitOutcome::Failed
    }
}
