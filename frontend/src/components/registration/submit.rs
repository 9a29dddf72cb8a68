use common::submission::SubmissionOutcome;
use gloo_console::error;
use gloo_net::http::Request;
use serde::Serialize;
use web_sys::{RequestCredentials, RequestMode};

/// Posts `form` as JSON to `url` and classifies what came back.
///
/// The request is a plain CORS request: no credentials, no auth or CSRF
/// headers. Failures are logged to the console; the visitor only ever sees
/// the resolved status message.
pub async fn post_registration<F: Serialize>(url: &str, form: &F) -> SubmissionOutcome {
    let request = match Request::post(url)
        .mode(RequestMode::Cors)
        .credentials(RequestCredentials::Omit)
        .json(form)
    {
        Ok(request) => request,
        Err(err) => {
            error!(format!("Could not encode registration for {}: {}", url, err));
            return SubmissionOutcome::Unreachable;
        }
    };

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let outcome = SubmissionOutcome::from_response(status, &body);
            if outcome == SubmissionOutcome::Unreachable {
                error!(format!("Unreadable error body from {} (HTTP {})", url, status));
            }
            outcome
        }
        Err(err) => {
            error!(format!("Error submitting registration to {}: {}", url, err));
            SubmissionOutcome::Unreachable
        }
    }
}
