use reqwest::StatusCode;
use tracing::debug;

use crate::config::SmokeConfig;
use crate::types::{FeedbackSubmission, Form, ProbeError};

/// Runs the feedback round-trip against the public API.
///
/// Fetches the available forms, answers the first question of the first form
/// and checks that the server acknowledges the submission with `201 Created`.
/// One attempt per call, no retries, transport default timeouts.
pub async fn run(config: &SmokeConfig) -> Result<(), ProbeError> {
    println!("Testing notification system...");

    let client = reqwest::Client::new();

    let forms_url = format!("{}/public/forms/", config.api_base);
    debug!("GET {forms_url}");

    let response = client
        .get(&forms_url)
        .send()
        .await
        .map_err(connect_or_http)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::FormsStatus(status));
    }

    let forms: Vec<Form> = response.json().await?;
    let Some(form) = forms.first() else {
        return Err(ProbeError::NoForms);
    };
    println!("Found form: {}", form.title);

    let submission = FeedbackSubmission::for_form(form)?;

    let feedback_url = format!("{}/public/feedback/{}/", config.api_base, form.id_segment());
    debug!("POST {feedback_url}");

    let response = client
        .post(&feedback_url)
        .json(&submission)
        .send()
        .await
        .map_err(connect_or_http)?;

    let status = response.status();
    if status != StatusCode::CREATED {
        // surface whatever the server said, it is usually a validation error
        let body = response.text().await.unwrap_or_default();
        return Err(ProbeError::SubmitStatus { status, body });
    }

    println!("✅ Feedback response submitted successfully!");
    println!("Notification should be sent to the form creator.");

    Ok(())
}

// reqwest reports refused connections and protocol-level trouble through the
// same error type, the smoke report wants them apart.
fn connect_or_http(err: reqwest::Error) -> ProbeError {
    if err.is_connect() {
        ProbeError::Connect(err)
    } else {
        ProbeError::Http(err)
    }
}
