use serde::{Deserialize, Serialize};
use serde_json::Value;

/// the canned answer every smoke run submits.
pub const TEST_ANSWER_TEXT: &str = "This is a test response";

/// A survey definition as served by the backend.
///
/// Only the fields the smoke test touches are modeled, anything else in the
/// payload is ignored. The ids are opaque to us (the API may hand out numbers
/// or strings), so they stay raw JSON values and are only ever echoed back.
#[derive(Debug, Deserialize, Clone)]
pub struct Form {
    pub id: Value,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Question {
    pub id: Value,
}

impl Form {
    /// the form id as it appears in a URL path. string ids lose their JSON
    /// quotes, everything else keeps its JSON rendering.
    pub fn id_segment(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// One respondent's answer set, posted against a form.
#[derive(Debug, Serialize, Clone)]
pub struct FeedbackSubmission {
    pub answers: Vec<FeedbackAnswer>,
}

#[derive(Debug, Serialize, Clone)]
pub struct FeedbackAnswer {
    pub question: Value,
    pub answer_text: String,
    pub answer_value: Value,
}

impl FeedbackSubmission {
    /// builds the synthetic submission for a form: one free-text answer
    /// against the form's first question, empty structured payload.
    pub fn for_form(form: &Form) -> Result<Self, ProbeError> {
        let question = form
            .questions
            .first()
            .ok_or_else(|| ProbeError::NoQuestions(form.title.clone()))?;

        Ok(Self {
            answers: vec![FeedbackAnswer {
                question: question.id.clone(),
                answer_text: TEST_ANSWER_TEXT.to_string(),
                answer_value: serde_json::json!({}),
            }],
        })
    }
}

/// everything that can go wrong in a probe. none of these abort the process,
/// they end up printed and the run moves on.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    // the server was never reached, kept apart from protocol trouble
    #[error("could not connect to the server, make sure the backend is running")]
    Connect(#[source] reqwest::Error),

    #[error("failed to get forms: {0}")]
    FormsStatus(reqwest::StatusCode),

    #[error("no forms available for testing")]
    NoForms,

    #[error("form \"{0}\" has no questions to answer")]
    NoQuestions(String),

    #[error("failed to submit feedback: {status}: {body}")]
    SubmitStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "websocket")]
    #[error("WebSocket test failed: {0}")]
    Socket(#[from] tungstenite::Error),

    #[error("websocket client support not compiled in, rebuild with the `websocket` feature")]
    CapabilityUnavailable,
}

#[cfg(test)]
mod testing {
    use serde_json::json;

    use super::*;

    #[test]
    fn submission_answers_the_first_question() {
        let form: Form = serde_json::from_value(json!({
            "id": 7,
            "title": "Weekly pulse",
            "questions": [{ "id": "Q1", "text": "How did it go?" }, { "id": "Q2" }]
        }))
        .unwrap();

        let submission = FeedbackSubmission::for_form(&form).unwrap();

        assert_eq!(submission.answers.len(), 1);
        assert_eq!(submission.answers[0].question, json!("Q1"));
        assert_eq!(submission.answers[0].answer_text, TEST_ANSWER_TEXT);
        assert_eq!(submission.answers[0].answer_value, json!({}));
    }

    #[test]
    fn form_without_questions_is_rejected() {
        let form: Form = serde_json::from_value(json!({
            "id": 7,
            "title": "Empty form",
            "questions": []
        }))
        .unwrap();

        let err = FeedbackSubmission::for_form(&form).unwrap_err();
        assert!(matches!(err, ProbeError::NoQuestions(_)));
    }

    #[test]
    fn missing_questions_field_reads_as_empty() {
        let form: Form = serde_json::from_value(json!({
            "id": 1,
            "title": "Bare form"
        }))
        .unwrap();

        assert!(form.questions.is_empty());
        assert!(FeedbackSubmission::for_form(&form).is_err());
    }

    #[test]
    fn id_segment_strips_json_quotes_from_strings() {
        let numeric: Form =
            serde_json::from_value(json!({ "id": 42, "title": "n", "questions": [] })).unwrap();
        let stringy: Form =
            serde_json::from_value(json!({ "id": "a1b2", "title": "s", "questions": [] })).unwrap();

        assert_eq!(numeric.id_segment(), "42");
        assert_eq!(stringy.id_segment(), "a1b2");
    }

    #[test]
    fn submission_serializes_to_the_wire_shape() {
        let form: Form = serde_json::from_value(json!({
            "id": 3,
            "title": "t",
            "questions": [{ "id": 9 }]
        }))
        .unwrap();

        let body = serde_json::to_value(FeedbackSubmission::for_form(&form).unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "answers": [{
                    "question": 9,
                    "answer_text": TEST_ANSWER_TEXT,
                    "answer_value": {}
                }]
            })
        );
    }

    #[test]
    fn diagnostics_are_distinguishable() {
        assert!(ProbeError::NoForms.to_string().contains("no forms available"));
        assert!(
            ProbeError::CapabilityUnavailable
                .to_string()
                .contains("websocket")
        );
        assert!(
            ProbeError::FormsStatus(reqwest::StatusCode::SERVICE_UNAVAILABLE)
                .to_string()
                .contains("503")
        );
    }
}
