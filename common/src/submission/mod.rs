//! Registration submission status machine.
//!
//! A form moves `Idle -> Submitting -> Resolved`, and back to `Submitting`
//! on every later attempt. The network call itself lives in the frontend;
//! it hands the raw HTTP status and body to [`SubmissionOutcome::from_response`]
//! (or reports [`SubmissionOutcome::Unreachable`]) and the status machine
//! turns that into the message shown to the user.

mod errors;

use serde_json::Value;
use thiserror::Error;

use crate::model::registration::{RegistrationForm, SUCCESS_MESSAGE};

pub use errors::flatten_error_body;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("no submission is in flight")]
    NotSubmitting,
    #[error("there is no success message to dismiss")]
    NothingToDismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

/// What came back from one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint answered 2xx.
    Accepted,
    /// The endpoint answered non-2xx with a field-keyed error body, already
    /// flattened into one line.
    Rejected(String),
    /// No usable response: transport failure or an unreadable error body.
    Unreachable,
}

impl SubmissionOutcome {
    /// Classifies an HTTP response by status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            return SubmissionOutcome::Accepted;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => SubmissionOutcome::Rejected(flatten_error_body(&value)),
            Err(_) => SubmissionOutcome::Unreachable,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Resolved(StatusMessage),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        match self {
            SubmissionStatus::Resolved(message) => Some(message),
            _ => None,
        }
    }

    /// Enters `Submitting`, discarding any previous message.
    pub fn begin(&mut self) -> Result<(), SubmissionError> {
        if self.is_submitting() {
            return Err(SubmissionError::AlreadySubmitting);
        }
        *self = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Settles the in-flight submission.
    ///
    /// `connectivity_message` is the form-specific text used when the
    /// endpoint could not be reached. Returns the resolved message.
    pub fn resolve(
        &mut self,
        outcome: SubmissionOutcome,
        connectivity_message: &str,
    ) -> Result<StatusMessage, SubmissionError> {
        if !self.is_submitting() {
            return Err(SubmissionError::NotSubmitting);
        }
        let message = match outcome {
            SubmissionOutcome::Accepted => StatusMessage::success(SUCCESS_MESSAGE),
            SubmissionOutcome::Rejected(errors) => StatusMessage::error(format!("Error: {errors}")),
            SubmissionOutcome::Unreachable => StatusMessage::error(connectivity_message),
        };
        *self = SubmissionStatus::Resolved(message.clone());
        Ok(message)
    }

    /// Clears a success message. Error messages stay until the next attempt.
    pub fn dismiss(&mut self) -> Result<(), SubmissionError> {
        match self {
            SubmissionStatus::Resolved(message) if message.is_success() => {
                *self = SubmissionStatus::Idle;
                Ok(())
            }
            _ => Err(SubmissionError::NothingToDismiss),
        }
    }
}

/// Resolves the in-flight submission of `form`.
///
/// On success the form is cleared for the next registration. On any error
/// the entered values stay so the user can correct and resend them.
pub fn settle<F: RegistrationForm>(
    status: &mut SubmissionStatus,
    form: &mut F,
    outcome: SubmissionOutcome,
) -> Result<StatusMessage, SubmissionError> {
    let message = status.resolve(outcome, F::CONNECTIVITY_MESSAGE)?;
    if message.is_success() {
        form.reset();
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::registration::{ExhibitorRegistration, VisitorRegistration};

    const OFFLINE: &str = ExhibitorRegistration::CONNECTIVITY_MESSAGE;

    fn submitting() -> SubmissionStatus {
        let mut status = SubmissionStatus::default();
        status.begin().unwrap();
        status
    }

    #[test]
    fn begin_from_idle_and_resolved() {
        let mut status = SubmissionStatus::Idle;
        assert!(status.begin().is_ok());
        assert!(status.is_submitting());

        let mut status = SubmissionStatus::Resolved(StatusMessage::error("Error: x"));
        assert!(status.begin().is_ok());
        assert_eq!(status.message(), None);
    }

    #[test]
    fn begin_while_submitting_is_rejected() {
        let mut status = submitting();
        assert_eq!(status.begin(), Err(SubmissionError::AlreadySubmitting));
        assert!(status.is_submitting());
    }

    #[test]
    fn cannot_resolve_without_submitting() {
        let mut status = SubmissionStatus::Idle;
        let err = status
            .resolve(SubmissionOutcome::Accepted, OFFLINE)
            .unwrap_err();
        assert_eq!(err, SubmissionError::NotSubmitting);
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[test]
    fn accepted_resolves_to_success() {
        let mut status = submitting();
        let message = status
            .resolve(SubmissionOutcome::Accepted, OFFLINE)
            .unwrap();
        assert_eq!(message, StatusMessage::success(SUCCESS_MESSAGE));
        assert!(!status.is_submitting());
    }

    #[test]
    fn field_error_body_is_prefixed() {
        let outcome =
            SubmissionOutcome::from_response(400, r#"{"email_address": ["Enter a valid email."]}"#);
        let mut status = submitting();
        let message = status.resolve(outcome, OFFLINE).unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Error: Enter a valid email.");
    }

    #[test]
    fn unreachable_uses_connectivity_message() {
        let mut status = submitting();
        let message = status
            .resolve(SubmissionOutcome::Unreachable, OFFLINE)
            .unwrap();
        assert_eq!(message.text, OFFLINE);
        assert!(!status.is_submitting());
    }

    #[test]
    fn any_2xx_is_accepted() {
        assert_eq!(SubmissionOutcome::from_response(200, ""), SubmissionOutcome::Accepted);
        assert_eq!(
            SubmissionOutcome::from_response(201, "not json"),
            SubmissionOutcome::Accepted
        );
        assert_eq!(SubmissionOutcome::from_response(299, "{}"), SubmissionOutcome::Accepted);
    }

    #[test]
    fn non_json_error_body_counts_as_unreachable() {
        assert_eq!(
            SubmissionOutcome::from_response(502, "<html>Bad Gateway</html>"),
            SubmissionOutcome::Unreachable
        );
    }

    #[test]
    fn redirect_status_is_not_success() {
        assert_eq!(
            SubmissionOutcome::from_response(302, r#"{"detail": "moved"}"#),
            SubmissionOutcome::Rejected("moved".into())
        );
    }

    #[test]
    fn success_can_be_dismissed_but_error_cannot() {
        let mut status = submitting();
        status.resolve(SubmissionOutcome::Accepted, OFFLINE).unwrap();
        assert!(status.dismiss().is_ok());
        assert_eq!(status, SubmissionStatus::Idle);

        let mut status = submitting();
        status
            .resolve(SubmissionOutcome::Rejected("bad".into()), OFFLINE)
            .unwrap();
        assert_eq!(status.dismiss(), Err(SubmissionError::NothingToDismiss));
        assert!(status.message().is_some());
    }

    #[test]
    fn resubmission_after_error() {
        let mut status = submitting();
        status
            .resolve(SubmissionOutcome::Unreachable, OFFLINE)
            .unwrap();
        status.begin().unwrap();
        let message = status
            .resolve(SubmissionOutcome::Accepted, OFFLINE)
            .unwrap();
        assert!(message.is_success());
    }
    fn filled_exhibitor() -> ExhibitorRegistration {
        let mut form = ExhibitorRegistration::default();
        for (name, value) in [
            ("company_name", "Acme Exports"),
            ("contact_person_name", "Asha Rao"),
            ("designation", "Director"),
            ("email_address", "asha@acme"),
            ("contact_number", "+91 98200 00000"),
            ("product_service", "Spices"),
            ("company_address", "Mumbai"),
        ] {
            form.set_field(name, value).unwrap();
        }
        form
    }

    #[test]
    fn settle_accepted_clears_the_form() {
        let mut status = submitting();
        let mut form = filled_exhibitor();

        let outcome = SubmissionOutcome::from_response(201, "{}");

        let message = settle(&mut status, &mut form, outcome).unwrap();

        assert_eq!(message, StatusMessage::success(SUCCESS_MESSAGE));
        assert!(!status.is_submitting());
        assert!(form.is_empty());
        for field in ExhibitorRegistration::FIELDS {
            assert_eq!(form.field(field.name), Some(""));
        }
    }

    #[test]
    fn settle_rejected_keeps_entered_values() {
        let mut status = submitting();
        let mut form = filled_exhibitor();
        let outcome =
            SubmissionOutcome::from_response(400, r#"{"email_address": ["Enter a valid email."]}"#);

        let message = settle(&mut status, &mut form, outcome).unwrap();

        assert_eq!(message, StatusMessage::error("Error: Enter a valid email."));
        assert!(!status.is_submitting());
        assert_eq!(form, filled_exhibitor());
    }

    #[test]
    fn settle_unreachable_keeps_entered_values() {
        let mut status = submitting();
        let mut form = VisitorRegistration::default();
        form.set_field("first_name", "Ravi").unwrap();
        form.set_field("email_address", "ravi@example.com").unwrap();
        let before = form.clone();

        let message = settle(&mut status, &mut form, SubmissionOutcome::Unreachable).unwrap();

        assert_eq!(message, StatusMessage::error(VisitorRegistration::CONNECTIVITY_MESSAGE));
        assert!(!status.is_submitting());
        assert_eq!(form, before);
    }

    #[test]
    fn settle_without_submission_leaves_form_alone() {
        let mut status = SubmissionStatus::Idle;
        let mut form = filled_exhibitor();

        let err = settle(&mut status, &mut form, SubmissionOutcome::Accepted).unwrap_err();

        assert_eq!(err, SubmissionError::NotSubmitting);
        assert_eq!(form, filled_exhibitor());
    }
}
