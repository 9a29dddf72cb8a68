use common::submission::SubmissionStatus;
use gloo_timers::callback::Timeout;

use super::variant::FormVariant;

/// State of one registration form instance.
pub struct RegistrationFormComponent<F: FormVariant> {
    /// Current field values. Reset only after a successful submission.
    pub form: F,

    pub status: SubmissionStatus,

    /// Pending auto-dismiss of a success message, if the variant uses one.
    pub dismiss: Option<Timeout>,
}

impl<F: FormVariant> RegistrationFormComponent<F> {
    pub fn new() -> Self {
        Self {
            form: F::default(),
            status: SubmissionStatus::Idle,
            dismiss: None,
        }
    }
}
