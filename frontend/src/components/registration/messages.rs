use common::submission::SubmissionOutcome;

#[derive(Clone, Debug)]
pub enum Msg {
    UpdateField { name: &'static str, value: String },
    Submit,
    Resolved(SubmissionOutcome),
    DismissMessage,
}
