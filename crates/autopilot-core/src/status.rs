//! Submission status shown under the form

/// Lifecycle of a single submission attempt.
///
/// Being in flight and carrying a message are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    /// The in-flight flag
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// Text for the status line, empty when there is nothing to say
    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Submitting => "",
            SubmissionStatus::Succeeded(msg) | SubmissionStatus::Failed(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SubmissionStatus::Failed(_))
    }
}
