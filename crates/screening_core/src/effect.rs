use crate::{Notification, SubmissionRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a notification to the user.
    Notify(Notification),
    /// Send the multipart request to the scoring service.
    SendSubmission(SubmissionRequest),
}
