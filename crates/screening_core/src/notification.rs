/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    ValidationError,
    Warning,
    Success,
    Failure,
}

/// A toast-style message for the user. Informational only; never blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn invalid_files() -> Self {
        Self::new(
            NotificationKind::Warning,
            "Invalid Files",
            "Only PDF files under 5MB are allowed.",
        )
    }

    pub fn missing_job_description() -> Self {
        Self::new(
            NotificationKind::ValidationError,
            "Missing Job Description",
            "Please provide a detailed job description.",
        )
    }

    pub fn no_resumes() -> Self {
        Self::new(
            NotificationKind::ValidationError,
            "No Resumes",
            "Please upload at least one resume.",
        )
    }

    pub fn analysis_complete(count: usize) -> Self {
        Self::new(
            NotificationKind::Success,
            "Analysis Complete",
            format!("Ranked {count} resumes successfully."),
        )
    }

    pub fn processing_failed() -> Self {
        Self::new(
            NotificationKind::Failure,
            "Processing Failed",
            "Unable to process resumes. Please try again.",
        )
    }
}
