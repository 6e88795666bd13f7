#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the job description text.
    JobDescriptionChanged(String),
    /// User picked a new set of files; replaces the previous selection.
    FilesSelected(Vec<crate::UploadCandidate>),
    /// User removed the candidate at this position.
    CandidateRemoved(usize),
    /// User clicked Analyze.
    SubmitClicked,
    /// Transport returned a ranked list for the in-flight submission.
    SubmissionSucceeded(Vec<crate::RankedResult>),
    /// Transport failed for the in-flight submission, or it was abandoned.
    SubmissionFailed,
}
