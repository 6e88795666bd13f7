use crate::view_model::{CandidateRowView, FormViewModel, ResultRowView};
use crate::{Notification, RankedResult, UploadCandidate};

/// Snapshot of the form taken when a submission passes validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub job_description: String,
    pub candidates: Vec<UploadCandidate>,
}

/// Why a submit click did not produce a request. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingJobDescription,
    NoResumes,
}

impl ValidationIssue {
    pub fn notification(self) -> Notification {
        match self {
            ValidationIssue::MissingJobDescription => Notification::missing_job_description(),
            ValidationIssue::NoResumes => Notification::no_resumes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    job_description: String,
    candidates: Vec<UploadCandidate>,
    results: Vec<RankedResult>,
    busy: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn candidates(&self) -> &[UploadCandidate] {
        &self.candidates
    }

    pub fn results(&self) -> &[RankedResult] {
        &self.results
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            job_description: self.job_description.clone(),
            candidates: self
                .candidates
                .iter()
                .enumerate()
                .map(|(index, candidate)| CandidateRowView::from_candidate(index, candidate))
                .collect(),
            results: self
                .results
                .iter()
                .enumerate()
                .map(|(index, result)| ResultRowView::from_result(index + 1, result))
                .collect(),
            busy: self.busy,
            can_submit: !self.busy,
        }
    }

    /// First failing precondition wins; the description is sent untrimmed.
    pub fn validate_submission(&self) -> Result<SubmissionRequest, ValidationIssue> {
        if self.job_description.trim().is_empty() {
            return Err(ValidationIssue::MissingJobDescription);
        }
        if self.candidates.is_empty() {
            return Err(ValidationIssue::NoResumes);
        }
        Ok(SubmissionRequest {
            job_description: self.job_description.clone(),
            candidates: self.candidates.clone(),
        })
    }

    pub(crate) fn set_job_description(&mut self, text: String) {
        self.job_description = text;
    }

    pub(crate) fn replace_candidates(&mut self, candidates: Vec<UploadCandidate>) {
        self.candidates = candidates;
    }

    /// Removes one candidate; `false` when `index` is out of range.
    pub(crate) fn remove_candidate(&mut self, index: usize) -> bool {
        if index >= self.candidates.len() {
            return false;
        }
        self.candidates.remove(index);
        true
    }

    pub(crate) fn begin_submission(&mut self) {
        self.busy = true;
    }

    pub(crate) fn finish_submission(&mut self, results: Option<Vec<RankedResult>>) {
        if let Some(results) = results {
            self.results = results;
        }
        self.busy = false;
    }
}
