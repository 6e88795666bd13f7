use crate::{RankedResult, UploadCandidate};

/// Shown in place of an empty skills list.
pub const NO_SKILLS_LABEL: &str = "No specific skills matched";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub job_description: String,
    pub candidates: Vec<CandidateRowView>,
    pub results: Vec<ResultRowView>,
    pub busy: bool,
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRowView {
    pub index: usize,
    pub name: String,
    pub size_label: String,
}

impl CandidateRowView {
    pub(crate) fn from_candidate(index: usize, candidate: &UploadCandidate) -> Self {
        Self {
            index,
            name: candidate.name.clone(),
            size_label: format!("{:.2} MB", candidate.size_bytes as f64 / 1024.0 / 1024.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    /// 1-based position in service order.
    pub rank: usize,
    pub filename: String,
    pub score_label: String,
    pub is_good_match: bool,
    pub skills_label: String,
}

impl ResultRowView {
    pub(crate) fn from_result(rank: usize, result: &RankedResult) -> Self {
        let skills_label = if result.matched_skills.is_empty() {
            NO_SKILLS_LABEL.to_string()
        } else {
            result.matched_skills.join(", ")
        };
        Self {
            rank,
            filename: result.filename.clone(),
            score_label: format!("{:.2}", result.score),
            is_good_match: result.is_good_match(),
            skills_label,
        }
    }
}
