/// Scores strictly above this are displayed as a good match.
pub const GOOD_MATCH_THRESHOLD: f64 = 0.7;

/// One scored entry as returned by the scoring service, in service order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub filename: String,
    pub score: f64,
    pub matched_skills: Vec<String>,
}

impl RankedResult {
    pub fn new(filename: impl Into<String>, score: f64, matched_skills: Vec<String>) -> Self {
        Self {
            filename: filename.into(),
            score,
            matched_skills,
        }
    }

    pub fn is_good_match(&self) -> bool {
        self.score > GOOD_MATCH_THRESHOLD
    }
}
