use screening_core::RankedResult;
use serde::Deserialize;

use crate::{FailureKind, TransportError};

#[derive(Debug, Deserialize)]
struct MatchResponse {
    ranked_resumes: Vec<WireEntry>,
}

/// `[filename, score, skills]`, or `[filename, score]` from services that do
/// not report skills.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireEntry {
    Full(String, f64, Option<Vec<String>>),
    Scored(String, f64),
}

impl From<WireEntry> for RankedResult {
    fn from(entry: WireEntry) -> Self {
        match entry {
            WireEntry::Full(filename, score, skills) => {
                RankedResult::new(filename, score, skills.unwrap_or_default())
            }
            WireEntry::Scored(filename, score) => RankedResult::new(filename, score, Vec::new()),
        }
    }
}

/// Decode a `/match_resumes` response body, keeping service order.
pub fn decode_ranked_resumes(body: &[u8]) -> Result<Vec<RankedResult>, TransportError> {
    let response: MatchResponse = serde_json::from_slice(body)
        .map_err(|err| TransportError::new(FailureKind::MalformedBody, err.to_string()))?;
    Ok(response
        .ranked_resumes
        .into_iter()
        .map(RankedResult::from)
        .collect())
}
