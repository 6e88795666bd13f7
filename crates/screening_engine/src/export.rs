use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use screening_core::RankedResult;
use screening_logging::screening_info;
use serde_json::json;
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the ranking as pretty JSON to `{dir}/{filename}`, replacing any
/// previous file atomically. `generated_utc` is supplied by the caller.
pub fn export_results(
    dir: &Path,
    filename: &str,
    results: &[RankedResult],
    generated_utc: &str,
) -> Result<PathBuf, ExportError> {
    let document = json!({
        "generated_utc": generated_utc,
        "count": results.len(),
        "ranked_resumes": results.iter().enumerate().map(|(index, result)| {
            json!({
                "rank": index + 1,
                "filename": result.filename,
                "score": result.score,
                "matched_skills": result.matched_skills,
            })
        }).collect::<Vec<_>>(),
    });
    let content = serde_json::to_string_pretty(&document)?;

    let target = write_atomically(dir, filename, &content)?;
    screening_info!("Exported {} ranked resume(s) to {:?}", results.len(), target);
    Ok(target)
}

fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

fn write_atomically(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    ensure_output_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
    Ok(target)
}
