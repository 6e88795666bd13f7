use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use screening_core::{UploadCandidate, PDF_MIME_TYPE};
use screening_logging::screening_debug;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// MIME type as a browser would report it, from the extension alone.
pub fn mime_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MIME_TYPE,
        _ => FALLBACK_MIME_TYPE,
    }
}

/// Reads each path into a candidate, in the given order.
///
/// Content is only read for files that pass the acceptance predicate; the
/// rest carry their declared size and are dropped by the controller.
pub fn load_resumes(paths: &[PathBuf]) -> Result<Vec<UploadCandidate>> {
    paths.iter().map(|path| load_resume(path)).collect()
}

fn load_resume(path: &Path) -> Result<UploadCandidate> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let size_bytes = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();

    let mut candidate = UploadCandidate {
        name,
        size_bytes,
        mime_type: mime_type_for(path).to_string(),
        content: Bytes::new(),
    };
    if candidate.is_acceptable() {
        let content = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        candidate.content = Bytes::from(content);
    }
    screening_debug!(
        "Loaded {} ({} bytes, {})",
        candidate.name,
        candidate.size_bytes,
        candidate.mime_type
    );
    Ok(candidate)
}
