use std::fmt;

use bytes::Bytes;

/// The only MIME type accepted for upload.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Upper bound on a single upload, inclusive (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// A resume selected by the user and held in memory until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    /// Declared size of the file at selection time.
    pub size_bytes: u64,
    pub mime_type: String,
    pub content: Bytes,
}

impl UploadCandidate {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size_bytes: content.len() as u64,
            mime_type: mime_type.into(),
            content,
        }
    }

    /// Shorthand for a candidate typed as PDF.
    pub fn pdf(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self::new(name, PDF_MIME_TYPE, content)
    }

    /// Acceptance predicate: PDF type and at most [`MAX_UPLOAD_BYTES`].
    pub fn acceptance(&self) -> Result<(), RejectReason> {
        if self.mime_type != PDF_MIME_TYPE {
            return Err(RejectReason::NotPdf {
                mime_type: self.mime_type.clone(),
            });
        }
        if self.size_bytes > MAX_UPLOAD_BYTES {
            return Err(RejectReason::TooLarge {
                size_bytes: self.size_bytes,
            });
        }
        Ok(())
    }

    pub fn is_acceptable(&self) -> bool {
        self.acceptance().is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    NotPdf { mime_type: String },
    TooLarge { size_bytes: u64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotPdf { mime_type } => {
                write!(f, "unsupported type {mime_type}, expected {PDF_MIME_TYPE}")
            }
            RejectReason::TooLarge { size_bytes } => {
                write!(f, "{size_bytes} bytes exceeds limit of {MAX_UPLOAD_BYTES}")
            }
        }
    }
}
