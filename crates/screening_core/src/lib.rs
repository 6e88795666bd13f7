//! Screening core: pure form state machine and view-model helpers.
mod candidate;
mod effect;
mod msg;
mod notification;
mod ranking;
mod state;
mod update;
mod view_model;

pub use candidate::{RejectReason, UploadCandidate, MAX_UPLOAD_BYTES, PDF_MIME_TYPE};
pub use effect::Effect;
pub use msg::Msg;
pub use notification::{Notification, NotificationKind};
pub use ranking::{RankedResult, GOOD_MATCH_THRESHOLD};
pub use state::{FormState, SubmissionRequest, ValidationIssue};
pub use update::update;
pub use view_model::{CandidateRowView, FormViewModel, ResultRowView, NO_SKILLS_LABEL};
