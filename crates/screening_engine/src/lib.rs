//! Screening engine: scoring-service transport and effect execution.
mod controller;
mod export;
mod notifier;
mod transport;
mod types;
mod wire;

pub use controller::{SubmissionController, SubmitOutcome};
pub use export::{export_results, ExportError};
pub use notifier::Notifier;
pub use transport::{ReqwestTransport, Transport, TransportSettings, MATCH_PATH};
pub use types::{FailureKind, TransportError};
pub use wire::decode_ranked_resumes;
