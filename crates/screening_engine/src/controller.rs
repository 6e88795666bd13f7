use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard};

use futures_util::FutureExt;
use screening_core::{
    update, Effect, FormState, FormViewModel, Msg, RankedResult, SubmissionRequest,
    UploadCandidate, ValidationIssue,
};
use screening_logging::{screening_debug, screening_info, screening_warn};

use crate::{FailureKind, Notifier, Transport, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing happened.
    Busy,
    /// A precondition failed; no request was sent.
    Invalid(ValidationIssue),
    /// The service ranked this many resumes.
    Ranked(usize),
    Failed(TransportError),
}

/// Owns the form state and executes the effects produced by [`update`].
///
/// All methods take `&self`; the state lock is never held across an await,
/// so a second `submit` while one is in flight observes `busy` and returns
/// [`SubmitOutcome::Busy`].
pub struct SubmissionController {
    state: Mutex<FormState>,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn Transport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Mutex::new(FormState::new()),
            transport,
            notifier,
        }
    }

    pub fn set_job_description(&self, text: impl Into<String>) {
        self.dispatch(Msg::JobDescriptionChanged(text.into()));
    }

    /// Replaces the selection with the acceptable subset of `files`.
    pub fn select_files(&self, files: Vec<UploadCandidate>) {
        for file in &files {
            if let Err(reason) = file.acceptance() {
                screening_warn!("Dropping {}: {}", file.name, reason);
            }
        }
        self.dispatch(Msg::FilesSelected(files));
    }

    /// Out-of-range indices are ignored.
    pub fn remove_candidate(&self, index: usize) {
        self.dispatch(Msg::CandidateRemoved(index));
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let (issue, effects) = {
            let mut state = self.lock_state();
            if state.is_busy() {
                screening_debug!("Submit ignored: a submission is already in flight");
                return SubmitOutcome::Busy;
            }
            let issue = state.validate_submission().err();
            (issue, Self::step(&mut state, Msg::SubmitClicked))
        };

        let request = match (self.run_effects(effects), issue) {
            (Some(request), _) => request,
            (None, Some(issue)) => return SubmitOutcome::Invalid(issue),
            (None, None) => return SubmitOutcome::Busy,
        };

        let in_flight = InFlight::new(self);
        screening_info!(
            "Submitting {} resume(s) for ranking",
            request.candidates.len()
        );

        let result = AssertUnwindSafe(self.transport.submit(&request))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
                Err(TransportError::new(
                    FailureKind::Aborted,
                    "transport panicked",
                ))
            });

        match result {
            Ok(results) => {
                let count = results.len();
                in_flight.complete(Msg::SubmissionSucceeded(results));
                SubmitOutcome::Ranked(count)
            }
            Err(err) => {
                screening_warn!("Submission failed: {}", err);
                in_flight.complete(Msg::SubmissionFailed);
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.lock_state().is_busy()
    }

    pub fn job_description(&self) -> String {
        self.lock_state().job_description().to_string()
    }

    pub fn candidates(&self) -> Vec<UploadCandidate> {
        self.lock_state().candidates().to_vec()
    }

    pub fn results(&self) -> Vec<RankedResult> {
        self.lock_state().results().to_vec()
    }

    pub fn view(&self) -> FormViewModel {
        self.lock_state().view()
    }

    fn dispatch(&self, msg: Msg) {
        let effects = Self::step(&mut self.lock_state(), msg);
        // Only submit() sends requests; a stray SendSubmission here is dropped.
        if self.run_effects(effects).is_some() {
            screening_warn!("Unexpected submission effect outside submit");
        }
    }

    fn step(state: &mut FormState, msg: Msg) -> Vec<Effect> {
        let (next, effects) = update(std::mem::take(state), msg);
        *state = next;
        effects
    }

    /// Delivers notifications and hands back the request to send, if any.
    fn run_effects(&self, effects: Vec<Effect>) -> Option<SubmissionRequest> {
        let mut request = None;
        for effect in effects {
            match effect {
                Effect::Notify(notification) => self.notifier.notify(&notification),
                Effect::SendSubmission(next) => request = Some(next),
            }
        }
        request
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Releases `busy` when the submission future is dropped before completing.
struct InFlight<'a> {
    controller: &'a SubmissionController,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(controller: &'a SubmissionController) -> Self {
        Self {
            controller,
            armed: true,
        }
    }

    fn complete(mut self, msg: Msg) {
        self.armed = false;
        self.controller.dispatch(msg);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            screening_warn!("Submission abandoned before completion");
            self.controller.dispatch(Msg::SubmissionFailed);
        }
    }
}
