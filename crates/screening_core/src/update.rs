use crate::{Effect, FormState, Msg, Notification};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::JobDescriptionChanged(text) => {
            state.set_job_description(text);
            Vec::new()
        }
        Msg::FilesSelected(files) => {
            let offered = files.len();
            let accepted: Vec<_> = files
                .into_iter()
                .filter(|candidate| candidate.is_acceptable())
                .collect();
            let dropped = offered - accepted.len();
            state.replace_candidates(accepted);
            if dropped > 0 {
                vec![Effect::Notify(Notification::invalid_files())]
            } else {
                Vec::new()
            }
        }
        Msg::CandidateRemoved(index) => {
            state.remove_candidate(index);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Not reentrant: a click while a request is in flight does nothing.
            if state.is_busy() {
                return (state, Vec::new());
            }
            match state.validate_submission() {
                Ok(request) => {
                    state.begin_submission();
                    vec![Effect::SendSubmission(request)]
                }
                Err(issue) => vec![Effect::Notify(issue.notification())],
            }
        }
        Msg::SubmissionSucceeded(results) => {
            if !state.is_busy() {
                return (state, Vec::new());
            }
            let count = results.len();
            state.finish_submission(Some(results));
            vec![Effect::Notify(Notification::analysis_complete(count))]
        }
        Msg::SubmissionFailed => {
            if !state.is_busy() {
                return (state, Vec::new());
            }
            state.finish_submission(None);
            vec![Effect::Notify(Notification::processing_failed())]
        }
    };

    (state, effects)
}
