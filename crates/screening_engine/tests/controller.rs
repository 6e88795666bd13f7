use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use screening_core::{
    Notification, NotificationKind, RankedResult, SubmissionRequest, UploadCandidate,
    ValidationIssue, MAX_UPLOAD_BYTES,
};
use screening_engine::{
    FailureKind, Notifier, ReqwestTransport, SubmissionController, SubmitOutcome, Transport,
    TransportError, TransportSettings,
};
use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    screening_logging::initialize_for_tests();
}

#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn take(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().drain(..).collect()
    }

    fn kinds(&self) -> Vec<NotificationKind> {
        self.seen.lock().unwrap().iter().map(|n| n.kind).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.seen.lock().unwrap().push(notification.clone());
    }
}

/// Replays a fixed answer and records every request it receives.
struct MockTransport {
    answer: Result<Vec<RankedResult>, TransportError>,
    requests: Mutex<Vec<SubmissionRequest>>,
}

impl MockTransport {
    fn ok(results: Vec<RankedResult>) -> Self {
        Self {
            answer: Ok(results),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(kind: FailureKind) -> Self {
        Self {
            answer: Err(TransportError {
                kind,
                message: "mock failure".to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<Vec<RankedResult>, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.answer.clone()
    }
}

/// Blocks inside `submit` until released, so tests can observe the in-flight state.
#[derive(Default)]
struct GatedTransport {
    started: Notify,
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl Transport for GatedTransport {
    async fn submit(
        &self,
        _request: &SubmissionRequest,
    ) -> Result<Vec<RankedResult>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(vec![RankedResult::new("a.pdf", 0.75, Vec::new())])
    }
}

struct PanickingTransport;

#[async_trait::async_trait]
impl Transport for PanickingTransport {
    async fn submit(
        &self,
        _request: &SubmissionRequest,
    ) -> Result<Vec<RankedResult>, TransportError> {
        panic!("scoring client bug");
    }
}

fn pdf(name: &str) -> UploadCandidate {
    UploadCandidate::pdf(name, format!("%PDF {name}").into_bytes())
}

fn sample_results() -> Vec<RankedResult> {
    vec![
        RankedResult::new("a.pdf", 0.9, vec!["Python".to_string()]),
        RankedResult::new("b.pdf", 0.4, Vec::new()),
    ]
}

fn controller_with(
    transport: Arc<dyn Transport>,
) -> (SubmissionController, Arc<RecordingNotifier>) {
    init_logging();
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = SubmissionController::new(transport, notifier.clone());
    (controller, notifier)
}

#[tokio::test]
async fn select_files_filters_and_warns_once() {
    let (controller, notifier) = controller_with(Arc::new(MockTransport::ok(Vec::new())));
    let too_big = UploadCandidate {
        name: "scan.pdf".to_string(),
        size_bytes: MAX_UPLOAD_BYTES + 1,
        mime_type: "application/pdf".to_string(),
        content: bytes::Bytes::new(),
    };

    controller.select_files(vec![
        pdf("a.pdf"),
        UploadCandidate::new("photo.png", "image/png", vec![0u8; 4]),
        too_big,
        pdf("b.pdf"),
    ]);

    let names: Vec<_> = controller.candidates().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    assert_eq!(notifier.take(), vec![Notification::invalid_files()]);

    controller.select_files(vec![pdf("c.pdf")]);
    assert!(notifier.take().is_empty());
}

#[tokio::test]
async fn remove_candidate_by_index_and_ignore_out_of_range() {
    let (controller, _) = controller_with(Arc::new(MockTransport::ok(Vec::new())));
    controller.select_files(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")]);

    controller.remove_candidate(0);
    controller.remove_candidate(7);

    let names: Vec<_> = controller.candidates().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["b.pdf", "c.pdf"]);
}

#[tokio::test]
async fn empty_description_never_reaches_transport() {
    let transport = Arc::new(MockTransport::ok(sample_results()));
    let (controller, notifier) = controller_with(transport.clone());
    controller.select_files(vec![pdf("a.pdf")]);

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Invalid(ValidationIssue::MissingJobDescription)
    );
    assert_eq!(transport.call_count(), 0);
    assert!(!controller.is_busy());
    assert!(controller.results().is_empty());
    assert_eq!(notifier.take(), vec![Notification::missing_job_description()]);
}

#[tokio::test]
async fn no_resumes_never_reaches_transport() {
    let transport = Arc::new(MockTransport::ok(sample_results()));
    let (controller, notifier) = controller_with(transport.clone());
    controller.set_job_description("desc");

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Invalid(ValidationIssue::NoResumes));
    assert_eq!(transport.call_count(), 0);
    assert!(!controller.is_busy());
    assert_eq!(notifier.take(), vec![Notification::no_resumes()]);
}

#[tokio::test]
async fn successful_submit_applies_ranking_in_service_order() {
    let transport = Arc::new(MockTransport::ok(sample_results()));
    let (controller, notifier) = controller_with(transport.clone());
    controller.set_job_description("desc");
    controller.select_files(vec![pdf("a.pdf"), pdf("b.pdf")]);

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Ranked(2));
    assert_eq!(controller.results(), sample_results());
    assert!(!controller.is_busy());
    assert_eq!(notifier.take(), vec![Notification::analysis_complete(2)]);

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].job_description, "desc");
    assert_eq!(requests[0].candidates, vec![pdf("a.pdf"), pdf("b.pdf")]);
}

#[tokio::test]
async fn timeout_is_reported_once_and_clears_busy() {
    let transport = Arc::new(MockTransport::failing(FailureKind::Timeout));
    let (controller, notifier) = controller_with(transport.clone());
    controller.set_job_description("desc");
    controller.select_files(vec![pdf("a.pdf")]);

    let outcome = controller.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(TransportError {
            kind: FailureKind::Timeout,
            ..
        })
    ));
    assert_eq!(transport.call_count(), 1);
    assert!(!controller.is_busy());
    assert!(controller.results().is_empty());
    assert_eq!(notifier.take(), vec![Notification::processing_failed()]);
}

#[tokio::test]
async fn failure_after_success_leaves_results_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match_resumes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"ranked_resumes": [["a.pdf", 0.9, ["Python"]], ["b.pdf", 0.4, []]]}"#,
            "application/json",
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/match_resumes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let transport = Arc::new(ReqwestTransport::new(TransportSettings {
        endpoint: server.uri(),
        ..TransportSettings::default()
    }));
    let (controller, notifier) = controller_with(transport);
    controller.set_job_description("Python developer");
    controller.select_files(vec![pdf("a.pdf"), pdf("b.pdf")]);

    assert_eq!(controller.submit().await, SubmitOutcome::Ranked(2));
    assert_eq!(controller.results(), sample_results());

    let outcome = controller.submit().await;
    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(TransportError {
            kind: FailureKind::HttpStatus(503),
            ..
        })
    ));
    assert_eq!(controller.results(), sample_results());
    assert!(!controller.is_busy());
    assert_eq!(
        notifier.kinds(),
        vec![NotificationKind::Success, NotificationKind::Failure]
    );
}

#[tokio::test]
async fn concurrent_submit_is_rejected_while_busy() {
    let transport = Arc::new(GatedTransport::default());
    let (controller, notifier) = controller_with(transport.clone());
    controller.set_job_description("desc");
    controller.select_files(vec![pdf("a.pdf")]);
    assert!(!controller.is_busy());

    let probe = async {
        transport.started.notified().await;
        assert!(controller.is_busy());
        assert!(!controller.view().can_submit);
        let second = controller.submit().await;
        transport.release.notify_one();
        second
    };

    let (first, second) = tokio::join!(controller.submit(), probe);

    assert_eq!(first, SubmitOutcome::Ranked(1));
    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    assert!(!controller.is_busy());
    assert_eq!(notifier.take(), vec![Notification::analysis_complete(1)]);
}

#[tokio::test]
async fn dropped_submission_releases_busy() {
    let transport = Arc::new(GatedTransport::default());
    let (controller, notifier) = controller_with(transport.clone());
    controller.set_job_description("desc");
    controller.select_files(vec![pdf("a.pdf")]);

    let cancelled = tokio::time::timeout(Duration::from_millis(50), controller.submit()).await;

    assert!(cancelled.is_err());
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    assert!(!controller.is_busy());
    assert!(controller.results().is_empty());
    assert_eq!(notifier.take(), vec![Notification::processing_failed()]);
}

#[tokio::test]
async fn panicking_transport_is_reported_as_failure() {
    let (controller, notifier) = controller_with(Arc::new(PanickingTransport));
    controller.set_job_description("desc");
    controller.select_files(vec![pdf("a.pdf")]);

    let outcome = controller.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(TransportError {
            kind: FailureKind::Aborted,
            ..
        })
    ));
    assert!(!controller.is_busy());
    assert_eq!(notifier.take(), vec![Notification::processing_failed()]);
}
