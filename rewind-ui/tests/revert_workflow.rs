//! Integration tests for the revert workflow.
//!
//! These tests spin up a mock orchestrator (axum) on a random port, then
//! drive the real `VersionsSession` and `RevertController` against it:
//! timeline construction, outcome classification, notification lifetime,
//! and the duplicate-request guard.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::json;

use rewind_client::ApiClient;
use rewind_core::domain::job::Job;
use rewind_ui::notify::{NO_EFFECT_MESSAGE, Severity};
use rewind_ui::revert::{RevertController, RevertOutcome};
use rewind_ui::session::VersionsSession;

const JOB_ID: &str = "web-ingest";

/// How the mock orchestrator answers revert requests.
#[derive(Clone, Copy)]
enum RevertMode {
    /// Adopt the requested target as the job's current version.
    Adopt,
    /// Report success without changing anything.
    NoOp,
    /// Fail with a plaintext body.
    Fail,
}

/// Mutable orchestrator state shared with the handlers.
struct Orchestrator {
    /// Current job version; None means the job does not exist.
    current_version: Option<u64>,
    /// (version, submit_time nanos, stable)
    versions: Vec<(u64, i64, bool)>,
    mode: RevertMode,
    revert_delay: Duration,
    /// Raw body of every revert request received, in order.
    revert_bodies: Vec<String>,
}

#[derive(Clone)]
struct MockState(Arc<Mutex<Orchestrator>>);

fn three_version_fixture(mode: RevertMode) -> MockState {
    MockState(Arc::new(Mutex::new(Orchestrator {
        current_version: Some(3),
        versions: vec![
            (1, 1_700_000_000_000_000_000, true),
            (2, 1_700_000_100_000_000_000, false),
            (3, 1_700_000_200_000_000_000, true),
        ],
        mode,
        revert_delay: Duration::ZERO,
        revert_bodies: Vec::new(),
    })))
}

async fn get_job(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    let orch = state.0.lock().unwrap();
    match orch.current_version {
        Some(version) if id == JOB_ID => axum::Json(json!({
            "id": JOB_ID,
            "name": JOB_ID,
            "version": version,
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, format!("no job named {id}")).into_response(),
    }
}

async fn list_versions(State(state): State<MockState>, Path(_id): Path<String>) -> Response {
    let records: Vec<serde_json::Value> = {
        let orch = state.0.lock().unwrap();
        orch.versions
            .iter()
            .map(|(version, submit_time, stable)| {
                json!({ "version": version, "submit_time": submit_time, "stable": stable })
            })
            .collect()
    };
    axum::Json(records).into_response()
}

async fn revert_job(
    State(state): State<MockState>,
    Path(_id): Path<String>,
    body: String,
) -> Response {
    let (delay, response) = {
        let mut orch = state.0.lock().unwrap();
        orch.revert_bodies.push(body.clone());
        let response = match orch.mode {
            RevertMode::Fail => {
                (StatusCode::INTERNAL_SERVER_ERROR, "A plaintext error message").into_response()
            }
            RevertMode::NoOp => StatusCode::OK.into_response(),
            RevertMode::Adopt => {
                let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
                orch.current_version = parsed["target_version"].as_u64();
                StatusCode::OK.into_response()
            }
        };
        (orch.revert_delay, response)
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    response
}

/// Start the mock orchestrator on a random port and return the base URL.
async fn start_mock_server(state: MockState) -> String {
    let router = Router::new()
        .route("/api/jobs/{id}", get(get_job))
        .route("/api/jobs/{id}/versions", get(list_versions))
        .route("/api/jobs/{id}/revert", post(revert_job))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn loaded_session(state: &MockState) -> VersionsSession {
    let base_url = start_mock_server(state.clone()).await;
    let mut session = VersionsSession::new(ApiClient::new(&base_url), JOB_ID);
    session.load().await.expect("session load failed");
    session
}

fn frozen_versions(session: &VersionsSession) -> Vec<u64> {
    session
        .timeline()
        .rows()
        .iter()
        .filter(|row| !row.can_revert())
        .map(|row| row.version)
        .collect()
}

#[tokio::test]
async fn timeline_lists_every_version_and_freezes_only_the_current_row() {
    let state = three_version_fixture(RevertMode::NoOp);
    let session = loaded_session(&state).await;

    assert!(session.error().is_none());
    assert_eq!(session.timeline().len(), 3);
    assert_eq!(frozen_versions(&session), vec![3]);

    let ordered: Vec<u64> = session
        .timeline()
        .rows()
        .iter()
        .map(|row| row.version)
        .collect();
    assert_eq!(ordered, vec![3, 2, 1], "most recent submission first");
}

#[tokio::test]
async fn revert_sends_exactly_the_job_id_and_target_version() {
    let state = three_version_fixture(RevertMode::Adopt);
    let mut session = loaded_session(&state).await;

    session.revert_to(1).await.expect("revert failed");

    let bodies = state.0.lock().unwrap().revert_bodies.clone();
    assert_eq!(bodies.len(), 1, "one click, one request");

    let body: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2, "payload must carry exactly two fields: {object:?}");
    assert_eq!(object["job_id"], JOB_ID);
    assert_eq!(object["target_version"], 1);
}

#[tokio::test]
async fn successful_revert_reloads_the_job_and_flips_availability() {
    let state = three_version_fixture(RevertMode::Adopt);
    let mut session = loaded_session(&state).await;

    let outcome = session.revert_to(1).await.expect("revert failed");
    match outcome {
        Some(RevertOutcome::Reverted(job)) => assert_eq!(job.version, 1),
        other => panic!("expected Reverted, got {other:?}"),
    }

    assert_eq!(session.job().expect("job stays loaded").version, 1);
    assert_eq!(
        frozen_versions(&session),
        vec![1],
        "the reverted-to row loses its revert action, the old current row regains one"
    );

    // Silent success: the refreshed timeline is the only feedback.
    assert!(session.notification().is_none());
}

#[tokio::test]
async fn no_effect_revert_warns_and_changes_no_version_data() {
    let state = three_version_fixture(RevertMode::NoOp);
    let mut session = loaded_session(&state).await;

    let outcome = session.revert_to(1).await.expect("revert failed");
    assert!(matches!(outcome, Some(RevertOutcome::NoEffect)));

    let notification = session.notification().expect("warning expected");
    assert_eq!(notification.severity, Severity::Warning);
    assert_eq!(notification.title, "Reversion Had No Effect");
    assert_eq!(notification.message, NO_EFFECT_MESSAGE);
    assert!(notification.is_shown);

    assert_eq!(session.job().unwrap().version, 3);
    assert_eq!(frozen_versions(&session), vec![3]);
}

#[tokio::test]
async fn failed_revert_pipes_the_raw_body_and_dismisses_idempotently() {
    let state = three_version_fixture(RevertMode::Fail);
    let mut session = loaded_session(&state).await;

    let outcome = session.revert_to(1).await.expect("failure is an outcome, not an Err");
    match &outcome {
        Some(RevertOutcome::Failed(message)) => assert_eq!(message, "A plaintext error message"),
        other => panic!("expected Failed, got {other:?}"),
    }

    let notification = session.notification().expect("danger notification expected");
    assert_eq!(notification.severity, Severity::Danger);
    assert_eq!(notification.title, "Could Not Revert");
    assert_eq!(notification.message, "A plaintext error message");
    assert!(notification.is_shown);

    session.dismiss_notification();
    assert!(!session.notification().unwrap().is_shown);

    // Dismissing twice is the same as dismissing once.
    session.dismiss_notification();
    assert!(!session.notification().unwrap().is_shown);
}

#[tokio::test]
async fn a_new_classification_replaces_the_prior_notification() {
    let state = three_version_fixture(RevertMode::Fail);
    let mut session = loaded_session(&state).await;

    session.revert_to(1).await.unwrap();
    assert_eq!(session.notification().unwrap().severity, Severity::Danger);

    state.0.lock().unwrap().mode = RevertMode::NoOp;
    session.revert_to(1).await.unwrap();

    let notification = session.notification().unwrap();
    assert_eq!(notification.severity, Severity::Warning);
    assert_eq!(notification.title, "Reversion Had No Effect");

    state.0.lock().unwrap().mode = RevertMode::Adopt;
    session.revert_to(1).await.unwrap();
    assert!(session.notification().is_none(), "silent success clears the banner");
}

#[tokio::test]
async fn missing_job_enters_not_found_and_keeps_the_requested_id() {
    let state = MockState(Arc::new(Mutex::new(Orchestrator {
        current_version: None,
        versions: Vec::new(),
        mode: RevertMode::NoOp,
        revert_delay: Duration::ZERO,
        revert_bodies: Vec::new(),
    })));
    let base_url = start_mock_server(state).await;

    let mut session = VersionsSession::new(ApiClient::new(&base_url), "not-a-real-job");
    session
        .load()
        .await
        .expect("a missing job is a display condition, not a load failure");

    let error = session.error().expect("error state expected");
    assert_eq!(error.title, "Not Found");
    assert_eq!(session.job_id(), "not-a-real-job");
    assert!(session.job().is_none());
    assert!(session.timeline().is_empty(), "the version list is suppressed");
}

#[tokio::test]
async fn concurrent_reverts_for_the_same_target_issue_one_request() {
    let state = three_version_fixture(RevertMode::Adopt);
    state.0.lock().unwrap().revert_delay = Duration::from_millis(200);
    let base_url = start_mock_server(state.clone()).await;

    let job = Job {
        id: JOB_ID.to_string(),
        name: JOB_ID.to_string(),
        version: 3,
    };
    let controller = Arc::new(RevertController::new(ApiClient::new(&base_url)));

    let first = tokio::spawn({
        let controller = controller.clone();
        let job = job.clone();
        async move { controller.revert(&job, 1).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = tokio::spawn({
        let controller = controller.clone();
        let job = job.clone();
        async move { controller.revert(&job, 1).await }
    });

    let first = first.await.unwrap();
    let second = second.await.unwrap();

    assert!(first.is_some(), "the first attempt classifies an outcome");
    assert!(second.is_none(), "the duplicate attempt is suppressed");
    assert_eq!(state.0.lock().unwrap().revert_bodies.len(), 1);
}
