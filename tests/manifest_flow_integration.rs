//! Integration tests for the full manifest flow.
//!
//! These tests drive the public API the way a dialogue host does:
//! 1. Fields are supplied one at a time and validated
//! 2. The completed form becomes a record
//! 3. The record is submitted over HTTP to an in-process backend
//! 4. The host applies the reset directive and starts over

use axum::{
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use docubot_actions::adapters::manifest::{
    HttpGeneratorConfig, HttpManifestGenerator, MANIFESTS_PATH,
};
use docubot_actions::application::handlers::{SubmitManifestCommand, SubmitManifestHandler};
use docubot_actions::domain::manifest::{
    FieldName, FieldStatus, ManifestForm, NormalizedValue, PromptKind, SlotValue,
    SubmissionOutcome, BACKEND_REJECTED_MESSAGE,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Starts a backend on an ephemeral port and returns its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn submit_handler(base_url: &str) -> SubmitManifestHandler {
    let generator = HttpManifestGenerator::new(
        HttpGeneratorConfig::new(base_url).with_timeout(Duration::from_secs(5)),
    )
    .unwrap();
    SubmitManifestHandler::new(Arc::new(generator))
}

/// Fills every field the way a user would type them.
fn fill_form(form: &mut ManifestForm) {
    let answers = [
        (FieldName::FreightCost, "$1.500.000"),
        (FieldName::Description, "Café en sacos"),
        (FieldName::Weight, "1.5 toneladas"),
        (FieldName::LoadDate, "2024-05-01"),
        (FieldName::UnloadDate, "2024-05-03"),
        (FieldName::VehicleCard, "ABC123"),
        (FieldName::License, "C2-99887766"),
        (FieldName::Origin, "Medellín"),
        (FieldName::Destination, "Bogotá"),
    ];
    for (field, answer) in answers {
        let validation = form.supply(field, SlotValue::from(answer));
        assert!(validation.is_valid(), "{field} should accept {answer:?}");
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn user_corrects_a_field_then_submits_successfully() {
    let received: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let base_url = spawn_backend(Router::new().route(
        MANIFESTS_PATH,
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                Json(json!({ "success": true, "file_url": "http://x/y.pdf" }))
            }
        }),
    ))
    .await;

    let mut form = ManifestForm::new();

    // First attempt at the freight cost is rejected with an example.
    let first = form.supply(FieldName::FreightCost, SlotValue::from("un millón"));
    assert_eq!(
        first.correction_prompt().map(|p| p.kind),
        Some(PromptKind::Invalid)
    );
    assert!(!form.is_complete());

    fill_form(&mut form);
    assert!(form.is_complete());

    let record = form.to_record().unwrap();
    let result = submit_handler(&base_url)
        .handle(SubmitManifestCommand { record })
        .await;

    assert_eq!(result.outcome(), SubmissionOutcome::Ok);
    assert_eq!(result.download_url(), Some("http://x/y.pdf"));
    assert!(result.message().contains("http://x/y.pdf"));

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["freight_cost"], json!(1_500_000));
    assert_eq!(received[0]["weight"], json!("1.5 toneladas"));
    assert_eq!(received[0]["destination"], json!("Bogotá"));

    for directive in result.directives() {
        form.apply(&directive);
    }
    assert!(form.is_empty());
}

#[tokio::test]
async fn backend_failure_still_clears_the_form() {
    let base_url = spawn_backend(Router::new().route(
        MANIFESTS_PATH,
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "browser crashed" })),
            )
        }),
    ))
    .await;

    let mut form = ManifestForm::new();
    fill_form(&mut form);

    let result = submit_handler(&base_url)
        .handle(SubmitManifestCommand {
            record: form.to_record().unwrap(),
        })
        .await;

    assert_eq!(result.outcome(), SubmissionOutcome::RejectedByBackend);
    assert_eq!(result.message(), BACKEND_REJECTED_MESSAGE);
    assert!(result.download_url().is_none());

    for directive in result.directives() {
        form.apply(&directive);
    }
    assert_eq!(form, ManifestForm::new());
}

#[tokio::test]
async fn unreachable_backend_reports_transport_error_and_clears() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut form = ManifestForm::new();
    fill_form(&mut form);

    let result = submit_handler(&base_url)
        .handle(SubmitManifestCommand {
            record: form.to_record().unwrap(),
        })
        .await;

    assert_eq!(result.outcome(), SubmissionOutcome::TransportError);
    assert!(result.message().starts_with("Sorry, I couldn't reach the manifest service: "));
    assert!(result.message().len() > "Sorry, I couldn't reach the manifest service: ".len());

    for directive in result.directives() {
        form.apply(&directive);
    }

    // The next conversation starts from scratch.
    let validation = form.supply(FieldName::FreightCost, SlotValue::Empty);
    assert_eq!(
        validation.correction_prompt().map(|p| p.kind),
        Some(PromptKind::Missing)
    );
    assert_eq!(
        form.field(FieldName::Weight).status(),
        FieldStatus::Unset
    );
}

#[test]
fn partial_form_cannot_become_a_record() {
    let mut form = ManifestForm::new();
    form.supply(FieldName::FreightCost, SlotValue::from("150000"));
    form.supply(FieldName::Weight, SlotValue::from("500 kg"));

    assert!(form.to_record().is_err());
    assert_eq!(
        form.field(FieldName::FreightCost).normalized_value(),
        Some(&NormalizedValue::Amount(150_000))
    );
}
