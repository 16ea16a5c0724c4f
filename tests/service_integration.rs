//! Integration tests for the diagnosis service and symptom selector
//!
//! Uses the mock predictor; no terminal required.

use std::sync::Arc;
use std::time::{Duration, Instant};

use symptomcheck::classifier::MatchStage;
use symptomcheck::repl::render_diagnosis;
use symptomcheck::{
    CancelToken, DiagnosisError, DiagnosisService, MockPredictor, SymptomClassifier,
    SymptomSelector,
};

#[tokio::test]
async fn test_diagnosis_waits_for_simulated_latency() {
    let service = DiagnosisService::mock(Duration::from_millis(150), Some(1));
    let start = Instant::now();
    let report = service
        .diagnose(&["fever", "headache", "joint pain", "rash"], &CancelToken::new())
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(150));
    assert_eq!(report.label, "Dengue");
    assert_eq!(report.matched_by, MatchStage::Profile { index: 4, overlap: 4 });
    assert!(!report.generic_info);
    assert!(!report.recommendations.is_empty());
}

#[tokio::test]
async fn test_cancel_releases_caller_promptly() {
    let service = DiagnosisService::mock(Duration::from_secs(10), Some(1));
    let token = CancelToken::new();
    let canceller = token.clone();

    let handle = tokio::spawn(async move { service.diagnose(&["fever"], &token).await });
    tokio::time::sleep(Duration::from_millis(30)).await;
    canceller.cancel();

    let result = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("cancelled diagnosis should return quickly")
        .unwrap();
    assert!(matches!(result, Err(DiagnosisError::Cancelled)));
}

#[tokio::test]
async fn test_no_symptoms_is_a_user_error() {
    let service = DiagnosisService::mock(Duration::ZERO, None);
    let none: Vec<String> = Vec::new();
    let err = service
        .diagnose(none.as_slice(), &CancelToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DiagnosisError::NoSymptoms));
    assert!(err.is_user_error());
}

#[tokio::test]
async fn test_common_cold_gets_generic_info() {
    let service = DiagnosisService::mock(Duration::ZERO, Some(1));
    let report = service
        .diagnose(&["fever", "cough", "runny nose"], &CancelToken::new())
        .await
        .unwrap();
    assert_eq!(report.label, "Common Cold");
    assert!(report.generic_info);
}

#[tokio::test]
async fn test_report_serializes_for_json_output() {
    let service = DiagnosisService::mock(Duration::ZERO, Some(1));
    let report = service.diagnose(&["Fever"], &CancelToken::new()).await.unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["label"], "Typhoid");
    assert_eq!(json["symptoms"][0], "fever");
    assert_eq!(json["matched_by"]["stage"], "decision_tree");
    assert_eq!(json["matched_by"]["rule"], "fever_only");
}

#[tokio::test]
async fn test_selector_to_service_flow() {
    let mut selector = SymptomSelector::new();
    assert!(matches!(selector.submit(), Err(DiagnosisError::NoSymptoms)));

    selector.add("Stiff Neck");
    selector.add("headache");
    selector.add("sensitivity to light");
    let symptoms = selector.submit().unwrap();

    let predictor = MockPredictor::new(SymptomClassifier::with_seed(2)).with_delay(Duration::ZERO);
    let service = DiagnosisService::new(Arc::new(predictor));
    let report = service.diagnose_set(symptoms, &CancelToken::new()).await.unwrap();

    // Migraine is declared before Meningitis and shares headache + light sensitivity
    assert_eq!(report.label, "Migraine");

    colored::control::set_override(false);
    let text = render_diagnosis(&report, true);
    assert!(text.contains("Migraine"));
    assert!(text.contains("profile #3"));
    assert!(text.contains("professional medical advice"));
}

#[tokio::test]
async fn test_telemetry_tracks_each_stage() {
    let service = DiagnosisService::mock(Duration::ZERO, Some(4));
    let token = CancelToken::new();
    service.diagnose(&["fever", "cough", "sore throat"], &token).await.unwrap();
    service.diagnose(&["rash"], &token).await.unwrap();
    service.diagnose(&["dizziness"], &token).await.unwrap();

    let stats = service.telemetry().get_stats();
    assert_eq!(stats.diagnoses_completed, 3);
    assert_eq!(stats.profile_matches, 1);
    assert_eq!(stats.tree_decisions, 1);
    assert_eq!(stats.random_fallbacks, 1);
}
