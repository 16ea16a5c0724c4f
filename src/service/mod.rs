//! Diagnosis service
//!
//! The async boundary around the classifier. It validates input, races the
//! provider against a cancellation token, and turns the resulting label
//! into a `Diagnosis` report.

pub mod cancel;
pub mod provider;

pub use cancel::CancelToken;
pub use provider::{DiagnosisProvider, MockPredictor, DEFAULT_DELAY_MS};

use log::{info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::classifier::SymptomClassifier;
use crate::errors::{DiagnosisError, Result};
use crate::telemetry::{TelemetryCollector, TelemetryEvent};
use crate::types::{Diagnosis, SymptomSet};

/// Front door for diagnosis requests
pub struct DiagnosisService {
    provider: Arc<dyn DiagnosisProvider>,
    telemetry: TelemetryCollector,
}

impl DiagnosisService {
    pub fn new(provider: Arc<dyn DiagnosisProvider>) -> Self {
        Self {
            provider,
            telemetry: TelemetryCollector::new(),
        }
    }

    /// Service over the mock predictor with the given latency and seed
    pub fn mock(delay: Duration, seed: Option<u64>) -> Self {
        let predictor = MockPredictor::new(SymptomClassifier::from_seed(seed)).with_delay(delay);
        Self::new(Arc::new(predictor))
    }

    /// Share an existing collector (e.g. one per REPL session)
    pub fn with_telemetry(mut self, telemetry: TelemetryCollector) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn telemetry(&self) -> &TelemetryCollector {
        &self.telemetry
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Diagnose raw symptom strings
    ///
    /// Fails with `NoSymptoms` before the provider is called if nothing
    /// survives normalization, and with `Cancelled` if `cancel` fires
    /// first. Provider errors surface as `AnalysisFailed`.
    pub async fn diagnose<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        cancel: &CancelToken,
    ) -> Result<Diagnosis> {
        let set = SymptomSet::from_tokens(symptoms);
        self.diagnose_set(set, cancel).await
    }

    /// Diagnose an already-built symptom set
    pub async fn diagnose_set(&self, symptoms: SymptomSet, cancel: &CancelToken) -> Result<Diagnosis> {
        if symptoms.is_empty() {
            return Err(DiagnosisError::NoSymptoms);
        }
        if cancel.is_cancelled() {
            self.telemetry.record(TelemetryEvent::DiagnosisCancelled {
                timestamp: Instant::now(),
            });
            return Err(DiagnosisError::Cancelled);
        }

        let start = Instant::now();
        self.telemetry.record(TelemetryEvent::DiagnosisStarted {
            symptom_count: symptoms.len(),
            timestamp: start,
        });

        let outcome = tokio::select! {
            result = self.provider.predict(&symptoms) => Some(result),
            _ = cancel.cancelled() => None,
        };

        let classification = match outcome {
            None => {
                warn!("diagnosis cancelled after {}ms", start.elapsed().as_millis());
                self.telemetry.record(TelemetryEvent::DiagnosisCancelled {
                    timestamp: Instant::now(),
                });
                return Err(DiagnosisError::Cancelled);
            }
            Some(Err(DiagnosisError::Cancelled)) => {
                warn!("provider {} cancelled the diagnosis", self.provider.name());
                self.telemetry.record(TelemetryEvent::DiagnosisCancelled {
                    timestamp: Instant::now(),
                });
                return Err(DiagnosisError::Cancelled);
            }
            Some(Err(e)) => {
                warn!("provider {} failed: {}", self.provider.name(), e);
                self.telemetry.record(TelemetryEvent::DiagnosisFailed {
                    reason: e.to_string(),
                    timestamp: Instant::now(),
                });
                return Err(match e {
                    DiagnosisError::AnalysisFailed(msg) => DiagnosisError::AnalysisFailed(msg),
                    other => DiagnosisError::AnalysisFailed(other.to_string()),
                });
            }
            Some(Ok(classification)) => classification,
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        self.telemetry.record(TelemetryEvent::for_stage(
            &classification.stage,
            classification.label.as_str(),
        ));
        self.telemetry.record(TelemetryEvent::DiagnosisCompleted {
            label: classification.label.to_string(),
            duration_ms,
            timestamp: Instant::now(),
        });
        info!(
            "diagnosed {} via {} in {}ms",
            classification.label, classification.stage, duration_ms
        );

        Ok(Diagnosis::new(classification, symptoms))
    }

    /// Diagnose, cancelling if the user presses Ctrl-C meanwhile
    pub async fn diagnose_until_interrupt(&self, symptoms: SymptomSet) -> Result<Diagnosis> {
        let token = CancelToken::new();
        let watcher = {
            let token = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            })
        };

        let result = self.diagnose_set(symptoms, &token).await;
        watcher.abort();
        result
    }
}
