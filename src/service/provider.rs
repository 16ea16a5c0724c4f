//! Diagnosis providers
//!
//! The provider is the "remote" half of a diagnosis. `MockPredictor`
//! stands in for a prediction API: it waits out a fixed latency and then
//! runs the local rule-based classifier.

use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

use crate::classifier::{Classification, SymptomClassifier};
use crate::errors::Result;
use crate::types::SymptomSet;

/// Default simulated latency
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Something that turns a symptom set into a classification
#[async_trait]
pub trait DiagnosisProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    async fn predict(&self, symptoms: &SymptomSet) -> Result<Classification>;
}

/// Rule-based classifier behind a simulated network delay
pub struct MockPredictor {
    classifier: SymptomClassifier,
    delay: Duration,
}

impl Default for MockPredictor {
    fn default() -> Self {
        Self::new(SymptomClassifier::new())
    }
}

impl MockPredictor {
    /// Predictor with the default 1500ms latency
    pub fn new(classifier: SymptomClassifier) -> Self {
        Self {
            classifier,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn classifier(&self) -> &SymptomClassifier {
        &self.classifier
    }
}

#[async_trait]
impl DiagnosisProvider for MockPredictor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn predict(&self, symptoms: &SymptomSet) -> Result<Classification> {
        debug!("simulating {}ms prediction latency", self.delay.as_millis());
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Ok(self.classifier.classify(symptoms))
    }
}
