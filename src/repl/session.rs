//! Session manager for the interactive selector
//!
//! Holds the current symptom selection and a bounded history of the
//! diagnoses made during the session.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

use crate::selector::SymptomSelector;
use crate::types::Diagnosis;

/// Maximum number of diagnoses to keep in history
const MAX_HISTORY_SIZE: usize = 100;

/// Record of a completed diagnosis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub label: String,
    pub symptoms: Vec<String>,
    pub matched_by: String,
    pub timestamp: i64,
}

impl From<&Diagnosis> for DiagnosisRecord {
    fn from(report: &Diagnosis) -> Self {
        Self {
            label: report.label.to_string(),
            symptoms: report.symptoms.as_slice().to_vec(),
            matched_by: report.matched_by.as_str().to_string(),
            timestamp: report.generated_at.timestamp(),
        }
    }
}

/// Session state for the REPL
pub struct SessionManager {
    selector: SymptomSelector,
    history: VecDeque<DiagnosisRecord>,
    session_start: Instant,
    diagnosis_count: usize,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_selector(SymptomSelector::new())
    }

    pub fn with_selector(selector: SymptomSelector) -> Self {
        SessionManager {
            selector,
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
            session_start: Instant::now(),
            diagnosis_count: 0,
        }
    }

    pub fn selector(&self) -> &SymptomSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut SymptomSelector {
        &mut self.selector
    }

    /// Record a completed diagnosis (oldest entry evicted at capacity)
    pub fn record(&mut self, report: &Diagnosis) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(DiagnosisRecord::from(report));
        self.diagnosis_count += 1;
    }

    /// Most recent `limit` records, newest first
    pub fn get_history(&self, limit: usize) -> Vec<&DiagnosisRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Total diagnoses made, including evicted ones
    pub fn diagnosis_count(&self) -> usize {
        self.diagnosis_count
    }

    /// Session duration in seconds
    pub fn session_duration(&self) -> u64 {
        self.session_start.elapsed().as_secs()
    }

    /// Clear selection and history
    pub fn reset(&mut self) {
        self.selector.clear();
        self.history.clear();
        self.diagnosis_count = 0;
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
