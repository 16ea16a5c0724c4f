//! Telemetry system for symptomcheck
//!
//! Collects diagnosis events, keeps per-stage counters and prints a
//! session summary.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use crate::classifier::MatchStage;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    DiagnosisStarted {
        symptom_count: usize,
        timestamp: Instant,
    },
    ProfileMatched {
        index: usize,
        overlap: usize,
        timestamp: Instant,
    },
    TreeDecision {
        label: String,
        timestamp: Instant,
    },
    RandomFallback {
        ordinal: usize,
        timestamp: Instant,
    },
    DiagnosisCompleted {
        label: String,
        duration_ms: u64,
        timestamp: Instant,
    },
    DiagnosisCancelled {
        timestamp: Instant,
    },
    DiagnosisFailed {
        reason: String,
        timestamp: Instant,
    },
}

impl TelemetryEvent {
    /// Stage event for a finished classification
    pub fn for_stage(stage: &MatchStage, label: &str) -> Self {
        let timestamp = Instant::now();
        match *stage {
            MatchStage::Profile { index, overlap } => TelemetryEvent::ProfileMatched {
                index,
                overlap,
                timestamp,
            },
            MatchStage::DecisionTree { .. } => TelemetryEvent::TreeDecision {
                label: label.to_string(),
                timestamp,
            },
            MatchStage::RandomFallback { ordinal } => {
                TelemetryEvent::RandomFallback { ordinal, timestamp }
            }
        }
    }
}

/// Telemetry statistics
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub diagnoses_started: usize,
    pub diagnoses_completed: usize,
    pub diagnoses_cancelled: usize,
    pub diagnoses_failed: usize,
    pub profile_matches: usize,
    pub tree_decisions: usize,
    pub random_fallbacks: usize,
    pub total_latency_ms: u64,
}

impl TelemetryStats {
    /// Mean latency of completed diagnoses
    pub fn average_latency_ms(&self) -> Option<u64> {
        if self.diagnoses_completed == 0 {
            None
        } else {
            Some(self.total_latency_ms / self.diagnoses_completed as u64)
        }
    }
}

/// Telemetry collector
#[derive(Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<Vec<TelemetryEvent>>>,
    stats: Arc<Mutex<TelemetryStats>>,
    start_time: Instant,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: TelemetryEvent) {
        {
            let mut stats = lock(&self.stats);
            match &event {
                TelemetryEvent::DiagnosisStarted { .. } => {
                    stats.diagnoses_started += 1;
                }
                TelemetryEvent::ProfileMatched { .. } => {
                    stats.profile_matches += 1;
                }
                TelemetryEvent::TreeDecision { .. } => {
                    stats.tree_decisions += 1;
                }
                TelemetryEvent::RandomFallback { .. } => {
                    stats.random_fallbacks += 1;
                }
                TelemetryEvent::DiagnosisCompleted { duration_ms, .. } => {
                    stats.diagnoses_completed += 1;
                    stats.total_latency_ms += *duration_ms;
                }
                TelemetryEvent::DiagnosisCancelled { .. } => {
                    stats.diagnoses_cancelled += 1;
                }
                TelemetryEvent::DiagnosisFailed { .. } => {
                    stats.diagnoses_failed += 1;
                }
            }
        }

        lock(&self.events).push(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        lock(&self.stats).clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        lock(&self.events).len()
    }

    /// Share of completed diagnoses decided by a deterministic rule
    pub fn rule_coverage(&self) -> f64 {
        let stats = lock(&self.stats);
        let decided = stats.profile_matches + stats.tree_decisions + stats.random_fallbacks;
        if decided == 0 {
            1.0
        } else {
            (stats.profile_matches + stats.tree_decisions) as f64 / decided as f64
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple telemetry display
pub struct TelemetryDisplay {
    collector: TelemetryCollector,
    verbosity: crate::cli::Verbosity,
}

impl TelemetryDisplay {
    /// Create a new display
    pub fn new(collector: TelemetryCollector, verbosity: crate::cli::Verbosity) -> Self {
        Self {
            collector,
            verbosity,
        }
    }

    /// Display summary statistics on stdout
    pub fn display_summary(&self) {
        let _ = self.write_summary(&mut io::stdout());
    }

    /// Write summary statistics to `out`
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let stats = self.collector.get_stats();
        let elapsed = self.collector.elapsed();

        writeln!(out, "\nSession Summary")?;
        writeln!(out, "─────────────────────────────────────")?;
        writeln!(out, "Duration:          {:?}", elapsed)?;
        writeln!(out, "Diagnoses:         {}", stats.diagnoses_completed)?;
        writeln!(out, "Cancelled:         {}", stats.diagnoses_cancelled)?;
        writeln!(out, "Failed:            {}", stats.diagnoses_failed)?;
        writeln!(out, "Rule coverage:     {:.1}%", self.collector.rule_coverage() * 100.0)?;
        if self.should_show_details() {
            writeln!(out, "  profile matches: {}", stats.profile_matches)?;
            writeln!(out, "  tree decisions:  {}", stats.tree_decisions)?;
            writeln!(out, "  random picks:    {}", stats.random_fallbacks)?;
            if let Some(avg) = stats.average_latency_ms() {
                writeln!(out, "Avg latency:       {}ms", avg)?;
            }
        }
        writeln!(out)
    }

    /// Check if should show detailed output
    pub fn should_show_details(&self) -> bool {
        self.verbosity.show_events()
    }
}
