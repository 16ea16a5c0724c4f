//! REPL (Read-Eval-Print Loop) for interactive symptom selection
//!
//! Users build up a symptom selection line by line, then ask for a
//! diagnosis. Ctrl-C while an analysis is pending cancels it.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::Verbosity;
use crate::errors::DiagnosisError;
use crate::repl::commands::{CommandHandler, Flow};
pub use crate::repl::display::{render_diagnosis, write_report, DisplayManager};
use crate::repl::input::{InputEvent, InputHandler};
pub use crate::repl::session::{DiagnosisRecord, SessionManager};
use crate::selector::SymptomSelector;
use crate::service::DiagnosisService;
use crate::telemetry::TelemetryDisplay;

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session_manager: SessionManager,
    display_manager: DisplayManager,
    service: DiagnosisService,
    verbosity: Verbosity,
    explain: bool,
}

impl ReplSession {
    /// Create new REPL session
    pub fn new(
        service: DiagnosisService,
        selector: SymptomSelector,
        history_path: Option<PathBuf>,
        verbosity: Verbosity,
    ) -> Result<Self> {
        let input_handler = match history_path {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };
        let mut command_handler = CommandHandler::new();
        command_handler.set_verbose(verbosity.show_events());

        Ok(ReplSession {
            input_handler,
            command_handler,
            session_manager: SessionManager::with_selector(selector),
            display_manager: DisplayManager::new().with_progress(verbosity.show_progress()),
            service,
            verbosity,
            explain: false,
        })
    }

    /// Print the matching stage under each report
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str) {
        self.display_manager.show_banner(version);
    }

    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }

    /// Run until `/exit` or Ctrl-D
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.input_handler.read_line()? {
                InputEvent::Eof => break,
                InputEvent::Interrupted => {
                    self.display_manager.show_info("Type /exit to quit");
                }
                InputEvent::Line(line) => {
                    if !self.handle_input(&line).await? {
                        break;
                    }
                }
            }
        }

        self.input_handler.save_history()?;
        if self.verbosity.show_progress() {
            self.show_stats();
        }
        Ok(())
    }

    /// Handle one input line; returns false when the session should end
    pub async fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        let command = self.command_handler.parse(input);
        match self.command_handler.execute(command, &mut self.session_manager)? {
            Flow::Continue => Ok(true),
            Flow::Exit => Ok(false),
            Flow::ShowStats => {
                self.show_stats();
                Ok(true)
            }
            Flow::Diagnose => {
                self.run_diagnosis().await;
                Ok(true)
            }
        }
    }

    async fn run_diagnosis(&mut self) {
        let symptoms = match self.session_manager.selector().submit() {
            Ok(symptoms) => symptoms,
            Err(e) => {
                self.display_manager.show_warning(&e.to_string());
                return;
            }
        };

        let _spinner = self.display_manager.start_analysis(symptoms.len());
        match self.service.diagnose_until_interrupt(symptoms).await {
            Ok(report) => {
                self.display_manager.show_diagnosis(&report, self.explain);
                self.session_manager.record(&report);
            }
            Err(DiagnosisError::Cancelled) => {
                self.display_manager.finish_current();
                self.display_manager.show_warning("Analysis cancelled");
            }
            Err(e) => self.display_manager.show_error(&e.to_string()),
        }
    }

    fn show_stats(&self) {
        let display = TelemetryDisplay::new(self.service.telemetry().clone(), self.verbosity);
        display.display_summary();
        println!(
            "Session: {} diagnosis(es) in {}s",
            self.session_manager.diagnosis_count(),
            self.session_manager.session_duration()
        );
    }
}
