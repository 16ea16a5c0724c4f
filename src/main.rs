//! symptomcheck - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io;
use symptomcheck::cli::{Args, Commands, Config, Verbosity};
use symptomcheck::knowledge::{self, LabelIndex};
use symptomcheck::repl::{write_report, DisplayManager, ReplSession};
use symptomcheck::telemetry::TelemetryDisplay;
use symptomcheck::{DiagnosisError, DiagnosisService, SymptomSelector, SymptomSet};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(msg) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), msg);
        std::process::exit(2);
    }

    let mut config = Config::load(args.config.as_deref())?;
    config.apply_overrides(args.delay_ms, args.seed)?;

    let verbosity = resolve_verbosity(&args, &config);
    init_logging(verbosity);
    DisplayManager::set_color(config.display.color_output);

    match &args.command {
        Some(Commands::Start) => run_repl(&args, &config, verbosity).await?,
        Some(Commands::Symptoms { all }) => list_symptoms(*all),
        Some(Commands::Labels) => list_labels(),
        Some(Commands::Info { label }) => show_info(label),
        Some(Commands::Config) => show_config(&config),
        None => {
            if args.symptoms.is_empty() {
                show_usage();
            } else {
                run_diagnosis(&args, &config, verbosity).await?;
            }
        }
    }

    Ok(())
}

/// Command-line flags win over the configured default
fn resolve_verbosity(args: &Args, config: &Config) -> Verbosity {
    let from_flags = args.verbosity();
    if from_flags != Verbosity::Normal {
        return from_flags;
    }
    Verbosity::parse(&config.display.default_verbosity).unwrap_or(Verbosity::Normal)
}

/// RUST_LOG, when set, overrides the verbosity-derived level
fn init_logging(verbosity: Verbosity) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbosity.log_level());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None).init();
}

fn build_service(config: &Config) -> DiagnosisService {
    DiagnosisService::mock(config.delay(), config.classifier.seed)
}

async fn run_diagnosis(args: &Args, config: &Config, verbosity: Verbosity) -> Result<()> {
    let symptoms = SymptomSet::from_tokens(&args.symptoms);
    let service = build_service(config);
    let show_progress = verbosity.show_progress() && config.display.show_progress && !args.json;
    let mut display = DisplayManager::new().with_progress(show_progress);

    let _spinner = display.start_analysis(symptoms.len());
    match service.diagnose_until_interrupt(symptoms).await {
        Ok(report) => {
            display.finish_current();
            let summary = verbosity
                .show_events()
                .then(|| TelemetryDisplay::new(service.telemetry().clone(), verbosity));
            write_report(
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
                &report,
                summary.as_ref(),
                args.json,
                args.explain,
            )?;
        }
        Err(DiagnosisError::Cancelled) => {
            display.finish_current();
            display.show_warning("Analysis cancelled");
            std::process::exit(130);
        }
        Err(e) => {
            display.show_error(&e.to_string());
            std::process::exit(if e.is_user_error() { 2 } else { 1 });
        }
    }

    Ok(())
}

async fn run_repl(args: &Args, config: &Config, verbosity: Verbosity) -> Result<()> {
    let service = build_service(config);
    let selector = SymptomSelector::with_max_suggestions(config.selector.max_suggestions);
    let history_path = Config::state_dir().map(|dir| dir.join("history"));

    let mut repl = ReplSession::new(service, selector, history_path, verbosity)?
        .with_explain(args.explain);
    repl.show_welcome(env!("CARGO_PKG_VERSION"));
    repl.run().await
}

fn list_symptoms(all: bool) {
    let display = DisplayManager::new();
    if all {
        display.show_section("Known symptoms");
        for symptom in knowledge::known_symptoms() {
            display.show_bullet(symptom);
        }
    } else {
        display.show_section("Common symptoms");
        for (i, symptom) in knowledge::COMMON_SYMPTOMS.iter().enumerate() {
            display.show_numbered(i + 1, symptom);
        }
    }
    println!();
}

fn list_labels() {
    let display = DisplayManager::new();
    display.show_section(&format!("Disease labels ({})", LabelIndex::len()));
    for (ordinal, label) in LabelIndex::entries() {
        println!("  {:>2}  {}", ordinal.to_string().cyan(), label);
    }
    println!();
}

fn show_info(label: &str) {
    let display = DisplayManager::new();
    let Some((name, info)) = knowledge::lookup_condition(label) else {
        eprintln!("{} unknown condition '{}'", "Error:".red().bold(), label);
        eprintln!("Run {} to list known conditions", "symptomcheck labels".cyan());
        std::process::exit(2);
    };

    display.show_section(name.as_str());
    println!("  {}", info.description);
    println!("\n{}", "Recommendations:".bold());
    for rec in info.recommendations {
        display.show_bullet(rec);
    }
    println!();
}

fn show_config(config: &Config) {
    println!("\n{}", "symptomcheck Configuration".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    match Config::default_path() {
        Some(path) if path.exists() => println!("File:        {}", path.display()),
        Some(path) => println!("File:        {} (not found, using defaults)", path.display()),
        None => println!("File:        (no home directory, using defaults)"),
    }
    println!();

    println!("Service:");
    println!("  Delay:           {}ms", config.service.delay_ms);
    println!("Classifier:");
    match config.classifier.seed {
        Some(seed) => println!("  Seed:            {}", seed),
        None => println!("  Seed:            (entropy)"),
    }
    println!("Selector:");
    println!("  Suggestions:     {}", config.selector.max_suggestions);
    println!("Display:");
    println!("  Verbosity:       {}", config.display.default_verbosity);
    println!("  Progress:        {}", config.display.show_progress);
    println!("  Color:           {}", config.display.color_output);
    println!();
}

fn show_usage() {
    println!("symptomcheck {} - Symptom Checker", env!("CARGO_PKG_VERSION"));
    println!("\nUsage:");
    println!("  symptomcheck <symptom>...      Diagnose the given symptoms");
    println!("  symptomcheck start             Interactive symptom selection");
    println!("  symptomcheck symptoms [--all]  List symptoms");
    println!("  symptomcheck labels            List disease labels");
    println!("  symptomcheck info <label>      Describe a condition");
    println!("  symptomcheck config            Show configuration");
    println!("\nExample:");
    println!("  symptomcheck fever headache \"joint pain\" --explain");
    println!();
}
