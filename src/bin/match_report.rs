use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tag_matcher::{
    summarize, AnalyserConfig, DocumentReport, MatchConfig, Meta, Report, RunSummary,
    TagAnalyser, TagAnalyserBuilder,
};
use tracing_subscriber::EnvFilter;

#[path = "match_report/json_report_formatter.rs"]
mod json_report_formatter;

const REPORT_SCHEMA_VERSION: u32 = 1;
const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

#[derive(Debug, Parser)]
#[command(name = "match_report")]
#[command(about = "Compare predicted <w>/<pc> tags against ground-truth documents")]
struct Args {
    #[arg(long, env = "TAGMATCH_TRUTH_DIR", default_value = AnalyserConfig::DEFAULT_TRUTH_DIR)]
    truth_dir: PathBuf,
    #[arg(
        long,
        env = "TAGMATCH_PREDICTED_DIR",
        default_value = AnalyserConfig::DEFAULT_PREDICTED_DIR
    )]
    predicted_dir: PathBuf,
    /// Tokenize the truth <body> on whitespace instead of reading its tags.
    #[arg(long, env = "TAGMATCH_TRUTH_PLAINTEXT", default_value_t = false)]
    truth_plaintext: bool,
    /// JSON file with `window_size` and/or `punctuation`.
    #[arg(long, env = "TAGMATCH_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "TAGMATCH_WINDOW_SIZE")]
    window_size: Option<usize>,
    /// Also write a JSON report to this path.
    #[arg(long, env = "TAGMATCH_OUT")]
    out: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "TAGMATCH_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let matching = load_match_config(&args)?;
    let window_size = matching.window_size;
    let analyser = TagAnalyserBuilder::new(AnalyserConfig {
        truth_dir: args.truth_dir.clone(),
        predicted_dir: args.predicted_dir.clone(),
        truth_plaintext: args.truth_plaintext,
        matching,
    })
    .build()
    .map_err(|err| format!("Failed to build analyser: {err}"))?;

    let documents = analyse_with_progress(&analyser)?;
    let summary = summarize(&documents);
    print_summary(&summary);

    if let Some(out_path) = args.out.as_ref() {
        let report = Report {
            schema_version: REPORT_SCHEMA_VERSION,
            meta: Meta {
                generated_at: Utc::now().to_rfc3339(),
                truth_dir: analyser.truth_dir().to_string_lossy().into_owned(),
                predicted_dir: analyser.predicted_dir().to_string_lossy().into_owned(),
                truth_plaintext: analyser.truth_plaintext(),
                window_size,
            },
            documents,
            summary,
        };
        json_report_formatter::write_report(out_path, &report)?;
        println!("{}", out_path.display());
    }
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn load_match_config(args: &Args) -> Result<MatchConfig, String> {
    let mut matching = match args.config.as_ref() {
        Some(path) => MatchConfig::load(path)
            .map_err(|err| format!("Failed to load match config '{}': {err}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(window_size) = args.window_size {
        matching.window_size = window_size;
    }
    matching
        .validate()
        .map_err(|err| format!("Invalid match config: {err}"))?;
    Ok(matching)
}

fn analyse_with_progress(analyser: &TagAnalyser) -> Result<Vec<DocumentReport>, String> {
    let files = analyser
        .list_documents()
        .map_err(|err| format!("Failed to list predicted documents: {err}"))?;

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );

    let documents = analyser.analyse_documents(&files, |document| {
        progress.set_message(document.file.clone());
        progress.suspend(|| println!("{}", format_document(document)));
        progress.inc(1);
    });
    progress.finish_and_clear();
    Ok(documents)
}

fn format_document(document: &DocumentReport) -> String {
    let header = format!("{} -- {}", document.file, document.document_id_or_default());
    let verdict = match document.advanced.as_ref() {
        None => format!("[ERROR] {}", document.notes.join("; ")),
        Some(advanced) if advanced.full_match => {
            "[SUCCESS] Found all tags with advanced matching.".to_string()
        }
        Some(advanced) => format!(
            "[FAIL] Advanced matching misses {} tags.",
            advanced.missing
        ),
    };
    format!("{header}\n{verdict}\n")
}

fn print_summary(summary: &RunSummary) {
    println!("Summary:");
    println!("\tSimple matches: {}", summary.simple_matches);
    println!("\tAdvanced matches: {}", summary.advanced_matches);
    println!("\tTotal files: {}", summary.total_files);
    if summary.failed > 0 {
        println!("\tFailed files: {}", summary.failed);
    }
}
