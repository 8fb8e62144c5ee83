use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use readalong_rs::{build_report, ReadAlongConfig, ReadingSession};
use tracing_subscriber::EnvFilter;

#[path = "read_along_report/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "read_along_report/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    /// Human-readable listing of lines and per-snapshot highlights.
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "read_along_report")]
#[command(about = "Replay transcript snapshots against a passage and report read-along progress")]
struct Args {
    #[arg(long, env = "READALONG_REPORT_PASSAGE")]
    passage: PathBuf,
    /// One cumulative transcript snapshot per line, in delivery order.
    #[arg(long, env = "READALONG_REPORT_SNAPSHOTS")]
    snapshots: Option<PathBuf>,
    #[arg(long, env = "READALONG_REPORT_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    #[arg(long, env = "READALONG_REPORT_OUT")]
    out: Option<PathBuf>,
    /// Render Focus Mode opacities around this line (text format only).
    #[arg(long)]
    focus_line: Option<usize>,
    #[arg(long, env = "READALONG_REPORT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,readalong_rs=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let config = match args.config.as_ref() {
        Some(path) => ReadAlongConfig::load(path).map_err(|err| err.to_string())?,
        None => ReadAlongConfig::default(),
    };
    let passage = read_text(&args.passage, "passage")?;
    let snapshots = match args.snapshots.as_ref() {
        Some(path) => load_snapshots(path)?,
        None => Vec::new(),
    };
    tracing::info!(
        passage = %args.passage.display(),
        snapshots = snapshots.len(),
        "building read-along report"
    );

    let report = build_report(
        &args.passage.display().to_string(),
        &passage,
        &snapshots,
        Utc::now().to_rfc3339(),
    );

    match args.format {
        OutputFormat::Json => match args.out.as_ref() {
            Some(path) => {
                json_report_formatter::write_report(path, &report)?;
                println!("{}", path.display());
            }
            None => println!("{}", json_report_formatter::render(&report)?),
        },
        OutputFormat::Text => {
            let focus = args.focus_line.map(|line| {
                let mut session = ReadingSession::new(passage.as_str(), &config);
                session.set_focus_mode(true);
                session.jump_to_line(line);
                session
            });
            let rendered = text_report_formatter::render(&report, focus.as_ref());
            match args.out.as_ref() {
                Some(path) => fs::write(path, rendered).map_err(|err| {
                    format!("Failed to write text report '{}': {err}", path.display())
                })?,
                None => print!("{rendered}"),
            }
        }
    }
    Ok(())
}

fn read_text(path: &Path, what: &str) -> Result<String, String> {
    fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {what} file '{}': {err}", path.display()))
}

fn load_snapshots(path: &Path) -> Result<Vec<String>, String> {
    let data = read_text(path, "snapshots")?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
