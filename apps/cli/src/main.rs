use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Result;
use callscope_core::{
    AnalysisBackend, AnalysisController, AnalysisState, ExportKind, MockBackend, RestBackend,
    RestBackendConfig, format_analysis_readable, save,
};
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

/// CLI wrapper for the backend choice (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliBackend {
    #[default]
    Mock,
    Rest,
}

#[derive(Clone, ValueEnum)]
enum CliExport {
    Structured,
    Transcript,
    All,
}

impl CliExport {
    fn kinds(&self) -> Vec<ExportKind> {
        match self {
            CliExport::Structured => vec![ExportKind::Structured],
            CliExport::Transcript => vec![ExportKind::Transcript],
            CliExport::All => vec![ExportKind::Structured, ExportKind::Transcript],
        }
    }
}

#[derive(Parser)]
#[command(name = "callscope")]
#[command(about = "Analyze a recorded sales call from a YouTube URL")]
struct Cli {
    /// Video URL
    url: String,

    /// Analysis backend
    #[arg(short, long, default_value = "mock")]
    backend: CliBackend,

    /// Export the analysis to a file after completion
    #[arg(short, long)]
    export: Option<CliExport>,

    /// Directory for exported files
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Simulated analysis delay for the mock backend, in milliseconds
    #[arg(long, default_value_t = 2500)]
    delay_ms: u64,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let backend: Arc<dyn AnalysisBackend> = match cli.backend {
        CliBackend::Mock => Arc::new(MockBackend::new(Duration::from_millis(cli.delay_ms))),
        CliBackend::Rest => {
            let rest = RestBackend::new(RestBackendConfig::default())?;
            // Validate API key early
            if let Err(e) = rest.validate_api_key() {
                eprintln!("{} {}", style("Error:").red().bold(), e);
                std::process::exit(1);
            }
            Arc::new(rest)
        }
    };

    println!(
        "\n{}  {}\n",
        style("callscope").cyan().bold(),
        style("Sales Call Analyzer").dim()
    );
    println!("{}", style("─".repeat(60)).dim());

    let mut controller = AnalysisController::new(backend);

    let start = Instant::now();
    let spinner = create_spinner("Analyzing call...");
    controller.analyze(&cli.url).await;

    if let AnalysisState::Failed(message) = controller.state() {
        spinner.finish_and_clear();
        eprintln!("{} {}", style("Error:").red().bold(), message);
        std::process::exit(1);
    }

    spinner.finish_with_message(format!(
        "{} Analysis complete {}",
        style("✓").green().bold(),
        style(format!("[{}]", format_duration(start.elapsed()))).dim()
    ));

    if let Some(analysis) = controller.analysis() {
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", format_analysis_readable(analysis));
    }

    if let Some(export) = cli.export {
        fs::create_dir_all(&cli.out).await?;
        for kind in export.kinds() {
            if let Some(file) = controller.export(kind)? {
                let path = save(&file, &cli.out).await?;
                println!(
                    "{} Saved: {}",
                    style("✓").green().bold(),
                    style(path.display()).cyan()
                );
            }
        }
    }

    Ok(())
}
