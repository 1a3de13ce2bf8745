use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use cardscan::input::{self, STDIN_SOURCE};
use cardscan::output::{self, CardResult};
use cardscan::{Extractor, OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "cardscan", about = "Extract contact fields from business card OCR text")]
struct Cli {
    /// Settings file (default: ./cardscan.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one contact record per card
    Extract {
        /// Card text files or directories of them; `-` or nothing reads stdin
        paths: Vec<PathBuf>,
        /// Output format (overrides settings)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Keep trailing logo fragments on names
        #[arg(long)]
        no_strip_logo_marks: bool,
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Show how every line of one card was read
    Explain {
        /// Card text file; `-` or nothing reads stdin
        path: Option<PathBuf>,
        /// Keep trailing logo fragments on names
        #[arg(long)]
        no_strip_logo_marks: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    debug!(?settings, "settings loaded");

    let result = match cli.command {
        Commands::Extract {
            paths,
            format,
            no_strip_logo_marks,
            no_progress,
        } => {
            if let Some(f) = format {
                settings.format = f;
            }
            settings.strip_logo_marks &= !no_strip_logo_marks;
            settings.progress &= !no_progress;

            let paths = if paths.is_empty() {
                vec![PathBuf::from(STDIN_SOURCE)]
            } else {
                input::collect_paths(&paths, &settings.extensions)?
            };
            let results = extract_cards(&paths, &settings.extractor(), settings.progress)?;
            info!(cards = results.len(), inputs = paths.len(), "extraction finished");

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            output::write_results(&mut out, settings.format, &results)?;
            out.flush().context("flushing output")?;
            Ok(())
        }
        Commands::Explain {
            path,
            no_strip_logo_marks,
        } => {
            settings.strip_logo_marks &= !no_strip_logo_marks;
            let path = path.unwrap_or_else(|| PathBuf::from(STDIN_SOURCE));
            let card = input::read_card(&path)?;
            let extraction = settings.extractor().explain(&card.text);

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            output::write_explanation(&mut out, &card.source, &extraction)?;
            out.flush().context("flushing output")?;
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Read and extract every card in parallel. Unreadable cards are logged and
/// skipped; output keeps input order.
fn extract_cards(
    paths: &[PathBuf],
    extractor: &Extractor,
    show_progress: bool,
) -> anyhow::Result<Vec<CardResult>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = if show_progress && paths.len() > 1 {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<CardResult> = paths
        .par_iter()
        .filter_map(|path| {
            let card = match input::read_card(path) {
                Ok(card) => card,
                Err(e) => {
                    warn!(error = %e, "skipping card");
                    pb.inc(1);
                    return None;
                }
            };
            let record = extractor.extract(&card.text);
            pb.inc(1);
            Some(CardResult {
                source: card.source,
                record,
            })
        })
        .collect();

    pb.finish_and_clear();
    Ok(results)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
