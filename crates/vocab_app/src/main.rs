mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use vocab_engine::{harvest_vocabulary, HarvestOptions};
use vocab_logging::{vocab_error, vocab_info};

fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::Both);
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            vocab_error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config_path = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILENAME));
    let config = config::load_config(&config_path);

    // A second argument points at a different corpus without editing config.
    let input = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.input_path.clone());

    let options = HarvestOptions {
        artifact_filename: config.artifact_filename.clone(),
        manifest_filename: config.manifest_filename.clone(),
        generated_utc: Some(Utc::now().to_rfc3339()),
    };
    let summary = harvest_vocabulary(&input, &config.output_dir, &options)
        .with_context(|| format!("failed to harvest vocabulary from {}", input.display()))?;

    vocab_info!(
        "Wrote {} distinct words to {:?}",
        summary.distinct_words,
        summary.artifact_path
    );
    println!(
        "{} distinct words ({} occurrences, {} bytes read, {}) -> {}",
        summary.distinct_words,
        summary.total_occurrences,
        summary.bytes_read,
        summary.encoding_label,
        summary.artifact_path.display()
    );
    Ok(())
}
