//! Wordsieve - Unfamiliar-Vocabulary Extraction Workflow
//!
//! This is the main entry point for the wordsieve application, which
//! extracts unfamiliar English vocabulary from documents, translates it,
//! and writes a word/translation spreadsheet.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use wordsieve::cli::{Args, Commands};
use wordsieve::config::{Config, ExclusionConfig};
use wordsieve::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    info!("Starting Wordsieve - Unfamiliar-Vocabulary Extraction Workflow");

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Execute command
    match args.command {
        Commands::Process {
            input,
            wordlist,
            output,
            keep_names,
            keep_places,
            keep_fillers,
            keep_failed,
            keep_useless,
            export_unfiltered,
        } => {
            info!("Processing document: {}", input.display());

            config.exclusion = apply_keep_flags(
                config.exclusion,
                keep_names,
                keep_places,
                keep_fillers,
                keep_failed,
                keep_useless,
            );

            let pipeline = Pipeline::new(config);
            pipeline
                .process_file(&input, &wordlist, &output, export_unfiltered)
                .await?;
        }
        Commands::Batch {
            input_dir,
            wordlist,
            output_dir,
            keep_names,
            keep_places,
            keep_fillers,
            keep_failed,
            keep_useless,
            export_unfiltered,
        } => {
            info!("Processing directory: {}", input_dir.display());

            config.exclusion = apply_keep_flags(
                config.exclusion,
                keep_names,
                keep_places,
                keep_fillers,
                keep_failed,
                keep_useless,
            );

            let pipeline = Pipeline::new(config);
            pipeline
                .process_directory(&input_dir, &wordlist, output_dir.as_deref(), export_unfiltered)
                .await?;
        }
        Commands::Extract { input, output } => {
            info!("Extracting word list from: {}", input.display());

            let pipeline = Pipeline::new(config);
            pipeline.extract_words(&input, &output).await?;
        }
        Commands::Translate { input, output } => {
            info!("Translating word list: {}", input.display());

            let pipeline = Pipeline::new(config);
            pipeline.translate_wordlist(&input, &output).await?;
        }
    }

    info!("Wordsieve workflow completed successfully");
    Ok(())
}

/// Overlay the CLI --keep-* switches onto the configured exclusion toggles
fn apply_keep_flags(
    mut exclusion: ExclusionConfig,
    keep_names: bool,
    keep_places: bool,
    keep_fillers: bool,
    keep_failed: bool,
    keep_useless: bool,
) -> ExclusionConfig {
    if keep_names {
        exclusion.rm_names = false;
    }
    if keep_places {
        exclusion.rm_places = false;
    }
    if keep_fillers {
        exclusion.rm_fillers = false;
    }
    if keep_failed {
        exclusion.rm_failed = false;
    }
    if keep_useless {
        exclusion.rm_useless = false;
    }
    exclusion
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let wordsieve_dir = std::env::current_dir()?.join(".wordsieve");
    let log_dir = wordsieve_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "wordsieve.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        "Logging initialized - console: {}, file: {}",
        log_level,
        log_dir.join("wordsieve.log").display()
    );

    Ok(())
}
