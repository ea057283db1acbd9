//! artkit-gen - regenerates the art-kit registry listing
//!
//! Runs with no arguments against `art-kit/`.
//! Exit codes: 0 success, 1 I/O or config error, 2 validation failure,
//! 3 output out of date (`--check`).

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use artkit_core::{
    GenerationPipeline, GeneratorConfig, OutputFormat, PipelineError, ValidationPolicy,
};

#[derive(Parser)]
#[command(name = "artkit-gen")]
#[command(version, about = "Art-Kit Registry Generator - emits logo and icon URL constants")]
struct Cli {
    /// Asset root containing the SVG directory
    #[arg(short, long, default_value = "art-kit")]
    root: PathBuf,

    /// Config file (defaults to <root>/artkit.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output language: typescript, rust or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// URL prefix for generated links
    #[arg(long)]
    base_url: Option<String>,

    /// Treat warnings (unknown logo variants, empty identifiers) as errors
    #[arg(long)]
    strict: bool,

    /// Verify the output file is current instead of writing it
    #[arg(long)]
    check: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let pipeline = GenerationPipeline::new(&cli.root, config);
    let result = if cli.check { pipeline.check() } else { pipeline.generate() };

    match result {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        log::error!("Failed to serialize report: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            if cli.check && report.changed {
                log::error!("Run artkit-gen to regenerate {}", report.output_path.display());
                return ExitCode::from(3);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Error generating art-kit: {}", e);
            exit_code_for(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig, PipelineError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::load_or_default(&cli.root)?,
    };

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if cli.strict {
        config.policy = ValidationPolicy::Strict;
    }

    Ok(config)
}

fn exit_code_for(error: &PipelineError) -> ExitCode {
    match error {
        PipelineError::ValidationFailed(_) | PipelineError::Registry(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
