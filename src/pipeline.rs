//! Generation Pipeline - Single Entry Point
//!
//! scan -> validate -> build registry -> render -> write.
//! Output is rendered completely in memory before anything touches disk.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use chrono::{DateTime, Utc};

use crate::assets::OutputFormat;
use crate::codegen;
use crate::config::GeneratorConfig;
use crate::hashing::{content_hash, sha256_hex};
use crate::registry::{GeneratedRegistry, RegistryError};
use crate::scan::{scan_directory, ScannedFile};
use crate::validation::{ValidationResult, ValidationViolation, Validator, ViolationSeverity};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read asset directory {}: {source}", path.display())]
    DirectoryRead { path: PathBuf, source: io::Error },

    #[error("Failed to read existing output {}: {source}", path.display())]
    OutputRead { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse { path: PathBuf, source: serde_json::Error },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Config requires generator >= {0}, current is {1}")]
    EngineVersionMismatch(String, String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Registry plus its rendered text, before anything is written.
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub registry: GeneratedRegistry,
    pub validation: ValidationResult,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub generated_at: DateTime<Utc>,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub logo_count: usize,
    pub icon_count: usize,
    pub content_hash: String,
    /// Rendered output differs from the file on disk (or there is none).
    pub changed: bool,
    pub written: bool,
    pub violations: Vec<ValidationViolation>,
}

/// The generation pipeline - one linear pass over an asset root
pub struct GenerationPipeline {
    asset_root: PathBuf,
    config: GeneratorConfig,
    validator: Validator,
}

impl GenerationPipeline {
    pub fn new(asset_root: impl Into<PathBuf>, config: GeneratorConfig) -> Self {
        Self {
            asset_root: asset_root.into(),
            config,
            validator: Validator::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_path(&self.asset_root)
    }

    pub fn scan(&self) -> Result<Vec<ScannedFile>, PipelineError> {
        let dir = self.config.svg_dir_path(&self.asset_root);
        scan_directory(&dir, &self.config.logo_prefix())
            .map_err(|source| PipelineError::DirectoryRead { path: dir, source })
    }

    /// Scan, validate and build the registry. Blocking violations abort here.
    pub fn build_registry(&self) -> Result<(GeneratedRegistry, ValidationResult), PipelineError> {
        self.config.check_engine_version()?;

        let files = self.scan()?;
        let validation = self.validator.validate(&files, self.config.policy);
        for violation in &validation.violations {
            log_violation(violation);
        }
        if !validation.valid {
            return Err(PipelineError::ValidationFailed(validation.summary()));
        }

        let registry = GeneratedRegistry::from_entries(
            &self.config.base_url,
            &self.config.svg_dir,
            &self.config.brand,
            files.iter().filter_map(ScannedFile::as_asset),
        )?;

        log::info!("   Found {} logos", registry.logo_count());
        log::info!("   Found {} icons", registry.icon_count());

        Ok((registry, validation))
    }

    pub fn render(&self) -> Result<RenderedOutput, PipelineError> {
        let (registry, validation) = self.build_registry()?;
        let text = codegen::render(&registry, self.config.format)?;
        Ok(RenderedOutput { registry, validation, text })
    }

    /// Render and overwrite the output file.
    pub fn generate(&self) -> Result<GenerationReport, PipelineError> {
        log::info!("Generating art-kit index...");

        let rendered = self.render()?;
        let path = self.output_path();
        let changed = differs_from_disk(&path, &rendered.text)?;

        write_replacing(&path, &rendered.text)?;

        log::info!("Generated {}", path.display());
        log::info!("   Total assets: {}", rendered.registry.logo_count() + rendered.registry.icon_count());
        if !changed {
            log::debug!("Output unchanged");
        }

        Ok(self.report(rendered, path, changed, true))
    }

    /// Render and compare with the output file without writing.
    pub fn check(&self) -> Result<GenerationReport, PipelineError> {
        let rendered = self.render()?;
        let path = self.output_path();
        let changed = differs_from_disk(&path, &rendered.text)?;

        if changed {
            log::warn!("{} is out of date", path.display());
        } else {
            log::info!("{} is up to date", path.display());
        }

        Ok(self.report(rendered, path, changed, false))
    }

    fn report(&self, rendered: RenderedOutput, output_path: PathBuf, changed: bool, written: bool) -> GenerationReport {
        GenerationReport {
            generated_at: Utc::now(),
            output_path,
            format: self.config.format,
            logo_count: rendered.registry.logo_count(),
            icon_count: rendered.registry.icon_count(),
            content_hash: content_hash(&rendered.text),
            changed,
            written,
            violations: rendered.validation.violations,
        }
    }
}

/// A missing output counts as stale; any other read failure is an error.
fn differs_from_disk(path: &Path, text: &str) -> Result<bool, PipelineError> {
    match fs::read(path) {
        Ok(existing) => Ok(sha256_hex(&existing) != content_hash(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(source) => Err(PipelineError::OutputRead { path: path.to_path_buf(), source }),
    }
}

/// Write to a sibling temp file, then rename over the target.
fn write_replacing(path: &Path, text: &str) -> Result<(), PipelineError> {
    let tmp = path.with_extension("tmp");
    let result = fs::write(&tmp, text).and_then(|()| fs::rename(&tmp, path));

    result.map_err(|source| {
        let _ = fs::remove_file(&tmp);
        PipelineError::Write { path: path.to_path_buf(), source }
    })
}

fn log_violation(violation: &ValidationViolation) {
    let files = violation.files.join(", ");
    match violation.severity {
        ViolationSeverity::Error => log::error!("{}: {} ({})", violation.rule, violation.message, files),
        ViolationSeverity::Warning => log::warn!("{}: {} ({})", violation.rule, violation.message, files),
        ViolationSeverity::Info => log::debug!("{}: {} ({})", violation.rule, violation.message, files),
    }
}
