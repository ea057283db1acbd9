//! Art-Kit Core - Asset Registry Generator
//!
//! Scans a directory of brand logos and icons and emits a source file of
//! URL constants plus image-tag helpers.
//!
//! # Guarantees
//! 1. One registry entry per recognised file on disk, none fabricated
//! 2. Identifiers are unique; collisions stop generation
//! 3. Same directory, same bytes
//! 4. Nothing is written unless the whole listing rendered

pub mod assets;
pub mod naming;
pub mod scan;
pub mod validation;
pub mod registry;
pub mod codegen;
pub mod hashing;
pub mod config;
pub mod pipeline;

pub use assets::{AssetCategory, AssetEntry, LogoVariant, OutputFormat, Resolution};
pub use naming::{derive_identifier, kebab_to_camel};
pub use validation::{ValidationPolicy, ValidationResult, ValidationViolation, ViolationSeverity};
pub use registry::{GeneratedRegistry, LookupError, RegistryError};
pub use config::GeneratorConfig;
pub use pipeline::{GenerationPipeline, GenerationReport, PipelineError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
