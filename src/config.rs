//! Generator Configuration
//!
//! Everything the generator used to hardcode lives here, so tests can point
//! it at fixture directories and arbitrary base URLs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::OutputFormat;
use crate::naming::brand_slug;
use crate::pipeline::PipelineError;
use crate::validation::ValidationPolicy;
use crate::ENGINE_VERSION;

pub const CONFIG_FILE_NAME: &str = "artkit.json";
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/binaryjack/pulsar-design-system/main/art-kit";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// URL prefix every generated link starts with.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Source directory under the asset root, also the URL path segment.
    #[serde(default = "default_svg_dir")]
    pub svg_dir: String,
    #[serde(default = "default_output_stem")]
    pub output_stem: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub policy: ValidationPolicy,
    #[serde(default)]
    pub engine_min_version: Option<String>,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_brand() -> String { "Pulsar".to_string() }
fn default_svg_dir() -> String { "SVG".to_string() }
fn default_output_stem() -> String { "index".to_string() }

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            brand: default_brand(),
            svg_dir: default_svg_dir(),
            output_stem: default_output_stem(),
            format: OutputFormat::default(),
            policy: ValidationPolicy::default(),
            engine_min_version: None,
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path).map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| PipelineError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<asset_root>/artkit.json` when present, defaults otherwise.
    pub fn load_or_default(asset_root: &Path) -> Result<Self, PipelineError> {
        let path = asset_root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Filename prefix of brand logos, e.g. `pulsar-`.
    pub fn logo_prefix(&self) -> String {
        format!("{}-", brand_slug(&self.brand))
    }

    pub fn svg_dir_path(&self, asset_root: &Path) -> PathBuf {
        asset_root.join(&self.svg_dir)
    }

    pub fn output_path(&self, asset_root: &Path) -> PathBuf {
        asset_root.join(format!("{}.{}", self.output_stem, self.format.extension()))
    }

    /// Reject configs written for a newer generator.
    pub fn check_engine_version(&self) -> Result<(), PipelineError> {
        let Some(min) = &self.engine_min_version else {
            return Ok(());
        };

        let engine_ver = semver::Version::parse(ENGINE_VERSION)
            .map_err(|_| PipelineError::InvalidVersion(ENGINE_VERSION.to_string()))?;
        let min_ver = semver::Version::parse(min)
            .map_err(|_| PipelineError::InvalidVersion(min.clone()))?;

        if engine_ver < min_ver {
            return Err(PipelineError::EngineVersionMismatch(min.clone(), ENGINE_VERSION.to_string()));
        }

        Ok(())
    }
}
