//! Generated Registry - Identifier to URL Mappings
//!
//! Logos are kept in variant order, icons in a `BTreeMap` so iteration is
//! always ascending by identifier.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::assets::{AssetCategory, AssetEntry, LogoVariant, Resolution};
use crate::naming::{escape_attr, logo_constant_name, SVG_EXTENSION};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Identifier collision: '{identifier}' derived from both {existing} and {incoming}")]
    IdentifierCollision {
        identifier: String,
        existing: String,
        incoming: String,
    },

    #[error("Logo variant {variant} provided by both {existing} and {incoming}")]
    DuplicateLogo {
        variant: LogoVariant,
        existing: String,
        incoming: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    #[error("Logo variant not present: {0}")]
    MissingLogo(LogoVariant),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoEntry {
    pub variant: LogoVariant,
    pub filename: String,
    pub constant_name: String,
    pub url: String,
}

impl LogoEntry {
    /// Raster filename for a resolution bucket, e.g. `pulsar-logo@2x.png`.
    pub fn png_filename(&self, resolution: Resolution) -> String {
        let stem = self.filename.strip_suffix(SVG_EXTENSION).unwrap_or(&self.filename);
        match resolution.file_suffix() {
            Some(suffix) => format!("{}@{}.png", stem, suffix),
            None => format!("{}.png", stem),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IconEntry {
    pub identifier: String,
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedRegistry {
    base_url: String,
    svg_dir: String,
    brand: String,
    logos: BTreeMap<LogoVariant, LogoEntry>,
    icons: BTreeMap<String, IconEntry>,
}

impl GeneratedRegistry {
    pub fn new(base_url: &str, svg_dir: &str, brand: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            svg_dir: svg_dir.trim_matches('/').to_string(),
            brand: brand.to_string(),
            logos: BTreeMap::new(),
            icons: BTreeMap::new(),
        }
    }

    /// Build from classified entries. Duplicates are rejected, never overwritten.
    pub fn from_entries<'a>(
        base_url: &str,
        svg_dir: &str,
        brand: &str,
        entries: impl IntoIterator<Item = &'a AssetEntry>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(base_url, svg_dir, brand);
        for entry in entries {
            registry.insert(entry)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, entry: &AssetEntry) -> Result<(), RegistryError> {
        let url = self.svg_url(&entry.filename);

        match entry.category {
            AssetCategory::Logo { variant } => {
                if let Some(existing) = self.logos.get(&variant) {
                    return Err(RegistryError::DuplicateLogo {
                        variant,
                        existing: existing.filename.clone(),
                        incoming: entry.filename.clone(),
                    });
                }
                self.logos.insert(variant, LogoEntry {
                    variant,
                    filename: entry.filename.clone(),
                    constant_name: logo_constant_name(&self.brand, variant.key()),
                    url,
                });
            }
            AssetCategory::Icon => {
                if let Some(existing) = self.icons.get(&entry.identifier) {
                    return Err(RegistryError::IdentifierCollision {
                        identifier: entry.identifier.clone(),
                        existing: existing.filename.clone(),
                        incoming: entry.filename.clone(),
                    });
                }
                self.icons.insert(entry.identifier.clone(), IconEntry {
                    identifier: entry.identifier.clone(),
                    filename: entry.filename.clone(),
                    url,
                });
            }
        }

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn svg_dir(&self) -> &str {
        &self.svg_dir
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn svg_url(&self, filename: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.svg_dir, filename)
    }

    pub fn logos(&self) -> impl Iterator<Item = &LogoEntry> {
        self.logos.values()
    }

    pub fn icons(&self) -> impl Iterator<Item = &IconEntry> {
        self.icons.values()
    }

    pub fn logo_count(&self) -> usize {
        self.logos.len()
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    pub fn icon_names(&self) -> Vec<&str> {
        self.icons.keys().map(String::as_str).collect()
    }

    pub fn icon_url(&self, name: &str) -> Result<&str, LookupError> {
        self.icons
            .get(name)
            .map(|icon| icon.url.as_str())
            .ok_or_else(|| LookupError::UnknownIcon(name.to_string()))
    }

    pub fn logo_svg_url(&self, variant: LogoVariant) -> Result<&str, LookupError> {
        self.logos
            .get(&variant)
            .map(|logo| logo.url.as_str())
            .ok_or(LookupError::MissingLogo(variant))
    }

    /// Conventional raster URL: `<base>/<resolution>/<png filename>`.
    pub fn logo_png_url(&self, variant: LogoVariant, resolution: Resolution) -> Result<String, LookupError> {
        let logo = self.logos.get(&variant).ok_or(LookupError::MissingLogo(variant))?;
        Ok(format!("{}/{}/{}", self.base_url, resolution.label(), logo.png_filename(resolution)))
    }

    /// `<img>` tag for an icon. Alt text falls back to the identifier.
    pub fn markdown_icon(&self, name: &str, alt: Option<&str>, width: Option<u32>) -> Result<String, LookupError> {
        let url = self.icon_url(name)?;
        let alt = alt.filter(|a| !a.is_empty()).unwrap_or(name);
        Ok(image_tag(url, alt, width))
    }

    /// `<img>` tag for a brand logo. Defaults to the `logo` variant and the brand name.
    pub fn markdown_logo(
        &self,
        variant: Option<LogoVariant>,
        alt: Option<&str>,
        width: Option<u32>,
    ) -> Result<String, LookupError> {
        let url = self.logo_svg_url(variant.unwrap_or_default())?;
        Ok(image_tag(url, alt.unwrap_or(&self.brand), width))
    }
}

fn image_tag(url: &str, alt: &str, width: Option<u32>) -> String {
    let width_attr = match width {
        Some(w) if w > 0 => format!(r#" width="{}""#, w),
        _ => String::new(),
    };
    format!(r#"<img src="{}" alt="{}"{} />"#, escape_attr(url), escape_attr(alt), width_attr)
}
