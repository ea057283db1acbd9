//! Directory Scanner - Lists and Classifies SVG Files
//!
//! The scanner reports every `.svg` file it sees, including the ones the
//! registry will not keep. Whether a finding stops generation is decided by
//! the validator, not here.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::assets::{AssetEntry, LogoVariant};
use crate::naming::{derive_identifier, SVG_EXTENSION};

pub const ICON_PREFIX: &str = "icon-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ScannedFile {
    /// Recognised logo or icon.
    Asset(AssetEntry),
    /// Brand-prefixed file whose base name is not a known variant.
    UnknownLogoVariant { filename: String },
    /// Icon file with nothing left after stripping prefix and hyphens.
    InvalidIdentifier { filename: String },
    /// SVG file matching neither prefix.
    Unrecognized { filename: String },
}

impl ScannedFile {
    pub fn filename(&self) -> &str {
        match self {
            Self::Asset(entry) => &entry.filename,
            Self::UnknownLogoVariant { filename }
            | Self::InvalidIdentifier { filename }
            | Self::Unrecognized { filename } => filename,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetEntry> {
        match self {
            Self::Asset(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Classify one filename. Returns `None` for anything that is not `.svg`.
pub fn classify(filename: &str, logo_prefix: &str) -> Option<ScannedFile> {
    let stem = filename.strip_suffix(SVG_EXTENSION)?;

    let scanned = if let Some(base) = stem.strip_prefix(logo_prefix) {
        match LogoVariant::from_file_stem(base) {
            Some(variant) => ScannedFile::Asset(AssetEntry::logo(filename, variant)),
            None => ScannedFile::UnknownLogoVariant { filename: filename.to_string() },
        }
    } else if stem.starts_with(ICON_PREFIX) {
        match derive_identifier(filename, ICON_PREFIX) {
            Some(identifier) => ScannedFile::Asset(AssetEntry::icon(filename, identifier)),
            None => ScannedFile::InvalidIdentifier { filename: filename.to_string() },
        }
    } else {
        ScannedFile::Unrecognized { filename: filename.to_string() }
    };

    Some(scanned)
}

/// List `dir` and classify its `.svg` files, sorted by filename.
///
/// Subdirectories and non-UTF-8 names are skipped. Any I/O failure while
/// listing is returned as-is.
pub fn scan_directory(dir: &Path, logo_prefix: &str) -> Result<Vec<ScannedFile>, io::Error> {
    let mut files = vec![];

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Some(filename) = name.to_str() else {
            log::warn!("Skipping non UTF-8 filename {:?}", name);
            continue;
        };

        if let Some(scanned) = classify(filename, logo_prefix) {
            files.push(scanned);
        }
    }

    // read_dir order is platform dependent
    files.sort_by(|a, b| a.filename().cmp(b.filename()));
    Ok(files)
}
