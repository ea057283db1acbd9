//! Asset Model - Classified Entries and Fixed Vocabularies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brand logo variants recognised by exact base name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogoVariant {
    Icon,
    #[default]
    Logo,
    LogoWithName,
}

impl LogoVariant {
    /// Sorted by key, which is also emission order.
    pub const ALL: [LogoVariant; 3] = [Self::Icon, Self::Logo, Self::LogoWithName];

    /// Registry key: `icon`, `logo`, `logoWithName`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Logo => "logo",
            Self::LogoWithName => "logoWithName",
        }
    }

    /// File stem after the brand prefix: `pulsar-<stem>.svg`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Logo => "logo",
            Self::LogoWithName => "logo-name",
        }
    }

    pub fn from_file_stem(stem: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.file_stem() == stem)
    }
}

impl fmt::Display for LogoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolution buckets synthesised for raster logos.
///
/// URLs are built by convention only; the PNG files are never checked on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "0.5x")]
    Half,
    #[serde(rename = "0.75x")]
    ThreeQuarters,
    #[serde(rename = "1x")]
    One,
    #[serde(rename = "1.5x")]
    OneAndHalf,
    #[serde(rename = "2x")]
    Two,
    #[serde(rename = "3x")]
    Three,
    #[serde(rename = "4x")]
    Four,
    #[serde(rename = "200w")]
    Width200,
}

impl Resolution {
    pub const ALL: [Resolution; 8] = [
        Self::Half,
        Self::ThreeQuarters,
        Self::One,
        Self::OneAndHalf,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Width200,
    ];

    /// Folder name and key, e.g. `0.5x`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Half => "0.5x",
            Self::ThreeQuarters => "0.75x",
            Self::One => "1x",
            Self::OneAndHalf => "1.5x",
            Self::Two => "2x",
            Self::Three => "3x",
            Self::Four => "4x",
            Self::Width200 => "200w",
        }
    }

    /// `1x` and `200w` use the bare filename; every other bucket adds `@<label>`.
    pub fn file_suffix(self) -> Option<&'static str> {
        match self {
            Self::One | Self::Width200 => None,
            other => Some(other.label()),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "category")]
pub enum AssetCategory {
    Logo { variant: LogoVariant },
    Icon,
}

/// One classified source file pending inclusion in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub filename: String,
    pub identifier: String,
    #[serde(flatten)]
    pub category: AssetCategory,
}

impl AssetEntry {
    pub fn icon(filename: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            identifier: identifier.into(),
            category: AssetCategory::Icon,
        }
    }

    pub fn logo(filename: impl Into<String>, variant: LogoVariant) -> Self {
        Self {
            filename: filename.into(),
            identifier: variant.key().to_string(),
            category: AssetCategory::Logo { variant },
        }
    }
}

/// Language of the generated registry listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Typescript,
    Rust,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Typescript => "ts",
            Self::Rust => "rs",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ts" | "typescript" => Ok(Self::Typescript),
            "rs" | "rust" => Ok(Self::Rust),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected typescript, rust or json)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_variant_stems() {
        assert_eq!(LogoVariant::from_file_stem("icon"), Some(LogoVariant::Icon));
        assert_eq!(LogoVariant::from_file_stem("logo-name"), Some(LogoVariant::LogoWithName));
        assert_eq!(LogoVariant::from_file_stem("logo-dark"), None);
        assert_eq!(LogoVariant::default(), LogoVariant::Logo);
    }

    #[test]
    fn test_variants_sorted_by_key() {
        let keys: Vec<_> = LogoVariant::ALL.iter().map(|v| v.key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_resolution_suffix_rule() {
        for res in Resolution::ALL {
            match res {
                Resolution::One | Resolution::Width200 => assert_eq!(res.file_suffix(), None),
                _ => assert_eq!(res.file_suffix(), Some(res.label())),
            }
        }
    }

    #[test]
    fn test_resolution_serializes_as_label() {
        let json = serde_json::to_string(&Resolution::OneAndHalf).unwrap();
        assert_eq!(json, r#""1.5x""#);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("ts".parse::<OutputFormat>(), Ok(OutputFormat::Typescript));
        assert_eq!("Rust".parse::<OutputFormat>(), Ok(OutputFormat::Rust));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
