//! Validation System - Rule/Policy Separation
//!
//! Rules turn scan findings into structured violations.
//! Policy decides which violations stop generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assets::{AssetCategory, LogoVariant};
use crate::scan::ScannedFile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub files: Vec<String>,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Errors block, warnings are logged.
    #[default]
    Standard,
    /// Errors and warnings block.
    Strict,
}

impl ValidationPolicy {
    pub fn blocks(self, severity: ViolationSeverity) -> bool {
        match (self, severity) {
            (_, ViolationSeverity::Error) => true,
            (Self::Strict, ViolationSeverity::Warning) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub policy: ValidationPolicy,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    /// Violations the policy treats as fatal.
    pub fn blocking(&self) -> impl Iterator<Item = &ValidationViolation> {
        let policy = self.policy;
        self.violations.iter().filter(move |v| policy.blocks(v.severity))
    }

    /// One line per blocking violation, joined for error messages.
    pub fn summary(&self) -> String {
        self.blocking()
            .map(|v| format!("{}: {} ({})", v.rule, v.message, v.files.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, files: &[ScannedFile]) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

/// Two icon files deriving the same identifier would overwrite each other.
pub struct IdentifierCollisionRule;

impl ValidationRule for IdentifierCollisionRule {
    fn name(&self) -> &'static str { "identifier_collision" }

    fn validate(&self, files: &[ScannedFile]) -> Vec<ValidationViolation> {
        let mut by_identifier: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for entry in files.iter().filter_map(ScannedFile::as_asset) {
            if entry.category == AssetCategory::Icon {
                by_identifier
                    .entry(entry.identifier.as_str())
                    .or_default()
                    .push(entry.filename.as_str());
            }
        }

        by_identifier
            .into_iter()
            .filter(|(_, sources)| sources.len() > 1)
            .map(|(identifier, sources)| ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: format!("Identifier '{}' derived from {} files", identifier, sources.len()),
                files: sources.into_iter().map(String::from).collect(),
                remediation: vec!["Rename the files so each derives a distinct identifier".to_string()],
            })
            .collect()
    }
}

pub struct UnknownLogoVariantRule;

impl ValidationRule for UnknownLogoVariantRule {
    fn name(&self) -> &'static str { "unknown_logo_variant" }

    fn validate(&self, files: &[ScannedFile]) -> Vec<ValidationViolation> {
        let known: Vec<_> = LogoVariant::ALL.iter().map(|v| v.file_stem()).collect();

        files
            .iter()
            .filter_map(|f| match f {
                ScannedFile::UnknownLogoVariant { filename } => Some(filename),
                _ => None,
            })
            .map(|filename| ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "Unknown logo variant, file skipped".to_string(),
                files: vec![filename.clone()],
                remediation: vec![format!("Use one of the known variants: {}", known.join(", "))],
            })
            .collect()
    }
}

pub struct InvalidIdentifierRule;

impl ValidationRule for InvalidIdentifierRule {
    fn name(&self) -> &'static str { "invalid_identifier" }

    fn validate(&self, files: &[ScannedFile]) -> Vec<ValidationViolation> {
        files
            .iter()
            .filter_map(|f| match f {
                ScannedFile::InvalidIdentifier { filename } => Some(filename),
                _ => None,
            })
            .map(|filename| ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "Filename yields an empty identifier, file skipped".to_string(),
                files: vec![filename.clone()],
                remediation: vec!["Name icons icon-<kebab-name>.svg".to_string()],
            })
            .collect()
    }
}

pub struct UnrecognizedFileRule;

impl ValidationRule for UnrecognizedFileRule {
    fn name(&self) -> &'static str { "unrecognized_file" }

    fn validate(&self, files: &[ScannedFile]) -> Vec<ValidationViolation> {
        files
            .iter()
            .filter_map(|f| match f {
                ScannedFile::Unrecognized { filename } => Some(filename),
                _ => None,
            })
            .map(|filename| ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Info,
                message: "No recognised prefix, file skipped".to_string(),
                files: vec![filename.clone()],
                remediation: vec![],
            })
            .collect()
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(IdentifierCollisionRule),
                Box::new(UnknownLogoVariantRule),
                Box::new(InvalidIdentifierRule),
                Box::new(UnrecognizedFileRule),
            ],
        }
    }

    pub fn validate(&self, files: &[ScannedFile], policy: ValidationPolicy) -> ValidationResult {
        let violations: Vec<_> = self.rules.iter().flat_map(|rule| rule.validate(files)).collect();
        let valid = !violations.iter().any(|v| policy.blocks(v.severity));

        ValidationResult { valid, policy, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
