//! Installed plugin declaration and validation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static CATEGORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*$").expect("valid category regex"));
static PLUGIN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*[a-z0-9]$|^[a-z]$").expect("valid name regex"));

/// Declaration of one installed plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginManifest {
    /// Plugin category, e.g. `local`, `theme`, `mod`.
    pub category: String,
    /// Plugin identifier inside its category, e.g. `banner`.
    pub name: String,
    /// Installed version number, e.g. `2022041900`.
    pub version: u64,
}

impl PluginManifest {
    pub fn new(category: impl Into<String>, name: impl Into<String>, version: u64) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            version,
        }
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), ManifestValidationError> {
        if self.category.trim().is_empty() {
            return Err(ManifestValidationError::EmptyCategory);
        }
        if !is_valid_category(self.category.as_str()) {
            return Err(ManifestValidationError::InvalidCategory(
                self.category.clone(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(ManifestValidationError::EmptyName);
        }
        if !PLUGIN_NAME_RE.is_match(self.name.as_str()) {
            return Err(ManifestValidationError::InvalidName(self.name.clone()));
        }
        if self.version == 0 {
            return Err(ManifestValidationError::MissingVersion);
        }
        Ok(())
    }

    /// Frankenstyle component name, `{category}_{name}`.
    pub fn component(&self) -> String {
        format!("{}_{}", self.category, self.name)
    }
}

/// Returns whether `value` is a valid plugin category id.
pub fn is_valid_category(value: &str) -> bool {
    CATEGORY_RE.is_match(value)
}

/// Manifest validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestValidationError {
    EmptyCategory,
    InvalidCategory(String),
    EmptyName,
    InvalidName(String),
    MissingVersion,
}

impl Display for ManifestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "plugin category must not be empty"),
            Self::InvalidCategory(value) => write!(f, "plugin category is invalid: {value}"),
            Self::EmptyName => write!(f, "plugin name must not be empty"),
            Self::InvalidName(value) => write!(f, "plugin name is invalid: {value}"),
            Self::MissingVersion => write!(f, "plugin version must be non-zero"),
        }
    }
}

impl Error for ManifestValidationError {}
