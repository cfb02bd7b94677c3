//! Plugin registry handle and namespace enumeration.
//!
//! # Responsibility
//! - Model the host plugin manager as an injected `PluginRegistry` handle.
//! - Enumerate installed-extension namespace prefixes in registry order.
//!
//! # Invariants
//! - Enumeration is category-major, identifier-minor, with no filtering,
//!   deduplication or caching.
//! - Registry failures propagate to the caller unchanged.

use crate::extension::manifest::{is_valid_category, ManifestValidationError, PluginManifest};
use crate::model::namespace::NamespacePrefix;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Host plugin manager contract.
pub trait PluginRegistry: Send + Sync {
    /// Returns every plugin category in registry-defined order.
    fn list_categories(&self) -> Result<Vec<String>, RegistryError>;

    /// Returns `(identifier, version)` pairs installed under `category`.
    fn list_installed(&self, category: &str) -> Result<Vec<(String, u64)>, RegistryError>;
}

/// Registry query errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Unavailable(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "plugin registry unavailable: {reason}"),
        }
    }
}

impl Error for RegistryError {}

/// Lists `{category}_{identifier}` for every installed plugin.
pub fn enumerate_namespaces(
    registry: &dyn PluginRegistry,
) -> Result<Vec<NamespacePrefix>, RegistryError> {
    let mut namespaces = Vec::new();
    for category in registry.list_categories()? {
        for (identifier, _version) in registry.list_installed(category.as_str())? {
            namespaces.push(NamespacePrefix::new(category.as_str(), identifier.as_str()));
        }
    }
    debug!(
        "event=namespaces_enumerated module=registry status=ok count={}",
        namespaces.len()
    );
    Ok(namespaces)
}

/// In-process plugin registry.
///
/// Categories keep declaration order; plugins inside a category are listed
/// alphabetically.
#[derive(Debug, Default, Clone)]
pub struct InstalledPlugins {
    categories: Vec<String>,
    installed: BTreeMap<String, BTreeMap<String, u64>>,
}

impl InstalledPlugins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with `categories` declared in the given order.
    pub fn with_categories(categories: &[&str]) -> Result<Self, InstallError> {
        let mut registry = Self::new();
        for category in categories {
            registry.declare_category(category)?;
        }
        Ok(registry)
    }

    /// Declares one plugin category at the end of the category order.
    pub fn declare_category(&mut self, category: &str) -> Result<(), InstallError> {
        let normalized = category.trim();
        if !is_valid_category(normalized) {
            return Err(InstallError::InvalidManifest(
                ManifestValidationError::InvalidCategory(normalized.to_string()),
            ));
        }
        if self.installed.contains_key(normalized) {
            return Err(InstallError::DuplicateCategory(normalized.to_string()));
        }
        self.categories.push(normalized.to_string());
        self.installed.insert(normalized.to_string(), BTreeMap::new());
        Ok(())
    }

    /// Records one installed plugin after manifest validation.
    pub fn install(&mut self, manifest: &PluginManifest) -> Result<(), InstallError> {
        manifest.validate().map_err(InstallError::InvalidManifest)?;
        let Some(plugins) = self.installed.get_mut(manifest.category.as_str()) else {
            return Err(InstallError::UnknownCategory(manifest.category.clone()));
        };
        if plugins.contains_key(manifest.name.as_str()) {
            return Err(InstallError::DuplicatePlugin(manifest.component()));
        }
        plugins.insert(manifest.name.clone(), manifest.version);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.installed.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PluginRegistry for InstalledPlugins {
    fn list_categories(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self.categories.clone())
    }

    fn list_installed(&self, category: &str) -> Result<Vec<(String, u64)>, RegistryError> {
        Ok(self
            .installed
            .get(category)
            .map(|plugins| {
                plugins
                    .iter()
                    .map(|(name, version)| (name.clone(), *version))
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Plugin installation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    InvalidManifest(ManifestValidationError),
    UnknownCategory(String),
    DuplicateCategory(String),
    DuplicatePlugin(String),
}

impl Display for InstallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidManifest(err) => write!(f, "invalid plugin manifest: {err}"),
            Self::UnknownCategory(value) => write!(f, "plugin category is not declared: {value}"),
            Self::DuplicateCategory(value) => {
                write!(f, "plugin category already declared: {value}")
            }
            Self::DuplicatePlugin(value) => write!(f, "plugin already installed: {value}"),
        }
    }
}

impl Error for InstallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidManifest(err) => Some(err),
            _ => None,
        }
    }
}
