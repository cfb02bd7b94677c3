//! Theme configuration and renderer override policy.
//!
//! # Responsibility
//! - Describe the theme options read at registration time.
//! - Carry the override policy that decides which components may be
//!   substituted by arbitrary installed extensions.
//!
//! # Invariants
//! - `name` and every parent are valid plugin identifiers.
//! - The override policy's generic prefix is never empty.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

static THEME_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid theme name regex"));

/// Theme name used by the shipped configuration.
pub const DEFAULT_THEME_NAME: &str = "contentmodifier";
/// Type-name prefix of the framework's unmodified renderers.
pub const DEFAULT_GENERIC_PREFIX: &str = "core_";
/// Component whose renderer may be supplied by any installed extension.
pub const DEFAULT_TRIGGER_COMPONENT: &str = "core_customfield";

/// Which renderer factory the theme selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererFactoryKind {
    /// Unprefixed component renderers only.
    Standard,
    /// Theme and parent-theme overrides.
    ThemeOverridden,
    /// Theme overrides plus extension substitution and content modifiers.
    ThemeExtendedOverridden,
}

/// Activity header display options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityHeaderConfig {
    pub no_title: bool,
}

/// Decides when a generic renderer may be replaced by an installed extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverridePolicy {
    /// A default renderer whose type name starts with this prefix is generic.
    pub generic_prefix: String,
    /// Components eligible for extension substitution.
    pub trigger_components: Vec<String>,
}

impl Default for OverridePolicy {
    fn default() -> Self {
        Self {
            generic_prefix: DEFAULT_GENERIC_PREFIX.to_string(),
            trigger_components: vec![DEFAULT_TRIGGER_COMPONENT.to_string()],
        }
    }
}

impl OverridePolicy {
    /// Returns whether `component` is configured for substitution.
    pub fn is_trigger(&self, component: &str) -> bool {
        let component = component.trim();
        self.trigger_components
            .iter()
            .any(|trigger| trigger.as_str() == component)
    }

    /// Returns whether `type_name` belongs to the generic namespace.
    pub fn is_generic(&self, type_name: &str) -> bool {
        type_name.starts_with(self.generic_prefix.as_str())
    }
}

/// Theme registration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
    pub doctype: String,
    pub parents: Vec<String>,
    pub sheets: Vec<String>,
    pub editor_sheets: Vec<String>,
    pub renderer_factory: RendererFactoryKind,
    pub supports_css_optimisation: bool,
    pub enable_dock: bool,
    pub use_fallback: bool,
    pub has_edit_switch: bool,
    pub hide_from_selector: bool,
    pub required_blocks: Vec<String>,
    pub activity_header: ActivityHeaderConfig,
    pub override_policy: OverridePolicy,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::contentmodifier()
    }
}

impl ThemeConfig {
    /// Configuration shipped with the content-modifier theme.
    pub fn contentmodifier() -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            doctype: "html5".to_string(),
            parents: vec!["boost".to_string()],
            sheets: vec!["custom".to_string()],
            editor_sheets: vec![],
            renderer_factory: RendererFactoryKind::ThemeExtendedOverridden,
            supports_css_optimisation: false,
            enable_dock: false,
            use_fallback: true,
            has_edit_switch: true,
            hide_from_selector: true,
            // Must stay empty for H5P embed pages.
            required_blocks: vec![],
            activity_header: ActivityHeaderConfig { no_title: true },
            override_policy: OverridePolicy::default(),
        }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// Missing keys fall back to the shipped defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_json_str(raw.as_str())
    }

    /// Validates identifier and policy invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !THEME_NAME_RE.is_match(self.name.as_str()) {
            return Err(ConfigError::InvalidThemeName(self.name.clone()));
        }
        for parent in &self.parents {
            if !THEME_NAME_RE.is_match(parent.as_str()) {
                return Err(ConfigError::InvalidThemeName(parent.clone()));
            }
            if parent == &self.name {
                return Err(ConfigError::SelfParent(parent.clone()));
            }
        }
        if self.override_policy.generic_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyGenericPrefix);
        }
        if self
            .override_policy
            .trigger_components
            .iter()
            .any(|component| component.trim().is_empty())
        {
            return Err(ConfigError::EmptyTriggerComponent);
        }
        Ok(())
    }

    /// Renderer prefixes in override order: this theme, then each parent.
    pub fn renderer_prefixes(&self) -> Vec<String> {
        std::iter::once(&self.name)
            .chain(self.parents.iter())
            .map(|theme| format!("theme_{theme}"))
            .collect()
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse(serde_json::Error),
    InvalidThemeName(String),
    SelfParent(String),
    EmptyGenericPrefix,
    EmptyTriggerComponent,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "failed to read `{path}`: {message}"),
            Self::Parse(err) => write!(f, "invalid theme configuration: {err}"),
            Self::InvalidThemeName(value) => write!(f, "theme name is invalid: {value}"),
            Self::SelfParent(value) => write!(f, "theme cannot be its own parent: {value}"),
            Self::EmptyGenericPrefix => write!(f, "override generic_prefix must not be empty"),
            Self::EmptyTriggerComponent => {
                write!(f, "override trigger_components contains an empty value")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
