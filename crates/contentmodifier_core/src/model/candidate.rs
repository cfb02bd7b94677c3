//! Candidate type-name records produced by naming strategies.
//!
//! # Invariants
//! - At least one of `valid_with_prefix` / `valid_without_prefix` is true.
//! - Renderer-to-modifier rewriting is textual: every `renderer` substring is
//!   replaced, including ones embedded in component names.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Namespace separator used in candidate type names.
pub const NAMESPACE_SEPARATOR: char = '\\';

const RENDERER_KEYWORD: &str = "renderer";
const MODIFIER_KEYWORD: &str = "modifier";

/// One possible fully-qualified type name for a capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateClassName {
    /// Type-name pattern, e.g. `\output\core_renderer`.
    pub name_template: String,
    /// Whether the host autoloader is expected to find this name.
    pub autoloaded: bool,
    /// Whether `prefix + name_template` is a valid lookup.
    pub valid_with_prefix: bool,
    /// Whether `name_template` is valid standalone.
    pub valid_without_prefix: bool,
}

impl CandidateClassName {
    /// Creates a candidate after checking the validity-flag invariant.
    pub fn new(
        name_template: impl Into<String>,
        autoloaded: bool,
        valid_with_prefix: bool,
        valid_without_prefix: bool,
    ) -> Result<Self, CandidateError> {
        let name_template = name_template.into();
        if name_template.trim().is_empty() {
            return Err(CandidateError::EmptyTemplate);
        }
        if !valid_with_prefix && !valid_without_prefix {
            return Err(CandidateError::NeverValid(name_template));
        }
        Ok(Self {
            name_template,
            autoloaded,
            valid_with_prefix,
            valid_without_prefix,
        })
    }

    /// Returns the modifier-flavored counterpart of this renderer candidate.
    ///
    /// Replaces every `renderer` with `modifier`, prefixes a single separator
    /// and collapses doubled separators. Flags are copied unchanged.
    pub fn to_modifier(&self) -> Self {
        let substituted = self
            .name_template
            .replace(RENDERER_KEYWORD, MODIFIER_KEYWORD);
        let prefixed = format!("{NAMESPACE_SEPARATOR}{substituted}");
        Self {
            name_template: collapse_separators(&prefixed),
            autoloaded: self.autoloaded,
            valid_with_prefix: self.valid_with_prefix,
            valid_without_prefix: self.valid_without_prefix,
        }
    }
}

fn collapse_separators(value: &str) -> String {
    let doubled = format!("{NAMESPACE_SEPARATOR}{NAMESPACE_SEPARATOR}");
    let single = NAMESPACE_SEPARATOR.to_string();
    let mut current = value.to_string();
    while current.contains(doubled.as_str()) {
        current = current.replace(doubled.as_str(), single.as_str());
    }
    current
}

/// Candidate construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    EmptyTemplate,
    NeverValid(String),
}

impl Display for CandidateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTemplate => write!(f, "candidate name template must not be empty"),
            Self::NeverValid(value) => write!(
                f,
                "candidate `{value}` must be valid with or without a prefix"
            ),
        }
    }
}

impl Error for CandidateError {}
