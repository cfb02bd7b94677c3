//! Renderer substitution and content-modifier aggregation.
//!
//! # Responsibility
//! - Cross candidate type names with installed namespaces and resolve table
//!   hits into owned instances.
//! - Keep the host's default override order for every component except the
//!   configured trigger components.
//!
//! # Invariants
//! - Iteration order is namespace-major, candidate-minor.
//! - A construction failure aborts the whole call; partial results are
//!   dropped.
//! - Namespaces and candidates are recomputed on every call.

mod aggregate;
mod default;
mod factory;

pub use aggregate::{find_first_renderer, resolve_modifiers};
pub use default::{DefaultRendererResolver, ThemeOverriddenResolver};
pub use factory::{ExtendedRendererFactory, ModifierFactory, OutputFactory, CORE_COMPONENT};

use crate::extension::registry::RegistryError;
use crate::extension::types::ConstructError;
use crate::naming::NamingError;
use crate::output::modifier::{ContentModifier, Renderer};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub type ResolveResult<T> = Result<T, ResolveError>;

/// A renderer instance together with the type name it was resolved from.
pub struct ResolvedRenderer {
    pub type_name: String,
    pub renderer: Box<dyn Renderer>,
}

impl Debug for ResolvedRenderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedRenderer")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A content-modifier instance together with its type name.
pub struct ResolvedModifier {
    pub type_name: String,
    pub modifier: Box<dyn ContentModifier>,
}

impl Debug for ResolvedModifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedModifier")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Plugin registry could not be queried.
    RegistryUnavailable(RegistryError),
    /// Component or subtype cannot produce candidate names.
    Naming(NamingError),
    /// A matched type failed to construct.
    Instantiation {
        type_name: String,
        reason: ConstructError,
    },
    /// Entry point exists only to satisfy a shared contract.
    UnsupportedOperation(&'static str),
    /// Default resolution found no renderer at all.
    NoRendererFound { component: String },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RegistryUnavailable(err) => write!(f, "{err}"),
            Self::Naming(err) => write!(f, "{err}"),
            Self::Instantiation { type_name, reason } => {
                write!(f, "failed to construct `{type_name}`: {reason}")
            }
            Self::UnsupportedOperation(operation) => {
                write!(f, "operation is not supported: {operation}")
            }
            Self::NoRendererFound { component } => {
                write!(f, "no renderer found for component `{component}`")
            }
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RegistryUnavailable(err) => Some(err),
            Self::Naming(err) => Some(err),
            Self::Instantiation { reason, .. } => Some(reason),
            Self::UnsupportedOperation(_) | Self::NoRendererFound { .. } => None,
        }
    }
}

impl From<RegistryError> for ResolveError {
    fn from(value: RegistryError) -> Self {
        Self::RegistryUnavailable(value)
    }
}

impl From<NamingError> for ResolveError {
    fn from(value: NamingError) -> Self {
        Self::Naming(value)
    }
}
