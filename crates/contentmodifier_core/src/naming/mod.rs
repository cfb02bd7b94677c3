//! Candidate type-name strategies.
//!
//! # Responsibility
//! - Derive ordered candidate type names for a component and optional subtype.
//! - Provide a composable renderer-to-modifier rewrite over any strategy.
//!
//! # Invariants
//! - Candidate order is deterministic for the same inputs.
//! - An empty subtype is treated the same as no subtype.

mod modifier;
mod standard;

pub use modifier::ModifierNaming;
pub use standard::StandardNaming;

use crate::model::candidate::CandidateClassName;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Produces candidate type names for one capability.
pub trait NamingStrategy: Send + Sync {
    fn candidate_names(
        &self,
        component: &str,
        subtype: Option<&str>,
    ) -> Result<Vec<CandidateClassName>, NamingError>;
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for Arc<N> {
    fn candidate_names(
        &self,
        component: &str,
        subtype: Option<&str>,
    ) -> Result<Vec<CandidateClassName>, NamingError> {
        (**self).candidate_names(component, subtype)
    }
}

/// Naming errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    EmptyComponent,
    InvalidComponent(String),
}

impl Display for NamingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyComponent => write!(f, "component name must not be empty"),
            Self::InvalidComponent(value) => write!(f, "component name is invalid: {value}"),
        }
    }
}

impl Error for NamingError {}
