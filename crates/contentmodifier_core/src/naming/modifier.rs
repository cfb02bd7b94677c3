//! Modifier-flavored naming layered over a renderer strategy.

use super::{NamingError, NamingStrategy};
use crate::model::candidate::CandidateClassName;

/// Rewrites every candidate of the wrapped strategy into its modifier form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierNaming<N> {
    inner: N,
}

impl<N: NamingStrategy> ModifierNaming<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: NamingStrategy> NamingStrategy for ModifierNaming<N> {
    fn candidate_names(
        &self,
        component: &str,
        subtype: Option<&str>,
    ) -> Result<Vec<CandidateClassName>, NamingError> {
        Ok(self
            .inner
            .candidate_names(component, subtype)?
            .iter()
            .map(CandidateClassName::to_modifier)
            .collect())
    }
}
