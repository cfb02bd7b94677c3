//! Namespace x candidate cross product over the type table.

use super::{ResolveError, ResolveResult, ResolvedModifier, ResolvedRenderer};
use crate::extension::registry::{enumerate_namespaces, PluginRegistry};
use crate::extension::types::{normalize_type_name, TypeTable};
use crate::model::candidate::CandidateClassName;
use crate::model::page::{PageContext, RenderTarget};
use log::{debug, trace};

/// Instantiates every registered modifier reachable from `candidates`.
///
/// Results keep namespace-major, candidate-minor order. Any construction
/// failure aborts the call.
pub fn resolve_modifiers(
    registry: &dyn PluginRegistry,
    types: &TypeTable,
    candidates: &[CandidateClassName],
) -> ResolveResult<Vec<ResolvedModifier>> {
    let namespaces = enumerate_namespaces(registry)?;
    let mut resolved = Vec::new();

    for namespace in &namespaces {
        for candidate in candidates {
            let type_name = namespace.qualify(candidate.name_template.as_str());
            let Some(factory) = types.modifier_factory(type_name.as_str()) else {
                if !candidate.autoloaded {
                    trace!(
                        "event=candidate_not_loaded module=resolver type={}",
                        type_name
                    );
                }
                continue;
            };
            let type_name = normalize_type_name(type_name.as_str()).to_string();
            let modifier = factory().map_err(|reason| ResolveError::Instantiation {
                type_name: type_name.clone(),
                reason,
            })?;
            resolved.push(ResolvedModifier {
                type_name,
                modifier,
            });
        }
    }

    debug!(
        "event=modifiers_resolved module=resolver status=ok namespaces={} candidates={} found={}",
        namespaces.len(),
        candidates.len(),
        resolved.len()
    );
    Ok(resolved)
}

/// Returns the first registered renderer reachable from `candidates`.
///
/// Only the first hit is constructed; its construction failure propagates.
pub fn find_first_renderer(
    registry: &dyn PluginRegistry,
    types: &TypeTable,
    candidates: &[CandidateClassName],
    page: &PageContext,
    target: Option<RenderTarget>,
) -> ResolveResult<Option<ResolvedRenderer>> {
    for namespace in enumerate_namespaces(registry)? {
        for candidate in candidates {
            let type_name = namespace.qualify(candidate.name_template.as_str());
            let Some(factory) = types.renderer_factory(type_name.as_str()) else {
                continue;
            };
            let type_name = normalize_type_name(type_name.as_str()).to_string();
            let renderer = factory(page, target).map_err(|reason| ResolveError::Instantiation {
                type_name: type_name.clone(),
                reason,
            })?;
            debug!(
                "event=renderer_substituted module=resolver status=ok type={}",
                type_name
            );
            return Ok(Some(ResolvedRenderer {
                type_name,
                renderer,
            }));
        }
    }
    Ok(None)
}
