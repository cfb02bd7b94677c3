//! Default renderer resolution in the host's normal override order.

use super::{ResolveError, ResolveResult, ResolvedRenderer};
use crate::extension::types::{normalize_type_name, TypeTable};
use crate::model::page::{PageContext, RenderTarget};
use crate::naming::NamingStrategy;
use log::debug;
use std::sync::Arc;

/// Base renderer resolution supplied by the host framework.
pub trait DefaultRendererResolver: Send + Sync {
    fn resolve_default(
        &self,
        page: &PageContext,
        component: &str,
        subtype: Option<&str>,
        target: Option<RenderTarget>,
    ) -> ResolveResult<ResolvedRenderer>;
}

/// Resolves renderers from the current theme, then its parents, then the
/// component's own unprefixed names.
///
/// Every prefixed name of a theme is tried before the next theme's, and all
/// prefixed names are tried before any unprefixed one. Legacy (non-autoloaded)
/// names are joined to the prefix with `_`.
pub struct ThemeOverriddenResolver {
    prefixes: Vec<String>,
    naming: Arc<dyn NamingStrategy>,
    types: Arc<TypeTable>,
}

impl ThemeOverriddenResolver {
    pub fn new(prefixes: Vec<String>, naming: Arc<dyn NamingStrategy>, types: Arc<TypeTable>) -> Self {
        Self {
            prefixes,
            naming,
            types,
        }
    }

    fn lookup_order(&self, component: &str, subtype: Option<&str>) -> ResolveResult<Vec<String>> {
        let candidates = self.naming.candidate_names(component, subtype)?;
        let mut order = Vec::new();
        for prefix in &self.prefixes {
            for candidate in candidates.iter().filter(|c| c.valid_with_prefix) {
                if candidate.autoloaded {
                    order.push(format!("{prefix}{}", candidate.name_template));
                } else {
                    order.push(format!("{prefix}_{}", candidate.name_template));
                }
            }
        }
        order.extend(
            candidates
                .iter()
                .filter(|c| c.valid_without_prefix)
                .map(|c| c.name_template.clone()),
        );
        Ok(order)
    }
}

impl DefaultRendererResolver for ThemeOverriddenResolver {
    fn resolve_default(
        &self,
        page: &PageContext,
        component: &str,
        subtype: Option<&str>,
        target: Option<RenderTarget>,
    ) -> ResolveResult<ResolvedRenderer> {
        for type_name in self.lookup_order(component, subtype)? {
            let Some(factory) = self.types.renderer_factory(type_name.as_str()) else {
                continue;
            };
            let type_name = normalize_type_name(type_name.as_str()).to_string();
            let renderer = factory(page, target).map_err(|reason| ResolveError::Instantiation {
                type_name: type_name.clone(),
                reason,
            })?;
            debug!(
                "event=renderer_default module=resolver status=ok component={} type={}",
                component, type_name
            );
            return Ok(ResolvedRenderer {
                type_name,
                renderer,
            });
        }
        Err(ResolveError::NoRendererFound {
            component: component.trim().to_string(),
        })
    }
}
