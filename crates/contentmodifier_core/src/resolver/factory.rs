//! Host-facing output factories.

use super::aggregate::{find_first_renderer, resolve_modifiers};
use super::default::{DefaultRendererResolver, ThemeOverriddenResolver};
use super::{ResolveError, ResolveResult, ResolvedModifier, ResolvedRenderer};
use crate::config::{OverridePolicy, RendererFactoryKind, ThemeConfig};
use crate::extension::registry::PluginRegistry;
use crate::extension::types::TypeTable;
use crate::model::page::{PageContext, RenderTarget};
use crate::naming::{ModifierNaming, NamingStrategy, StandardNaming};
use log::debug;
use std::sync::Arc;

/// Component whose modifiers rewrite the page main content.
pub const CORE_COMPONENT: &str = "core";

/// Renderer entry point shared by every output factory.
pub trait OutputFactory {
    fn get_renderer(
        &self,
        page: &PageContext,
        component: &str,
        subtype: Option<&str>,
        target: Option<RenderTarget>,
    ) -> ResolveResult<ResolvedRenderer>;
}

/// Renderer factory that lets any installed extension substitute the
/// renderer of a trigger component and collects content modifiers.
pub struct ExtendedRendererFactory {
    registry: Arc<dyn PluginRegistry>,
    types: Arc<TypeTable>,
    base: Arc<dyn DefaultRendererResolver>,
    naming: Arc<dyn NamingStrategy>,
    policy: OverridePolicy,
}

impl ExtendedRendererFactory {
    pub fn new(
        registry: Arc<dyn PluginRegistry>,
        types: Arc<TypeTable>,
        base: Arc<dyn DefaultRendererResolver>,
        naming: Arc<dyn NamingStrategy>,
        policy: OverridePolicy,
    ) -> Self {
        Self {
            registry,
            types,
            base,
            naming,
            policy,
        }
    }

    /// Wires a factory with standard naming from the theme configuration.
    ///
    /// `standard` ignores theme prefixes; only `theme_extended_overridden`
    /// keeps the configured trigger components.
    pub fn from_theme(
        theme: &ThemeConfig,
        registry: Arc<dyn PluginRegistry>,
        types: Arc<TypeTable>,
    ) -> Self {
        let naming: Arc<dyn NamingStrategy> = Arc::new(StandardNaming::new());
        let prefixes = match theme.renderer_factory {
            RendererFactoryKind::Standard => vec![],
            RendererFactoryKind::ThemeOverridden | RendererFactoryKind::ThemeExtendedOverridden => {
                theme.renderer_prefixes()
            }
        };
        let policy = match theme.renderer_factory {
            RendererFactoryKind::ThemeExtendedOverridden => theme.override_policy.clone(),
            RendererFactoryKind::Standard | RendererFactoryKind::ThemeOverridden => OverridePolicy {
                trigger_components: vec![],
                ..theme.override_policy.clone()
            },
        };
        let base = Arc::new(ThemeOverriddenResolver::new(
            prefixes,
            Arc::clone(&naming),
            Arc::clone(&types),
        ));
        Self::new(registry, types, base, naming, policy)
    }

    /// Resolves the renderer for `component`.
    ///
    /// The base result is kept unless it is generic and `component` is a
    /// trigger; then the first installed-extension renderer wins, falling back
    /// to the base result when none is registered.
    pub fn resolve_renderer(
        &self,
        page: &PageContext,
        component: &str,
        subtype: Option<&str>,
        target: Option<RenderTarget>,
    ) -> ResolveResult<ResolvedRenderer> {
        let found = self.base.resolve_default(page, component, subtype, target)?;
        if !self.policy.is_trigger(component) || !self.policy.is_generic(found.type_name.as_str()) {
            return Ok(found);
        }

        let candidates = self.naming.candidate_names(component, subtype)?;
        match find_first_renderer(
            self.registry.as_ref(),
            self.types.as_ref(),
            &candidates,
            page,
            target,
        )? {
            Some(substitute) => Ok(substitute),
            None => {
                debug!(
                    "event=renderer_substitution_skipped module=resolver component={} type={}",
                    component.trim(),
                    found.type_name
                );
                Ok(found)
            }
        }
    }

    /// Instantiates every installed modifier for `component`.
    pub fn resolve_all_modifiers(&self, component: &str) -> ResolveResult<Vec<ResolvedModifier>> {
        let naming = ModifierNaming::new(Arc::clone(&self.naming));
        let candidates = naming.candidate_names(component, None)?;
        resolve_modifiers(self.registry.as_ref(), self.types.as_ref(), &candidates)
    }

    /// Instantiates every installed main-content modifier.
    pub fn get_modifiers(&self) -> ResolveResult<Vec<ResolvedModifier>> {
        self.resolve_all_modifiers(CORE_COMPONENT)
    }
}

impl OutputFactory for ExtendedRendererFactory {
    fn get_renderer(
        &self,
        page: &PageContext,
        component: &str,
        subtype: Option<&str>,
        target: Option<RenderTarget>,
    ) -> ResolveResult<ResolvedRenderer> {
        self.resolve_renderer(page, component, subtype, target)
    }
}

/// Factory that only collects content modifiers.
pub struct ModifierFactory {
    registry: Arc<dyn PluginRegistry>,
    types: Arc<TypeTable>,
    naming: ModifierNaming<Arc<dyn NamingStrategy>>,
}

impl ModifierFactory {
    pub fn new(
        registry: Arc<dyn PluginRegistry>,
        types: Arc<TypeTable>,
        naming: Arc<dyn NamingStrategy>,
    ) -> Self {
        Self {
            registry,
            types,
            naming: ModifierNaming::new(naming),
        }
    }

    pub fn resolve_all_modifiers(&self, component: &str) -> ResolveResult<Vec<ResolvedModifier>> {
        let candidates = self.naming.candidate_names(component, None)?;
        resolve_modifiers(self.registry.as_ref(), self.types.as_ref(), &candidates)
    }

    pub fn get_modifiers(&self) -> ResolveResult<Vec<ResolvedModifier>> {
        self.resolve_all_modifiers(CORE_COMPONENT)
    }
}

impl OutputFactory for ModifierFactory {
    fn get_renderer(
        &self,
        _page: &PageContext,
        _component: &str,
        _subtype: Option<&str>,
        _target: Option<RenderTarget>,
    ) -> ResolveResult<ResolvedRenderer> {
        Err(ResolveError::UnsupportedOperation(
            "modifier factory does not resolve renderers",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{ModifierFactory, OutputFactory};
    use crate::extension::registry::InstalledPlugins;
    use crate::extension::types::TypeTable;
    use crate::model::page::PageContext;
    use crate::naming::StandardNaming;
    use crate::resolver::ResolveError;
    use std::sync::Arc;

    #[test]
    fn modifier_factory_refuses_renderer_requests() {
        let factory = ModifierFactory::new(
            Arc::new(InstalledPlugins::new()),
            Arc::new(TypeTable::new()),
            Arc::new(StandardNaming::new()),
        );
        let err = factory
            .get_renderer(&PageContext::default(), "core", None, None)
            .expect_err("renderer requests must fail");
        assert!(matches!(err, ResolveError::UnsupportedOperation(_)));
    }

    #[test]
    fn modifier_factory_with_no_plugins_returns_nothing() {
        let factory = ModifierFactory::new(
            Arc::new(InstalledPlugins::with_categories(&["local", "theme"]).unwrap()),
            Arc::new(TypeTable::new()),
            Arc::new(StandardNaming::new()),
        );
        assert!(factory.get_modifiers().expect("empty result").is_empty());
    }
}
