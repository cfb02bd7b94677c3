use contentmodifier_core::{
    ConstructError, DefaultRendererResolver, ExtendedRendererFactory, InstalledPlugins,
    NamingStrategy, OutputFactory, OverridePolicy, PageContext, PluginManifest, PluginRegistry,
    RegistryError, RenderTarget, Renderer, RendererFactoryKind, ResolveError, StandardNaming,
    ThemeConfig, ThemeOverriddenResolver, TypeTable,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Stub {
    label: &'static str,
    target: Option<RenderTarget>,
}

impl Renderer for Stub {
    fn main_content(&self, page: &PageContext) -> String {
        let target = self.target.map(RenderTarget::as_str).unwrap_or("none");
        format!("<div>{}|{}|{}</div>", self.label, target, page.url)
    }
}

fn stub(
    label: &'static str,
) -> impl Fn(&PageContext, Option<RenderTarget>) -> Result<Box<dyn Renderer>, ConstructError> {
    move |_page, target| Ok(Box::new(Stub { label, target }))
}

struct CountingRegistry {
    inner: InstalledPlugins,
    category_calls: AtomicUsize,
}

impl CountingRegistry {
    fn new(plugins: &[(&str, &str)]) -> Self {
        let mut inner =
            InstalledPlugins::with_categories(&["mod", "local", "theme"]).expect("categories");
        for (category, name) in plugins {
            inner
                .install(&PluginManifest::new(*category, *name, 2022041900))
                .expect("install");
        }
        Self {
            inner,
            category_calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }
}

impl PluginRegistry for CountingRegistry {
    fn list_categories(&self) -> Result<Vec<String>, RegistryError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_categories()
    }

    fn list_installed(&self, category: &str) -> Result<Vec<(String, u64)>, RegistryError> {
        self.inner.list_installed(category)
    }
}

fn base_types() -> TypeTable {
    let mut types = TypeTable::new();
    types
        .register_renderer("core_customfield\\output\\renderer", stub("generic"))
        .unwrap();
    types
        .register_renderer("core_course\\output\\renderer", stub("course"))
        .unwrap();
    types
}

fn build(
    registry: Arc<CountingRegistry>,
    types: TypeTable,
    policy: OverridePolicy,
) -> ExtendedRendererFactory {
    let types = Arc::new(types);
    let naming: Arc<dyn NamingStrategy> = Arc::new(StandardNaming::new());
    let base: Arc<dyn DefaultRendererResolver> = Arc::new(ThemeOverriddenResolver::new(
        vec![
            "theme_contentmodifier".to_string(),
            "theme_boost".to_string(),
        ],
        Arc::clone(&naming),
        Arc::clone(&types),
    ));
    ExtendedRendererFactory::new(registry, types, base, naming, policy)
}

fn page() -> PageContext {
    PageContext::new("course-edit", "/course/edit.php")
}

#[test]
fn extension_replaces_generic_renderer_of_trigger_component() {
    let mut types = base_types();
    types
        .register_renderer("mod_fancy\\output\\core_customfield_renderer", stub("fancy"))
        .unwrap();
    let registry = Arc::new(CountingRegistry::new(&[("mod", "fancy")]));
    let factory = build(registry, types, OverridePolicy::default());

    let resolved = factory
        .resolve_renderer(&page(), "core_customfield", None, Some(RenderTarget::Ajax))
        .expect("renderer");
    assert_eq!(
        resolved.type_name,
        "mod_fancy\\output\\core_customfield_renderer"
    );
    assert_eq!(
        resolved.renderer.main_content(&page()),
        "<div>fancy|ajax|/course/edit.php</div>"
    );
}

#[test]
fn non_trigger_component_never_enumerates_namespaces() {
    let mut types = base_types();
    types
        .register_renderer("mod_fancy\\output\\core_course_renderer", stub("fancy"))
        .unwrap();
    let registry = Arc::new(CountingRegistry::new(&[("mod", "fancy")]));
    let factory = build(Arc::clone(&registry), types, OverridePolicy::default());

    let resolved = factory
        .get_renderer(&page(), "core_course", None, None)
        .expect("renderer");
    assert_eq!(resolved.type_name, "core_course\\output\\renderer");
    assert_eq!(registry.calls(), 0);
}

#[test]
fn theme_customization_is_not_overridden() {
    let mut types = base_types();
    types
        .register_renderer("theme_boost\\output\\core_customfield_renderer", stub("boost"))
        .unwrap();
    types
        .register_renderer("mod_fancy\\output\\core_customfield_renderer", stub("fancy"))
        .unwrap();
    let registry = Arc::new(CountingRegistry::new(&[("mod", "fancy")]));
    let factory = build(Arc::clone(&registry), types, OverridePolicy::default());

    let resolved = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .unwrap();
    assert_eq!(
        resolved.type_name,
        "theme_boost\\output\\core_customfield_renderer"
    );
    assert_eq!(registry.calls(), 0);
}

#[test]
fn legacy_theme_customization_is_not_overridden() {
    let mut types = base_types();
    types
        .register_renderer("theme_boost_core_customfield_renderer", stub("legacy"))
        .unwrap();
    types
        .register_renderer("mod_fancy\\output\\core_customfield_renderer", stub("fancy"))
        .unwrap();
    let registry = Arc::new(CountingRegistry::new(&[("mod", "fancy")]));
    let factory = build(Arc::clone(&registry), types, OverridePolicy::default());

    let resolved = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .unwrap();
    assert_eq!(resolved.type_name, "theme_boost_core_customfield_renderer");
    assert_eq!(registry.calls(), 0);
}

#[test]
fn keeps_generic_renderer_when_no_extension_provides_one() {
    let registry = Arc::new(CountingRegistry::new(&[("local", "banner")]));
    let factory = build(Arc::clone(&registry), base_types(), OverridePolicy::default());

    let resolved = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .unwrap();
    assert_eq!(resolved.type_name, "core_customfield\\output\\renderer");
    assert_eq!(registry.calls(), 1);
}

#[test]
fn first_namespace_in_registry_order_wins() {
    let mut types = base_types();
    types
        .register_renderer("local_zeta\\output\\core_customfield_renderer", stub("zeta"))
        .unwrap();
    types
        .register_renderer("local_alpha\\output\\core_customfield_renderer", stub("alpha"))
        .unwrap();
    let registry = Arc::new(CountingRegistry::new(&[("local", "zeta"), ("local", "alpha")]));
    let factory = build(registry, types, OverridePolicy::default());

    let resolved = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .unwrap();
    assert_eq!(
        resolved.type_name,
        "local_alpha\\output\\core_customfield_renderer"
    );
}

#[test]
fn extension_construction_failure_propagates() {
    let mut types = base_types();
    types
        .register_renderer("local_broken\\output\\core_customfield_renderer", |_, _| {
            Err(ConstructError::new("page has no course"))
        })
        .unwrap();
    let registry = Arc::new(CountingRegistry::new(&[("local", "broken")]));
    let factory = build(registry, types, OverridePolicy::default());

    let err = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .expect_err("broken renderer");
    assert!(matches!(
        err,
        ResolveError::Instantiation { ref type_name, .. }
            if type_name == "local_broken\\output\\core_customfield_renderer"
    ));
}

#[test]
fn trigger_components_are_configurable() {
    let mut types = base_types();
    types
        .register_renderer("mod_fancy\\output\\core_course_renderer", stub("fancy"))
        .unwrap();
    let registry = Arc::new(CountingRegistry::new(&[("mod", "fancy")]));
    let policy = OverridePolicy {
        trigger_components: vec!["core_course".to_string()],
        ..OverridePolicy::default()
    };
    let factory = build(registry, types, policy);

    let course = factory
        .resolve_renderer(&page(), "core_course", None, None)
        .unwrap();
    assert_eq!(course.type_name, "mod_fancy\\output\\core_course_renderer");

    let customfield = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .unwrap();
    assert_eq!(customfield.type_name, "core_customfield\\output\\renderer");
}

#[test]
fn missing_default_renderer_is_reported() {
    let registry = Arc::new(CountingRegistry::new(&[]));
    let factory = build(registry, TypeTable::new(), OverridePolicy::default());
    let err = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .expect_err("no renderer");
    assert!(matches!(err, ResolveError::NoRendererFound { .. }));
}

#[test]
fn theme_without_extended_factory_keeps_default_order() {
    let mut types = base_types();
    types
        .register_renderer("mod_fancy\\output\\core_customfield_renderer", stub("fancy"))
        .unwrap();
    let mut theme = ThemeConfig::contentmodifier();
    theme.renderer_factory = RendererFactoryKind::ThemeOverridden;

    let factory = ExtendedRendererFactory::from_theme(
        &theme,
        Arc::new(CountingRegistry::new(&[("mod", "fancy")])),
        Arc::new(types),
    );
    let resolved = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .unwrap();
    assert_eq!(resolved.type_name, "core_customfield\\output\\renderer");
}

#[test]
fn shipped_theme_enables_extension_substitution() {
    let mut types = base_types();
    types
        .register_renderer("mod_fancy\\output\\core_customfield_renderer", stub("fancy"))
        .unwrap();
    let factory = ExtendedRendererFactory::from_theme(
        &ThemeConfig::contentmodifier(),
        Arc::new(CountingRegistry::new(&[("mod", "fancy")])),
        Arc::new(types),
    );
    let resolved = factory
        .resolve_renderer(&page(), "core_customfield", None, None)
        .unwrap();
    assert_eq!(
        resolved.type_name,
        "mod_fancy\\output\\core_customfield_renderer"
    );
}
