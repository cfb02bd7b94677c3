//! Renderer substitution and content-modifier resolution for themed output.
//!
//! Installed extensions register typed factories; the engine crosses naming
//! candidates with installed namespaces to substitute renderers and collect
//! main-content modifiers.

pub mod config;
pub mod extension;
pub mod logging;
pub mod model;
pub mod naming;
pub mod output;
pub mod resolver;

pub use config::{ConfigError, OverridePolicy, RendererFactoryKind, ThemeConfig};
pub use extension::capability::Capability;
pub use extension::manifest::{ManifestValidationError, PluginManifest};
pub use extension::registry::{
    enumerate_namespaces, InstallError, InstalledPlugins, PluginRegistry, RegistryError,
};
pub use extension::types::{ConstructError, TypeTable, TypeTableError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::candidate::{CandidateClassName, CandidateError};
pub use model::namespace::NamespacePrefix;
pub use model::page::{PageContext, RenderTarget};
pub use naming::{ModifierNaming, NamingError, NamingStrategy, StandardNaming};
pub use output::modifier::{
    ContentModifier, ContentModifierExt, MalformedContentError, Renderer,
};
pub use output::pipeline::{apply_modifiers, render_main_content, PipelineError};
pub use resolver::{
    DefaultRendererResolver, ExtendedRendererFactory, ModifierFactory, OutputFactory,
    ResolveError, ResolveResult, ResolvedModifier, ResolvedRenderer, ThemeOverriddenResolver,
    CORE_COMPONENT,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
