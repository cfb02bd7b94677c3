//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `contentmodifier_core` linkage.
//! - Run one main-content render through a demo plugin set, optionally with a
//!   theme configuration JSON file given as the first argument.

use contentmodifier_core::{
    render_main_content, ContentModifier, ExtendedRendererFactory, InstalledPlugins, PageContext,
    PluginManifest, Renderer, ThemeConfig, TypeTable,
};
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

struct DemoCoreRenderer;

impl Renderer for DemoCoreRenderer {
    fn main_content(&self, page: &PageContext) -> String {
        format!("<div role=\"main\"><h2>{}</h2></div>", page.title)
    }
}

struct DemoBanner;

impl ContentModifier for DemoBanner {
    fn content_to_attach_to_main(&self) -> String {
        "<aside class=\"banner\">Provided by local_banner</aside>".to_string()
    }
}

fn run() -> Result<String, Box<dyn Error>> {
    let theme = match std::env::args().nth(1) {
        Some(path) => ThemeConfig::load(path)?,
        None => ThemeConfig::contentmodifier(),
    };

    let mut registry = InstalledPlugins::with_categories(&["local", "theme"])?;
    registry.install(&PluginManifest::new("local", "banner", 2022041900))?;
    registry.install(&PluginManifest::new("theme", theme.name.as_str(), 2022041900))?;

    let mut types = TypeTable::new();
    types.register_renderer("core\\output\\renderer", |_, _| {
        Ok(Box::new(DemoCoreRenderer))
    })?;
    types.register_modifier("local_banner\\output\\core_modifier", || {
        Ok(Box::new(DemoBanner))
    })?;

    println!(
        "installed_plugins={} registered_types={}",
        registry.len(),
        types.len()
    );
    let factory = ExtendedRendererFactory::from_theme(&theme, Arc::new(registry), Arc::new(types));
    let page = PageContext::new("site-index", "/").with_title("Welcome");
    Ok(render_main_content(&factory, &page)?)
}

fn main() -> ExitCode {
    println!("contentmodifier_core ping={}", contentmodifier_core::ping());
    println!(
        "contentmodifier_core version={}",
        contentmodifier_core::core_version()
    );
    match run() {
        Ok(html) => {
            println!("main_content={html}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
