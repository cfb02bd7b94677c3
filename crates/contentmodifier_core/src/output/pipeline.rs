//! Main-content pipeline: render, then fold modifiers left-to-right.

use crate::model::page::PageContext;
use crate::output::modifier::{ContentModifierExt, MalformedContentError};
use crate::resolver::{ExtendedRendererFactory, ResolveError, ResolvedModifier, CORE_COMPONENT};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Pipeline failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Resolve(ResolveError),
    MalformedContent {
        type_name: String,
        source: MalformedContentError,
    },
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolve(err) => write!(f, "{err}"),
            Self::MalformedContent { type_name, source } => {
                write!(f, "modifier `{type_name}` cannot append: {source}")
            }
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolve(err) => Some(err),
            Self::MalformedContent { source, .. } => Some(source),
        }
    }
}

impl From<ResolveError> for PipelineError {
    fn from(value: ResolveError) -> Self {
        Self::Resolve(value)
    }
}

/// Applies each modifier in order: `modify_main_content`, then
/// `append_content_to_main`.
///
/// Stops at the first modifier whose append finds no anchor.
pub fn apply_modifiers(
    content: impl Into<String>,
    modifiers: &[ResolvedModifier],
) -> Result<String, PipelineError> {
    modifiers
        .iter()
        .try_fold(content.into(), |content, resolved| {
            let modified = resolved.modifier.modify_main_content(content);
            resolved
                .modifier
                .append_content_to_main(modified.as_str())
                .map_err(|source| PipelineError::MalformedContent {
                    type_name: resolved.type_name.clone(),
                    source,
                })
        })
}

/// Renders the main content of `page` with the core renderer and every
/// installed modifier.
pub fn render_main_content(
    factory: &ExtendedRendererFactory,
    page: &PageContext,
) -> Result<String, PipelineError> {
    let renderer = factory.resolve_renderer(page, CORE_COMPONENT, None, None)?;
    let content = renderer.renderer.main_content(page);
    let modifiers = factory.get_modifiers()?;
    debug!(
        "event=main_content_render module=pipeline renderer={} modifiers={}",
        renderer.type_name,
        modifiers.len()
    );
    apply_modifiers(content, &modifiers)
}
