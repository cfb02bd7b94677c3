//! Explicit table of typed factories keyed by capability and type name.
//!
//! # Responsibility
//! - Stand in for runtime type probing: a type "exists" when a factory is
//!   registered under its fully-qualified name.
//! - Construct renderers with `(page, target)` and modifiers with no input.
//!
//! # Invariants
//! - Type names are stored without a leading namespace separator.
//! - One factory per `(capability, type name)`.

use crate::extension::capability::Capability;
use crate::model::candidate::NAMESPACE_SEPARATOR;
use crate::model::page::{PageContext, RenderTarget};
use crate::output::modifier::{ContentModifier, Renderer};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Renderer constructor.
pub type RendererCtor = Arc<
    dyn Fn(&PageContext, Option<RenderTarget>) -> Result<Box<dyn Renderer>, ConstructError>
        + Send
        + Sync,
>;

/// Content-modifier constructor.
pub type ModifierCtor =
    Arc<dyn Fn() -> Result<Box<dyn ContentModifier>, ConstructError> + Send + Sync>;

/// Construction failure reported by a registered factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructError(pub String);

impl ConstructError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl Display for ConstructError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for ConstructError {}

/// Strips leading namespace separators from a type name.
pub fn normalize_type_name(type_name: &str) -> &str {
    type_name.trim().trim_start_matches(NAMESPACE_SEPARATOR)
}

/// Registered extension types.
#[derive(Default, Clone)]
pub struct TypeTable {
    renderers: BTreeMap<String, RendererCtor>,
    modifiers: BTreeMap<String, ModifierCtor>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a renderer type under its fully-qualified name.
    pub fn register_renderer<F>(&mut self, type_name: &str, factory: F) -> Result<(), TypeTableError>
    where
        F: Fn(&PageContext, Option<RenderTarget>) -> Result<Box<dyn Renderer>, ConstructError>
            + Send
            + Sync
            + 'static,
    {
        let key = checked_key(&self.renderers, Capability::Renderer, type_name)?;
        self.renderers.insert(key, Arc::new(factory));
        Ok(())
    }

    /// Registers a content-modifier type under its fully-qualified name.
    pub fn register_modifier<F>(&mut self, type_name: &str, factory: F) -> Result<(), TypeTableError>
    where
        F: Fn() -> Result<Box<dyn ContentModifier>, ConstructError> + Send + Sync + 'static,
    {
        let key = checked_key(&self.modifiers, Capability::ContentModifier, type_name)?;
        self.modifiers.insert(key, Arc::new(factory));
        Ok(())
    }

    pub fn renderer_factory(&self, type_name: &str) -> Option<RendererCtor> {
        self.renderers.get(normalize_type_name(type_name)).cloned()
    }

    pub fn modifier_factory(&self, type_name: &str) -> Option<ModifierCtor> {
        self.modifiers.get(normalize_type_name(type_name)).cloned()
    }

    pub fn len(&self) -> usize {
        self.renderers.len() + self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Debug for TypeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeTable")
            .field("renderers", &self.renderers.keys().collect::<Vec<_>>())
            .field("modifiers", &self.modifiers.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn checked_key<V>(
    entries: &BTreeMap<String, V>,
    capability: Capability,
    type_name: &str,
) -> Result<String, TypeTableError> {
    let key = normalize_type_name(type_name);
    if key.is_empty() {
        return Err(TypeTableError::EmptyTypeName);
    }
    if entries.contains_key(key) {
        return Err(TypeTableError::DuplicateType {
            capability,
            type_name: key.to_string(),
        });
    }
    Ok(key.to_string())
}

/// Type registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTableError {
    EmptyTypeName,
    DuplicateType {
        capability: Capability,
        type_name: String,
    },
}

impl Display for TypeTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTypeName => write!(f, "type name must not be empty"),
            Self::DuplicateType {
                capability,
                type_name,
            } => write!(f, "{capability} type already registered: {type_name}"),
        }
    }
}

impl Error for TypeTableError {}
