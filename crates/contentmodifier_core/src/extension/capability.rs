//! Output capabilities an extension type can implement.

use std::fmt::{Display, Formatter};

/// Contract a registered type is stored under in the type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Renderer,
    ContentModifier,
}

impl Capability {
    /// Stable string id used in logs and table errors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Renderer => "renderer",
            Self::ContentModifier => "content_modifier",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
