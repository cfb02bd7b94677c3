//! Installed-extension namespace prefixes.

use std::fmt::{Display, Formatter};

/// Namespace prefix of one installed extension, `{category}_{identifier}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacePrefix(String);

impl NamespacePrefix {
    pub fn new(category: &str, identifier: &str) -> Self {
        Self(format!("{category}_{identifier}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Concatenates prefix and template without inserting a separator.
    pub fn qualify(&self, name_template: &str) -> String {
        format!("{}{}", self.0, name_template)
    }
}

impl Display for NamespacePrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NamespacePrefix {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
