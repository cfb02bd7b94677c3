//! Page context and rendering targets.
//!
//! The page context is owned by the host request; the engine only passes it
//! through to renderer factories.

/// Opaque request-scoped page context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Page type identifier, e.g. `course-view-topics`.
    pub page_type: String,
    /// Requested URL path.
    pub url: String,
    /// Page title.
    pub title: String,
}

impl PageContext {
    pub fn new(page_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            page_type: page_type.into(),
            url: url.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Rendering target requested by the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    General,
    Maintenance,
    Cli,
    Ajax,
    TextEmail,
    HtmlEmail,
}

impl RenderTarget {
    /// Host constant for the target.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Maintenance => "maintenance",
            Self::Cli => "cli",
            Self::Ajax => "ajax",
            Self::TextEmail => "textemail",
            Self::HtmlEmail => "htmlemail",
        }
    }
}
