//! Renderer and content-modifier capability contracts.

use crate::model::page::PageContext;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closing tag that anchors appended content.
pub const MAIN_CONTENT_ANCHOR: &str = "</div>";

/// Renderer capability for one framework component.
pub trait Renderer: Send + Sync {
    /// Returns rendered main-content HTML for `page`.
    fn main_content(&self, page: &PageContext) -> String;
}

/// Content-modifier capability implemented by plugins and themes.
pub trait ContentModifier: Send + Sync {
    /// Rewrites rendered main content. Default keeps it unchanged.
    fn modify_main_content(&self, content: String) -> String {
        content
    }

    /// HTML to splice before the last closing `</div>` of the main content.
    fn content_to_attach_to_main(&self) -> String;
}

/// Appending behavior shared by every modifier.
///
/// Implemented for all `ContentModifier` types through a blanket impl, so
/// modifiers cannot replace it.
pub trait ContentModifierExt {
    /// Splices `content_to_attach_to_main()` immediately before the last
    /// `</div>` in `content`.
    ///
    /// # Errors
    /// - Returns `MalformedContentError` when `content` has no `</div>`.
    fn append_content_to_main(&self, content: &str) -> Result<String, MalformedContentError>;
}

impl<M: ContentModifier + ?Sized> ContentModifierExt for M {
    fn append_content_to_main(&self, content: &str) -> Result<String, MalformedContentError> {
        let Some(anchor) = content.rfind(MAIN_CONTENT_ANCHOR) else {
            return Err(MalformedContentError {
                content_len: content.len(),
            });
        };
        let attachment = self.content_to_attach_to_main();
        let mut spliced = String::with_capacity(content.len() + attachment.len());
        spliced.push_str(&content[..anchor]);
        spliced.push_str(&attachment);
        spliced.push_str(&content[anchor..]);
        Ok(spliced)
    }
}

/// Main content lacks the closing `</div>` anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedContentError {
    pub content_len: usize,
}

impl Display for MalformedContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "main content has an unexpected format: no `{MAIN_CONTENT_ANCHOR}` in {} bytes",
            self.content_len
        )
    }
}

impl Error for MalformedContentError {}

#[cfg(test)]
mod tests {
    use super::{ContentModifier, ContentModifierExt, MalformedContentError};

    struct Extra;

    impl ContentModifier for Extra {
        fn content_to_attach_to_main(&self) -> String {
            "<p>extra</p>".to_string()
        }
    }

    #[test]
    fn appends_before_closing_div() {
        let out = Extra
            .append_content_to_main("<div>hello</div>")
            .expect("anchor present");
        assert_eq!(out, "<div>hello<p>extra</p></div>");
    }

    #[test]
    fn uses_last_closing_div_and_keeps_trailing_text() {
        let out = Extra
            .append_content_to_main("<div><div>a</div></div>\n")
            .unwrap();
        assert_eq!(out, "<div><div>a</div><p>extra</p></div>\n");
    }

    #[test]
    fn anchor_at_start_is_accepted() {
        let out = Extra.append_content_to_main("</div>").unwrap();
        assert_eq!(out, "<p>extra</p></div>");
    }

    #[test]
    fn missing_anchor_fails() {
        let err = Extra
            .append_content_to_main("no closing tag here")
            .expect_err("missing anchor must fail");
        assert_eq!(err, MalformedContentError { content_len: 19 });
    }

    #[test]
    fn default_modify_is_identity() {
        assert_eq!(Extra.modify_main_content("<div/>".to_string()), "<div/>");
    }
}
