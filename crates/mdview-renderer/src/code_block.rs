//! Code block highlighting hook.
//!
//! The renderer never tokenizes code itself. Fenced blocks with a language tag
//! are handed to a [`CodeHighlighter`], which returns the HTML fragment placed
//! inside the language-classed `<pre><code>` container.
//!
//! # Example
//!
//! ```
//! use mdview_renderer::{CodeHighlighter, HtmlBackend, MarkdownRenderer, escape_html};
//!
//! struct Upper;
//!
//! impl CodeHighlighter for Upper {
//!     fn highlight(&self, code: &str, _language: Option<&str>) -> String {
//!         escape_html(&code.to_uppercase())
//!     }
//! }
//!
//! let html = MarkdownRenderer::<HtmlBackend>::new()
//!     .with_highlighter(Upper)
//!     .render("```txt\nhello\n```");
//! assert!(html.contains("HELLO"));
//! ```

/// Produces highlighted markup for a code block.
///
/// Implementations must be infallible from the caller's point of view: on any
/// failure they return the code HTML-escaped, never an error or a panic.
/// The returned string is inserted into the output verbatim.
pub trait CodeHighlighter: Send + Sync {
    /// Highlight `code` written in `language`.
    fn highlight(&self, code: &str, language: Option<&str>) -> String;
}

/// Extract the language tag from a fence info string.
///
/// The tag is the first whitespace-delimited word; anything after it is ignored.
#[must_use]
pub(crate) fn parse_fence_info(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fence_info_language_only() {
        assert_eq!(parse_fence_info("rust"), Some("rust"));
    }

    #[test]
    fn test_parse_fence_info_with_trailing_words() {
        assert_eq!(parse_fence_info("js title=\"app.js\""), Some("js"));
    }

    #[test]
    fn test_parse_fence_info_leading_whitespace() {
        assert_eq!(parse_fence_info("  python  "), Some("python"));
    }

    #[test]
    fn test_parse_fence_info_empty() {
        assert_eq!(parse_fence_info(""), None);
    }

    #[test]
    fn test_parse_fence_info_whitespace_only() {
        assert_eq!(parse_fence_info("   "), None);
    }
}
