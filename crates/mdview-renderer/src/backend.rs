//! Render backend trait for format-specific rendering.
//!
//! The tree walk in [`MarkdownRenderer`](crate::MarkdownRenderer) handles the
//! structure shared by all outputs (paragraphs, lists, tables, inline spans)
//! and delegates the format-specific elements to a backend.

/// Backend trait for format-specific rendering operations.
///
/// Implementations provide rendering for:
/// - Code blocks (container around already-highlighted or escaped markup)
/// - Blockquotes
/// - Images
/// - Breaks, rules and task list checkboxes
pub trait RenderBackend {
    /// Render a code block.
    ///
    /// # Arguments
    ///
    /// * `lang` - Optional language identifier (e.g., "rust", "python")
    /// * `body` - Code markup, already escaped or highlighted
    /// * `out` - Output buffer to write to
    fn code_block(lang: Option<&str>, body: &str, out: &mut String);

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String);

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String);

    /// Render an image.
    ///
    /// # Arguments
    ///
    /// * `src` - Image source URL
    /// * `alt` - Alt text for the image
    /// * `title` - Optional title attribute (empty if absent)
    /// * `out` - Output buffer to write to
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a hard break.
    ///
    /// Default uses `<br>`.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    ///
    /// Default uses `<hr>`.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker.
    ///
    /// Default uses a disabled HTML checkbox.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
