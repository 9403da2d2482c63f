//! HTML backend for markdown rendering.
//!
//! Produces semantic HTML5 output suitable for web display.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::state::escape_html;

/// Class prefix for language-tagged code containers.
const LANG_PREFIX: &str = "language-";

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<pre class="language-x"><code class="language-x">` for tagged code blocks
/// - `<pre><code>` for untagged code blocks
/// - `<blockquote>` for blockquotes
/// - `<img>` for images
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(lang: Option<&str>, body: &str, out: &mut String) {
        if let Some(lang) = lang {
            let class = format!("{LANG_PREFIX}{}", escape_html(lang));
            write!(
                out,
                r#"<pre class="{class}"><code class="{class}">{body}</code></pre>"#
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{body}</code></pre>").unwrap();
        }
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        HtmlBackend::code_block(Some("rust"), "fn main() {}", &mut out);
        assert_eq!(
            out,
            r#"<pre class="language-rust"><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let mut out = String::new();
        HtmlBackend::code_block(None, "plain code", &mut out);
        assert_eq!(out, "<pre><code>plain code</code></pre>");
    }

    #[test]
    fn test_code_block_language_is_escaped() {
        let mut out = String::new();
        HtmlBackend::code_block(Some(r#"x"onclick="y"#), "", &mut out);
        assert!(!out.contains(r#""onclick"#));
        assert!(out.contains("language-x&quot;onclick=&quot;y"));
    }

    #[test]
    fn test_blockquote() {
        let mut out = String::new();
        HtmlBackend::blockquote_start(&mut out);
        out.push_str("content");
        HtmlBackend::blockquote_end(&mut out);
        assert_eq!(out, "<blockquote>content</blockquote>");
    }

    #[test]
    fn test_image() {
        let mut out = String::new();
        HtmlBackend::image("image.png", "Alt text", "", &mut out);
        assert_eq!(out, r#"<img src="image.png" alt="Alt text">"#);
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        HtmlBackend::image("image.png", "Alt text", "Image title", &mut out);
        assert_eq!(
            out,
            r#"<img src="image.png" title="Image title" alt="Alt text">"#
        );
    }

    #[test]
    fn test_default_breaks_and_rules() {
        let mut out = String::new();
        HtmlBackend::hard_break(&mut out);
        HtmlBackend::horizontal_rule(&mut out);
        assert_eq!(out, "<br><hr>");
    }

    #[test]
    fn test_task_list_marker() {
        let mut out = String::new();
        HtmlBackend::task_list_marker(true, &mut out);
        assert_eq!(out, r#"<input type="checkbox" checked disabled> "#);
    }
}
