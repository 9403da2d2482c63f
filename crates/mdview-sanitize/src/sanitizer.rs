//! HTML sanitizer.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::policy::{
    ALLOWED_TAGS, GENERIC_ATTRIBUTES, LINK_REL, REMOVED_WITH_CONTENT, TAG_ATTRIBUTES, URL_SCHEMES,
};
use crate::url::{is_safe_image, is_safe_link};

/// Sanitizer options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Keep `data:image/*` sources on images.
    pub allow_data_images: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            allow_data_images: true,
        }
    }
}

/// Allow-list HTML sanitizer.
///
/// Input is parsed with html5ever and re-serialized, so the output is always
/// well-formed. Anything not on the allow-list is dropped: unknown elements
/// lose their tags but keep their text, while `script`, `style`, `iframe` and
/// similar are removed with their content.
///
/// Sanitizing is idempotent: running the output through again yields the
/// same string.
///
/// # Example
///
/// ```
/// use mdview_sanitize::Sanitizer;
///
/// let sanitizer = Sanitizer::new();
/// assert_eq!(
///     sanitizer.sanitize(r#"<p onclick="x()">hi<script>alert(1)</script></p>"#),
///     "<p>hi</p>"
/// );
/// ```
pub struct Sanitizer {
    builder: Builder<'static>,
}

impl Sanitizer {
    /// Create a sanitizer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SanitizeOptions::default())
    }

    /// Create a sanitizer from options.
    #[must_use]
    pub fn with_options(options: SanitizeOptions) -> Self {
        let tag_attributes: HashMap<&str, HashSet<&str>> = TAG_ATTRIBUTES
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect();
        let allow_data_images = options.allow_data_images;

        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .clean_content_tags(REMOVED_WITH_CONTENT.iter().copied().collect())
            .tag_attributes(tag_attributes)
            .generic_attributes(GENERIC_ATTRIBUTES.iter().copied().collect())
            .url_schemes(URL_SCHEMES.iter().copied().collect())
            .link_rel(Some(LINK_REL))
            .strip_comments(true)
            .set_tag_attribute_value("input", "disabled", "")
            .attribute_filter(move |element, attribute, value| {
                filter_attribute(element, attribute, value, allow_data_images)
            });

        Self { builder }
    }

    /// Sanitize an HTML fragment.
    #[must_use]
    pub fn sanitize(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-attribute checks beyond the allow-list.
///
/// `input` keeps its `type` only as `checkbox`. Its `disabled` flag is the
/// single forced attribute value, so attribute order never depends on map
/// iteration.
fn filter_attribute<'u>(
    element: &str,
    attribute: &str,
    value: &'u str,
    allow_data_images: bool,
) -> Option<Cow<'u, str>> {
    let keep = match (element, attribute) {
        ("a", "href") => is_safe_link(value),
        ("img", "src") => is_safe_image(value, allow_data_images),
        ("input", "type") => return Some(Cow::Borrowed("checkbox")),
        _ => true,
    };
    keep.then_some(Cow::Borrowed(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clean(html: &str) -> String {
        Sanitizer::new().sanitize(html)
    }

    #[test]
    fn test_script_removed_with_content() {
        assert_eq!(clean("<script>alert(1)</script><p>ok</p>"), "<p>ok</p>");
    }

    #[test]
    fn test_dangerous_containers_removed_with_content() {
        for tag in ["style", "iframe", "object", "noscript", "template"] {
            let html = format!("<{tag}>payload</{tag}><p>ok</p>");
            assert_eq!(clean(&html), "<p>ok</p>", "tag {tag}");
        }
        assert_eq!(clean(r#"<embed src="x.swf"><p>ok</p>"#), "<p>ok</p>");
    }

    #[test]
    fn test_event_handlers_and_style_removed() {
        assert_eq!(
            clean(r#"<p onclick="x()" onmouseover="y()" style="color:red">hi</p>"#),
            "<p>hi</p>"
        );
        assert_eq!(clean(r#"<img src="a.png" onerror="x()">"#), r#"<img src="a.png">"#);
    }

    #[test]
    fn test_unknown_tags_keep_text() {
        assert_eq!(clean("<custom>hi</custom> <form>there</form>"), "hi there");
    }

    #[test]
    fn test_safe_link_gets_rel() {
        assert_eq!(
            clean(r#"<a href="https://example.com" title="Home">x</a>"#),
            r#"<a href="https://example.com" title="Home" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn test_relative_and_mailto_links_kept() {
        assert!(clean(r#"<a href="/docs/page">x</a>"#).contains(r#"href="/docs/page""#));
        assert!(clean(r##"<a href="#top">x</a>"##).contains(r##"href="#top""##));
        assert!(clean(r#"<a href="mailto:me@example.com">x</a>"#).contains("mailto:"));
    }

    #[test]
    fn test_script_href_removed() {
        for href in [
            "javascript:alert(1)",
            "JaVaScRiPt:alert(1)",
            " javascript:alert(1)",
            "java&#x09;script:alert(1)",
            "&#106;avascript:alert(1)",
            "data:text/html;base64,PHNjcmlwdD4=",
            "vbscript:msgbox(1)",
        ] {
            let html = clean(&format!(r#"<a href="{href}">x</a>"#));
            assert_eq!(html, r#"<a rel="noopener noreferrer">x</a>"#, "href {href}");
        }
    }

    #[test]
    fn test_image_sources() {
        assert_eq!(
            clean(r#"<img src="data:image/png;base64,AAAA" alt="dot">"#),
            r#"<img src="data:image/png;base64,AAAA" alt="dot">"#
        );
        assert_eq!(clean(r#"<img src="data:text/html,x">"#), "<img>");
        assert_eq!(clean(r#"<img src="javascript:alert(1)">"#), "<img>");
        assert_eq!(
            clean(r#"<img src="https://cdn.example.com/a.png">"#),
            r#"<img src="https://cdn.example.com/a.png">"#
        );
    }

    #[test]
    fn test_data_images_can_be_disabled() {
        let sanitizer = Sanitizer::with_options(SanitizeOptions {
            allow_data_images: false,
        });
        assert_eq!(
            sanitizer.sanitize(r#"<img src="data:image/png;base64,AAAA">"#),
            "<img>"
        );
    }

    #[test]
    fn test_code_classes_kept() {
        let html = r#"<pre class="language-js"><code class="language-js"><span class="line-number">1 | </span><span class="source js">x</span></code></pre>"#;
        assert_eq!(clean(html), html);
    }

    #[test]
    fn test_heading_ids_and_table_alignment_kept() {
        let html = r#"<h2 id="faq">FAQ</h2><table><thead><tr><th align="right">A</th></tr></thead><tbody><tr><td align="right">1</td></tr></tbody></table>"#;
        assert_eq!(clean(html), html);
    }

    #[test]
    fn test_class_removed_where_not_allowed() {
        assert_eq!(clean(r#"<p class="x" id="y">hi</p>"#), "<p>hi</p>");
    }

    #[test]
    fn test_input_forced_to_disabled_checkbox() {
        let html = clean(r#"<input type="text" name="q" checked>"#);
        assert!(html.contains(r#"type="checkbox""#), "got {html}");
        assert!(html.contains("disabled"), "got {html}");
        assert!(!html.contains("text"), "got {html}");
        assert!(!html.contains("name"), "got {html}");
    }

    #[test]
    fn test_task_checkbox_output_is_exact() {
        assert_eq!(
            clean(r#"<input type="checkbox" checked disabled> task"#),
            r#"<input type="checkbox" checked="" disabled=""> task"#
        );
    }

    #[test]
    fn test_output_identical_across_instances() {
        let html = r#"<input disabled type="text" checked><a href="https://example.com" title="t">x</a>"#;
        let expected = Sanitizer::new().sanitize(html);
        for _ in 0..16 {
            let sanitizer = Sanitizer::new();
            assert_eq!(sanitizer.sanitize(html), expected);
            assert_eq!(Sanitizer::new().sanitize(&expected), expected);
        }
    }

    #[test]
    fn test_comments_stripped() {
        assert_eq!(clean("<p>a<!-- hidden -->b</p>"), "<p>ab</p>");
    }

    #[test]
    fn test_output_is_well_formed() {
        assert_eq!(clean("<p><em>unclosed"), "<p><em>unclosed</em></p>");
        assert_eq!(clean("<ul><li>a<li>b</ul>"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_idempotent() {
        let sanitizer = Sanitizer::new();
        let inputs = [
            r#"<a href="https://example.com">x</a>"#,
            r#"<a href="javascript:x">y</a>"#,
            r#"<input type="checkbox" checked disabled> task"#,
            r#"<p onclick="x">a<script>b</script>c</p>"#,
            "<p><em>unclosed",
            r#"<img src="data:image/gif;base64,R0lGOD" alt="a &amp; b">"#,
            "<table><tr><td>no tbody</td></tr></table>",
            "plain &lt;text&gt; &amp; more",
            "",
        ];
        for input in inputs {
            let once = sanitizer.sanitize(input);
            let twice = sanitizer.sanitize(&once);
            assert_eq!(twice, once, "input {input}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean(""), "");
    }
}
