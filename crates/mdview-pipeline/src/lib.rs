//! Markdown to safe HTML.
//!
//! [`Pipeline`] composes the markdown renderer, the code highlighter and the
//! sanitizer into one call:
//!
//! ```text
//! source ──▶ MarkdownRenderer ──▶ unsafe HTML ──▶ Sanitizer ──▶ safe HTML
//!                  │
//!                  └──▶ Highlighter (per fenced code block)
//! ```
//!
//! Rendering is synchronous and keeps no state between calls. A [`Pipeline`]
//! can be shared across threads and called concurrently.
//!
//! # Example
//!
//! ```
//! let html = mdview_pipeline::render_safe("<script>alert(1)</script>**bold**");
//! assert_eq!(html, "<p><strong>bold</strong></p>");
//! ```

use std::sync::LazyLock;

use mdview_highlight::Highlighter;
use mdview_renderer::{HtmlBackend, MarkdownRenderer};
use mdview_sanitize::Sanitizer;

pub use mdview_highlight::HighlightOptions;
pub use mdview_sanitize::SanitizeOptions;

/// Pipeline configuration, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Enable tables, strikethrough and task lists.
    pub gfm: bool,
    /// Code highlighting options. `None` leaves code blocks as escaped text.
    pub highlight: Option<HighlightOptions>,
    /// Sanitizer options.
    pub sanitize: SanitizeOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            highlight: Some(HighlightOptions::default()),
            sanitize: SanitizeOptions::default(),
        }
    }
}

/// Markdown to safe HTML pipeline.
pub struct Pipeline {
    renderer: MarkdownRenderer<HtmlBackend>,
    sanitizer: Sanitizer,
}

impl Pipeline {
    /// Build a pipeline from configuration.
    #[must_use]
    pub fn new(config: &PipelineConfig) -> Self {
        let mut renderer = MarkdownRenderer::<HtmlBackend>::new().with_gfm(config.gfm);
        if let Some(options) = &config.highlight {
            renderer = renderer.with_highlighter(Highlighter::with_options(options));
        }
        Self {
            renderer,
            sanitizer: Sanitizer::with_options(config.sanitize),
        }
    }

    /// Render markdown to HTML without sanitizing.
    ///
    /// The result may contain raw HTML from the source and must not be
    /// displayed as is.
    #[must_use]
    pub fn render_unsafe(&self, source: &str) -> String {
        self.renderer.render(source)
    }

    /// Render markdown to sanitized HTML.
    ///
    /// Never fails: malformed markdown renders as text, highlighting errors
    /// fall back to plain code and unsafe markup is stripped.
    #[must_use]
    pub fn render_safe(&self, source: &str) -> String {
        let unsafe_html = self.renderer.render(source);
        let html = self.sanitizer.sanitize(&unsafe_html);
        tracing::debug!(
            source_bytes = source.len(),
            rendered_bytes = unsafe_html.len(),
            safe_bytes = html.len(),
            "Rendered markdown"
        );
        html
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

static DEFAULT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::default);

/// Render markdown to sanitized HTML with the default configuration.
#[must_use]
pub fn render_safe(source: &str) -> String {
    DEFAULT_PIPELINE.render_safe(source)
}
