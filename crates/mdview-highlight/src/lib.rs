//! Syntax highlighting for fenced code blocks.
//!
//! [`Highlighter`] tokenizes code with syntect's bundled grammars and emits
//! class-tagged spans with a `N | ` line number gutter. It implements
//! [`mdview_renderer::CodeHighlighter`], so it plugs straight into the
//! markdown renderer:
//!
//! ```
//! use mdview_highlight::Highlighter;
//! use mdview_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let html = MarkdownRenderer::<HtmlBackend>::new()
//!     .with_highlighter(Highlighter::new())
//!     .render("```js\nconst a=1;\n```");
//! assert!(html.contains(r#"<code class="language-js"><span class="line-number">1 | </span>"#));
//! ```
//!
//! Highlighting never fails from the caller's point of view: unknown
//! languages and grammar errors fall back to escaped plain text.

mod error;
mod highlighter;
mod languages;

pub use error::HighlightError;
pub use highlighter::{HighlightOptions, Highlighter, LINE_NUMBER_CLASS};
