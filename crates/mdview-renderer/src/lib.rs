//! Markdown renderer with a typed document tree and pluggable backends.
//!
//! This crate provides a generic [`MarkdownRenderer`] that parses markdown
//! into a [`Document`] and renders it through the [`RenderBackend`] trait.
//!
//! # Architecture
//!
//! - [`TreeBuilder`] folds pulldown-cmark events into [`Node`] variants,
//!   normalizing tables and capping nesting at [`MAX_NESTING`].
//! - The renderer walks the tree once; shared structure (lists, tables,
//!   inline formatting) is handled generically, format-specific elements
//!   (code blocks, blockquotes, images) are delegated to the backend.
//! - Fenced code is highlighted through a [`CodeHighlighter`] supplied by
//!   the caller. Without one, code is escaped verbatim.
//!
//! Raw HTML passes through untouched, so rendered output must be sanitized
//! before display.
//!
//! # Example
//!
//! ```
//! use mdview_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let html = MarkdownRenderer::<HtmlBackend>::new().render("# Hello\n\n**Bold** text");
//! assert_eq!(
//!     html,
//!     r#"<h1 id="hello">Hello</h1><p><strong>Bold</strong> text</p>"#
//! );
//! ```

mod ast;
mod backend;
mod code_block;
mod html;
mod renderer;
mod state;
mod tree;
mod util;

pub use ast::{Align, Cell, CodeBlock, Document, ListItem, Node, Table, plain_text};
pub use backend::RenderBackend;
pub use code_block::CodeHighlighter;
pub use html::HtmlBackend;
pub use renderer::MarkdownRenderer;
pub use state::{HeadingIds, escape_html, slugify};
pub use tree::{MAX_NESTING, TreeBuilder};
