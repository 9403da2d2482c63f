//! Generic markdown renderer with pluggable backend.

use std::fmt::Write;
use std::marker::PhantomData;
use std::sync::Arc;

use pulldown_cmark::{Options, Parser};

use crate::ast::{Document, ListItem, Node, Table, plain_text};
use crate::backend::RenderBackend;
use crate::code_block::CodeHighlighter;
use crate::state::{HeadingIds, escape_html};
use crate::tree::TreeBuilder;

/// Generic markdown renderer with pluggable backend.
///
/// Parsing folds the event stream into a [`Document`]; rendering walks that
/// tree once, handling common elements (tables, lists, inline formatting)
/// itself and delegating format-specific ones to the [`RenderBackend`].
///
/// The renderer holds no per-call state, so one instance can serve any number
/// of concurrent [`render`](Self::render) calls.
pub struct MarkdownRenderer<B: RenderBackend> {
    /// Enable GitHub-flavored extensions (tables, strikethrough, task lists).
    gfm: bool,
    /// Highlighter for fenced code blocks with a language tag.
    highlighter: Option<Arc<dyn CodeHighlighter>>,
    _backend: PhantomData<fn() -> B>,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Create a new renderer with GFM enabled and no highlighter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            highlighter: None,
            _backend: PhantomData,
        }
    }

    /// Enable or disable GitHub-flavored extensions.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Set the code highlighter.
    #[must_use]
    pub fn with_highlighter<H: CodeHighlighter + 'static>(self, highlighter: H) -> Self {
        self.with_shared_highlighter(Arc::new(highlighter))
    }

    /// Set a highlighter shared with other renderers.
    #[must_use]
    pub fn with_shared_highlighter(mut self, highlighter: Arc<dyn CodeHighlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Parser options for the configured dialect.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Create a pulldown-cmark parser for the configured dialect.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Parse markdown into a document tree.
    #[must_use]
    pub fn parse(&self, markdown: &str) -> Document {
        TreeBuilder::with_options(self.parser_options()).build(self.create_parser(markdown))
    }

    /// Render markdown to HTML.
    ///
    /// Raw HTML in the source is passed through; the result is not safe to
    /// display without sanitization.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        self.render_document(&self.parse(markdown))
    }

    /// Render an already parsed document.
    #[must_use]
    pub fn render_document(&self, document: &Document) -> String {
        let mut walker = Walker::<B> {
            highlighter: self.highlighter.as_deref(),
            ids: HeadingIds::default(),
            _backend: PhantomData,
        };
        let mut out = String::with_capacity(4096);
        walker.nodes(&document.nodes, &mut out);
        out
    }
}

impl<B: RenderBackend> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Single render pass over a document tree.
struct Walker<'r, B> {
    highlighter: Option<&'r dyn CodeHighlighter>,
    ids: HeadingIds,
    _backend: PhantomData<fn() -> B>,
}

impl<B: RenderBackend> Walker<'_, B> {
    fn nodes(&mut self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.node(node, out);
        }
    }

    fn node(&mut self, node: &Node, out: &mut String) {
        match node {
            Node::Heading { level, children } => self.heading(*level, children, out),
            Node::Paragraph(children) => self.wrap("p", children, out),
            Node::BlockQuote(children) => {
                B::blockquote_start(out);
                self.nodes(children, out);
                B::blockquote_end(out);
            }
            Node::CodeBlock(block) => {
                let language = block.language.as_deref();
                let body = match (language, self.highlighter) {
                    (Some(lang), Some(highlighter)) => {
                        highlighter.highlight(&block.content, Some(lang))
                    }
                    _ => escape_html(&block.content),
                };
                B::code_block(language, &body, out);
            }
            Node::List { start, items } => self.list(*start, items, out),
            Node::Table(table) => self.table(table, out),
            Node::Rule => B::horizontal_rule(out),
            Node::Emphasis(children) => self.wrap("em", children, out),
            Node::Strong(children) => self.wrap("strong", children, out),
            Node::Strikethrough(children) => self.wrap("del", children, out),
            Node::Link {
                href,
                title,
                children,
            } => {
                write!(out, r#"<a href="{}""#, escape_html(href)).unwrap();
                if !title.is_empty() {
                    write!(out, r#" title="{}""#, escape_html(title)).unwrap();
                }
                out.push('>');
                self.nodes(children, out);
                out.push_str("</a>");
            }
            Node::Image { src, title, alt } => B::image(src, alt, title, out),
            Node::Code(code) => write!(out, "<code>{}</code>", escape_html(code)).unwrap(),
            Node::Html(html) => out.push_str(html),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::TaskMarker(checked) => B::task_list_marker(*checked, out),
            Node::SoftBreak => out.push('\n'),
            Node::HardBreak => B::hard_break(out),
        }
    }

    fn wrap(&mut self, tag: &str, children: &[Node], out: &mut String) {
        write!(out, "<{tag}>").unwrap();
        self.nodes(children, out);
        write!(out, "</{tag}>").unwrap();
    }

    fn heading(&mut self, level: u8, children: &[Node], out: &mut String) {
        let mut inner = String::new();
        self.nodes(children, &mut inner);
        match self.ids.next_id(&plain_text(children)) {
            Some(id) => write!(
                out,
                r#"<h{level} id="{}">{}</h{level}>"#,
                escape_html(&id),
                inner.trim()
            ),
            None => write!(out, "<h{level}>{}</h{level}>", inner.trim()),
        }
        .unwrap();
    }

    fn list(&mut self, start: Option<u64>, items: &[ListItem], out: &mut String) {
        match start {
            Some(1) => out.push_str("<ol>"),
            Some(n) => write!(out, r#"<ol start="{n}">"#).unwrap(),
            None => out.push_str("<ul>"),
        }
        for item in items {
            out.push_str("<li>");
            self.nodes(&item.children, out);
            out.push_str("</li>");
        }
        out.push_str(if start.is_some() { "</ol>" } else { "</ul>" });
    }

    fn table(&mut self, table: &Table, out: &mut String) {
        out.push_str("<table><thead><tr>");
        for (column, cell) in table.head.iter().enumerate() {
            write!(out, "<th{}>", table.alignment(column).html_attr()).unwrap();
            self.nodes(cell, out);
            out.push_str("</th>");
        }
        out.push_str("</tr></thead><tbody>");
        for row in &table.rows {
            out.push_str("<tr>");
            for (column, cell) in row.iter().enumerate() {
                write!(out, "<td{}>", table.alignment(column).html_attr()).unwrap();
                self.nodes(cell, out);
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
    }
}
