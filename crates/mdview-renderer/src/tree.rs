//! Event stream to document tree conversion.

use pulldown_cmark::{CodeBlockKind, Event, LinkType, Options, Parser, Tag, TagEnd};

use crate::ast::{Align, Cell, CodeBlock, Document, ListItem, Node, Table, plain_text};
use crate::code_block::parse_fence_info;
use crate::util::heading_level_to_num;

/// Maximum depth of nested container nodes.
///
/// Containers opened deeper than this are flattened into their parent so the
/// recursive tree walk stays bounded regardless of input.
pub const MAX_NESTING: usize = 128;

/// HTML elements whose block runs until the matching end tag.
const RAW_TEXT_TAGS: [&str; 4] = ["script", "pre", "style", "textarea"];

/// Open container on the builder stack.
struct Frame {
    kind: FrameKind,
    children: Vec<Node>,
}

enum FrameKind {
    Root,
    /// Tag without its own node (HTML block wrapper, disabled extensions, or
    /// a container past [`MAX_NESTING`]). Children flow into the parent.
    Transparent,
    /// Raw HTML block; its lines are collected and emitted on close.
    HtmlBlock(String),
    Paragraph,
    Heading(u8),
    BlockQuote,
    List {
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Item,
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    Table(Table),
    TableHead(Vec<Cell>),
    TableRow(Vec<Cell>),
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        href: String,
        title: String,
    },
    Image {
        src: String,
        title: String,
    },
}

impl FrameKind {
    /// Whether this frame produces a node of its own (counts toward nesting).
    fn is_container(&self) -> bool {
        !matches!(self, Self::Root | Self::Transparent | Self::HtmlBlock(_))
    }
}

/// Builds a [`Document`] from pulldown-cmark events.
///
/// The builder never fails: unbalanced or unexpected events are absorbed into
/// the nearest open container.
pub struct TreeBuilder {
    stack: Vec<Frame>,
    depth: usize,
    options: Options,
}

impl TreeBuilder {
    /// Create an empty builder for CommonMark without extensions.
    pub fn new() -> Self {
        Self::with_options(Options::empty())
    }

    /// Create an empty builder for input parsed with `options`.
    ///
    /// The options are reused when markdown trailing a raw HTML block has to
    /// be parsed separately.
    pub fn with_options(options: Options) -> Self {
        Self {
            stack: vec![Frame {
                kind: FrameKind::Root,
                children: Vec::new(),
            }],
            depth: 0,
            options,
        }
    }

    /// Consume all events and return the finished document.
    pub fn build<'a, I>(mut self, events: I) -> Document
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        // Close anything left open so no content is lost.
        while self.stack.len() > 1 {
            self.close_frame();
        }
        let root = self.stack.pop().map(|f| f.children).unwrap_or_default();
        Document { nodes: root }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(&tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_node(Node::Code(code.into_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                if let Some(FrameKind::HtmlBlock(block)) = self.top_kind_mut() {
                    block.push_str(&html);
                } else {
                    self.push_node(Node::Html(html.into_string()));
                }
            }
            Event::SoftBreak => {
                if let Some(FrameKind::CodeBlock { content, .. }) = self.top_kind_mut() {
                    content.push('\n');
                } else {
                    self.push_node(Node::SoftBreak);
                }
            }
            Event::HardBreak => self.push_node(Node::HardBreak),
            Event::Rule => self.push_node(Node::Rule),
            Event::TaskListMarker(checked) => self.push_node(Node::TaskMarker(checked)),
            // Extensions that are never enabled; keep their source visible.
            Event::FootnoteReference(label) => self.text(&format!("[^{label}]")),
            Event::InlineMath(math) => self.text(&format!("${math}$")),
            Event::DisplayMath(math) => self.text(&format!("$${math}$$")),
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::Paragraph => FrameKind::Paragraph,
            Tag::Heading { level, .. } => FrameKind::Heading(heading_level_to_num(level)),
            Tag::BlockQuote(_) => FrameKind::BlockQuote,
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(ref info) => parse_fence_info(info).map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                FrameKind::CodeBlock {
                    language,
                    content: String::new(),
                }
            }
            Tag::List(start) => FrameKind::List {
                start,
                items: Vec::new(),
            },
            Tag::Item => FrameKind::Item,
            Tag::Table(alignments) => FrameKind::Table(Table {
                alignments: alignments.into_iter().map(Align::from).collect(),
                ..Table::default()
            }),
            Tag::TableHead => FrameKind::TableHead(Vec::new()),
            Tag::TableRow => FrameKind::TableRow(Vec::new()),
            Tag::TableCell => FrameKind::TableCell,
            Tag::Emphasis => FrameKind::Emphasis,
            Tag::Strong => FrameKind::Strong,
            Tag::Strikethrough => FrameKind::Strikethrough,
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => {
                let href = if link_type == LinkType::Email {
                    format!("mailto:{dest_url}")
                } else {
                    dest_url.into_string()
                };
                FrameKind::Link {
                    href,
                    title: title.into_string(),
                }
            }
            Tag::Image {
                dest_url, title, ..
            } => FrameKind::Image {
                src: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::HtmlBlock => FrameKind::HtmlBlock(String::new()),
            Tag::FootnoteDefinition(_)
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => FrameKind::Transparent,
        };
        self.open_frame(kind);
    }

    fn open_frame(&mut self, kind: FrameKind) {
        let kind = if kind.is_container() && !self.accepts(&kind) {
            FrameKind::Transparent
        } else {
            kind
        };
        if kind.is_container() {
            self.depth += 1;
        }
        self.stack.push(Frame {
            kind,
            children: Vec::new(),
        });
    }

    /// Whether a container of `kind` can be opened at the current position.
    ///
    /// Structural children only need their structural parent; the depth cap
    /// is enforced on the parent, so they never lose content past the cap.
    fn accepts(&self, kind: &FrameKind) -> bool {
        let parent = self.stack.last().map(|f| &f.kind);
        match kind {
            FrameKind::Item => matches!(parent, Some(FrameKind::List { .. })),
            FrameKind::TableHead(_) | FrameKind::TableRow(_) => {
                matches!(parent, Some(FrameKind::Table(_)))
            }
            FrameKind::TableCell => matches!(
                parent,
                Some(FrameKind::TableHead(_) | FrameKind::TableRow(_))
            ),
            _ => self.depth < MAX_NESTING,
        }
    }

    fn end_tag(&mut self, _tag: &TagEnd) {
        // Events are balanced, so the matching frame is always on top.
        if self.stack.len() > 1 {
            self.close_frame();
        }
    }

    fn close_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if frame.kind.is_container() {
            self.depth -= 1;
        }
        let children = frame.children;
        let node = match frame.kind {
            FrameKind::Root | FrameKind::Transparent => {
                self.extend_nodes(children);
                return;
            }
            FrameKind::HtmlBlock(html) => {
                self.close_html_block(html);
                return;
            }
            FrameKind::Paragraph => Node::Paragraph(children),
            FrameKind::Heading(level) => Node::Heading { level, children },
            FrameKind::BlockQuote => Node::BlockQuote(children),
            FrameKind::CodeBlock { language, content } => {
                Node::CodeBlock(CodeBlock { language, content })
            }
            FrameKind::List { start, items } => Node::List { start, items },
            FrameKind::Item => {
                if let Some(FrameKind::List { items, .. }) = self.top_kind_mut() {
                    items.push(ListItem { children });
                }
                return;
            }
            FrameKind::Table(mut table) => {
                table.normalize();
                Node::Table(table)
            }
            FrameKind::TableHead(cells) => {
                if let Some(FrameKind::Table(table)) = self.top_kind_mut() {
                    table.head = cells;
                }
                return;
            }
            FrameKind::TableRow(cells) => {
                if let Some(FrameKind::Table(table)) = self.top_kind_mut() {
                    table.rows.push(cells);
                }
                return;
            }
            FrameKind::TableCell => {
                if let Some(FrameKind::TableHead(cells) | FrameKind::TableRow(cells)) =
                    self.top_kind_mut()
                {
                    cells.push(children);
                }
                return;
            }
            FrameKind::Emphasis => Node::Emphasis(children),
            FrameKind::Strong => Node::Strong(children),
            FrameKind::Strikethrough => Node::Strikethrough(children),
            FrameKind::Link { href, title } => Node::Link {
                href,
                title,
                children,
            },
            FrameKind::Image { src, title } => Node::Image {
                src,
                title,
                alt: plain_text(&children),
            },
        };
        self.push_node(node);
    }

    /// Emit a raw HTML block.
    ///
    /// A `<script>`, `<pre>`, `<style>` or `<textarea>` block ends at its
    /// closing tag. Markdown written after that tag on the same line is
    /// parsed as a separate fragment instead of being swallowed as HTML.
    fn close_html_block(&mut self, html: String) {
        let Some(split) = raw_text_block_end(&html) else {
            self.push_node(Node::Html(html));
            return;
        };
        let (raw, rest) = html.split_at(split);
        if rest.trim().is_empty() {
            self.push_node(Node::Html(html));
            return;
        }
        self.push_node(Node::Html(raw.to_owned()));
        let nested = Self {
            depth: self.depth,
            ..Self::with_options(self.options)
        };
        let fragment = nested.build(Parser::new_ext(rest, self.options));
        self.extend_nodes(fragment.nodes);
    }

    fn top_kind_mut(&mut self) -> Option<&mut FrameKind> {
        self.stack.last_mut().map(|f| &mut f.kind)
    }

    fn text(&mut self, text: &str) {
        if let Some(FrameKind::CodeBlock { content, .. }) = self.top_kind_mut() {
            content.push_str(text);
            return;
        }
        if let Some(frame) = self.stack.last_mut() {
            // Merge runs of text the parser split into several events.
            if let Some(Node::Text(last)) = frame.children.last_mut() {
                last.push_str(text);
            } else {
                frame.children.push(Node::Text(text.to_owned()));
            }
        }
    }

    fn push_node(&mut self, node: Node) {
        if let Node::Text(text) = node {
            self.text(&text);
        } else if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        }
    }

    fn extend_nodes(&mut self, nodes: Vec<Node>) {
        for node in nodes {
            self.push_node(node);
        }
    }
}

/// Byte offset just past the closing tag of a raw-text HTML block.
fn raw_text_block_end(html: &str) -> Option<usize> {
    let lower = html.trim_start().to_ascii_lowercase();
    let tag = RAW_TEXT_TAGS.iter().find(|tag| {
        lower
            .strip_prefix('<')
            .and_then(|s| s.strip_prefix(**tag))
            .is_some_and(|rest| {
                rest.chars()
                    .next()
                    .is_none_or(|c| c.is_ascii_whitespace() || c == '>')
            })
    })?;
    let close = format!("</{tag}>");
    // Lowercasing ASCII keeps byte offsets unchanged.
    html.to_ascii_lowercase()
        .rfind(&close)
        .map(|pos| pos + close.len())
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
