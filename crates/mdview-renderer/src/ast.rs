//! Typed document tree.
//!
//! The renderer folds the parser's event stream into a [`Document`] before
//! producing any output. Each markdown construct is a [`Node`] variant, so the
//! HTML mapping is a single match over variants instead of string building
//! spread across start/end callbacks.

use pulldown_cmark::Alignment;

/// Parsed markdown document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level block nodes in source order.
    pub nodes: Vec<Node>,
}

impl Document {
    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all code blocks in document order, including nested ones.
    pub fn code_blocks(&self) -> Vec<&CodeBlock> {
        let mut blocks = Vec::new();
        collect_code_blocks(&self.nodes, &mut blocks);
        blocks
    }
}

fn collect_code_blocks<'a>(nodes: &'a [Node], out: &mut Vec<&'a CodeBlock>) {
    for node in nodes {
        match node {
            Node::CodeBlock(block) => out.push(block),
            Node::BlockQuote(children) => collect_code_blocks(children, out),
            Node::List { items, .. } => {
                for item in items {
                    collect_code_blocks(&item.children, out);
                }
            }
            _ => {}
        }
    }
}

/// Markdown node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// ATX or setext heading, level 1-6.
    Heading { level: u8, children: Vec<Node> },
    /// Paragraph of inline content.
    Paragraph(Vec<Node>),
    /// Block quote containing block nodes.
    BlockQuote(Vec<Node>),
    /// Fenced or indented code block.
    CodeBlock(CodeBlock),
    /// Ordered (`start` is set) or unordered list.
    List { start: Option<u64>, items: Vec<ListItem> },
    /// GFM table.
    Table(Table),
    /// Thematic break.
    Rule,
    /// `*emphasis*`
    Emphasis(Vec<Node>),
    /// `**strong**`
    Strong(Vec<Node>),
    /// `~~strikethrough~~`
    Strikethrough(Vec<Node>),
    /// Inline link or autolink.
    Link {
        href: String,
        title: String,
        children: Vec<Node>,
    },
    /// Image with plain-text alt.
    Image {
        src: String,
        title: String,
        alt: String,
    },
    /// Inline code span.
    Code(String),
    /// Raw inline or block HTML, passed through verbatim.
    Html(String),
    /// Literal text (not yet escaped).
    Text(String),
    /// Task list checkbox (`- [x]`).
    TaskMarker(bool),
    SoftBreak,
    HardBreak,
}

/// Code block extracted from the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag from the fence info string, if any.
    pub language: Option<String>,
    /// Raw code content.
    pub content: String,
}

/// List item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListItem {
    pub children: Vec<Node>,
}

/// Table cell content.
pub type Cell = Vec<Node>;

/// Column alignment from the table delimiter row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl From<Alignment> for Align {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::None => Self::None,
            Alignment::Left => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::Right => Self::Right,
        }
    }
}

impl Align {
    /// HTML attribute for this alignment (with leading space), or empty.
    pub fn html_attr(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Left => r#" align="left""#,
            Self::Center => r#" align="center""#,
            Self::Right => r#" align="right""#,
        }
    }
}

/// GFM table.
///
/// The header defines the column count. After [`normalize`](Self::normalize)
/// every row has exactly that many cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub alignments: Vec<Align>,
    pub head: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Number of columns, taken from the delimiter row.
    pub fn columns(&self) -> usize {
        self.alignments.len()
    }

    /// Pad short rows with empty cells and drop cells past the last column.
    pub fn normalize(&mut self) {
        let columns = self.columns();
        self.head.resize_with(columns, Vec::new);
        for row in &mut self.rows {
            row.resize_with(columns, Vec::new);
        }
    }

    /// Alignment for the given column.
    pub fn alignment(&self, column: usize) -> Align {
        self.alignments.get(column).copied().unwrap_or_default()
    }
}

/// Raw HTML elements whose text content is never shown to the reader.
const HIDDEN_TAGS: [&str; 6] = ["script", "style", "template", "noscript", "iframe", "object"];

/// Collect the plain text of a node sequence (used for alt text and heading ids).
///
/// Text between an inline `<script>`, `<style>` or similar raw HTML tag and
/// its closing tag is skipped.
pub fn plain_text(nodes: &[Node]) -> String {
    let mut text = String::new();
    push_plain_text(nodes, &mut text, &mut None);
    text
}

fn push_plain_text(nodes: &[Node], out: &mut String, hidden: &mut Option<&'static str>) {
    for node in nodes {
        if let Some(tag) = *hidden {
            if let Node::Html(html) = node
                && html.to_ascii_lowercase().contains(&format!("</{tag}"))
            {
                *hidden = None;
            }
            continue;
        }
        match node {
            Node::Text(t) | Node::Code(t) => out.push_str(t),
            Node::SoftBreak | Node::HardBreak => out.push(' '),
            Node::Image { alt, .. } => out.push_str(alt),
            Node::Html(html) => *hidden = opened_hidden_tag(html),
            Node::Heading { children, .. }
            | Node::Paragraph(children)
            | Node::BlockQuote(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::Strikethrough(children)
            | Node::Link { children, .. } => push_plain_text(children, out, hidden),
            Node::CodeBlock(_)
            | Node::List { .. }
            | Node::Table(_)
            | Node::Rule
            | Node::TaskMarker(_) => {}
        }
    }
}

/// Hidden element opened, and left open, by a raw HTML fragment.
fn opened_hidden_tag(html: &str) -> Option<&'static str> {
    let lower = html.trim_start().to_ascii_lowercase();
    let name = lower.strip_prefix('<')?;
    let tag = HIDDEN_TAGS.into_iter().find(|tag| {
        name.strip_prefix(tag).is_some_and(|rest| {
            rest.chars()
                .next()
                .is_none_or(|c| c.is_ascii_whitespace() || c == '>' || c == '/')
        })
    })?;
    let self_contained = lower.trim_end().ends_with("/>") || lower.contains(&format!("</{tag}"));
    (!self_contained).then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Node {
        Node::Text(s.to_owned())
    }

    #[test]
    fn test_normalize_pads_short_rows() {
        let mut table = Table {
            alignments: vec![Align::None; 3],
            head: vec![vec![text("a")], vec![text("b")], vec![text("c")]],
            rows: vec![vec![vec![text("1")]]],
        };
        table.normalize();
        assert_eq!(table.rows[0], vec![vec![text("1")], Vec::new(), Vec::new()]);
    }

    #[test]
    fn test_normalize_drops_extra_cells() {
        let mut table = Table {
            alignments: vec![Align::Left, Align::Right],
            head: vec![vec![text("a")], vec![text("b")]],
            rows: vec![vec![vec![text("1")], vec![text("2")], vec![text("3")]]],
        };
        table.normalize();
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[0][1], vec![text("2")]);
    }

    #[test]
    fn test_alignment_out_of_range_is_none() {
        let table = Table {
            alignments: vec![Align::Center],
            ..Table::default()
        };
        assert_eq!(table.alignment(0), Align::Center);
        assert_eq!(table.alignment(5), Align::None);
    }

    #[test]
    fn test_align_html_attr() {
        assert_eq!(Align::None.html_attr(), "");
        assert_eq!(Align::Left.html_attr(), r#" align="left""#);
        assert_eq!(Align::Center.html_attr(), r#" align="center""#);
        assert_eq!(Align::Right.html_attr(), r#" align="right""#);
    }

    #[test]
    fn test_plain_text_flattens_inline_nodes() {
        let nodes = vec![
            text("Install "),
            Node::Code("npm".to_owned()),
            Node::Strong(vec![text(" now")]),
        ];
        assert_eq!(plain_text(&nodes), "Install npm now");
    }

    #[test]
    fn test_plain_text_skips_hidden_raw_html() {
        let nodes = vec![
            Node::Html("<script>".to_owned()),
            text("x"),
            Node::Html("</script>".to_owned()),
            text("Title"),
        ];
        assert_eq!(plain_text(&nodes), "Title");
    }

    #[test]
    fn test_plain_text_keeps_visible_raw_html_text() {
        let nodes = vec![
            Node::Html("<em>".to_owned()),
            text("Hi"),
            Node::Html("</em>".to_owned()),
            Node::Html("<style>p{}</style>".to_owned()),
            text(" there"),
        ];
        assert_eq!(plain_text(&nodes), "Hi there");
    }

    #[test]
    fn test_code_blocks_finds_nested_blocks() {
        let block = CodeBlock {
            language: Some("rust".to_owned()),
            content: "fn main() {}\n".to_owned(),
        };
        let doc = Document {
            nodes: vec![Node::BlockQuote(vec![Node::List {
                start: None,
                items: vec![ListItem {
                    children: vec![Node::CodeBlock(block.clone())],
                }],
            }])],
        };
        assert_eq!(doc.code_blocks(), vec![&block]);
    }
}
