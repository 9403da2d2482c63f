//! Class-tagged syntax highlighting.

use std::collections::HashSet;
use std::fmt::Write;
use std::sync::{Arc, LazyLock};

use mdview_renderer::{CodeHighlighter, escape_html};
use syntect::html::{ClassStyle, line_tokens_to_classed_spans};
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};

use crate::error::HighlightError;
use crate::languages::find_syntax;

/// Class of the line number gutter span.
pub const LINE_NUMBER_CLASS: &str = "line-number";

/// Bundled grammars, loaded once per process.
static DEFAULT_SYNTAXES: LazyLock<Arc<SyntaxSet>> =
    LazyLock::new(|| Arc::new(SyntaxSet::load_defaults_newlines()));

/// Highlighting options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Prefix each line with `N | `.
    pub line_numbers: bool,
    /// Languages allowed to highlight. `None` allows every bundled grammar.
    pub languages: Option<Vec<String>>,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            languages: None,
        }
    }
}

/// Syntax highlighter producing `<span class="...">` markup.
///
/// Each token is wrapped in a span whose classes are the atoms of its scope
/// (`comment line double-slash rust`), so styling is left to CSS. Spans never
/// cross line boundaries: scopes open at the end of a line are closed there
/// and reopened on the next line.
///
/// # Example
///
/// ```
/// use mdview_highlight::Highlighter;
///
/// let highlighter = Highlighter::new();
/// let html = highlighter.highlight("let x = 1;", Some("rust"));
/// assert!(html.starts_with(r#"<span class="line-number">1 | </span>"#));
///
/// // Unknown languages degrade to escaped text.
/// assert_eq!(highlighter.highlight("a < b", Some("nope")), "a &lt; b");
/// ```
#[derive(Clone)]
pub struct Highlighter {
    syntaxes: Arc<SyntaxSet>,
    /// Lowercased allow-list.
    languages: Option<HashSet<String>>,
    line_numbers: bool,
}

impl Highlighter {
    /// Create a highlighter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&HighlightOptions::default())
    }

    /// Create a highlighter from options.
    #[must_use]
    pub fn with_options(options: &HighlightOptions) -> Self {
        Self {
            syntaxes: Arc::clone(&DEFAULT_SYNTAXES),
            languages: options
                .languages
                .as_ref()
                .map(|langs| langs.iter().map(|l| l.trim().to_lowercase()).collect()),
            line_numbers: options.line_numbers,
        }
    }

    /// Use a custom syntax set instead of the bundled grammars.
    #[must_use]
    pub fn with_syntax_set(mut self, syntaxes: Arc<SyntaxSet>) -> Self {
        self.syntaxes = syntaxes;
        self
    }

    /// Resolve a language tag, honouring the allow-list.
    #[must_use]
    pub fn syntax_for(&self, language: &str) -> Option<&SyntaxReference> {
        let syntax = find_syntax(&self.syntaxes, language)?;
        let Some(allowed) = &self.languages else {
            return Some(syntax);
        };
        let requested = language.trim().to_lowercase();
        let permitted = allowed.contains(&requested)
            || allowed.contains(&syntax.name.to_lowercase())
            || syntax
                .file_extensions
                .iter()
                .any(|ext| allowed.contains(&ext.to_lowercase()));
        permitted.then_some(syntax)
    }

    /// Highlight `code` as `language`.
    ///
    /// Absent, unknown or disallowed languages return the code HTML-escaped.
    /// Tokenization failures are logged and degrade the same way.
    #[must_use]
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        let Some(syntax) = language.and_then(|lang| self.syntax_for(lang)) else {
            return escape_html(code);
        };
        match self.try_highlight(code, syntax) {
            Ok(html) => html,
            Err(error) => {
                tracing::debug!(%error, language = %syntax.name, "Highlighting failed, using plain text");
                escape_html(code)
            }
        }
    }

    /// Highlight `code` with an already resolved syntax.
    ///
    /// One trailing newline is dropped so it does not produce an empty
    /// numbered line. Lines are joined with `\n`.
    pub fn try_highlight(
        &self,
        code: &str,
        syntax: &SyntaxReference,
    ) -> Result<String, HighlightError> {
        let mut state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let mut lines = Vec::new();
        // Grammars are loaded in newline mode and expect every line to end in `\n`.
        let mut buffer = String::new();

        for (index, content) in code.lines().enumerate() {
            buffer.clear();
            buffer.push_str(content);
            buffer.push('\n');
            let ops: Vec<_> = state
                .parse_line(&buffer, &self.syntaxes)?
                .into_iter()
                .map(|(pos, op)| (pos.min(content.len()), op))
                .collect();

            let mut html = String::new();
            if self.line_numbers {
                write!(html, r#"<span class="{LINE_NUMBER_CLASS}">{} | </span>"#, index + 1)
                    .unwrap();
            }
            let reopened = stack.as_slice().len();
            for scope in stack.as_slice() {
                open_scope_span(*scope, &mut html);
            }
            let (spans, delta) =
                line_tokens_to_classed_spans(content, &ops, ClassStyle::Spaced, &mut stack)?;
            html.push_str(&spans);
            for _ in 0..open_after(reopened, delta) {
                html.push_str("</span>");
            }
            lines.push(html);
        }

        Ok(lines.join("\n"))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter for Highlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> String {
        Highlighter::highlight(self, code, language)
    }
}

/// Write the opening span for a scope carried over from the previous line.
fn open_scope_span(scope: Scope, out: &mut String) {
    let name = scope.build_string();
    let classes: Vec<&str> = name.split('.').collect();
    write!(out, r#"<span class="{}">"#, escape_html(&classes.join(" "))).unwrap();
}

/// Number of spans left open after a line.
fn open_after(reopened: usize, delta: isize) -> usize {
    let reopened = isize::try_from(reopened).unwrap_or(isize::MAX);
    usize::try_from(reopened.saturating_add(delta)).unwrap_or(0)
}
