//! Error types for highlighting.

/// Error raised while tokenizing a code block.
///
/// Never escapes [`Highlighter::highlight`](crate::Highlighter::highlight),
/// which falls back to plain escaped text instead.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// Grammar failed on a line (e.g. regex backtrack limit).
    #[error("Failed to parse line: {0}")]
    Parse(#[from] syntect::parsing::ParsingError),

    /// Scope operations could not be turned into markup.
    #[error("Failed to build markup: {0}")]
    Markup(#[from] syntect::Error),
}
