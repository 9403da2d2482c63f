//! Language name resolution.

use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Map common fence tags to bundled syntax names.
///
/// Languages without a bundled grammar borrow a close relative.
fn alias(token: &str) -> Option<&'static str> {
    let name = match token {
        "javascript" | "js" | "mjs" | "cjs" | "jsx" | "node" => "JavaScript",
        "typescript" | "ts" | "mts" | "cts" | "tsx" => "JavaScript",
        "python3" | "py3" | "pyw" => "Python",
        "rb" => "Ruby",
        "rs" => "Rust",
        "sh" | "bash" | "shell" | "zsh" | "console" | "shellscript" => {
            "Bourne Again Shell (bash)"
        }
        "yml" => "YAML",
        "md" | "markdown" => "Markdown",
        "makefile" | "make" | "mk" => "Makefile",
        "c++" | "cpp" | "cxx" | "cc" | "hpp" | "hxx" => "C++",
        "c#" | "csharp" | "cs" => "C#",
        "objc" | "objective-c" => "Objective-C",
        "htm" | "xhtml" | "vue" | "svelte" => "HTML",
        "json5" | "jsonc" => "JSON",
        "scss" | "sass" | "less" => "CSS",
        "mysql" | "postgresql" | "postgres" | "sqlite" => "SQL",
        "pl" | "pm" => "Perl",
        "hs" => "Haskell",
        "kt" | "kts" | "kotlin" => "Java",
        "clj" | "cljs" | "cljc" => "Clojure",
        "erl" | "hrl" => "Erlang",
        "golang" => "Go",
        "patch" => "Diff",
        "bat" | "cmd" => "Batch File",
        "text" | "plaintext" | "plain" => "Plain Text",
        _ => return None,
    };
    Some(name)
}

/// Resolve a fence language tag to a syntax definition.
///
/// Matching is case-insensitive: syntax tokens and file extensions first,
/// then the alias table.
pub(crate) fn find_syntax<'s>(
    syntaxes: &'s SyntaxSet,
    language: &str,
) -> Option<&'s SyntaxReference> {
    let token = language.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }
    syntaxes
        .find_syntax_by_token(&token)
        .or_else(|| alias(&token).and_then(|name| syntaxes.find_syntax_by_name(name)))
}
