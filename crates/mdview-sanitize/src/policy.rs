//! Allow-list policy.

/// Elements kept in sanitized output.
pub const ALLOWED_TAGS: &[&str] = &[
    // Structure
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "blockquote", "pre", "code", "span",
    "div", "details", "summary", "figure", "figcaption",
    // Lists
    "ul", "ol", "li", "dl", "dt", "dd",
    // Tables
    "table", "thead", "tbody", "tfoot", "tr", "th", "td", "caption",
    // Inline
    "em", "strong", "b", "i", "u", "s", "del", "ins", "sup", "sub", "mark", "kbd", "samp", "var",
    "small", "abbr", "q", "cite",
    // Embedded
    "a", "img", "input",
];

/// Elements removed together with everything inside them.
pub const REMOVED_WITH_CONTENT: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "frame", "frameset",
];

/// Attributes allowed on every element.
pub const GENERIC_ATTRIBUTES: &[&str] = &["lang", "title"];

/// Attributes allowed per element.
pub const TAG_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("img", &["src", "alt", "width", "height"]),
    ("ol", &["start"]),
    ("th", &["align", "colspan", "rowspan"]),
    ("td", &["align", "colspan", "rowspan"]),
    ("input", &["type", "checked"]),
    ("pre", &["class"]),
    ("code", &["class"]),
    ("span", &["class"]),
    ("div", &["class"]),
    ("h1", &["id"]),
    ("h2", &["id"]),
    ("h3", &["id"]),
    ("h4", &["id"]),
    ("h5", &["id"]),
    ("h6", &["id"]),
];

/// Schemes accepted in URL attributes before the per-attribute filter runs.
pub const URL_SCHEMES: &[&str] = &[
    "bitcoin", "data", "ftp", "ftps", "geo", "http", "https", "im", "irc", "ircs", "magnet",
    "mailto", "mms", "mx", "news", "nntp", "openpgp4fpr", "sip", "sms", "smsto", "ssh", "tel",
    "url", "webcal", "wtai", "xmpp",
];

/// Schemes a link may navigate to.
pub const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Schemes that execute script when loaded.
pub const SCRIPT_SCHEMES: &[&str] = &["javascript", "vbscript", "livescript"];

/// `rel` value forced onto every link.
pub const LINK_REL: &str = "noopener noreferrer";
