//! URL scheme checks for link and image attributes.

use crate::policy::{LINK_SCHEMES, SCRIPT_SCHEMES};

/// Extract the lowercased scheme of a URL, or `None` for relative URLs.
///
/// ASCII whitespace and control characters are ignored, matching how browsers
/// read `java\tscript:`.
pub(crate) fn scheme(url: &str) -> Option<String> {
    let mut scheme = String::new();
    for c in url.chars() {
        if c.is_ascii_whitespace() || c.is_ascii_control() {
            continue;
        }
        match c {
            ':' => return (!scheme.is_empty()).then_some(scheme),
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {
                scheme.push(c.to_ascii_lowercase());
            }
            _ => return None,
        }
    }
    None
}

/// Whether `href` is safe for an anchor: relative, or http(s)/mailto.
pub(crate) fn is_safe_link(href: &str) -> bool {
    scheme(href).is_none_or(|s| LINK_SCHEMES.contains(&s.as_str()))
}

/// Whether `src` is safe for an image.
///
/// Any scheme is accepted except script schemes. `data:` is accepted only for
/// `data:image/*` and only when `allow_data` is set.
pub(crate) fn is_safe_image(src: &str, allow_data: bool) -> bool {
    match scheme(src).as_deref() {
        None => true,
        Some("data") => allow_data && is_data_image(src),
        Some(s) => !SCRIPT_SCHEMES.contains(&s),
    }
}

fn is_data_image(src: &str) -> bool {
    let compact: String = src
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take("data:image/".len())
        .collect();
    compact.eq_ignore_ascii_case("data:image/")
}
