//! Allow-list HTML sanitization for rendered markdown.
//!
//! Markdown passes raw HTML through, so renderer output can carry scripts,
//! event handlers and `javascript:` URLs. [`Sanitizer`] reduces it to the
//! document subset listed in [`policy`]:
//!
//! - Scripts, styles, frames and plugin elements are removed with content.
//! - Only allow-listed attributes survive; `style` and `on*` never do.
//! - Link targets are limited to `http`, `https`, `mailto` and relative URLs.
//! - Image sources may not use script schemes; `data:` is limited to images.
//!
//! Built on ammonia, which parses with html5ever and re-serializes, so the
//! result is well-formed regardless of input.

pub mod policy;
mod sanitizer;
mod url;

pub use sanitizer::{SanitizeOptions, Sanitizer};
