//! Application state.
//!
//! Shared state for all request handlers.

use mdview_pipeline::Pipeline;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Markdown to safe HTML pipeline.
    pub(crate) pipeline: Pipeline,
}
