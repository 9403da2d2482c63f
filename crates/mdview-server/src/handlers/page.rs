//! Editor page endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;

use crate::page::{PLACEHOLDER, render_page};
use crate::state::AppState;
use crate::view::ViewState;

/// Handle GET /.
///
/// The preview is rendered server-side so the page is complete before the
/// script loads.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    Query(view): Query<ViewState>,
) -> Html<String> {
    let preview = state.pipeline.render_safe(PLACEHOLDER);
    Html(render_page(view.normalized(), PLACEHOLDER, &preview))
}
