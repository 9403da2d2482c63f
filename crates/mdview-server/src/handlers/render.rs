//! Render API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Request body for POST /api/render.
#[derive(Deserialize)]
pub(crate) struct RenderRequest {
    /// Markdown source.
    markdown: String,
}

/// Response for POST /api/render.
#[derive(Serialize)]
pub(crate) struct RenderResponse {
    /// Sanitized HTML.
    html: String,
}

/// Handle POST /api/render.
pub(crate) async fn render(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RenderRequest>,
) -> Json<RenderResponse> {
    Json(RenderResponse {
        html: state.pipeline.render_safe(&request.markdown),
    })
}
