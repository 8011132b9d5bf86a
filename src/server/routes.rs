use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use crate::server::AppState;
use crate::{Error, IconDescriptor};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A descriptor as served over HTTP, with its resolved URL when an asset base is configured
#[derive(Debug, Serialize)]
pub struct IconView {
    #[serde(flatten)]
    pub icon: IconDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IconView {
    pub fn new(icon: IconDescriptor, asset_base: Option<&str>) -> Self {
        Self {
            url: asset_base.map(|base| icon.url(base)),
            icon,
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: Error) -> ApiError {
    let status = match err {
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse { error: err.to_string() }))
}

pub async fn list_icons(State(state): State<Arc<AppState>>) -> Json<Vec<IconView>> {
    let base = state.asset_base.as_deref();
    Json(
        state
            .catalog
            .iter()
            .map(|icon| IconView::new(*icon, base))
            .collect(),
    )
}

pub async fn count_icons(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "count": state.catalog.count() }))
}

pub async fn get_icon(
    State(state): State<Arc<AppState>>,
    Path(idx): Path<i64>,
) -> Result<Json<IconView>, ApiError> {
    let icon = state.catalog.get_by_index(idx).map_err(|e| {
        tracing::debug!("Icon lookup failed: {}", e);
        api_error(e)
    })?;

    Ok(Json(IconView::new(icon, state.asset_base.as_deref())))
}
