use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::middleware::request_id::RequestId;
use crate::models::{parse_imdb_id, Manifest, MediaKind, StreamsResponse};
use crate::services::recommendations;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Add-on manifest
pub async fn manifest() -> Json<Manifest> {
    Json(Manifest::default())
}

/// Ranked recommendations for `/stream/{kind}/{id}.json`
///
/// Always answers 200; anything that prevents ranking yields no streams.
pub async fn streams(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((kind, id)): Path<(String, String)>,
) -> Json<StreamsResponse> {
    let id = id.strip_suffix(".json").unwrap_or(&id);

    let kind = match kind.parse::<MediaKind>() {
        Ok(kind) => kind,
        Err(reason) => {
            tracing::warn!(request_id = %request_id, reason = %reason, "Ignoring stream request");
            return Json(StreamsResponse::empty());
        }
    };

    let Some(imdb_id) = parse_imdb_id(id) else {
        tracing::warn!(request_id = %request_id, id = %id, "Ignoring non-IMDb id");
        return Json(StreamsResponse::empty());
    };

    tracing::info!(
        request_id = %request_id,
        kind = %kind,
        imdb_id = %imdb_id,
        "Processing stream request"
    );

    let streams =
        recommendations::get_recommendations(state.provider.as_ref(), kind, imdb_id, &state.ranking)
            .await;

    tracing::info!(
        request_id = %request_id,
        streams = streams.len(),
        "Stream request completed"
    );

    Json(StreamsResponse { streams })
}
