use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use signscope_core::{CLASS_NAMES, NUM_CLASSES};

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Label table endpoint
// ============================================================================

pub async fn labels() -> impl IntoResponse {
    Json(serde_json::json!({
        "count": NUM_CLASSES,
        "labels": CLASS_NAMES.as_slice(),
    }))
}

// ============================================================================
// Model status endpoint
// ============================================================================

pub async fn model_status(State(state): State<AppState>) -> impl IntoResponse {
    let artifact = state.model.artifact();
    Json(serde_json::json!({
        "url": artifact.url,
        "path": artifact.path,
        "present": artifact.path.exists(),
        "valid": artifact.is_present_and_valid(),
        "loaded": state.model.is_loaded(),
    }))
}

// ============================================================================
// Prediction endpoint
// ============================================================================

pub async fn predict(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut image_bytes = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("image") {
                    match field.bytes().await {
                        Ok(bytes) => image_bytes = Some(bytes),
                        Err(e) => {
                            return error_response(
                                StatusCode::BAD_REQUEST,
                                format!("failed to read upload: {e}"),
                            )
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("malformed multipart body: {e}"),
                )
            }
        }
    }

    let Some(bytes) = image_bytes.filter(|b| !b.is_empty()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "missing 'image' field in upload".to_string(),
        );
    };

    match state.pipeline.predict(&bytes).await {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(e) if e.is_request_scoped() => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        // Provisioning/loading failed; the model stays unavailable for the
        // rest of the process lifetime.
        Err(e) => error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
