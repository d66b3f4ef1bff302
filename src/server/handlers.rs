use super::types::{ErrorResponse, PredictRequest, PredictResponse, RootResponse};
use crate::{Error, model::ModelRunner};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelRunner>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelRunner>) -> Self {
        Self { model }
    }
}

pub async fn root() -> Json<RootResponse> {
    debug!("Liveness check");
    Json(RootResponse::default())
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(%request_id, "Rejected prediction request: {}", rejection.body_text());
        error_response(rejection.status(), rejection.body_text())
    })?;

    info!(
        %request_id,
        features = request.features.len(),
        model = state.model.name(),
        "Received prediction request"
    );

    let model = state.model.clone();
    let result = tokio::task::spawn_blocking(move || model.predict(&request.features))
        .await
        .map_err(|e| Error::internal(format!("prediction task failed: {}", e)))
        .and_then(|r| r);

    match result {
        Ok(prediction) => {
            debug!(%request_id, outputs = prediction.len(), "Prediction complete");
            Ok(Json(PredictResponse { prediction }))
        }
        Err(e) if e.is_client_error() => {
            warn!(%request_id, "Prediction rejected: {}", e);
            Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
        Err(e) => {
            error!(%request_id, "Prediction failed: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Prediction error: {}", e),
            ))
        }
    }
}

fn error_response(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}
