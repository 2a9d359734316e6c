use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let body = match payload {
        Ok(Json(v)) => Some(v),
        Err(rejection) => {
            tracing::debug!("unreadable request body: {}", rejection);
            None
        }
    };

    match state.decision_service.process(body).await {
        Ok(decision) => (axum::http::StatusCode::OK, Json(decision)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn home() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "Loan Prediction API is running!")
}
