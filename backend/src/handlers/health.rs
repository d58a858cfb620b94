use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{error::AppError, state::AppState};

pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state
        .db
        .ping()
        .await
        .map_err(|e| AppError::InternalServerError(e.into()))?;
    Ok(Json(json!({ "status": "ok" })))
}
