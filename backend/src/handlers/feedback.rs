use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::CurrentUser,
    error::AppError,
    models::feedback::{CreateFeedbackPayload, FeedbackResponse},
    services::FeedbackService,
    state::AppState,
};

/// Feedback is open to anonymous callers; when a session is present the
/// submitter is recorded with the entry.
pub async fn create_feedback(
    State(state): State<AppState>,
    Extension(user): Extension<Option<CurrentUser>>,
    Json(payload): Json<CreateFeedbackPayload>,
) -> Result<(StatusCode, Json<FeedbackResponse>), AppError> {
    let feedback = FeedbackService::new(Arc::clone(&state.email))
        .create(&state.db.session(), payload, user.as_ref())
        .await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}
