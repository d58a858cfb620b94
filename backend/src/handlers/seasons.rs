use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    auth::CurrentUser,
    error::AppError,
    handlers::require_org,
    models::season::{CreateSeasonPayload, SeasonResponse, UpdateSeasonPayload},
    services::SeasonService,
    state::AppState,
    types::SeasonId,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListSeasonsQuery {
    pub team_id: Option<String>,
}

pub async fn list_seasons(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ListSeasonsQuery>,
) -> Result<Json<Vec<SeasonResponse>>, AppError> {
    let organization_id = require_org(&user)?;
    let seasons = SeasonService::new()
        .list(
            &state.db.session(),
            organization_id,
            query.team_id.as_deref(),
        )
        .await?;
    Ok(Json(seasons))
}

pub async fn get_season(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<SeasonId>,
) -> Result<Json<SeasonResponse>, AppError> {
    let organization_id = require_org(&user)?;
    let season = SeasonService::new()
        .get(&state.db.session(), organization_id, id)
        .await?;
    Ok(Json(season))
}

pub async fn create_season(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateSeasonPayload>,
) -> Result<(StatusCode, Json<SeasonResponse>), AppError> {
    let organization_id = require_org(&user)?;
    let season = SeasonService::new()
        .create(&state.db.session(), organization_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(season)))
}

pub async fn update_season(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<SeasonId>,
    Json(payload): Json<UpdateSeasonPayload>,
) -> Result<Json<SeasonResponse>, AppError> {
    let organization_id = require_org(&user)?;
    let season = SeasonService::new()
        .update(&state.db.session(), organization_id, id, payload)
        .await?;
    Ok(Json(season))
}

pub async fn delete_season(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<SeasonId>,
) -> Result<StatusCode, AppError> {
    let organization_id = require_org(&user)?;
    SeasonService::new()
        .delete(&state.db.session(), organization_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
