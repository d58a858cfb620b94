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
    models::game::{CreateGamePayload, GameResponse, UpdateGamePayload},
    services::GameService,
    state::AppState,
    types::{GameId, SeasonId},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListGamesQuery {
    pub team_id: Option<String>,
    pub season_id: Option<SeasonId>,
}

pub async fn list_games(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ListGamesQuery>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let organization_id = require_org(&user)?;
    let games = GameService::new()
        .list(
            &state.db.session(),
            organization_id,
            query.team_id.as_deref(),
            query.season_id,
        )
        .await?;
    Ok(Json(games))
}

pub async fn get_game(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<GameId>,
) -> Result<Json<GameResponse>, AppError> {
    let organization_id = require_org(&user)?;
    let game = GameService::new()
        .get(&state.db.session(), organization_id, id)
        .await?;
    Ok(Json(game))
}

pub async fn create_game(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateGamePayload>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    let organization_id = require_org(&user)?;
    let game = GameService::new()
        .create(&state.db.session(), organization_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(game)))
}

pub async fn update_game(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<GameId>,
    Json(payload): Json<UpdateGamePayload>,
) -> Result<Json<GameResponse>, AppError> {
    let organization_id = require_org(&user)?;
    let game = GameService::new()
        .update(&state.db.session(), organization_id, id, payload)
        .await?;
    Ok(Json(game))
}

pub async fn delete_game(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<GameId>,
) -> Result<StatusCode, AppError> {
    let organization_id = require_org(&user)?;
    GameService::new()
        .delete(&state.db.session(), organization_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
