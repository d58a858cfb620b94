//! Game orchestration.

use chrono::Utc;
use validator::Validate;

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::game::{CreateGamePayload, Game, GameResponse, UpdateGamePayload};
use crate::repositories::{GameRepository, SeasonRepository};
use crate::types::{GameId, SeasonId};

#[derive(Debug, Default, Clone, Copy)]
pub struct GameService {
    games: GameRepository,
    seasons: SeasonRepository,
}

impl GameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(
        &self,
        session: &DbSession,
        organization_id: &str,
        team_id: Option<&str>,
        season_id: Option<SeasonId>,
    ) -> Result<Vec<GameResponse>, AppError> {
        let games = self
            .games
            .list_by_organization(session, organization_id, team_id, season_id)
            .await?;
        Ok(games.into_iter().map(GameResponse::from).collect())
    }

    pub async fn get(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: GameId,
    ) -> Result<GameResponse, AppError> {
        self.games
            .find_live_by_id(session, id)
            .await?
            .filter(|g| g.organization_id == organization_id)
            .map(GameResponse::from)
            .ok_or_else(|| AppError::NotFound("Game not found".into()))
    }

    /// Creates a game; when the payload references a season, the season is
    /// verified to belong to the same organization and team within the same
    /// unit of work.
    pub async fn create(
        &self,
        session: &DbSession,
        organization_id: &str,
        payload: CreateGamePayload,
    ) -> Result<GameResponse, AppError> {
        payload.validate()?;
        let games = self.games;
        let seasons = self.seasons;
        let game = Game::new(organization_id.to_string(), payload);
        let organization_id = organization_id.to_owned();

        let created = session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    if let Some(season_id) = game.season_id {
                        check_season(&tx, seasons, season_id, &organization_id, &game.team_id)
                            .await?;
                    }
                    games.create(&tx, &game).await
                })
            })
            .await?;

        Ok(GameResponse::from(created))
    }

    pub async fn update(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: GameId,
        payload: UpdateGamePayload,
    ) -> Result<GameResponse, AppError> {
        payload.validate()?;
        let games = self.games;
        let seasons = self.seasons;
        let organization_id = organization_id.to_owned();

        let updated = session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    let mut game = games
                        .find_live_by_id(&tx, id)
                        .await?
                        .filter(|g| g.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Game not found".into()))?;

                    if let Some(opponent_name) = payload.opponent_name {
                        game.opponent_name = opponent_name;
                    }
                    if let Some(season_id) = payload.season_id {
                        check_season(&tx, seasons, season_id, &organization_id, &game.team_id)
                            .await?;
                        game.season_id = Some(season_id);
                    }
                    if let Some(scheduled_at) = payload.scheduled_at {
                        game.scheduled_at = Some(scheduled_at);
                    }
                    if let Some(home_score) = payload.home_score {
                        game.home_score = Some(home_score);
                    }
                    if let Some(away_score) = payload.away_score {
                        game.away_score = Some(away_score);
                    }
                    game.updated_at = Utc::now();

                    games.update(&tx, &game).await
                })
            })
            .await?;

        Ok(GameResponse::from(updated))
    }

    pub async fn delete(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: GameId,
    ) -> Result<(), AppError> {
        let repo = self.games;
        let organization_id = organization_id.to_owned();

        session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    repo.find_live_by_id(&tx, id)
                        .await?
                        .filter(|g| g.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Game not found".into()))?;
                    repo.soft_delete(&tx, id).await?;
                    Ok(())
                })
            })
            .await
    }
}

async fn check_season(
    session: &DbSession,
    seasons: SeasonRepository,
    season_id: SeasonId,
    organization_id: &str,
    team_id: &str,
) -> Result<(), AppError> {
    let season = seasons
        .find_live_by_id(session, season_id)
        .await?
        .filter(|s| s.organization_id == organization_id)
        .ok_or_else(|| AppError::NotFound("Season not found".into()))?;
    if season.team_id != team_id {
        return Err(AppError::BadRequest(
            "Season does not belong to this team".into(),
        ));
    }
    Ok(())
}
