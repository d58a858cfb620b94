//! Game repository.

use sqlx::QueryBuilder;

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::game::Game;
use crate::repositories::common::push_clause;
use crate::repositories::repository::{self, SoftDeleteEntity};
use crate::types::{GameId, SeasonId};

const TABLE_NAME: &str = "games";
const SELECT_COLUMNS: &str = "id, organization_id, team_id, season_id, opponent_name, \
     scheduled_at, home_score, away_score, created_at, updated_at, deleted_at";

impl SoftDeleteEntity for Game {
    const TABLE: &'static str = TABLE_NAME;
    const SELECT_COLUMNS: &'static str = SELECT_COLUMNS;
    type Id = GameId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GameRepository;

impl GameRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_by_organization(
        &self,
        session: &DbSession,
        organization_id: &str,
        team_id: Option<&str>,
        season_id: Option<SeasonId>,
    ) -> Result<Vec<Game>, AppError> {
        let organization_id = organization_id.to_owned();
        let team_id = team_id.map(str::to_owned);
        let rows = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    let mut builder = QueryBuilder::new(format!(
                        "SELECT {} FROM {}",
                        SELECT_COLUMNS, TABLE_NAME
                    ));
                    let mut has_clause = false;
                    push_clause(&mut builder, &mut has_clause);
                    builder.push("organization_id = ").push_bind(organization_id);
                    if let Some(team_id) = team_id {
                        push_clause(&mut builder, &mut has_clause);
                        builder.push("team_id = ").push_bind(team_id);
                    }
                    if let Some(season_id) = season_id {
                        push_clause(&mut builder, &mut has_clause);
                        builder.push("season_id = ").push_bind(season_id);
                    }
                    push_clause(&mut builder, &mut has_clause);
                    builder.push("deleted_at IS NULL ORDER BY scheduled_at ASC NULLS LAST");
                    builder.build_query_as::<Game>().fetch_all(&mut *conn).await
                })
            })
            .await?;
        Ok(rows)
    }

    pub async fn find_live_by_id(
        &self,
        session: &DbSession,
        id: GameId,
    ) -> Result<Option<Game>, AppError> {
        repository::find_live_by_id::<Game>(session, id).await
    }

    pub async fn create(&self, session: &DbSession, item: &Game) -> Result<Game, AppError> {
        let item = item.clone();
        let query = format!(
            "INSERT INTO {} (id, organization_id, team_id, season_id, opponent_name, \
             scheduled_at, home_score, away_score, created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Game>(&query)
                        .bind(item.id)
                        .bind(&item.organization_id)
                        .bind(&item.team_id)
                        .bind(item.season_id)
                        .bind(&item.opponent_name)
                        .bind(item.scheduled_at)
                        .bind(item.home_score)
                        .bind(item.away_score)
                        .bind(item.created_at)
                        .bind(item.updated_at)
                        .bind(item.deleted_at)
                        .fetch_one(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }

    pub async fn update(&self, session: &DbSession, item: &Game) -> Result<Game, AppError> {
        let item = item.clone();
        let query = format!(
            "UPDATE {} SET season_id = $2, opponent_name = $3, scheduled_at = $4, \
             home_score = $5, away_score = $6, updated_at = $7 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Game>(&query)
                        .bind(item.id)
                        .bind(item.season_id)
                        .bind(&item.opponent_name)
                        .bind(item.scheduled_at)
                        .bind(item.home_score)
                        .bind(item.away_score)
                        .bind(item.updated_at)
                        .fetch_one(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }

    pub async fn soft_delete(&self, session: &DbSession, id: GameId) -> Result<bool, AppError> {
        repository::soft_delete_by_id::<Game>(session, id).await
    }
}
