//! Season repository.

use sqlx::QueryBuilder;

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::season::Season;
use crate::repositories::common::push_clause;
use crate::repositories::repository::{self, SoftDeleteEntity};
use crate::types::SeasonId;

const TABLE_NAME: &str = "seasons";
const SELECT_COLUMNS: &str = "id, organization_id, team_id, name, start_date, end_date, status, \
     division, created_at, updated_at, deleted_at";

impl SoftDeleteEntity for Season {
    const TABLE: &'static str = TABLE_NAME;
    const SELECT_COLUMNS: &'static str = SELECT_COLUMNS;
    type Id = SeasonId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SeasonRepository;

impl SeasonRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_by_organization(
        &self,
        session: &DbSession,
        organization_id: &str,
        team_id: Option<&str>,
    ) -> Result<Vec<Season>, AppError> {
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
                    push_clause(&mut builder, &mut has_clause);
                    builder.push("deleted_at IS NULL ORDER BY start_date DESC");
                    builder
                        .build_query_as::<Season>()
                        .fetch_all(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(rows)
    }

    pub async fn find_live_by_id(
        &self,
        session: &DbSession,
        id: SeasonId,
    ) -> Result<Option<Season>, AppError> {
        repository::find_live_by_id::<Season>(session, id).await
    }

    pub async fn create(&self, session: &DbSession, item: &Season) -> Result<Season, AppError> {
        let item = item.clone();
        let query = format!(
            "INSERT INTO {} (id, organization_id, team_id, name, start_date, end_date, status, \
             division, created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Season>(&query)
                        .bind(item.id)
                        .bind(&item.organization_id)
                        .bind(&item.team_id)
                        .bind(&item.name)
                        .bind(item.start_date)
                        .bind(item.end_date)
                        .bind(&item.status)
                        .bind(&item.division)
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

    pub async fn update(&self, session: &DbSession, item: &Season) -> Result<Season, AppError> {
        let item = item.clone();
        let query = format!(
            "UPDATE {} SET name = $2, start_date = $3, end_date = $4, status = $5, \
             division = $6, updated_at = $7 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Season>(&query)
                        .bind(item.id)
                        .bind(&item.name)
                        .bind(item.start_date)
                        .bind(item.end_date)
                        .bind(&item.status)
                        .bind(&item.division)
                        .bind(item.updated_at)
                        .fetch_one(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }

    pub async fn soft_delete(&self, session: &DbSession, id: SeasonId) -> Result<bool, AppError> {
        repository::soft_delete_by_id::<Season>(session, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_select_columns_include_schedule_fields() {
        assert!(SELECT_COLUMNS.contains("start_date"));
        assert!(SELECT_COLUMNS.contains("division"));
    }
}
