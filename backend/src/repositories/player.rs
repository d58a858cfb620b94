//! Player and roster repository.
//!
//! Provides organization-scoped player CRUD and the roster membership
//! queries. All access goes through the caller's [`DbSession`], so these
//! functions transparently join an enclosing unit of work.

use uuid::Uuid;

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::player::{Player, RosterEntry, TeamPlayer};
use crate::repositories::repository::{self, SoftDeleteEntity};
use crate::types::PlayerId;

const TABLE_NAME: &str = "players";
const SELECT_COLUMNS: &str = "id, organization_id, user_id, name, email, phone, date_of_birth, \
     created_at, updated_at, deleted_at";

const MEMBERSHIP_TABLE: &str = "team_players";
const MEMBERSHIP_COLUMNS: &str =
    "id, team_id, player_id, jersey_number, position, created_at, updated_at, deleted_at";

impl SoftDeleteEntity for Player {
    const TABLE: &'static str = TABLE_NAME;
    const SELECT_COLUMNS: &'static str = SELECT_COLUMNS;
    type Id = PlayerId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerRepository;

impl PlayerRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_by_organization(
        &self,
        session: &DbSession,
        organization_id: &str,
    ) -> Result<Vec<Player>, AppError> {
        let organization_id = organization_id.to_owned();
        let query = format!(
            "SELECT {} FROM {} WHERE organization_id = $1 AND deleted_at IS NULL ORDER BY name",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Player>(&query)
                        .bind(organization_id)
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
        id: PlayerId,
    ) -> Result<Option<Player>, AppError> {
        repository::find_live_by_id::<Player>(session, id).await
    }

    pub async fn create(&self, session: &DbSession, item: &Player) -> Result<Player, AppError> {
        let item = item.clone();
        let query = format!(
            "INSERT INTO {} (id, organization_id, user_id, name, email, phone, date_of_birth, \
             created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Player>(&query)
                        .bind(item.id)
                        .bind(&item.organization_id)
                        .bind(&item.user_id)
                        .bind(&item.name)
                        .bind(&item.email)
                        .bind(&item.phone)
                        .bind(item.date_of_birth)
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

    pub async fn update(&self, session: &DbSession, item: &Player) -> Result<Player, AppError> {
        let item = item.clone();
        let query = format!(
            "UPDATE {} SET user_id = $2, name = $3, email = $4, phone = $5, \
             date_of_birth = $6, updated_at = $7 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Player>(&query)
                        .bind(item.id)
                        .bind(&item.user_id)
                        .bind(&item.name)
                        .bind(&item.email)
                        .bind(&item.phone)
                        .bind(item.date_of_birth)
                        .bind(item.updated_at)
                        .fetch_one(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }

    pub async fn soft_delete(&self, session: &DbSession, id: PlayerId) -> Result<bool, AppError> {
        repository::soft_delete_by_id::<Player>(session, id).await
    }

    pub async fn bulk_soft_delete(
        &self,
        session: &DbSession,
        ids: &[PlayerId],
    ) -> Result<u64, AppError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let query = format!(
            "UPDATE {} SET deleted_at = now(), updated_at = now() \
             WHERE id = ANY($1) AND deleted_at IS NULL",
            TABLE_NAME
        );
        let result = session
            .use_transaction(move |conn| {
                Box::pin(async move { sqlx::query(&query).bind(ids).execute(&mut *conn).await })
            })
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn roster(
        &self,
        session: &DbSession,
        team_id: &str,
    ) -> Result<Vec<RosterEntry>, AppError> {
        let team_id = team_id.to_owned();
        let query = format!(
            "SELECT p.id AS player_id, p.name, p.email, p.phone, p.date_of_birth, \
             tp.team_id, tp.jersey_number, tp.position \
             FROM {MEMBERSHIP_TABLE} tp \
             INNER JOIN {TABLE_NAME} p ON p.id = tp.player_id \
             WHERE tp.team_id = $1 AND p.deleted_at IS NULL \
             ORDER BY tp.jersey_number ASC NULLS LAST, p.name"
        );
        let rows = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, RosterEntry>(&query)
                        .bind(team_id)
                        .fetch_all(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(rows)
    }

    pub async fn find_membership(
        &self,
        session: &DbSession,
        team_id: &str,
        player_id: PlayerId,
    ) -> Result<Option<TeamPlayer>, AppError> {
        let team_id = team_id.to_owned();
        let query = format!(
            "SELECT {} FROM {} WHERE team_id = $1 AND player_id = $2",
            MEMBERSHIP_COLUMNS, MEMBERSHIP_TABLE
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, TeamPlayer>(&query)
                        .bind(team_id)
                        .bind(player_id)
                        .fetch_optional(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }

    pub async fn add_to_team(
        &self,
        session: &DbSession,
        item: &TeamPlayer,
    ) -> Result<TeamPlayer, AppError> {
        let item = item.clone();
        let query = format!(
            "INSERT INTO {} (id, team_id, player_id, jersey_number, position, \
             created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {}",
            MEMBERSHIP_TABLE, MEMBERSHIP_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, TeamPlayer>(&query)
                        .bind(item.id)
                        .bind(&item.team_id)
                        .bind(item.player_id)
                        .bind(item.jersey_number)
                        .bind(&item.position)
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

    pub async fn update_membership(
        &self,
        session: &DbSession,
        item: &TeamPlayer,
    ) -> Result<TeamPlayer, AppError> {
        let item = item.clone();
        let query = format!(
            "UPDATE {} SET jersey_number = $2, position = $3, updated_at = $4 \
             WHERE id = $1 RETURNING {}",
            MEMBERSHIP_TABLE, MEMBERSHIP_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, TeamPlayer>(&query)
                        .bind(item.id)
                        .bind(item.jersey_number)
                        .bind(&item.position)
                        .bind(item.updated_at)
                        .fetch_one(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }

    /// Roster removal is physical: the membership row is gone, the player
    /// row is untouched.
    pub async fn remove_from_team(
        &self,
        session: &DbSession,
        team_id: &str,
        player_id: PlayerId,
    ) -> Result<bool, AppError> {
        let team_id = team_id.to_owned();
        let query = format!(
            "DELETE FROM {} WHERE team_id = $1 AND player_id = $2",
            MEMBERSHIP_TABLE
        );
        let result = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query(&query)
                        .bind(team_id)
                        .bind(player_id)
                        .execute(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn bulk_remove_from_team(
        &self,
        session: &DbSession,
        team_id: &str,
        player_ids: &[PlayerId],
    ) -> Result<u64, AppError> {
        let team_id = team_id.to_owned();
        let ids: Vec<Uuid> = player_ids.iter().map(|id| *id.as_uuid()).collect();
        let query = format!(
            "DELETE FROM {} WHERE team_id = $1 AND player_id = ANY($2)",
            MEMBERSHIP_TABLE
        );
        let result = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query(&query)
                        .bind(team_id)
                        .bind(ids)
                        .execute(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_select_columns_cover_soft_delete_fields() {
        assert!(SELECT_COLUMNS.contains("deleted_at"));
        assert!(SELECT_COLUMNS.contains("organization_id"));
    }

    #[test]
    fn membership_columns_cover_roster_attributes() {
        assert!(MEMBERSHIP_COLUMNS.contains("jersey_number"));
        assert!(MEMBERSHIP_COLUMNS.contains("position"));
    }
}
