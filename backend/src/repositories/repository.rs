//! Generic soft-delete repository layer.
//!
//! Every entity this service owns follows the same lifecycle: rows are
//! created live, reads filter on `deleted_at IS NULL`, deletion stamps
//! `deleted_at`, and physical removal happens only during retention purges.
//! The per-entity repositories implement their specific queries and get the
//! lifecycle operations from here.

use chrono::{DateTime, Utc};

use crate::db::session::DbSession;
use crate::error::AppError;

/// An entity stored in a table with the common timestamp triple
/// (`created_at`, `updated_at`, `deleted_at`).
pub trait SoftDeleteEntity:
    for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin + 'static
{
    /// Target table name.
    const TABLE: &'static str;
    /// Column list matching the `FromRow` implementation.
    const SELECT_COLUMNS: &'static str;
    /// Primary key type for the record.
    type Id: for<'q> sqlx::Encode<'q, sqlx::Postgres>
        + sqlx::Type<sqlx::Postgres>
        + Send
        + Copy
        + 'static;
}

/// Fetches a live row by primary key.
pub async fn find_live_by_id<E: SoftDeleteEntity>(
    session: &DbSession,
    id: E::Id,
) -> Result<Option<E>, AppError> {
    let query = format!(
        "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
        E::SELECT_COLUMNS,
        E::TABLE
    );
    let row = session
        .use_transaction(move |conn| {
            Box::pin(async move {
                sqlx::query_as::<_, E>(&query)
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await
            })
        })
        .await?;
    Ok(row)
}

/// Stamps `deleted_at` on a live row. Returns false when the row does not
/// exist or was already deleted.
pub async fn soft_delete_by_id<E: SoftDeleteEntity>(
    session: &DbSession,
    id: E::Id,
) -> Result<bool, AppError> {
    let query = format!(
        "UPDATE {} SET deleted_at = now(), updated_at = now() \
         WHERE id = $1 AND deleted_at IS NULL",
        E::TABLE
    );
    let result = session
        .use_transaction(move |conn| {
            Box::pin(async move { sqlx::query(&query).bind(id).execute(&mut *conn).await })
        })
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Physically removes rows soft-deleted before `cutoff`. Used by the
/// retention purge binary, never by request handling.
pub async fn purge_deleted_before<E: SoftDeleteEntity>(
    session: &DbSession,
    cutoff: DateTime<Utc>,
) -> Result<u64, AppError> {
    let query = format!("DELETE FROM {} WHERE deleted_at < $1", E::TABLE);
    let result = session
        .use_transaction(move |conn| {
            Box::pin(async move { sqlx::query(&query).bind(cutoff).execute(&mut *conn).await })
        })
        .await?;
    Ok(result.rows_affected())
}
