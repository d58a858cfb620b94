//! Removes soft-deleted rows once they age past the retention window.
//!
//! Request handling never deletes physically; this binary is the only place
//! rows leave the database. Intended to run on a schedule.

use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use laxdb_backend::{
    config::Config,
    db::{create_pool, Database},
    models::{contact_info::PlayerContactInfo, game::Game, player::Player, season::Season},
    repositories::repository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "purge_soft_deleted=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let pool = create_pool(&config.database_url, 2).await?;
    let db = Database::new(pool);
    let session = db.session();

    let cutoff = Utc::now() - Duration::days(config.soft_delete_retention_days);

    let games = repository::purge_deleted_before::<Game>(&session, cutoff)
        .await
        .map_err(|e| anyhow::anyhow!("purging games failed: {:?}", e))?;
    let seasons = repository::purge_deleted_before::<Season>(&session, cutoff)
        .await
        .map_err(|e| anyhow::anyhow!("purging seasons failed: {:?}", e))?;
    let contact_info = repository::purge_deleted_before::<PlayerContactInfo>(&session, cutoff)
        .await
        .map_err(|e| anyhow::anyhow!("purging contact info failed: {:?}", e))?;
    let players = repository::purge_deleted_before::<Player>(&session, cutoff)
        .await
        .map_err(|e| anyhow::anyhow!("purging players failed: {:?}", e))?;

    tracing::info!(
        %cutoff,
        games,
        seasons,
        contact_info,
        players,
        "purged soft-deleted rows past retention"
    );

    Ok(())
}
