#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use laxdb_backend::db::Database;
use laxdb_backend::models::feedback::{CreateFeedbackPayload, Feedback};
use laxdb_backend::models::player::CreatePlayerPayload;

/// Connects to the database named by `TEST_DATABASE_URL` and applies
/// migrations. Returns `None` when the variable is unset so DB-backed tests
/// can skip instead of failing on machines without Postgres.
pub async fn test_database() -> Option<Database> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect to TEST_DATABASE_URL");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    Some(Database::new(pool))
}

pub fn feedback_entry(topic: &str) -> Feedback {
    Feedback::new(
        CreateFeedbackPayload {
            topic: topic.to_string(),
            rating: "good".to_string(),
            feedback: "Roster filters are fast now.".to_string(),
            user_email: None,
        },
        None,
    )
}

pub fn player_payload(name: &str) -> CreatePlayerPayload {
    CreatePlayerPayload {
        name: name.to_string(),
        email: None,
        phone: None,
        date_of_birth: None,
        user_id: None,
        team_id: None,
    }
}

pub async fn count_feedback(pool: &PgPool, topic: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM feedback WHERE topic = $1")
        .bind(topic)
        .fetch_one(pool)
        .await
        .expect("count feedback rows")
}
