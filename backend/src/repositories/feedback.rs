//! Feedback repository.

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::feedback::Feedback;
use crate::repositories::repository::SoftDeleteEntity;
use crate::types::FeedbackId;

const TABLE_NAME: &str = "feedback";
const SELECT_COLUMNS: &str =
    "id, topic, rating, feedback, user_id, user_email, created_at, updated_at, deleted_at";

impl SoftDeleteEntity for Feedback {
    const TABLE: &'static str = TABLE_NAME;
    const SELECT_COLUMNS: &'static str = SELECT_COLUMNS;
    type Id = FeedbackId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FeedbackRepository;

impl FeedbackRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(&self, session: &DbSession, item: &Feedback) -> Result<Feedback, AppError> {
        let item = item.clone();
        let query = format!(
            "INSERT INTO {} (id, topic, rating, feedback, user_id, user_email, \
             created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, Feedback>(&query)
                        .bind(item.id)
                        .bind(&item.topic)
                        .bind(&item.rating)
                        .bind(&item.feedback)
                        .bind(&item.user_id)
                        .bind(&item.user_email)
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
}
