use std::sync::Arc;

use crate::{auth::AuthApi, config::Config, db::Database, utils::email::EmailService};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub auth: Arc<dyn AuthApi>,
    pub email: Arc<EmailService>,
}

impl AppState {
    pub fn new(
        db: Database,
        config: Config,
        auth: Arc<dyn AuthApi>,
        email: Arc<EmailService>,
    ) -> Self {
        Self {
            db,
            config,
            auth,
            email,
        }
    }
}
