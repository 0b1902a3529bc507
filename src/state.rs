use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::{DbPool, OrmConn, create_orm_conn},
};

/// Token signing settings shared by the auth extractor and the customer service.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub secret: Arc<str>,
    pub ttl_hours: i64,
}

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(pool: DbPool, auth: AuthSettings) -> Self {
        let orm = create_orm_conn(&pool);
        Self { pool, orm, auth }
    }

    pub fn from_config(pool: DbPool, config: &AppConfig) -> Self {
        Self::new(
            pool,
            AuthSettings {
                secret: Arc::from(config.jwt_secret.as_str()),
                ttl_hours: config.token_ttl_hours,
            },
        )
    }
}
