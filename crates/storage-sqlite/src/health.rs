//! Database probe backing the service health check.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use goals_core::health::DatabaseProbe;
use goals_core::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;

pub struct SqliteProbe {
    pool: Arc<DbPool>,
}

impl SqliteProbe {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseProbe for SqliteProbe {
    async fn ping(&self) -> Result<()> {
        let pool = self.pool.clone();
        // r2d2 checkout blocks; keep it off the async workers.
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut conn = get_connection(&pool)?;
            conn.batch_execute("SELECT 1").into_core()
        })
        .await
        .map_err(|e| goals_core::Error::Unexpected(e.to_string()))?
    }
}
