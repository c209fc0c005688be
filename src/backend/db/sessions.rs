/**
 * SQLite Session Store
 *
 * `SessionStore` over the `sessions` table. `expires_at` is stored as Unix
 * seconds so expiry comparisons are plain integer comparisons in SQL.
 * Inserting a session for an unknown user fails the foreign key check and
 * surfaces as `StoreError::Database`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::backend::auth::sessions::SessionRecord;
use crate::backend::auth::store::{SessionStore, StoreError};
use crate::backend::db::{map_unique, SqliteStore};

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    token: String,
    expires_at: i64,
}

impl TryFrom<SessionRow> for SessionRecord {
    type Error = StoreError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let expires_at = DateTime::from_timestamp(row.expires_at, 0).ok_or_else(|| {
            StoreError::Database(sqlx::Error::Decode(
                format!("session {} has out-of-range expires_at {}", row.id, row.expires_at).into(),
            ))
        })?;

        Ok(SessionRecord {
            id: row.id,
            user_id: row.user_id,
            token: row.token,
            expires_at,
        })
    }
}

#[async_trait]
impl SessionStore for SqliteStore {
    async fn insert_session(&self, record: &SessionRecord) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO sessions (id, user_id, token, expires_at) VALUES (?, ?, ?, ?)")
            .bind(&record.id)
            .bind(&record.user_id)
            .bind(&record.token)
            .bind(record.expires_at.timestamp())
            .execute(self.pool())
            .await
            .map_err(|e| map_unique(e, "session token"))?;

        Ok(())
    }

    async fn find_session_by_token(&self, token: &str) -> Result<Option<SessionRecord>, StoreError> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT id, user_id, token, expires_at FROM sessions WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(self.pool())
        .await?;

        row.map(SessionRecord::try_from).transpose()
    }

    async fn delete_session(&self, token: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    async fn delete_sessions_for_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now.timestamp())
            .execute(self.pool())
            .await?;

        if result.rows_affected() > 0 {
            tracing::info!("Purged {} expired sessions", result.rows_affected());
        }
        Ok(result.rows_affected())
    }
}
