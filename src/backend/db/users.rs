/**
 * SQLite User Store
 *
 * `UserStore` over the `users` table. E-mail uniqueness is enforced by the
 * table's UNIQUE constraint; a violation surfaces as `StoreError::Conflict`.
 */

use async_trait::async_trait;
use chrono::Utc;

use crate::backend::auth::store::{StoreError, UserStore};
use crate::backend::auth::users::{NewUser, User};
use crate::backend::db::{map_unique, SqliteStore};

#[async_trait]
impl UserStore for SqliteStore {
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = new_user.into_user(Utc::now());

        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(self.pool())
        .await
        .map_err(|e| map_unique(e, "email"))?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
