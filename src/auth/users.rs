/**
 * User Credential Store (Postgres)
 *
 * sqlx-backed implementation of `CredentialStore`. Queries return the full
 * credential row including the password hash; the hash stays inside the
 * crate because `Credential` is not serializable (see `store.rs`).
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::store::{Credential, CredentialStore};
use crate::error::ApiError;

const CREDENTIAL_COLUMNS: &str =
    "id, email, hashed_password, is_chirpy_red, created_at, updated_at";

impl CredentialStore for PgPool {
    async fn find_credential_by_email(&self, email: &str) -> Result<Option<Credential>, ApiError> {
        let credential = sqlx::query_as::<_, Credential>(&format!(
            "SELECT {CREDENTIAL_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self)
        .await?;

        Ok(credential)
    }

    async fn find_credential_by_id(&self, id: Uuid) -> Result<Option<Credential>, ApiError> {
        let credential = sqlx::query_as::<_, Credential>(&format!(
            "SELECT {CREDENTIAL_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self)
        .await?;

        Ok(credential)
    }

    async fn create_credential(
        &self,
        email: &str,
        hashed_password: &str,
    ) -> Result<Credential, ApiError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, Credential>(&format!(
            r#"
            INSERT INTO users (id, email, hashed_password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CREDENTIAL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(email)
        .bind(hashed_password)
        .bind(now)
        .bind(now)
        .fetch_one(self)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                ApiError::Conflict("Email already exists".to_string())
            } else {
                ApiError::Database(err)
            }
        })
    }

    async fn update_credential(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Credential, ApiError> {
        let now = Utc::now();

        let credential = sqlx::query_as::<_, Credential>(&format!(
            r#"
            UPDATE users
            SET email = $1, hashed_password = $2, updated_at = $3
            WHERE id = $4
            RETURNING {CREDENTIAL_COLUMNS}
            "#
        ))
        .bind(email)
        .bind(hashed_password)
        .bind(now)
        .bind(id)
        .fetch_optional(self)
        .await?;

        credential.ok_or_else(|| ApiError::NotFound("user not found".to_string()))
    }

    async fn upgrade_credential(&self, id: Uuid) -> Result<(), ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET is_chirpy_red = TRUE, updated_at = $1
            WHERE id = $2
            "#,
        )
        .bind(Utc::now())
        .bind(id)
        .execute(self)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("user not found".to_string()));
        }

        Ok(())
    }

    async fn delete_all_credentials(&self) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM users").execute(self).await?;
        Ok(())
    }
}
