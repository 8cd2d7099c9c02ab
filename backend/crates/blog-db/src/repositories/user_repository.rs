use crate::Result as DbErrorResult;
use crate::rows::{UserRow, convert_all};

use blog_core::{Role, User};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails with `DbError::UniqueViolation` when the email is taken
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(User::try_from).transpose()
    }

    /// Lookup by an already-normalized (lowercase) email
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn list(&self) -> DbErrorResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        convert_all(rows)
    }

    /// Persist name, email and password hash. Returns false if the user is gone.
    pub async fn update_profile(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET name = ?, email = ?, password_hash = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Change a user's role and return the updated row
    pub async fn update_role(
        &self,
        id: Uuid,
        role: Role,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Option<User>> {
        let result = sqlx::query("UPDATE users SET role = ?, updated_at = ? WHERE id = ?")
            .bind(role.as_str())
            .bind(updated_at.timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Promote an existing account to admin; used for bootstrapping
    pub async fn promote_to_admin(&self, email: &str) -> DbErrorResult<Option<User>> {
        match self.find_by_email(email).await? {
            Some(user) if user.role == Role::Admin => Ok(Some(user)),
            Some(user) => self.update_role(user.id, Role::Admin, Utc::now()).await,
            None => Ok(None),
        }
    }
}
