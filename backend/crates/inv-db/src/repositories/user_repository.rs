use crate::{DbError, PasswordHasher, Result as DbErrorResult};

use inv_core::{Credential, StoreError, StoreResult, StoredUser, UserAttributes, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const USER_COLUMNS: &str = "id, username, password, email, first_name, last_name, \
     is_superuser, is_staff, is_active, date_joined, last_login";

/// `auth_user` access for account provisioning.
///
/// Every method issues exactly one statement, so each create or update is
/// atomic on its own.
pub struct UserRepository {
    pool: SqlitePool,
    hasher: PasswordHasher,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_hasher(pool, PasswordHasher::default())
    }

    pub fn with_hasher(pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<StoredUser>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM auth_user WHERE username = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(StoredUser::try_from).transpose()
    }

    /// Insert a user. Undeclared attributes fall back to the column defaults
    /// of the `auth_user` schema.
    pub async fn insert(
        &self,
        username: &str,
        attributes: &UserAttributes,
        password_hash: Option<&str>,
    ) -> DbErrorResult<StoredUser> {
        let date_joined = Utc::now().timestamp();
        let sql = format!(
            r#"
                INSERT INTO auth_user (
                    username, password, email, first_name, last_name,
                    is_superuser, is_staff, is_active, date_joined
                )
                VALUES (
                    ?, COALESCE(?, '!'), COALESCE(?, ''), COALESCE(?, ''), COALESCE(?, ''),
                    COALESCE(?, 0), COALESCE(?, 0), COALESCE(?, 1), ?
                )
                RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username)
            .bind(password_hash)
            .bind(attributes.email.as_deref())
            .bind(attributes.first_name.as_deref())
            .bind(attributes.last_name.as_deref())
            .bind(attributes.is_superuser)
            .bind(attributes.is_staff)
            .bind(attributes.is_active)
            .bind(date_joined)
            .fetch_one(&self.pool)
            .await?;

        StoredUser::try_from(row)
    }

    /// Overwrite the attributes declared in `changes` and, when given, the
    /// password hash. Everything else keeps its stored value.
    pub async fn update(
        &self,
        id: i64,
        changes: &UserAttributes,
        password_hash: Option<&str>,
    ) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE auth_user
                SET email = COALESCE(?, email),
                    first_name = COALESCE(?, first_name),
                    last_name = COALESCE(?, last_name),
                    is_superuser = COALESCE(?, is_superuser),
                    is_staff = COALESCE(?, is_staff),
                    is_active = COALESCE(?, is_active),
                    password = COALESCE(?, password)
                WHERE id = ?
            "#,
        )
        .bind(changes.email.as_deref())
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.is_superuser)
        .bind(changes.is_staff)
        .bind(changes.is_active)
        .bind(password_hash)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::UserNotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    fn hash(&self, credential: Option<&Credential>) -> DbErrorResult<Option<String>> {
        credential.map(|c| self.hasher.hash(c)).transpose()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_identifier(&self, identifier: &str) -> StoreResult<Option<StoredUser>> {
        self.find_by_username(identifier)
            .await
            .map_err(StoreError::from)
    }

    async fn create_user(
        &self,
        identifier: &str,
        attributes: &UserAttributes,
        credential: Option<&Credential>,
    ) -> StoreResult<StoredUser> {
        let password_hash = self.hash(credential)?;

        Ok(self
            .insert(identifier, attributes, password_hash.as_deref())
            .await?)
    }

    async fn update_user(
        &self,
        id: i64,
        changes: &UserAttributes,
        credential: Option<&Credential>,
    ) -> StoreResult<()> {
        let password_hash = self.hash(credential)?;

        Ok(self.update(id, changes, password_hash.as_deref()).await?)
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    email: String,
    first_name: String,
    last_name: String,
    is_superuser: bool,
    is_staff: bool,
    is_active: bool,
    date_joined: i64,
    last_login: Option<i64>,
}

impl TryFrom<UserRow> for StoredUser {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(StoredUser {
            id: row.id,
            identifier: row.username,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            is_superuser: row.is_superuser,
            is_staff: row.is_staff,
            is_active: row.is_active,
            password: row.password,
            date_joined: timestamp(row.date_joined, "date_joined")?,
            last_login: row
                .last_login
                .map(|t| timestamp(t, "last_login"))
                .transpose()?,
        })
    }
}

#[track_caller]
fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::InvalidRow {
        message: format!("Invalid timestamp in auth_user.{column}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
