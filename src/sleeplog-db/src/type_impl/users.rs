use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Local;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use sleeplog_entities::users;
use thiserror::Error;

use crate::DatabaseHandler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("username and password must not be empty")]
    EmptyCredentials,
    #[error("username `{0}` already exists")]
    UsernameTaken(String),
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("unable to hash password: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl DatabaseHandler {
    pub async fn create_user(&self, username: &str, password: &str) -> Result<User, AccountError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::EmptyCredentials);
        }

        if self.find_user(username).await?.is_some() {
            return Err(AccountError::UsernameTaken(username.to_owned()));
        }

        let model = users::ActiveModel {
            id: NotSet,
            username: Set(username.to_owned()),
            password_hash: Set(hash_password(password)?),
            created_at: Set(Local::now().naive_local()),
        };

        let model = model.insert(&self.db).await.map_err(|error| match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AccountError::UsernameTaken(username.to_owned())
            }
            _ => AccountError::Database(error),
        })?;

        info!("registered user `{}`", model.username);
        Ok(map_user(model))
    }

    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AccountError> {
        let Some(model) = self.find_user(username.trim()).await? else {
            debug!("login attempt for unknown user `{}`", username);
            return Err(AccountError::InvalidCredentials);
        };

        verify_password(password, &model.password_hash)?;
        Ok(map_user(model))
    }

    async fn find_user(&self, username: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
    }
}

fn map_user(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
    }
}

fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, stored: &str) -> Result<(), AccountError> {
    let hash = PasswordHash::new(stored).map_err(|e| {
        warn!("stored password hash can not be parsed: {}", e);
        AccountError::InvalidCredentials
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .map_err(|_| AccountError::InvalidCredentials)
}
