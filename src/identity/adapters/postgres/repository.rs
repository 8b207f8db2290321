//! `PostgreSQL` repository implementation for credential storage.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::identity::{
    domain::{PasswordDigest, PersistedUserData, User, UserId, Username},
    ports::{CredentialRepository, CredentialRepositoryError, CredentialRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by identity adapters.
pub type CredentialPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed credential repository.
#[derive(Debug, Clone)]
pub struct PostgresCredentialRepository {
    pool: CredentialPgPool,
}

impl PostgresCredentialRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CredentialPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CredentialRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CredentialRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CredentialRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CredentialRepositoryError::persistence)?
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn insert(&self, user: &User) -> CredentialRepositoryResult<()> {
        let user_id = user.id();
        let username = user.username().clone();
        let new_row = to_new_row(user);

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_username_unique_violation(info.as_ref()) =>
                    {
                        CredentialRepositoryError::DuplicateUsername(username.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CredentialRepositoryError::DuplicateUser(user_id)
                    }
                    _ => CredentialRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> CredentialRepositoryResult<Option<User>> {
        let lookup_username = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::username.eq(&lookup_username))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(CredentialRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }
}

fn to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().into_inner(),
        username: user.username().as_str().to_owned(),
        password_hash: user.password_digest().as_str().to_owned(),
        created_at: user.created_at(),
    }
}

fn row_to_user(row: UserRow) -> CredentialRepositoryResult<User> {
    let UserRow {
        id,
        username: persisted_username,
        password_hash,
        created_at,
    } = row;

    let username =
        Username::new(persisted_username).map_err(CredentialRepositoryError::persistence)?;

    let data = PersistedUserData {
        id: UserId::from_uuid(id),
        username,
        password_digest: PasswordDigest::new(password_hash),
        created_at,
    };
    Ok(User::from_persisted(data))
}

fn is_username_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "users_username_key")
}
